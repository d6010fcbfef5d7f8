use {
  clap::Parser,
  runestream::Utf8Reader,
  std::{fs::File, io::BufReader, path::PathBuf, process},
};

/// Dump a file's UTF-8 code points, one per line, with their positions.
#[derive(Parser)]
#[command(version, about)]
struct Arguments {
  path: PathBuf,
}

fn main() {
  let arguments = Arguments::parse();

  let file = match File::open(&arguments.path) {
    Ok(file) => file,
    Err(error) => {
      eprintln!("error: {}: {error}", arguments.path.display());
      process::exit(1);
    }
  };

  let mut reader = Utf8Reader::new(BufReader::new(file));

  while let Some((code, size)) = reader.next() {
    println!(
      "{} U+{:04X} {size} '{}'",
      reader.position(),
      u32::from(code),
      code.escape_debug()
    );
  }
}
