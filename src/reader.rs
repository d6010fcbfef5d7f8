use super::*;

/// Reads UTF-8 code points in sequence from a byte source. Byte order marks
/// and malformed sequences are skipped by `next`, with every anomaly routed
/// through the error sink. I/O failures are unrecoverable: they are handed
/// to the fatal sink and the reader panics. While reading, the caret's line,
/// column, and byte offset advance to mirror the consumed input.
pub struct Utf8Reader<R> {
  source: R,
  pending: [u8; 4],
  pending_len: usize,
  position: Position,
  error_sink: Box<dyn ErrorSink>,
  fatal_sink: Box<dyn FatalSink>,
}

impl<R: Read> Utf8Reader<R> {
  pub fn new(source: R) -> Self {
    Utf8Reader {
      source,
      pending: [0; 4],
      pending_len: 0,
      position: Position::new(),
      error_sink: Box::new(StderrSink),
      fatal_sink: Box::new(AbortSink),
    }
  }

  /// Replaces the sink that receives recoverable encoding anomalies.
  pub fn set_error_sink(&mut self, sink: Box<dyn ErrorSink>) {
    self.error_sink = sink;
  }

  /// Replaces the sink that receives unrecoverable transport failures.
  pub fn set_fatal_sink(&mut self, sink: Box<dyn FatalSink>) {
    self.fatal_sink = sink;
  }

  /// The caret's position just after the most recently consumed code point.
  pub fn position(&self) -> Position {
    self.position
  }

  /// Returns the first code point that is neither a byte order mark nor a
  /// replacement character, together with its encoded size, or `None` at
  /// end of input. Anomalies carrying an error are reported before being
  /// skipped; a valid leading byte order mark is skipped silently.
  pub fn next(&mut self) -> Option<(char, usize)> {
    loop {
      let (code, size, error) = self.decode_one()?;

      if is_bom(code) || is_replacement(code) {
        if let Some(error) = error {
          self.error_sink.report(&self.position, &error);
        }

        continue;
      }

      return Some((code, size));
    }
  }

  /// Decodes a single code point and advances the caret. The offset grows by
  /// the on-wire size even for malformed input, which is consumed one byte
  /// at a time and yielded as the replacement character. A new line (\n)
  /// starts the next line; byte order marks never advance the column; every
  /// other code point advances it by exactly one, regardless of encoded
  /// width.
  fn decode_one(&mut self) -> Option<(char, usize, Option<DecodeError>)> {
    if self.pending_len == 0 {
      self.pending[0] = self.read_byte()?;
      self.pending_len = 1;
    }

    let (code, size) = match utf8_len(self.pending[0]) {
      Some(want) => {
        while self.pending_len < want {
          match self.read_byte() {
            Some(byte) => {
              self.pending[self.pending_len] = byte;
              self.pending_len += 1;
            }
            None => break,
          }
        }

        let have = self.pending_len.min(want);

        match str::from_utf8(&self.pending[..have])
          .ok()
          .and_then(|decoded| decoded.chars().next())
        {
          Some(code) => (code, want),
          None => (REPLACEMENT, 1),
        }
      }
      None => (REPLACEMENT, 1),
    };

    self.consume(size);

    self.position.offset += size;

    let mut error = None;

    if code == '\n' {
      self.position.line += 1;
      self.position.column = 0;
    } else if is_bom(code) {
      // Only an error when out of place, i.e. not the first unit of the
      // stream; valid or not, the mark never advances the column.
      if self.position.offset != BOM_SIZE {
        error = Some(DecodeError::MisplacedBom {
          offset: self.position.offset - size,
        });
      }
    } else {
      if is_replacement(code) {
        error = Some(DecodeError::InvalidSequence {
          offset: self.position.offset - size,
          size,
        });
      }

      self.position.column += 1;
    }

    Some((code, size, error))
  }

  fn consume(&mut self, count: usize) {
    self.pending.copy_within(count..self.pending_len, 0);

    self.pending_len -= count;
  }

  fn read_byte(&mut self) -> Option<u8> {
    let mut byte = [0; 1];

    loop {
      match self.source.read(&mut byte) {
        Ok(0) => return None,
        Ok(_) => return Some(byte[0]),
        Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
        Err(error) => self.report_fatal(error),
      }
    }
  }

  fn report_fatal(&mut self, error: io::Error) -> ! {
    self.fatal_sink.fatal(&self.position, &error);

    panic!("fatal read error: {error}");
  }
}

/// Encoded length implied by a UTF-8 lead byte, or `None` for bytes that
/// cannot begin a sequence.
const fn utf8_len(lead: u8) -> Option<usize> {
  match lead {
    0x00..=0x7F => Some(1),
    0xC2..=0xDF => Some(2),
    0xE0..=0xEF => Some(3),
    0xF0..=0xF4 => Some(4),
    _ => None,
  }
}
