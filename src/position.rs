use super::*;

/// The caret's position within the input text, advanced by the reader as
/// code points are consumed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Position {
  /// Line number (1-indexed).
  pub line: usize,
  /// Column number, counting code points, not bytes or visual width.
  pub column: usize,
  /// Byte offset from the beginning of the input (0-indexed).
  pub offset: usize,
}

impl Position {
  pub fn new() -> Self {
    Position {
      line: 1,
      column: 0,
      offset: 0,
    }
  }
}

impl Default for Position {
  fn default() -> Self {
    Self::new()
  }
}

impl Display for Position {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}", self.line, self.column)
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn starts_at_line_one() {
    let position = Position::new();

    assert_eq!(position.line, 1);
    assert_eq!(position.column, 0);
    assert_eq!(position.offset, 0);
  }

  #[test]
  fn displays_as_line_and_column() {
    let position = Position {
      line: 3,
      column: 14,
      offset: 159,
    };

    assert_eq!(position.to_string(), "3:14");
  }
}
