use super::*;

/// A recoverable encoding anomaly. These are reported through the reader's
/// error sink and then skipped; they never surface from `Utf8Reader::next`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
  #[error("byte order mark out of place at offset {offset}")]
  MisplacedBom { offset: usize },
  #[error("invalid UTF-8 sequence of length {size} at offset {offset}")]
  InvalidSequence { offset: usize, size: usize },
}
