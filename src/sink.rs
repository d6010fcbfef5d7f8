use super::*;

/// Receives recoverable encoding anomalies, synchronously and in stream
/// order, as the reader skips over them.
pub trait ErrorSink {
  fn report(&mut self, position: &Position, error: &DecodeError);
}

/// Receives unrecoverable transport failures. The reader panics after every
/// fatal report, whether or not a custom sink is installed, so
/// implementations only observe the failure.
pub trait FatalSink {
  fn fatal(&mut self, position: &Position, error: &io::Error);
}

/// Default error sink: writes the anomaly to stderr, prefixed with the
/// caret's `line:column` position.
pub struct StderrSink;

impl ErrorSink for StderrSink {
  fn report(&mut self, position: &Position, error: &DecodeError) {
    eprintln!("{position}: {error}");
  }
}

/// Default fatal sink: writes the failure to stderr before the reader brings
/// the process down.
pub struct AbortSink;

impl FatalSink for AbortSink {
  fn fatal(&mut self, position: &Position, error: &io::Error) {
    eprintln!("{position}: fatal read error: {error}");
  }
}
