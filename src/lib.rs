use {
  std::{
    fmt::{self, Display, Formatter},
    io::{self, Read},
    str,
  },
  thiserror::Error,
};

pub use {
  classify::{is_bom, is_decimal, is_letter, is_replacement, is_whitespace},
  error::DecodeError,
  position::Position,
  reader::Utf8Reader,
  sink::{AbortSink, ErrorSink, FatalSink, StderrSink},
};

mod classify;
mod error;
mod position;
mod reader;
mod sink;

/// The Unicode byte order mark.
pub const BOM: char = '\u{FEFF}';

/// Encoded size of the byte order mark, in bytes.
pub const BOM_SIZE: usize = 3;

/// The Unicode replacement character, substituted for malformed input.
pub const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;
