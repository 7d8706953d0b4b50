//! Error types for RSV encoding and decoding.
//!
//! Reaching the end of the input on a record boundary is *not* an error:
//! the single-record reads return `Ok(None)` instead.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, RsvError>;

/// Errors that can arise while reading or writing an RSV stream.
#[derive(Error, Debug)]
pub enum RsvError {
    /// The input ended before the current row's terminator was found.
    #[error("row is not terminated")]
    UnterminatedRow,

    /// A row terminator was found while the last field was still open.
    #[error("field is not terminated")]
    UnterminatedField,

    /// A field could not be returned as text.
    ///
    /// Only the string read API produces this; byte records are never
    /// validated.
    #[error("field {field} is not valid UTF-8")]
    InvalidUtf8 { field: usize },

    /// A field handed to a validating writer contains a reserved byte.
    #[error("field {field} contains reserved byte 0x{byte:02X}")]
    DelimiterInField { field: usize, byte: u8 },

    /// Failure reported by the underlying reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RsvError {
    /// True for errors caused by a badly framed stream.
    pub fn is_malformed(&self) -> bool {
        matches!(self, RsvError::UnterminatedRow | RsvError::UnterminatedField)
    }
}
