//! Low-level wire types and constants.
//!
//! This module defines:
//! - The two reserved delimiter bytes.
//! - The default buffer capacity.
//! - Record type aliases shared by the reader and the writer.
//! - Small helpers for checking field bytes against the delimiters.
//!
//! The actual encode/decode logic lives in `reader`, `writer` and `codec`.

/// Terminates every field, including the last one in a row.
///
/// 0xFF never occurs in well-formed UTF-8.
pub const FIELD_TERMINATOR: u8 = 0xFF;

/// Terminates every row.
///
/// 0xFD never occurs in well-formed UTF-8 either.
pub const ROW_TERMINATOR: u8 = 0xFD;

/// Default capacity of the reader and writer buffers.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// A decoded record: an ordered list of text fields.
///
/// An empty `Record` (zero fields) is distinct from a record holding a
/// single empty string.
pub type Record = Vec<String>;

/// A decoded record whose fields are kept as raw bytes.
pub type ByteRecord = Vec<Vec<u8>>;

/// Is `b` one of the two reserved bytes?
#[inline]
pub fn is_delimiter(b: u8) -> bool {
    b == FIELD_TERMINATOR || b == ROW_TERMINATOR
}

/// Position and value of the first reserved byte inside `field`, if any.
///
/// A field containing either byte makes the encoded stream ambiguous.
pub fn find_delimiter(field: &[u8]) -> Option<(usize, u8)> {
    field
        .iter()
        .position(|&b| is_delimiter(b))
        .map(|pos| (pos, field[pos]))
}
