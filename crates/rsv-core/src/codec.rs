//! In-memory encoding/decoding of RSV rows.
//!
//! This module converts between:
//! - raw encoded bytes (`&[u8]`)
//! - records (`Record` / `ByteRecord`)
//!
//! Wire format:
//!
//! ```text
//! record := field* ROW_TERMINATOR
//! field  := byte-run FIELD_TERMINATOR    (byte-run excludes 0xFF and 0xFD)
//! stream := record*
//!
//! ["Hello", "🌎"] => 48 65 6C 6C 6F FF F0 9F 8C 8E FF FD
//! []              => FD
//! [""]            => FF FD
//! ```
//!
//! There is no header, trailer or escaping, so two encoded streams can be
//! concatenated byte for byte.
//!
//! The row scanner here is shared with the streaming [`Reader`]; the
//! slice helpers are for callers that already hold the whole input.
//!
//! [`Reader`]: crate::Reader

use crate::error::{Result, RsvError};
use crate::wire_types::{ByteRecord, Record, FIELD_TERMINATOR, ROW_TERMINATOR};

// ============================================================================
// ENCODE
// ============================================================================

/// Encode a single record.
///
/// The encoded bytes are appended to `out`. Fields are written verbatim;
/// a field holding a reserved byte yields an ambiguous stream.
pub fn encode_record<I, T>(fields: I, out: &mut Vec<u8>)
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    for field in fields {
        out.extend_from_slice(field.as_ref());
        out.push(FIELD_TERMINATOR);
    }
    out.push(ROW_TERMINATOR);
}

/// Encode a sequence of records into a fresh buffer.
pub fn encode_to_vec<I, R, T>(records: I) -> Vec<u8>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut out = Vec::new();
    for record in records {
        encode_record(record, &mut out);
    }
    out
}

// ============================================================================
// DECODE
// ============================================================================

/// Decode the first row of `buf`.
///
/// Returns the record and the number of bytes consumed (up to and including
/// the row terminator). Bytes after the first row are left untouched.
pub fn decode_record(buf: &[u8]) -> Result<(ByteRecord, usize)> {
    let row_len = row_length(buf).ok_or(RsvError::UnterminatedRow)?;

    let mut fields = Vec::new();
    let mut ends = Vec::new();
    split_row(&buf[..row_len], &mut fields, &mut ends)?;

    Ok((byte_fields(&fields, &ends), row_len))
}

/// Decode every record in `buf`.
///
/// Empty input yields no records. Any malformed row fails the whole call.
pub fn decode_slice(buf: &[u8]) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut ends = Vec::new();
    let mut offset = 0;

    while offset < buf.len() {
        let rest = &buf[offset..];
        let row_len = row_length(rest).ok_or(RsvError::UnterminatedRow)?;
        split_row(&rest[..row_len], &mut fields, &mut ends)?;
        records.push(text_fields(&fields, &ends)?);
        offset += row_len;
    }

    Ok(records)
}

// -----------------------------------------------------------------------------
// Row scanner (shared with `Reader`)
// -----------------------------------------------------------------------------

/// Split one row into `fields`, recording the end offset of each field in
/// `ends`.
///
/// `row` must be everything up to and including the row terminator. Both
/// scratch buffers are cleared first so callers can reuse them.
pub(crate) fn split_row(row: &[u8], fields: &mut Vec<u8>, ends: &mut Vec<usize>) -> Result<()> {
    fields.clear();
    ends.clear();

    let body = match row.split_last() {
        Some((&ROW_TERMINATOR, body)) => body,
        _ => return Err(RsvError::UnterminatedRow),
    };

    let mut start = 0;
    for (i, &b) in body.iter().enumerate() {
        if b == FIELD_TERMINATOR {
            fields.extend_from_slice(&body[start..i]);
            ends.push(fields.len());
            start = i + 1;
        }
    }

    // Anything after the last field terminator is a field left open.
    if start != body.len() {
        return Err(RsvError::UnterminatedField);
    }

    Ok(())
}

/// Copy each field out of the scratch buffer.
pub(crate) fn byte_fields(fields: &[u8], ends: &[usize]) -> ByteRecord {
    let mut start = 0;
    ends.iter()
        .map(|&end| {
            let field = fields[start..end].to_vec();
            start = end;
            field
        })
        .collect()
}

/// Convert the scratch buffer to text once, then slice out each field.
pub(crate) fn text_fields(fields: &[u8], ends: &[usize]) -> Result<Record> {
    let text = std::str::from_utf8(fields).map_err(|e| RsvError::InvalidUtf8 {
        field: ends.partition_point(|&end| end <= e.valid_up_to()),
    })?;

    let mut record = Vec::with_capacity(ends.len());
    let mut start = 0;
    for (field, &end) in ends.iter().enumerate() {
        // The joined buffer can be valid while a code point straddles two fields.
        if !text.is_char_boundary(end) {
            return Err(RsvError::InvalidUtf8 { field });
        }
        record.push(text[start..end].to_owned());
        start = end;
    }

    Ok(record)
}

fn row_length(buf: &[u8]) -> Option<usize> {
    buf.iter().position(|&b| b == ROW_TERMINATOR).map(|pos| pos + 1)
}
