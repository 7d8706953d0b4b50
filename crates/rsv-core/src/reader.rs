//! Streaming RSV decoder.
//!
//! A [`Reader`] wraps any `io::Read` and yields one record per call.
//! Each call reads up to and including the next row terminator, then splits
//! the bytes before it on the field terminator in a single pass.
//!
//! Scratch state (the raw row, the joined field bytes and the field end
//! offsets) lives on the reader and is cleared, not reallocated, between
//! calls.

use std::io::{BufRead, BufReader, Read};

use tracing::debug;

use crate::codec::{byte_fields, split_row, text_fields};
use crate::error::Result;
use crate::wire_types::{ByteRecord, Record, DEFAULT_BUFFER_CAPACITY, ROW_TERMINATOR};

/// Builds a [`Reader`] with non-default settings.
#[derive(Debug, Clone)]
pub struct ReaderBuilder {
    capacity: usize,
}

impl Default for ReaderBuilder {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl ReaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capacity of the buffer placed between the reader and the source.
    ///
    /// A capacity of 0 is treated as 1: an empty `BufReader` buffer would
    /// look like end of stream.
    pub fn capacity(&mut self, capacity: usize) -> &mut Self {
        self.capacity = capacity;
        self
    }

    pub fn from_reader<R: Read>(&self, rdr: R) -> Reader<R> {
        Reader {
            rdr: BufReader::with_capacity(self.capacity.max(1), rdr),
            row: Vec::new(),
            fields: Vec::new(),
            ends: Vec::new(),
            records_read: 0,
        }
    }
}

/// Reads RSV records from an underlying byte source.
///
/// The reader never opens or closes the source; it only consumes bytes.
pub struct Reader<R> {
    rdr: BufReader<R>,

    /// Raw bytes of the current row, terminator included.
    row: Vec<u8>,

    /// Field bytes of the current row, one after another.
    fields: Vec<u8>,

    /// End offset of each field inside `fields`.
    ends: Vec<usize>,

    records_read: u64,
}

impl<R: Read> Reader<R> {
    /// Create a reader with the default buffer capacity.
    pub fn new(rdr: R) -> Self {
        ReaderBuilder::new().from_reader(rdr)
    }

    /// Read the next record as text.
    ///
    /// Returns `Ok(None)` once the input is exhausted on a record boundary.
    /// On error no fields are returned; the source has still advanced past
    /// the offending row.
    pub fn read_record(&mut self) -> Result<Option<Record>> {
        if !self.read_row()? {
            return Ok(None);
        }

        let record = text_fields(&self.fields, &self.ends)?;
        self.records_read += 1;
        Ok(Some(record))
    }

    /// Read the next record without interpreting field bytes.
    pub fn read_byte_record(&mut self) -> Result<Option<ByteRecord>> {
        if !self.read_row()? {
            return Ok(None);
        }

        let record = byte_fields(&self.fields, &self.ends);
        self.records_read += 1;
        Ok(Some(record))
    }

    /// Read all remaining records.
    ///
    /// Stops at the first error, discarding whatever this call had decoded.
    pub fn read_all(&mut self) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        while let Some(record) = self.read_record()? {
            records.push(record);
        }
        Ok(records)
    }

    /// Byte-level counterpart of [`Reader::read_all`].
    pub fn read_all_bytes(&mut self) -> Result<Vec<ByteRecord>> {
        let mut records = Vec::new();
        while let Some(record) = self.read_byte_record()? {
            records.push(record);
        }
        Ok(records)
    }

    /// Lazily iterate over the remaining records.
    pub fn records(&mut self) -> Records<'_, R> {
        Records {
            rdr: self,
            done: false,
        }
    }

    /// Lazily iterate over the remaining records as raw bytes.
    pub fn byte_records(&mut self) -> ByteRecords<'_, R> {
        ByteRecords {
            rdr: self,
            done: false,
        }
    }

    /// Fill the scratch buffers with the next row.
    ///
    /// `Ok(false)` means end of stream: nothing at all was read.
    fn read_row(&mut self) -> Result<bool> {
        self.row.clear();
        let n = self.rdr.read_until(ROW_TERMINATOR, &mut self.row)?;
        if n == 0 {
            return Ok(false);
        }

        if let Err(err) = split_row(&self.row, &mut self.fields, &mut self.ends) {
            debug!(
                record = self.records_read,
                bytes = self.row.len(),
                "malformed row: {}",
                err
            );
            return Err(err);
        }

        Ok(true)
    }
}

impl<R> Reader<R> {
    /// Number of records decoded successfully so far.
    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    pub fn get_ref(&self) -> &R {
        self.rdr.get_ref()
    }

    pub fn get_mut(&mut self) -> &mut R {
        self.rdr.get_mut()
    }

    /// Unwrap the source.
    ///
    /// Bytes already pulled into the internal buffer but not yet decoded
    /// are lost.
    pub fn into_inner(self) -> R {
        self.rdr.into_inner()
    }
}

/// Iterator returned by [`Reader::records`].
///
/// Ends after the first error.
pub struct Records<'r, R> {
    rdr: &'r mut Reader<R>,
    done: bool,
}

impl<R: Read> Iterator for Records<'_, R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.rdr.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Iterator returned by [`Reader::byte_records`].
pub struct ByteRecords<'r, R> {
    rdr: &'r mut Reader<R>,
    done: bool,
}

impl<R: Read> Iterator for ByteRecords<'_, R> {
    type Item = Result<ByteRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.rdr.read_byte_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
