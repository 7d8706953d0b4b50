//! Buffered RSV encoder.
//!
//! Output goes through an internal `BufWriter`, so bytes only reach the
//! sink on [`Writer::flush`], [`Writer::write_all`], [`Writer::into_inner`]
//! or when the writer is dropped. A flush on drop cannot report failure;
//! call `flush` explicitly when the outcome matters.
//!
//! The first I/O failure is remembered. From then on every write or flush
//! returns that error without touching the sink, and [`Writer::error`]
//! reports it without doing any I/O.

use std::io::{self, BufWriter, Write};

use tracing::debug;

use crate::error::{Result, RsvError};
use crate::wire_types::{find_delimiter, DEFAULT_BUFFER_CAPACITY, FIELD_TERMINATOR, ROW_TERMINATOR};

/// Builds a [`Writer`] with non-default settings.
#[derive(Debug, Clone)]
pub struct WriterBuilder {
    capacity: usize,
    validate_fields: bool,
}

impl Default for WriterBuilder {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_BUFFER_CAPACITY,
            validate_fields: false,
        }
    }
}

impl WriterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capacity of the buffer placed between the writer and the sink.
    pub fn capacity(&mut self, capacity: usize) -> &mut Self {
        self.capacity = capacity;
        self
    }

    /// Reject fields containing `FIELD_TERMINATOR` or `ROW_TERMINATOR`.
    ///
    /// Off by default: such fields are written as-is and corrupt the
    /// stream.
    pub fn validate_fields(&mut self, yes: bool) -> &mut Self {
        self.validate_fields = yes;
        self
    }

    pub fn from_writer<W: Write>(&self, wtr: W) -> Writer<W> {
        Writer {
            wtr: BufWriter::with_capacity(self.capacity, wtr),
            validate_fields: self.validate_fields,
            error: None,
            records_written: 0,
        }
    }
}

/// Writes records to an underlying byte sink using RSV encoding.
///
/// Not meant to be shared: each writer owns its own buffer.
pub struct Writer<W: Write> {
    wtr: BufWriter<W>,
    validate_fields: bool,

    /// First I/O failure seen by a write or flush.
    error: Option<io::Error>,

    records_written: u64,
}

impl<W: Write> Writer<W> {
    /// Create a permissive writer with the default buffer capacity.
    pub fn new(wtr: W) -> Self {
        WriterBuilder::new().from_writer(wtr)
    }

    /// Write a single record.
    ///
    /// Each field is followed by `FIELD_TERMINATOR`, the record by
    /// `ROW_TERMINATOR`. Writes are buffered. Bytes already written for
    /// the record are not taken back on failure.
    pub fn write_record<I, T>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.check_error()?;

        for (idx, field) in fields.into_iter().enumerate() {
            let field = field.as_ref();
            if self.validate_fields {
                if let Some((_, byte)) = find_delimiter(field) {
                    return Err(RsvError::DelimiterInField { field: idx, byte });
                }
            }
            self.put(field)?;
            self.put(&[FIELD_TERMINATOR])?;
        }
        self.put(&[ROW_TERMINATOR])?;

        self.records_written += 1;
        Ok(())
    }

    /// Write every record, then flush.
    ///
    /// Stops at the first failing record. The flush result is returned
    /// when all records were written.
    pub fn write_all<I, R, T>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        for record in records {
            self.write_record(record)?;
        }
        self.flush()
    }

    /// Push buffered bytes to the sink.
    ///
    /// Does not clear a previously recorded error.
    pub fn flush(&mut self) -> Result<()> {
        self.check_error()?;
        if let Err(e) = self.wtr.flush() {
            return Err(self.record_error(e));
        }
        Ok(())
    }

    /// The error that made an earlier write or flush fail, if any.
    ///
    /// No I/O is attempted.
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    /// Number of records fully written into the buffer.
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    pub fn get_ref(&self) -> &W {
        self.wtr.get_ref()
    }

    /// Flush and unwrap the sink.
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        self.wtr
            .into_inner()
            .map_err(|e| RsvError::Io(e.into_error()))
    }

    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        if let Err(e) = self.wtr.write_all(bytes) {
            return Err(self.record_error(e));
        }
        Ok(())
    }

    fn record_error(&mut self, err: io::Error) -> RsvError {
        debug!(records = self.records_written, "write failed: {}", err);
        self.error = Some(copy_io_error(&err));
        RsvError::Io(err)
    }

    fn check_error(&self) -> Result<()> {
        match &self.error {
            Some(err) => Err(RsvError::Io(copy_io_error(err))),
            None => Ok(()),
        }
    }
}

// `io::Error` is not `Clone`; keep the kind and message.
fn copy_io_error(err: &io::Error) -> io::Error {
    io::Error::new(err.kind(), err.to_string())
}
