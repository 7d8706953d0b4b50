//! `rsv count`: record and field statistics.

use std::fmt;
use std::io::Read;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::Config;

/// Shape of a decoded stream.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct StreamStats {
    pub records: u64,
    pub fields: u64,

    /// Records with zero fields.
    pub empty_records: u64,

    /// Fields with zero bytes.
    pub empty_fields: u64,

    pub max_fields: usize,
    pub field_bytes: u64,
}

impl fmt::Display for StreamStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "records:       {}", self.records)?;
        writeln!(f, "fields:        {}", self.fields)?;
        writeln!(f, "empty records: {}", self.empty_records)?;
        writeln!(f, "empty fields:  {}", self.empty_fields)?;
        writeln!(f, "max fields:    {}", self.max_fields)?;
        write!(f, "field bytes:   {}", self.field_bytes)
    }
}

/// Decode `input` as raw bytes and collect statistics.
pub fn count<R: Read>(input: R, config: &Config) -> Result<StreamStats> {
    let mut rdr = config.reader_builder().from_reader(input);
    let mut stats = StreamStats::default();

    for record in rdr.byte_records() {
        let record = record.with_context(|| format!("record {}", stats.records))?;

        stats.records += 1;
        stats.fields += record.len() as u64;
        stats.max_fields = stats.max_fields.max(record.len());
        if record.is_empty() {
            stats.empty_records += 1;
        }
        for field in &record {
            if field.is_empty() {
                stats.empty_fields += 1;
            }
            stats.field_bytes += field.len() as u64;
        }
    }

    Ok(stats)
}
