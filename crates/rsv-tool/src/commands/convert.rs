//! `rsv from-csv` / `rsv to-csv`.
//!
//! CSV rows map one-to-one onto RSV records. There is no header handling:
//! a CSV header row is just another record. CSV cannot express a record
//! with no fields: the CSV writer emits `""` for one, which reads back as a
//! single empty field.

use std::io::{Read, Write};

use anyhow::{ensure, Context, Result};
use tracing::info;

use crate::config::Config;

fn csv_delimiter(delimiter: char) -> Result<u8> {
    ensure!(delimiter.is_ascii(), "CSV delimiter must be ASCII, got {:?}", delimiter);
    Ok(delimiter as u8)
}

/// Convert CSV from `input` into RSV on `out`.
pub fn from_csv<R: Read, W: Write>(
    input: R,
    out: W,
    config: &Config,
    delimiter: char,
) -> Result<u64> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(csv_delimiter(delimiter)?)
        .from_reader(input);
    let mut wtr = config.writer_builder().from_writer(out);

    for (line, row) in rdr.byte_records().enumerate() {
        let row = row.with_context(|| format!("bad CSV row {}", line))?;
        wtr.write_record(row.iter())
            .with_context(|| format!("cannot encode CSV row {}", line))?;
    }

    wtr.flush()?;
    let written = wtr.records_written();
    info!(records = written, "from-csv finished");
    Ok(written)
}

/// Convert RSV from `input` into CSV on `out`.
pub fn to_csv<R: Read, W: Write>(input: R, out: W, config: &Config, delimiter: char) -> Result<u64> {
    let mut rdr = config.reader_builder().from_reader(input);
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .delimiter(csv_delimiter(delimiter)?)
        .from_writer(out);
    let mut count = 0u64;

    for record in rdr.byte_records() {
        let record = record.with_context(|| format!("record {}", count))?;
        wtr.write_record(&record)?;
        count += 1;
    }

    wtr.flush()?;
    info!(records = count, "to-csv finished");
    Ok(count)
}
