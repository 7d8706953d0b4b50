//! `rsv dump`: one JSON array per record.

use std::io::{BufWriter, Read, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;

/// Print every record of `input` to `out`.
///
/// With `lossy`, fields that are not UTF-8 are shown with replacement
/// characters instead of failing.
pub fn dump<R: Read, W: Write>(input: R, out: W, config: &Config, lossy: bool) -> Result<u64> {
    let mut rdr = config.reader_builder().from_reader(input);
    let mut out = BufWriter::new(out);
    let mut count = 0u64;

    if lossy {
        for record in rdr.byte_records() {
            let record = record.with_context(|| format!("record {}", count))?;
            let fields: Vec<_> = record.iter().map(|f| String::from_utf8_lossy(f)).collect();
            serde_json::to_writer(&mut out, &fields)?;
            out.write_all(b"\n")?;
            count += 1;
        }
    } else {
        for record in rdr.records() {
            let record = record.with_context(|| format!("record {}", count))?;
            serde_json::to_writer(&mut out, &record)?;
            out.write_all(b"\n")?;
            count += 1;
        }
    }

    out.flush()?;
    info!(records = count, "dump finished");
    Ok(count)
}
