//! `rsv cat`: byte-level concatenation of RSV streams.
//!
//! Valid streams concatenate into a valid stream, so no re-encoding is
//! needed. `--check` decodes each input first so a malformed one is
//! rejected before any of its bytes reach the output.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use rsv_core::Reader;
use tracing::{debug, info};

use crate::config::Config;

/// Totals for a `cat` run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CatSummary {
    pub inputs: usize,
    pub bytes: u64,

    /// Only counted when checking.
    pub records: u64,
}

/// Append every `(name, input)` to `out` in order.
pub fn cat<I, R, W>(inputs: I, mut out: W, config: &Config, check: bool) -> Result<CatSummary>
where
    I: IntoIterator<Item = (String, R)>,
    R: Read,
    W: Write,
{
    let mut summary = CatSummary::default();

    for (name, mut input) in inputs {
        if check {
            let mut buf = Vec::new();
            input
                .read_to_end(&mut buf)
                .with_context(|| format!("failed to read {}", name))?;

            let mut rdr = config.reader_builder().from_reader(buf.as_slice());
            let records = validate(&mut rdr).with_context(|| format!("{} is not valid RSV", name))?;
            debug!(input = %name, records, "input checked");

            out.write_all(&buf)?;
            summary.bytes += buf.len() as u64;
            summary.records += records;
        } else {
            let copied =
                io::copy(&mut input, &mut out).with_context(|| format!("failed to copy {}", name))?;
            summary.bytes += copied;
        }
        summary.inputs += 1;
    }

    out.flush()?;
    info!(inputs = summary.inputs, bytes = summary.bytes, "cat finished");
    Ok(summary)
}

fn validate<R: Read>(rdr: &mut Reader<R>) -> rsv_core::Result<u64> {
    let mut records = 0;
    while rdr.read_byte_record()?.is_some() {
        records += 1;
    }
    Ok(records)
}
