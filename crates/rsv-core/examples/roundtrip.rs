//! Example: write a few records, then read them back.
//!
//! Usage:
//!
//! ```bash
//! cargo run -p rsv-core --example roundtrip
//! ```
//!
//! It will:
//! - encode three records (one of them empty) into an in-memory buffer
//! - print the raw bytes
//! - decode the buffer and print the records.

use std::error::Error;

use rsv_core::{Reader, Writer};

fn main() -> Result<(), Box<dyn Error>> {
    let records = vec![vec!["Hello", "🌎"], vec![], vec!["", "abc"]];

    let mut wtr = Writer::new(Vec::new());
    wtr.write_all(&records)?;
    let encoded = wtr.into_inner()?;

    println!("--> Encoded {} records into {} bytes", records.len(), encoded.len());
    println!("    {:02X?}", encoded);

    let mut rdr = Reader::new(encoded.as_slice());
    for (i, record) in rdr.records().enumerate() {
        println!("<-- [{}] {:?}", i, record?);
    }

    Ok(())
}
