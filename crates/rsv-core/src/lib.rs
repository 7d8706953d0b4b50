//! rsv-core
//!
//! Reading and writing Row of String Value (RSV) data.
//!
//! An RSV stream is a sequence of records. Every field is followed by
//! `0xFF` and every record by `0xFD`; neither byte can appear in UTF-8
//! text, so there is no quoting, no escaping and no header. Two valid
//! streams concatenated byte for byte form another valid stream.
//!
//! - [`reader`]     : streaming decoder over any `io::Read`
//! - [`writer`]     : buffered encoder over any `io::Write`
//! - [`codec`]      : encode/decode helpers for in-memory buffers
//! - [`wire_types`] : delimiter constants and record aliases
//!
//! ```
//! use rsv_core::{Reader, Writer};
//!
//! let mut out = Vec::new();
//! let mut wtr = Writer::new(&mut out);
//! wtr.write_all([vec!["Hello", "🌎"], vec![], vec!["", "abc"]]).unwrap();
//! drop(wtr);
//!
//! let records = Reader::new(out.as_slice()).read_all().unwrap();
//! assert_eq!(records, vec![vec!["Hello", "🌎"], vec![], vec!["", "abc"]]);
//! ```

pub mod wire_types;
pub mod error;
pub mod codec;
pub mod reader;
pub mod writer;

pub use wire_types::{ByteRecord, Record, DEFAULT_BUFFER_CAPACITY, FIELD_TERMINATOR, ROW_TERMINATOR};
pub use error::{Result, RsvError};
pub use codec::{decode_record, decode_slice, encode_record, encode_to_vec};
pub use reader::{ByteRecords, Reader, ReaderBuilder, Records};
pub use writer::{Writer, WriterBuilder};
