//! Subcommand implementations.
//!
//! Each command takes already-opened streams so it can be driven from
//! tests with in-memory buffers; `main` does the opening.

pub mod cat;
pub mod convert;
pub mod count;
pub mod dump;

pub use cat::{cat, CatSummary};
pub use convert::{from_csv, to_csv};
pub use count::{count, StreamStats};
pub use dump::dump;
