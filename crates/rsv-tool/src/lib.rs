//! rsv-tool
//!
//! Command-line front end for `rsv-core`: dump, count, concatenate and
//! convert RSV streams.

pub mod config;
pub mod io_util;
pub mod commands;
