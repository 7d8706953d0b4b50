//! Configuration for the `rsv` tool.
//!
//! Defaults can be overridden via a few environment variables, and the
//! command line overrides those in turn:
//!
//! - `RSV_BUFFER_SIZE` (default: "8192")
//! - `RSV_STRICT`      (default: "false")
//! - `RSV_LOG`         (default: "warn")

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use rsv_core::{ReaderBuilder, WriterBuilder, DEFAULT_BUFFER_CAPACITY};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_BUFFER_SIZE: usize = DEFAULT_BUFFER_CAPACITY;
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Tool configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Capacity of the RSV reader/writer buffers.
    pub buffer_size: usize,

    /// Reject fields containing reserved bytes when writing RSV.
    pub strict: bool,

    /// `tracing-subscriber` filter directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            buffer_size: DEFAULT_BUFFER_SIZE,
            strict: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Construct a `Config` from environment variables, falling back
    /// to reasonable defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let buffer_size = read_or_default(&lookup, "RSV_BUFFER_SIZE", DEFAULT_BUFFER_SIZE)?;
        let strict = read_or_default(&lookup, "RSV_STRICT", false)?;
        let log_filter = lookup("RSV_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        log_env_filter(&log_filter)?;

        Ok(Config {
            buffer_size,
            strict,
            log_filter,
        })
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, buffer_size: Option<usize>, strict: bool) -> Self {
        if let Some(size) = buffer_size {
            self.buffer_size = size;
        }
        // The flag can only switch validation on.
        self.strict |= strict;
        self
    }

    /// Subscriber filter built from `log_filter`.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        log_env_filter(&self.log_filter)
    }

    pub fn reader_builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder.capacity(self.buffer_size);
        builder
    }

    pub fn writer_builder(&self) -> WriterBuilder {
        let mut builder = WriterBuilder::new();
        builder.capacity(self.buffer_size).validate_fields(self.strict);
        builder
    }
}

fn log_env_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .with_context(|| format!("invalid value for RSV_LOG: {:?}", directives))
}

fn read_or_default<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(val) => val
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value for {}: {:?}", key, val)),
        None => Ok(default),
    }
}
