//! Opening the byte streams handed to the codec.
//!
//! A missing path or `-` means stdin/stdout. The standard streams are
//! returned unlocked so `-` may be given more than once.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

fn is_stdio(path: Option<&Path>) -> bool {
    path.map_or(true, |p| p.as_os_str() == "-")
}

pub fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(p) if !is_stdio(path) => {
            debug!("reading {}", p.display());
            let file = File::open(p).with_context(|| format!("failed to open {}", p.display()))?;
            Ok(Box::new(file))
        }
        _ => Ok(Box::new(io::stdin())),
    }
}

pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) if !is_stdio(path) => {
            debug!("writing {}", p.display());
            let file =
                File::create(p).with_context(|| format!("failed to create {}", p.display()))?;
            Ok(Box::new(file))
        }
        _ => Ok(Box::new(io::stdout())),
    }
}

/// Human-readable name for log and error messages.
pub fn display_name(path: Option<&Path>) -> String {
    match path {
        Some(p) if !is_stdio(path) => p.display().to_string(),
        _ => "<stdio>".to_string(),
    }
}
