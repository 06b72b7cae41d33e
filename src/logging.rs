//! Log setup
//!
//! The terminal belongs to the game screen, so logs only go to a file.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install a subscriber writing to `path`.
///
/// `level` is an `EnvFilter` directive such as `info` or `torus_snake=debug`;
/// when absent, `RUST_LOG` is used, then `info`.
pub fn init(path: &Path, level: Option<&str>) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create log file {:?}", path))?;

    let filter = match level {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("Invalid log level {:?}", directive))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(())
}
