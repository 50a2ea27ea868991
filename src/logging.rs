//! File logging setup.
//!
//! The terminal belongs to the TUI, so log output goes to a plain-text file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding a filter directive that overrides `--log-level`.
pub const LOG_ENV: &str = "TASTEBUD_LOG";

/// Builds the filter from [`LOG_ENV`], falling back to `level`.
///
/// # Errors
///
/// Returns an error if neither the environment nor `level` holds a valid directive.
pub fn filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("Invalid log level: {level}"))
}

/// Installs the global subscriber, appending to `log_file`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the filter is invalid, or a
/// subscriber is already installed.
pub fn init(log_file: &Path, level: &str) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file: {}", log_file.display()))?;

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter(level)?)
        .with(file_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!(path = %log_file.display(), "logging initialized");
    Ok(())
}
