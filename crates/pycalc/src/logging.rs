//! Tracing subscriber setup
//!
//! The terminal UI owns the screen, so interactive sessions log to a file
//! (or not at all). One-shot evaluation logs to stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::CalcConfig;
use crate::error::{AppError, AppResult};

/// Where log records go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// The configured log file, or nowhere
    Interactive,
    /// Standard error
    Stderr,
}

/// Builds the filter: `RUST_LOG` when set, else the verbosity level
#[must_use]
pub fn env_filter(config: &CalcConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.verbosity.level()))
}

/// Installs the global subscriber
///
/// Returns `Ok(false)` when nothing was installed because an interactive
/// session has no log file.
pub fn init(config: &CalcConfig, target: LogTarget) -> AppResult<bool> {
    let filter = env_filter(config);

    match (target, &config.log_file) {
        (LogTarget::Interactive, None) => Ok(false),
        (_, Some(path)) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| AppError::logging(e.to_string()))?;
            Ok(true)
        }
        (LogTarget::Stderr, None) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| AppError::logging(e.to_string()))?;
            Ok(true)
        }
    }
}
