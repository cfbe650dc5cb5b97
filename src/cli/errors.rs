//! CLI-specific error types
//!
//! Any of these ends the process with a non-zero exit code.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be resolved
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database unreachable at startup
    #[error("Database error: {0}")]
    Store(#[from] StoreError),

    /// Listener failed to bind or serve
    #[error("Server error: {0}")]
    Io(#[from] io::Error),
}
