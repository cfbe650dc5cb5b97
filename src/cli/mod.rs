//! CLI module for stockd
//!
//! Provides command-line interface for:
//! - serve: Load configuration, connect to PostgreSQL and serve the API

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init_tracing, run, run_command, serve};
pub use errors::{CliError, CliResult};
