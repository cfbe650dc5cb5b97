//! CLI argument definitions using clap
//!
//! Commands:
//! - stockd serve [--env-file <path>] [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// stockd - REST service for stock records
#[derive(Parser, Debug)]
#[command(name = "stockd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Connect to the database and serve the HTTP API
    Serve {
        /// Env file holding POSTGRES_URL and friends
        #[arg(long, default_value = ".env")]
        env_file: PathBuf,

        /// Host to bind, overrides HOST
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overrides PORT
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
