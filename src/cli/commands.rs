//! CLI command implementations

use std::path::Path;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::AppConfig;
use crate::http_server::HttpServer;
use crate::store::PgStockRepository;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments, initialise logging and dispatch
pub async fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_tracing();
    run_command(cli.command).await
}

/// Execute a parsed command
pub async fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            env_file,
            host,
            port,
        } => serve(&env_file, host, port).await,
    }
}

/// Resolve configuration, connect the pool and serve until shutdown
pub async fn serve(env_file: &Path, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let mut config = AppConfig::load(env_file)?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let repo = PgStockRepository::connect(
        &config.store.database_url,
        config.store.max_connections,
    )
    .await?;

    let server = HttpServer::new(config.server, Arc::new(repo));
    info!(addr = %server.socket_addr(), "Configuration loaded");
    server.start().await?;
    Ok(())
}

/// Log to stdout, filtered by RUST_LOG (default: info)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();
}
