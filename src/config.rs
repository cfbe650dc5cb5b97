//! Process configuration
//!
//! Resolved once at startup and handed to the store and the HTTP server.
//! Values come from, in increasing precedence: a `.env` file, the process
//! environment, and CLI flags (applied by the caller).
//!
//! Keys:
//! - `POSTGRES_URL` (required)
//! - `HOST`, `PORT`
//! - `CORS_ORIGINS` (comma separated)
//! - `DB_MAX_CONNECTIONS`

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use axum::http::HeaderValue;
use thiserror::Error;
use tracing::{debug, warn};

use crate::http_server::HttpServerConfig;

pub const DATABASE_URL_KEY: &str = "POSTGRES_URL";
pub const HOST_KEY: &str = "HOST";
pub const PORT_KEY: &str = "PORT";
pub const CORS_ORIGINS_KEY: &str = "CORS_ORIGINS";
pub const MAX_CONNECTIONS_KEY: &str = "DB_MAX_CONNECTIONS";

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required key has no value
    #[error("Missing required setting: {0}")]
    Missing(&'static str),

    /// A key has a value that does not parse
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },

    /// The env file exists but could not be read
    #[error("Failed to read env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

/// Connection settings for the stock store
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// PostgreSQL connection string
    pub database_url: String,

    /// Upper bound on pooled connections (default: 5)
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

/// Full service configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: HttpServerConfig,
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load from an env file, letting the process environment win
    pub fn load(env_file: &Path) -> ConfigResult<Self> {
        Self::load_with(env_file, |key| std::env::var(key).ok())
    }

    fn load_with<F>(env_file: &Path, process_env: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file_vars = read_env_file(env_file)?;
        Self::from_lookup(|key| process_env(key).or_else(|| file_vars.get(key).cloned()))
    }

    /// Build from a key lookup
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_KEY)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing(DATABASE_URL_KEY))?;

        let max_connections = match lookup(MAX_CONNECTIONS_KEY) {
            Some(raw) => match parse::<u32>(MAX_CONNECTIONS_KEY, &raw)? {
                0 => {
                    return Err(ConfigError::Invalid {
                        key: MAX_CONNECTIONS_KEY,
                        value: raw,
                    })
                }
                n => n,
            },
            None => default_max_connections(),
        };

        let mut server = HttpServerConfig::default();
        if let Some(host) = lookup(HOST_KEY) {
            server.host = host;
        }
        if let Some(raw) = lookup(PORT_KEY) {
            server.port = parse(PORT_KEY, &raw)?;
        }
        if let Some(raw) = lookup(CORS_ORIGINS_KEY) {
            server.cors_origins = parse_origins(&raw)?;
        }

        Ok(Self {
            server,
            store: StoreConfig {
                database_url,
                max_connections,
            },
        })
    }
}

fn parse<T: FromStr>(key: &'static str, raw: &str) -> ConfigResult<T> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
    })
}

fn parse_origins(raw: &str) -> ConfigResult<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                key: CORS_ORIGINS_KEY,
                value: origin.to_string(),
            })
        })
        .collect()
}

fn read_env_file(path: &Path) -> ConfigResult<HashMap<String, String>> {
    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(e) if e.not_found() => {
            warn!(path = %path.display(), "Env file not found, using process environment only");
            return Ok(HashMap::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut vars = HashMap::new();
    for entry in entries {
        let (key, value) = entry?;
        vars.insert(key, value);
    }
    debug!(path = %path.display(), count = vars.len(), "Loaded env file");
    Ok(vars)
}
