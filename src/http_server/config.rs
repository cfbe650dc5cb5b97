//! Listener and CORS settings for the HTTP server.

use axum::http::HeaderValue;

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,

    /// Origins allowed by CORS; empty means any origin
    pub cors_origins: Vec<HeaderValue>,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Address string as handed to the listener
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
