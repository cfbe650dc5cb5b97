//! # Stock HTTP Server Module
//!
//! JSON-over-HTTP surface of the service.
//!
//! # Endpoints
//!
//! - `POST /api/newstock` - Create a stock
//! - `GET /api/stock` - List stocks
//! - `GET|PUT|DELETE /api/stock/{id}` - Read, update, delete one stock
//! - `GET /health` - Health check

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;
pub mod stock_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
pub use stock_routes::MessageResponse;
