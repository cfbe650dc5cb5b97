//! stockd - A small REST service for stock records backed by PostgreSQL

pub mod cli;
pub mod config;
pub mod http_server;
pub mod stock;
pub mod store;
