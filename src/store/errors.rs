//! # Store Errors

use thiserror::Error;

use crate::stock::StockId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row matches the requested id
    #[error("Stock not found: {0}")]
    NotFound(StockId),

    /// Connection, query or constraint failure reported by the database
    #[error("Storage error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// True when the error means the row is absent rather than the store failing
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
