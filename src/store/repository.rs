//! Repository trait implemented by every stock backend.

use async_trait::async_trait;

use crate::stock::{NewStock, Stock, StockId};

use super::errors::StoreResult;

/// Persistence operations over the stock table
#[async_trait]
pub trait StockRepository: Send + Sync {
    /// Insert a stock and return the id assigned by storage
    async fn insert(&self, stock: &NewStock) -> StoreResult<StockId>;

    /// Fetch a single stock, failing with `NotFound` if the id is unknown
    async fn fetch_one(&self, id: StockId) -> StoreResult<Stock>;

    /// Fetch every stock in storage order
    async fn fetch_all(&self) -> StoreResult<Vec<Stock>>;

    /// Overwrite the mutable fields of a stock, returning rows affected
    async fn update(&self, id: StockId, stock: &NewStock) -> StoreResult<u64>;

    /// Delete a stock, returning rows affected
    async fn delete(&self, id: StockId) -> StoreResult<u64>;

    /// Check that the backend is reachable
    async fn ping(&self) -> StoreResult<()>;
}
