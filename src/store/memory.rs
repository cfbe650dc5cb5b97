//! In-memory stock repository.
//!
//! Same contract as the PostgreSQL backend: ids start at 1 and are never
//! reused, and iteration order is whatever the map yields.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::stock::{NewStock, Stock, StockId};

use super::errors::{StoreError, StoreResult};
use super::repository::StockRepository;

#[derive(Default)]
struct Table {
    rows: BTreeMap<StockId, Stock>,
    last_id: StockId,
}

/// Stock repository held entirely in memory
#[derive(Default)]
pub struct InMemoryStockRepository {
    table: RwLock<Table>,
}

impl InMemoryStockRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StockRepository for InMemoryStockRepository {
    async fn insert(&self, stock: &NewStock) -> StoreResult<StockId> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(id, stock.clone().with_id(id));
        Ok(id)
    }

    async fn fetch_one(&self, id: StockId) -> StoreResult<Stock> {
        let table = self.table.read().await;
        table.rows.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    async fn fetch_all(&self) -> StoreResult<Vec<Stock>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn update(&self, id: StockId, stock: &NewStock) -> StoreResult<u64> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = stock.clone().with_id(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: StockId) -> StoreResult<u64> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).map_or(0, |_| 1))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
