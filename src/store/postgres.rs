//! # PostgreSQL Stock Repository
//!
//! Issues parameterized statements against the `stocks` table through a
//! shared `PgPool`. The pool is built once at startup; each call checks out
//! a connection for a single statement.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, info};

use crate::stock::{NewStock, Stock, StockId};

use super::errors::{StoreError, StoreResult};
use super::repository::StockRepository;

const INSERT_STOCK: &str =
    "INSERT INTO stocks (name, price, company) VALUES ($1, $2, $3) RETURNING stockid";
const SELECT_STOCK: &str = "SELECT stockid, name, price, company FROM stocks WHERE stockid = $1";
const SELECT_ALL_STOCKS: &str = "SELECT stockid, name, price, company FROM stocks";
const UPDATE_STOCK: &str =
    "UPDATE stocks SET name = $1, price = $2, company = $3 WHERE stockid = $4";
const DELETE_STOCK: &str = "DELETE FROM stocks WHERE stockid = $1";

/// Stock repository backed by PostgreSQL
#[derive(Clone)]
pub struct PgStockRepository {
    pool: PgPool,
}

impl PgStockRepository {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool and verify the database is reachable
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        info!(max_connections, "Connected to postgres");
        Ok(Self::new(pool))
    }

    /// Underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl StockRepository for PgStockRepository {
    async fn insert(&self, stock: &NewStock) -> StoreResult<StockId> {
        let id: StockId = sqlx::query_scalar(INSERT_STOCK)
            .bind(&stock.name)
            .bind(stock.price)
            .bind(&stock.company)
            .fetch_one(&self.pool)
            .await?;

        info!(id, "Inserted stock");
        Ok(id)
    }

    async fn fetch_one(&self, id: StockId) -> StoreResult<Stock> {
        let stock = sqlx::query_as::<_, Stock>(SELECT_STOCK)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))?;

        debug!(id, "Fetched stock");
        Ok(stock)
    }

    async fn fetch_all(&self) -> StoreResult<Vec<Stock>> {
        let stocks = sqlx::query_as::<_, Stock>(SELECT_ALL_STOCKS)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = stocks.len(), "Fetched all stocks");
        Ok(stocks)
    }

    async fn update(&self, id: StockId, stock: &NewStock) -> StoreResult<u64> {
        let rows = sqlx::query(UPDATE_STOCK)
            .bind(&stock.name)
            .bind(stock.price)
            .bind(&stock.company)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        info!(id, rows, "Updated stock");
        Ok(rows)
    }

    async fn delete(&self, id: StockId) -> StoreResult<u64> {
        let rows = sqlx::query(DELETE_STOCK)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        info!(id, rows, "Deleted stock");
        Ok(rows)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
