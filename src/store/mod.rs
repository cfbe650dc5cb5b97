//! # Stock Store
//!
//! Persistence operations for the `stocks` table. Handlers only see the
//! [`StockRepository`] trait; [`PgStockRepository`] is the production
//! backend and [`InMemoryStockRepository`] backs tests.
//!
//! Every operation issues exactly one statement. Nothing here composes
//! statements into a transaction.

mod errors;
mod memory;
mod postgres;
mod repository;

pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryStockRepository;
pub use postgres::PgStockRepository;
pub use repository::StockRepository;
