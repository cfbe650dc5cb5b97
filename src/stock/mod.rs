//! # Stock Records
//!
//! The single entity exposed by the service.

mod model;

pub use model::{NewStock, Stock, StockId};
