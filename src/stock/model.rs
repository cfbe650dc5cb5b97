//! Stock record shapes shared by the store and the HTTP layer.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Storage-assigned identifier of a stock row
pub type StockId = i64;

/// A persisted stock row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Stock {
    #[sqlx(rename = "stockid")]
    pub id: StockId,
    pub name: String,
    pub price: f64,
    pub company: String,
}

/// Mutable fields of a stock, as sent on create and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStock {
    pub name: String,
    pub price: f64,
    pub company: String,
}

impl NewStock {
    /// Attach a storage id to these fields
    pub fn with_id(self, id: StockId) -> Stock {
        Stock {
            id,
            name: self.name,
            price: self.price,
            company: self.company,
        }
    }
}
