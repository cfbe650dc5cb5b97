//! Stock HTTP Routes
//!
//! CRUD endpoints over the stock table. Each handler makes exactly one
//! repository call.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::stock::{NewStock, Stock, StockId};
use crate::store::StockRepository;

use super::errors::ApiResult;

// ==================
// Shared State
// ==================

/// Stock state shared across handlers
pub struct StockState {
    pub repo: Arc<dyn StockRepository>,
}

impl StockState {
    pub fn new(repo: Arc<dyn StockRepository>) -> Self {
        Self { repo }
    }
}

// ==================
// Response Types
// ==================

/// Acknowledgement for writes
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub id: StockId,
    pub message: String,
}

impl MessageResponse {
    fn created(id: StockId) -> Self {
        Self {
            id,
            message: "Stock created successfully".to_string(),
        }
    }

    fn updated(id: StockId, rows: u64) -> Self {
        Self {
            id,
            message: format!("Stock updated successfully. Total rows affected: {}", rows),
        }
    }

    fn deleted(id: StockId, rows: u64) -> Self {
        Self {
            id,
            message: format!("Stock deleted successfully. Total rows affected: {}", rows),
        }
    }
}

// ==================
// Stock Routes
// ==================

/// Create stock routes
pub fn stock_routes(state: Arc<StockState>) -> Router {
    Router::new()
        .route("/newstock", post(create_stock_handler))
        .route("/stock", get(list_stocks_handler))
        .route(
            "/stock/:id",
            get(get_stock_handler)
                .put(update_stock_handler)
                .delete(delete_stock_handler),
        )
        .with_state(state)
}

// Bodies are decoded regardless of Content-Type.
fn parse_stock(body: &Bytes) -> ApiResult<NewStock> {
    Ok(serde_json::from_slice(body)?)
}

// ==================
// Handlers
// ==================

async fn create_stock_handler(
    State(state): State<Arc<StockState>>,
    body: Bytes,
) -> ApiResult<Json<MessageResponse>> {
    let stock = parse_stock(&body)?;
    let id = state.repo.insert(&stock).await?;

    Ok(Json(MessageResponse::created(id)))
}

async fn list_stocks_handler(State(state): State<Arc<StockState>>) -> ApiResult<Json<Vec<Stock>>> {
    let stocks = state.repo.fetch_all().await?;
    Ok(Json(stocks))
}

async fn get_stock_handler(
    State(state): State<Arc<StockState>>,
    id: Result<Path<StockId>, PathRejection>,
) -> ApiResult<Json<Stock>> {
    let Path(id) = id?;
    let stock = state.repo.fetch_one(id).await?;

    Ok(Json(stock))
}

async fn update_stock_handler(
    State(state): State<Arc<StockState>>,
    id: Result<Path<StockId>, PathRejection>,
    body: Bytes,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = id?;
    let stock = parse_stock(&body)?;
    let rows = state.repo.update(id, &stock).await?;

    Ok(Json(MessageResponse::updated(id, rows)))
}

async fn delete_stock_handler(
    State(state): State<Arc<StockState>>,
    id: Result<Path<StockId>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = id?;
    let rows = state.repo.delete(id).await?;

    Ok(Json(MessageResponse::deleted(id, rows)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_server::ApiError;

    #[test]
    fn test_messages() {
        assert_eq!(
            serde_json::to_value(MessageResponse::updated(1, 1)).unwrap(),
            serde_json::json!({
                "id": 1,
                "message": "Stock updated successfully. Total rows affected: 1"
            })
        );
        assert_eq!(
            MessageResponse::deleted(4, 0).message,
            "Stock deleted successfully. Total rows affected: 0"
        );
    }

    #[test]
    fn test_parse_stock_rejects_wrong_shape() {
        let body = Bytes::from_static(br#"{"name":"Acme","price":"cheap","company":"Acme Corp"}"#);
        assert!(matches!(parse_stock(&body), Err(ApiError::BadRequest(_))));
    }
}
