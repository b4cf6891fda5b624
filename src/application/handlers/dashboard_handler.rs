use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::application::services::order_service::OrderService;
use crate::domain::entities::order::{Order, OrderMode};
use crate::domain::errors::{OrderError, ValidationError};
use crate::persistence::models::{HoldingRecord, OrderRecord, PositionRecord};

/// New order payload; fields are optional so missing ones get a 400
/// instead of a rejection from the extractor
#[derive(Debug, Serialize, Deserialize)]
pub struct NewOrderRequest {
    pub name: Option<String>,
    pub qty: Option<f64>,
    pub price: Option<f64>,
    pub mode: Option<String>,
}

/// Success response for order placement
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn internal_error(e: impl std::fmt::Display) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

fn bad_request(e: impl std::fmt::Display) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

/// Plain-text health string at the root
pub async fn root() -> &'static str {
    "Server is working fine!"
}

/// Get all holdings
pub async fn all_holdings(
    State(service): State<Arc<OrderService>>,
) -> Result<Json<Vec<HoldingRecord>>, ApiError> {
    let holdings = service.all_holdings().await.map_err(internal_error)?;
    Ok(Json(holdings))
}

/// Get all positions
pub async fn all_positions(
    State(service): State<Arc<OrderService>>,
) -> Result<Json<Vec<PositionRecord>>, ApiError> {
    let positions = service.all_positions().await.map_err(internal_error)?;
    Ok(Json(positions))
}

/// Get all orders
pub async fn all_orders(
    State(service): State<Arc<OrderService>>,
) -> Result<Json<Vec<OrderRecord>>, ApiError> {
    let orders = service.all_orders().await.map_err(internal_error)?;
    Ok(Json(orders))
}

/// Place a new order and update holdings
pub async fn new_order(
    State(service): State<Arc<OrderService>>,
    Json(payload): Json<NewOrderRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let order = parse_order(payload).map_err(bad_request)?;

    match service.place_order(order).await {
        Ok(_) => Ok((
            StatusCode::CREATED,
            Json(MessageResponse {
                message: "Order processed & holdings updated".to_string(),
            }),
        )),
        Err(e @ OrderError::NoHoldingToSell) => Err(bad_request(e)),
        Err(OrderError::Validation(e)) => Err(bad_request(e)),
        Err(OrderError::Database(e)) => Err(internal_error(e)),
    }
}

fn parse_order(payload: NewOrderRequest) -> Result<Order, ValidationError> {
    let name = payload.name.ok_or(ValidationError::MissingField("name"))?;
    let qty = payload.qty.ok_or(ValidationError::MissingField("qty"))?;
    let price = payload
        .price
        .ok_or(ValidationError::MissingField("price"))?;
    let mode = payload.mode.ok_or(ValidationError::MissingField("mode"))?;

    let mode = OrderMode::parse(&mode)?;
    Order::new(name, qty, price, mode)
}
