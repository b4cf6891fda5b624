//! Database Models
//!
//! Persistent data structures for holdings, positions, and orders. The
//! serialized field names are the wire shape the dashboard tables render.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::entities::position::Position;

/// Holding record in database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HoldingRecord {
    pub id: String,
    pub name: String,
    pub qty: f64,
    pub avg: f64,
    pub price: f64,
    pub net: String,
    pub day: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Position record in database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PositionRecord {
    pub id: String,
    pub product: String,
    pub name: String,
    pub qty: f64,
    pub avg: f64,
    pub price: f64,
    pub net: String,
    pub day: String,
    // The dashboard expects camelCase for this one field
    #[serde(rename = "isLoss")]
    pub is_loss: bool,
    pub created_at: DateTime<Utc>,
}

/// Order record in database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderRecord {
    pub id: String,
    pub name: String,
    pub qty: f64,
    pub price: f64,
    pub mode: String, // "BUY" or "SELL"
    pub placed_at: DateTime<Utc>,
}

/// Create holding input
#[derive(Debug, Clone)]
pub struct CreateHolding {
    pub id: String,
    pub name: String,
    pub qty: f64,
    pub avg: f64,
    pub price: f64,
    pub net: String,
    pub day: String,
}

/// Holding fill update input (qty/avg recomputed by the domain)
#[derive(Debug, Clone)]
pub struct UpdateHoldingFill {
    pub qty: f64,
    pub avg: f64,
    pub price: f64,
}

/// Create position input
#[derive(Debug, Clone)]
pub struct CreatePosition {
    pub id: String,
    pub product: String,
    pub name: String,
    pub qty: f64,
    pub avg: f64,
    pub price: f64,
    pub net: String,
    pub day: String,
    pub is_loss: bool,
}

impl CreatePosition {
    /// Build a seed row from the domain view, deriving the loss flag
    /// from the unrealized P&L
    pub fn from_entity(id: String, position: &Position) -> Self {
        Self {
            id,
            product: position.product.clone(),
            name: position.name.clone(),
            qty: position.qty,
            avg: position.avg,
            price: position.price,
            net: position.net.clone(),
            day: position.day.clone(),
            is_loss: position.pnl() < 0.0,
        }
    }
}

/// Create order input
#[derive(Debug, Clone)]
pub struct CreateOrder {
    pub id: String,
    pub name: String,
    pub qty: f64,
    pub price: f64,
    pub mode: String,
}
