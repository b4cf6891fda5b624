//! OrderService - order placement and dashboard queries
//!
//! Owns the three repositories and implements the buy/sell holdings
//! bookkeeping. The order row is appended first and the holding mutated
//! after; the pair is not wrapped in a transaction, so a storage failure
//! between the two leaves the order logged without a holdings update.
//! Matching goes through a single pool with no locking, so two
//! simultaneous orders on one instrument can lose an update.

use std::time::SystemTime;

use tracing::{info, warn};

use crate::domain::entities::holding::{Holding, SellOutcome};
use crate::domain::entities::order::{Order, OrderMode};
use crate::domain::errors::OrderError;
use crate::persistence::models::{
    CreateHolding, CreateOrder, HoldingRecord, OrderRecord, PositionRecord, UpdateHoldingFill,
};
use crate::persistence::repository::{HoldingRepository, OrderRepository, PositionRepository};
use crate::persistence::{DatabaseError, DbPool};

pub struct OrderService {
    holdings: HoldingRepository,
    positions: PositionRepository,
    orders: OrderRepository,
}

impl OrderService {
    pub fn new(pool: DbPool) -> Self {
        Self {
            holdings: HoldingRepository::new(pool.clone()),
            positions: PositionRepository::new(pool.clone()),
            orders: OrderRepository::new(pool),
        }
    }

    /// All holdings, for the dashboard holdings table
    pub async fn all_holdings(&self) -> Result<Vec<HoldingRecord>, DatabaseError> {
        self.holdings.all().await
    }

    /// All positions, for the dashboard positions table
    pub async fn all_positions(&self) -> Result<Vec<PositionRecord>, DatabaseError> {
        self.positions.all().await
    }

    /// All orders, in placement order
    pub async fn all_orders(&self) -> Result<Vec<OrderRecord>, DatabaseError> {
        self.orders.all().await
    }

    /// Place an order and fold it into the holdings book
    ///
    /// Appends the order row first, then locates the holding by name:
    /// - BUY with a holding: weighted-average recompute, qty increment
    /// - BUY without: open a fresh holding at `avg = price`
    /// - SELL without a holding: rejected (the order row stays logged)
    /// - SELL with a holding: qty decrement, row deleted once qty <= 0
    pub async fn place_order(&self, order: Order) -> Result<OrderRecord, OrderError> {
        let record = self
            .orders
            .create(CreateOrder {
                id: generate_id("order"),
                name: order.name.clone(),
                qty: order.qty.value(),
                price: order.price.value(),
                mode: order.mode.to_string(),
            })
            .await?;

        let existing = self.holdings.find_by_name(&order.name).await?;

        match order.mode {
            OrderMode::Buy => match existing {
                Some(rec) => {
                    let mut holding = to_domain(&rec);
                    holding.apply_buy(order.qty, order.price);
                    self.holdings
                        .update_fill(
                            &order.name,
                            UpdateHoldingFill {
                                qty: holding.qty,
                                avg: holding.avg,
                                price: holding.price,
                            },
                        )
                        .await?;
                    info!(
                        "BUY {} x{} @ {} folded into holding (qty {}, avg {:.2})",
                        order.name,
                        order.qty.value(),
                        order.price,
                        holding.qty,
                        holding.avg
                    );
                }
                None => {
                    let holding = Holding::open(order.name.clone(), order.qty, order.price);
                    self.holdings
                        .create(CreateHolding {
                            id: generate_id("hold"),
                            name: holding.name,
                            qty: holding.qty,
                            avg: holding.avg,
                            price: holding.price,
                            net: holding.net,
                            day: holding.day,
                        })
                        .await?;
                    info!(
                        "BUY {} x{} @ {} opened a new holding",
                        order.name,
                        order.qty.value(),
                        order.price
                    );
                }
            },
            OrderMode::Sell => match existing {
                None => {
                    warn!("SELL {} rejected: no holding to sell", order.name);
                    return Err(OrderError::NoHoldingToSell);
                }
                Some(rec) => {
                    let mut holding = to_domain(&rec);
                    match holding.apply_sell(order.qty, order.price) {
                        SellOutcome::Closed => {
                            self.holdings.delete_by_name(&order.name).await?;
                            info!(
                                "SELL {} x{} closed the holding (remaining qty {})",
                                order.name,
                                order.qty.value(),
                                holding.qty
                            );
                        }
                        SellOutcome::Reduced => {
                            self.holdings
                                .update_fill(
                                    &order.name,
                                    UpdateHoldingFill {
                                        qty: holding.qty,
                                        avg: holding.avg,
                                        price: holding.price,
                                    },
                                )
                                .await?;
                            info!(
                                "SELL {} x{} reduced the holding to qty {}",
                                order.name,
                                order.qty.value(),
                                holding.qty
                            );
                        }
                    }
                }
            },
        }

        Ok(record)
    }
}

fn to_domain(rec: &HoldingRecord) -> Holding {
    Holding {
        name: rec.name.clone(),
        qty: rec.qty,
        avg: rec.avg,
        price: rec.price,
        net: rec.net.clone(),
        day: rec.day.clone(),
    }
}

fn generate_id(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    format!("{}_{}", prefix, nanos)
}
