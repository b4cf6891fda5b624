use crate::domain::value_objects::{price::Price, quantity::Quantity};

/// Outcome of applying a sell fill to a holding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SellOutcome {
    /// Quantity remains, the holding row is rewritten
    Reduced,
    /// Quantity dropped to zero or below, the holding row is removed
    Closed,
}

/// Aggregate net position in one instrument: quantity plus average cost
///
/// `name` is the unique key. `avg` is the weighted average cost of all
/// buys still held, `price` tracks the last trade price. `net` and `day`
/// are display strings carried through to the dashboard unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
    pub name: String,
    pub qty: f64,
    pub avg: f64,
    pub price: f64,
    pub net: String,
    pub day: String,
}

impl Holding {
    /// Open a holding from the first buy of an instrument
    ///
    /// The average cost of a single fill is its price.
    pub fn open(name: String, qty: Quantity, price: Price) -> Self {
        Holding {
            name,
            qty: qty.value(),
            avg: price.value(),
            price: price.value(),
            net: "0%".to_string(),
            day: "0%".to_string(),
        }
    }

    /// Fold a buy fill into the holding
    ///
    /// Recomputes avg as the weighted average of the existing position and
    /// the new fill, then increments the quantity.
    pub fn apply_buy(&mut self, qty: Quantity, price: Price) {
        let total_qty = self.qty + qty.value();
        self.avg = (self.avg * self.qty + price.value() * qty.value()) / total_qty;
        self.qty = total_qty;
        self.price = price.value();
    }

    /// Apply a sell fill to the holding
    ///
    /// Decrements the quantity and updates the last trade price. An
    /// oversell drives the quantity negative and still closes the holding.
    pub fn apply_sell(&mut self, qty: Quantity, price: Price) -> SellOutcome {
        self.qty -= qty.value();
        self.price = price.value();

        if self.qty <= 0.0 {
            SellOutcome::Closed
        } else {
            SellOutcome::Reduced
        }
    }
}
