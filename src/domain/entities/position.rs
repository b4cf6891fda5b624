/// Read-only daily trading view of one instrument
///
/// Positions are served to the dashboard as-is and are never mutated by
/// the order flow. The stored loss flag is derived from `pnl()` when a
/// position row is seeded.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub product: String,
    pub name: String,
    pub qty: f64,
    pub avg: f64,
    pub price: f64,
    pub net: String,
    pub day: String,
}

impl Position {
    /// Mark-to-market value of the position
    pub fn current_value(&self) -> f64 {
        self.price * self.qty
    }

    /// Unrealized P&L against the average cost
    pub fn pnl(&self) -> f64 {
        self.current_value() - self.avg * self.qty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_pnl() {
        let pos = Position {
            product: "CNC".to_string(),
            name: "EVEREADY".to_string(),
            qty: 2.0,
            avg: 316.27,
            price: 312.35,
            net: "+0.58%".to_string(),
            day: "-1.24%".to_string(),
        };

        assert!((pos.current_value() - 624.70).abs() < 1e-9);
        assert!((pos.pnl() - (-7.84)).abs() < 1e-9);
    }

    #[test]
    fn test_position_pnl_positive() {
        let pos = Position {
            product: "MIS".to_string(),
            name: "SGBMAY29".to_string(),
            qty: 2.0,
            avg: 4727.0,
            price: 4731.0,
            net: "+0.08%".to_string(),
            day: "+0.08%".to_string(),
        };

        assert!(pos.pnl() > 0.0);
    }
}
