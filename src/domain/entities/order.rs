use crate::domain::errors::ValidationError;
use crate::domain::value_objects::{price::Price, quantity::Quantity};

/// BUY adds to a holding, SELL reduces it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderMode {
    Buy,
    Sell,
}

impl OrderMode {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "BUY" => Ok(OrderMode::Buy),
            "SELL" => Ok(OrderMode::Sell),
            other => Err(ValidationError::InvalidMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for OrderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderMode::Buy => write!(f, "BUY"),
            OrderMode::Sell => write!(f, "SELL"),
        }
    }
}

/// A single discrete buy/sell execution record
///
/// Orders are append-only and immutable once placed.
#[derive(Debug, Clone)]
pub struct Order {
    pub name: String,
    pub qty: Quantity,
    pub price: Price,
    pub mode: OrderMode,
}

impl Order {
    pub fn new(name: String, qty: f64, price: f64, mode: OrderMode) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let qty = Quantity::new(qty)?;
        let price = Price::new(price)?;

        Ok(Order {
            name,
            qty,
            price,
            mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_new_buy() {
        let order = Order::new("INFY".to_string(), 10.0, 1555.45, OrderMode::Buy);
        assert!(order.is_ok());
        let o = order.unwrap();
        assert_eq!(o.name, "INFY");
        assert_eq!(o.qty.value(), 10.0);
        assert_eq!(o.price.value(), 1555.45);
        assert_eq!(o.mode, OrderMode::Buy);
    }

    #[test]
    fn test_order_new_empty_name() {
        let order = Order::new("  ".to_string(), 10.0, 1555.45, OrderMode::Sell);
        assert!(order.is_err());
        assert_eq!(order.unwrap_err(), ValidationError::EmptyName);
    }

    #[test]
    fn test_order_new_non_positive_qty() {
        let order = Order::new("INFY".to_string(), 0.0, 1555.45, OrderMode::Buy);
        assert!(order.is_err());
        assert_eq!(order.unwrap_err(), ValidationError::MustBePositive("qty"));
    }

    #[test]
    fn test_order_new_negative_price() {
        let order = Order::new("INFY".to_string(), 10.0, -1.0, OrderMode::Buy);
        assert!(order.is_err());
        assert_eq!(
            order.unwrap_err(),
            ValidationError::MustBeNonNegative("price")
        );
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(OrderMode::parse("BUY").unwrap(), OrderMode::Buy);
        assert_eq!(OrderMode::parse("SELL").unwrap(), OrderMode::Sell);
        assert!(OrderMode::parse("buy").is_err());
        assert!(OrderMode::parse("HOLD").is_err());
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(OrderMode::Buy.to_string(), "BUY");
        assert_eq!(OrderMode::Sell.to_string(), "SELL");
    }
}
