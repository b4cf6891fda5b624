use crate::domain::errors::ValidationError;

/// Trade price value object
///
/// Prices must be finite and non-negative. Zero is allowed so that
/// free-of-cost instruments can still be recorded.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::MustBeFinite("price"));
        }
        if value < 0.0 {
            return Err(ValidationError::MustBeNonNegative("price"));
        }
        Ok(Price(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_new_valid() {
        let price = Price::new(345.65);
        assert!(price.is_ok());
        assert_eq!(price.unwrap().value(), 345.65);
    }

    #[test]
    fn test_price_new_zero() {
        let price = Price::new(0.0);
        assert!(price.is_ok());
        assert_eq!(price.unwrap().value(), 0.0);
    }

    #[test]
    fn test_price_new_negative() {
        let price = Price::new(-10.0);
        assert!(price.is_err());
        assert_eq!(
            price.unwrap_err(),
            ValidationError::MustBeNonNegative("price")
        );
    }

    #[test]
    fn test_price_new_nan() {
        let price = Price::new(f64::NAN);
        assert!(price.is_err());
        assert_eq!(price.unwrap_err(), ValidationError::MustBeFinite("price"));
    }

    #[test]
    fn test_price_display() {
        let price = Price::new(1555.5).unwrap();
        assert_eq!(price.to_string(), "1555.50");
    }
}
