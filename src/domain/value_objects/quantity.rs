use crate::domain::errors::ValidationError;

/// Order fill quantity value object
///
/// Quantities on orders must be finite and strictly positive. A holding's
/// resting quantity is plain arithmetic on the entity and can transiently
/// go negative on an oversell, so it does not use this type.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Quantity(f64);

impl Quantity {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::MustBeFinite("qty"));
        }
        if value <= 0.0 {
            return Err(ValidationError::MustBePositive("qty"));
        }
        Ok(Quantity(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_new_valid() {
        let qty = Quantity::new(100.0);
        assert!(qty.is_ok());
        assert_eq!(qty.unwrap().value(), 100.0);
    }

    #[test]
    fn test_quantity_new_zero() {
        let qty = Quantity::new(0.0);
        assert!(qty.is_err());
        assert_eq!(qty.unwrap_err(), ValidationError::MustBePositive("qty"));
    }

    #[test]
    fn test_quantity_new_negative() {
        let qty = Quantity::new(-5.0);
        assert!(qty.is_err());
        assert_eq!(qty.unwrap_err(), ValidationError::MustBePositive("qty"));
    }

    #[test]
    fn test_quantity_new_infinite() {
        let qty = Quantity::new(f64::INFINITY);
        assert!(qty.is_err());
        assert_eq!(qty.unwrap_err(), ValidationError::MustBeFinite("qty"));
    }
}
