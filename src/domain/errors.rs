use thiserror::Error;

use crate::persistence::DatabaseError;

/// Validation errors for domain values and order payloads
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing {0} field")]
    MissingField(&'static str),

    #[error("{0} must be finite")]
    MustBeFinite(&'static str),

    #[error("{0} must be non-negative")]
    MustBeNonNegative(&'static str),

    #[error("{0} must be greater than zero")]
    MustBePositive(&'static str),

    #[error("Instrument name must not be empty")]
    EmptyName,

    #[error("Invalid mode '{0}'. Must be 'BUY' or 'SELL'")]
    InvalidMode(String),
}

/// Errors from the order placement flow
///
/// Validation failures and the one business rule ("cannot sell without a
/// holding") map to HTTP 400 at the handler; storage failures map to 500.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("No holding to sell")]
    NoHoldingToSell,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::MissingField("qty").to_string(),
            "Missing qty field"
        );
        assert_eq!(
            ValidationError::InvalidMode("HOLD".to_string()).to_string(),
            "Invalid mode 'HOLD'. Must be 'BUY' or 'SELL'"
        );
    }

    #[test]
    fn test_order_error_from_validation() {
        let err: OrderError = ValidationError::EmptyName.into();
        assert_eq!(err.to_string(), "Instrument name must not be empty");
    }

    #[test]
    fn test_no_holding_to_sell_message() {
        assert_eq!(OrderError::NoHoldingToSell.to_string(), "No holding to sell");
    }
}
