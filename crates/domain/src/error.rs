//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! enabling consistent error handling without forcing adapters to use String or anyhow.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::value_objects::Money;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A deduction exceeded the wallet balance
    #[error("Insufficient funds: balance {balance}$, required {required}$")]
    InsufficientFunds { balance: Money, required: Money },

    /// Discount rate outside the open interval (0, 1)
    #[error("Discount must be between 0 and 1, got {rate}")]
    InvalidDiscount { rate: Decimal },
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when domain invariants or constraints are violated:
    /// - Required fields are empty or missing
    /// - Values are outside allowed ranges
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::validation("Username cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an insufficient funds error
    pub fn insufficient_funds(balance: Money, required: Money) -> Self {
        Self::InsufficientFunds { balance, required }
    }

    /// Create an invalid discount error
    pub fn invalid_discount(rate: Decimal) -> Self {
        Self::InvalidDiscount { rate }
    }

    /// Returns true if this error reports a failed funds check.
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("username cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: username cannot be empty");
    }

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("User", "123e4567-e89b-12d3-a456-426614174000");
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(err.to_string().contains("User"));
        assert!(err.to_string().contains("123e4567"));
    }

    #[test]
    fn test_insufficient_funds_error() {
        let balance = Money::new(dec!(50)).unwrap();
        let required = Money::new(dec!(60)).unwrap();
        let err = DomainError::insufficient_funds(balance, required);

        assert!(err.is_insufficient_funds());
        assert_eq!(
            err.to_string(),
            "Insufficient funds: balance 50.00$, required 60.00$"
        );
    }

    #[test]
    fn test_invalid_discount_error() {
        let err = DomainError::invalid_discount(dec!(1.5));
        assert!(matches!(err, DomainError::InvalidDiscount { .. }));
        assert!(!err.is_insufficient_funds());
        assert_eq!(err.to_string(), "Discount must be between 0 and 1, got 1.5");
    }
}
