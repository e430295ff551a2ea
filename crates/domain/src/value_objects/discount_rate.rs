//! Discount rate value object

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A discount rate strictly inside the open interval (0, 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct DiscountRate(Decimal);

impl DiscountRate {
    /// Create a validated discount rate.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDiscount` unless `0 < rate < 1`.
    pub fn new(rate: Decimal) -> Result<Self, DomainError> {
        if rate > Decimal::ZERO && rate < Decimal::ONE {
            Ok(Self(rate))
        } else {
            Err(DomainError::invalid_discount(rate))
        }
    }

    #[inline]
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The rate expressed as a percentage, e.g. `15` for `0.15`.
    pub fn as_percent(&self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for DiscountRate {
    type Error = DomainError;

    fn try_from(rate: Decimal) -> Result<Self, Self::Error> {
        Self::new(rate)
    }
}

impl From<DiscountRate> for Decimal {
    fn from(rate: DiscountRate) -> Decimal {
        rate.0
    }
}
