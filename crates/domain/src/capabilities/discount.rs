use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DiscountCapability;
use crate::error::DomainError;
use crate::value_objects::DiscountRate;

/// Standalone discount capability holding a validated rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    discount_rate: DiscountRate,
}

impl Discount {
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDiscount` unless `0 < rate < 1`.
    pub fn new(rate: Decimal) -> Result<Self, DomainError> {
        DiscountRate::new(rate).map(Self::from_rate)
    }

    pub fn from_rate(discount_rate: DiscountRate) -> Self {
        Self { discount_rate }
    }
}

impl DiscountCapability for Discount {
    fn discount_rate(&self) -> DiscountRate {
        self.discount_rate
    }
}
