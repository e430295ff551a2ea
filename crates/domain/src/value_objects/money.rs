//! Money value object for wallet balances and prices
//!
//! Amounts are exact decimals and never negative. A deduction that would go
//! below zero is reported as `None` rather than clamped.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::DiscountRate;
use crate::error::DomainError;

/// A non-negative monetary amount
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Create a validated amount.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the amount is negative.
    pub fn new(amount: Decimal) -> Result<Self, DomainError> {
        if amount < Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "Monetary amount cannot be negative, got {}",
                amount
            )));
        }
        Ok(Self(amount))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Subtract `other`, or `None` if the result would be negative.
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        if other.0 > self.0 {
            None
        } else {
            Some(Money(self.0 - other.0))
        }
    }

    /// Returns `self × (1 − rate)`.
    ///
    /// The rate is strictly inside (0, 1), so the result stays non-negative.
    pub fn discounted(self, rate: DiscountRate) -> Money {
        Money(self.0 * (Decimal::ONE - rate.value()))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{:.2}", rounded)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = DomainError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Decimal {
        money.0
    }
}
