//! Payment method labels
//!
//! A payment method is an opaque label attached to a customer or a
//! transaction. No payment processing happens behind it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Store wallet balance (used by every store purchase)
    Wallet,
    Card,
    PayPal,
    BankTransfer,
}

impl PaymentMethod {
    pub fn all() -> &'static [PaymentMethod] {
        &[
            PaymentMethod::Wallet,
            PaymentMethod::Card,
            PaymentMethod::PayPal,
            PaymentMethod::BankTransfer,
        ]
    }

    /// The bare label, e.g. `"PayPal"`.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Wallet => "Wallet",
            PaymentMethod::Card => "Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Payment Method: {}", self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "wallet" => Ok(PaymentMethod::Wallet),
            "card" | "creditcard" => Ok(PaymentMethod::Card),
            "paypal" => Ok(PaymentMethod::PayPal),
            "banktransfer" => Ok(PaymentMethod::BankTransfer),
            _ => Err(DomainError::parse(format!(
                "Unknown payment method: '{}'. Valid values: wallet, card, paypal, bank transfer",
                s
            ))),
        }
    }
}
