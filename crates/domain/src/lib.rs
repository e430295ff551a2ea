//! Storefront domain model
//!
//! Customers with wallets, priced catalog games, and the purchases that
//! connect them. Behavior is assembled from capabilities (see
//! [`capabilities`]) rather than an inheritance chain, and every construction
//! is counted in an injected [`CounterRegistry`].
//!
//! This crate performs no I/O and emits no logs.

pub mod capabilities;
pub mod counters;
pub mod entities;
pub mod error;
pub mod ids;
pub mod purchase;
pub mod value_objects;

pub use capabilities::{CatalogItem, Customer, Discount, DiscountCapability};
pub use counters::{CounterRegistry, CounterSnapshot};
pub use entities::{
    CatalogGame, Game, PremiumDiscountedUser, PremiumGame, PremiumUser, Transaction, User,
    UserAccount,
};
pub use error::DomainError;
pub use ids::{GameId, TransactionId, UserId};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    Category, Country, DiscountRate, Email, GameTitle, MembershipLevel, Money, PaymentMethod,
    StoreName, Username,
};
