//! Capability traits - independently composable bundles of behavior
//!
//! Entity variants are assembled from capabilities rather than an
//! inheritance chain. Each variant implements the traits for the
//! capabilities it carries and delegates explicitly to the embedded state
//! that owns them.
//!
//! | Capability | Trait | Carried by |
//! |------------|-------|------------|
//! | Wallet + identity | [`Customer`] | every user variant |
//! | Catalog listing | [`CatalogItem`] | every game variant |
//! | Member discount | [`DiscountCapability`] | `Discount`, `PremiumDiscountedUser` |
//!
//! `CatalogItem::apply_discount` (mutates a game's price) and
//! `DiscountCapability::apply_discount` (pure price transform) share a name
//! but live on different traits and are never implemented by the same type.

mod discount;

pub use discount::Discount;

use rust_decimal::Decimal;

use crate::error::DomainError;
use crate::value_objects::{
    Category, Country, DiscountRate, Email, GameTitle, MembershipLevel, Money, PaymentMethod,
    Username,
};
use crate::{GameId, UserId};

/// A store customer: identity, wallet, and payment methods.
pub trait Customer {
    // =========================================================================
    // Accessors
    // =========================================================================

    fn id(&self) -> UserId;

    fn username(&self) -> &Username;

    fn email(&self) -> &Email;

    fn country(&self) -> &Country;

    fn wallet_balance(&self) -> Money;

    fn payment_methods(&self) -> &[PaymentMethod];

    /// Premium tier, for variants that carry a membership.
    fn membership_level(&self) -> Option<MembershipLevel> {
        None
    }

    /// Member discount, for variants that carry one.
    fn discount(&self) -> Option<Discount> {
        None
    }

    // =========================================================================
    // Operations
    // =========================================================================

    fn add_payment_method(&mut self, method: PaymentMethod);

    /// Display form of every attached payment method, in insertion order.
    fn view_payment_methods(&self) -> Vec<String>;

    /// True iff the wallet balance covers `amount`.
    fn check_funds(&self, amount: Money) -> bool;

    /// Remove `amount` from the wallet.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InsufficientFunds` when `check_funds(amount)` is
    /// false; the balance is left untouched.
    fn deduct_funds(&mut self, amount: Money) -> Result<(), DomainError>;

    /// Overwrite the username and wallet balance.
    fn set_data(&mut self, username: Username, wallet_balance: Money);
}

/// A game listed in a catalog.
pub trait CatalogItem {
    fn id(&self) -> GameId;

    fn title(&self) -> &GameTitle;

    fn price(&self) -> Money;

    fn category(&self) -> &Category;

    /// Users recorded as owners, in purchase order. A user may appear more
    /// than once if they bought the game more than once.
    fn owners(&self) -> &[UserId];

    /// Exclusive-content flag, for premium listings.
    fn exclusive_content(&self) -> Option<bool> {
        None
    }

    fn add_owner(&mut self, user_id: UserId);

    /// Permanently reduce the price to `price × (1 − rate)` and return it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDiscount` unless `0 < rate < 1`; the
    /// price is left untouched.
    fn apply_discount(&mut self, rate: Decimal) -> Result<Money, DomainError>;
}

/// A fixed member discount applied as a pure price transform.
pub trait DiscountCapability {
    fn discount_rate(&self) -> DiscountRate;

    /// Returns `price × (1 − discount_rate)`. Mutates nothing.
    fn apply_discount(&self, price: Money) -> Money {
        price.discounted(self.discount_rate())
    }
}

impl<T: DiscountCapability + ?Sized> DiscountCapability for &T {
    fn discount_rate(&self) -> DiscountRate {
        (**self).discount_rate()
    }

    fn apply_discount(&self, price: Money) -> Money {
        (**self).apply_discount(price)
    }
}
