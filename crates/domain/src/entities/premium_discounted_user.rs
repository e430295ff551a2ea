//! PremiumDiscountedUser - a premium customer who also carries a member discount
//!
//! Composes two independent capabilities:
//! - the premium customer state ([`PremiumUser`]: identity, wallet, membership)
//! - the discount state ([`Discount`]: rate)
//!
//! Each is initialized from its own explicit arguments. Customer operations
//! are forwarded to the premium part, discount operations to the discount
//! part; nothing is resolved implicitly.

use std::fmt;

use rust_decimal::Decimal;

use super::PremiumUser;
use crate::capabilities::{Customer, Discount, DiscountCapability};
use crate::counters::CounterRegistry;
use crate::error::DomainError;
use crate::value_objects::{
    Country, DiscountRate, Email, MembershipLevel, Money, PaymentMethod, Username,
};
use crate::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct PremiumDiscountedUser {
    premium: PremiumUser,
    discount: Discount,
}

impl PremiumDiscountedUser {
    /// Create a premium user with a member discount.
    ///
    /// The rate is validated before anything is constructed, so a rejected
    /// rate leaves the user counter untouched.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDiscount` unless `0 < discount_rate < 1`.
    pub fn new(
        username: Username,
        email: Email,
        country: Country,
        wallet_balance: Money,
        membership_level: MembershipLevel,
        discount_rate: Decimal,
        counters: &CounterRegistry,
    ) -> Result<Self, DomainError> {
        let discount = Discount::new(discount_rate)?;
        let premium = PremiumUser::new(
            username,
            email,
            country,
            wallet_balance,
            membership_level,
            counters,
        );
        Ok(Self { premium, discount })
    }

    pub fn premium(&self) -> &PremiumUser {
        &self.premium
    }
}

impl Customer for PremiumDiscountedUser {
    fn id(&self) -> UserId {
        self.premium.id()
    }

    fn username(&self) -> &Username {
        self.premium.username()
    }

    fn email(&self) -> &Email {
        self.premium.email()
    }

    fn country(&self) -> &Country {
        self.premium.country()
    }

    fn wallet_balance(&self) -> Money {
        self.premium.wallet_balance()
    }

    fn payment_methods(&self) -> &[PaymentMethod] {
        self.premium.payment_methods()
    }

    fn membership_level(&self) -> Option<MembershipLevel> {
        self.premium.membership_level()
    }

    fn discount(&self) -> Option<Discount> {
        Some(self.discount)
    }

    fn add_payment_method(&mut self, method: PaymentMethod) {
        self.premium.add_payment_method(method);
    }

    fn view_payment_methods(&self) -> Vec<String> {
        self.premium.view_payment_methods()
    }

    fn check_funds(&self, amount: Money) -> bool {
        self.premium.check_funds(amount)
    }

    fn deduct_funds(&mut self, amount: Money) -> Result<(), DomainError> {
        self.premium.deduct_funds(amount)
    }

    fn set_data(&mut self, username: Username, wallet_balance: Money) {
        self.premium.set_data(username, wallet_balance);
    }
}

impl DiscountCapability for PremiumDiscountedUser {
    fn discount_rate(&self) -> DiscountRate {
        self.discount.discount_rate()
    }

    fn apply_discount(&self, price: Money) -> Money {
        self.discount.apply_discount(price)
    }
}

impl fmt::Display for PremiumDiscountedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Premium Discounted User: {}, Level: {}, Discount: {}%",
            self.premium.username(),
            self.premium.level(),
            self.discount.discount_rate().as_percent()
        )
    }
}
