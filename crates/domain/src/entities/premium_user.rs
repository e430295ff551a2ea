//! PremiumUser - a customer carrying a membership tier
//!
//! Embeds a [`User`] and forwards every customer operation to it.

use std::fmt;

use super::User;
use crate::capabilities::Customer;
use crate::counters::CounterRegistry;
use crate::error::DomainError;
use crate::value_objects::{Country, Email, MembershipLevel, Money, PaymentMethod, Username};
use crate::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct PremiumUser {
    user: User,
    membership_level: MembershipLevel,
}

impl PremiumUser {
    /// Create a premium user. Counted once, as a user.
    pub fn new(
        username: Username,
        email: Email,
        country: Country,
        wallet_balance: Money,
        membership_level: MembershipLevel,
        counters: &CounterRegistry,
    ) -> Self {
        Self {
            user: User::new(username, email, country, wallet_balance, counters),
            membership_level,
        }
    }

    /// The embedded base customer.
    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn level(&self) -> MembershipLevel {
        self.membership_level
    }
}

impl Customer for PremiumUser {
    fn id(&self) -> UserId {
        self.user.id()
    }

    fn username(&self) -> &Username {
        self.user.username()
    }

    fn email(&self) -> &Email {
        self.user.email()
    }

    fn country(&self) -> &Country {
        self.user.country()
    }

    fn wallet_balance(&self) -> Money {
        self.user.wallet_balance()
    }

    fn payment_methods(&self) -> &[PaymentMethod] {
        self.user.payment_methods()
    }

    fn membership_level(&self) -> Option<MembershipLevel> {
        Some(self.membership_level)
    }

    fn add_payment_method(&mut self, method: PaymentMethod) {
        self.user.add_payment_method(method);
    }

    fn view_payment_methods(&self) -> Vec<String> {
        self.user.view_payment_methods()
    }

    fn check_funds(&self, amount: Money) -> bool {
        self.user.check_funds(amount)
    }

    fn deduct_funds(&mut self, amount: Money) -> Result<(), DomainError> {
        self.user.deduct_funds(amount)
    }

    fn set_data(&mut self, username: Username, wallet_balance: Money) {
        self.user.set_data(username, wallet_balance);
    }
}

impl fmt::Display for PremiumUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Premium User: {}, Level: {}, Wallet: {}$",
            self.user.username(),
            self.membership_level,
            self.user.wallet_balance()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_premium(counters: &CounterRegistry) -> PremiumUser {
        PremiumUser::new(
            Username::new("elite_gamer").unwrap(),
            Email::new("elite@mail.com").unwrap(),
            Country::new("Canada").unwrap(),
            Money::new(dec!(100)).unwrap(),
            MembershipLevel::Gold,
            counters,
        )
    }

    #[test]
    fn construction_counts_one_user() {
        let counters = CounterRegistry::new();
        let premium = create_premium(&counters);

        assert_eq!(counters.total_users_count(), 1);
        assert_eq!(premium.membership_level(), Some(MembershipLevel::Gold));
        assert_eq!(premium.user().username().as_str(), "elite_gamer");
    }

    #[test]
    fn display_is_premium_specific() {
        let counters = CounterRegistry::new();
        let premium = create_premium(&counters);

        assert_eq!(
            premium.to_string(),
            "Premium User: elite_gamer, Level: Gold, Wallet: 100.00$"
        );
    }

    #[test]
    fn wallet_operations_reach_the_embedded_user() {
        let counters = CounterRegistry::new();
        let mut premium = create_premium(&counters);

        premium.deduct_funds(Money::new(dec!(20)).unwrap()).unwrap();
        assert_eq!(premium.wallet_balance(), Money::new(dec!(80)).unwrap());
        assert_eq!(premium.user().wallet_balance(), Money::new(dec!(80)).unwrap());

        premium.add_payment_method(PaymentMethod::PayPal);
        assert_eq!(premium.view_payment_methods(), vec!["Payment Method: PayPal"]);
    }
}
