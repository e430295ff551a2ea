//! User entity - the base customer with identity, wallet and payment methods
//!
//! # Invariants
//!
//! - `wallet_balance` is never negative (enforced by `Money`)
//! - a deduction larger than the balance is rejected, never clamped

use std::fmt;

use crate::capabilities::Customer;
use crate::counters::CounterRegistry;
use crate::error::DomainError;
use crate::value_objects::{Country, Email, Money, PaymentMethod, Username};
use crate::UserId;

/// A standard store customer.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use storefront_domain::{CounterRegistry, Customer, User};
/// use storefront_domain::value_objects::{Country, Email, Money, Username};
///
/// let counters = CounterRegistry::new();
/// let user = User::new(
///     Username::new("player_one").unwrap(),
///     Email::new("player1@mail.com").unwrap(),
///     Country::new("USA").unwrap(),
///     Money::new(Decimal::from(50)).unwrap(),
///     &counters,
/// );
///
/// assert!(user.check_funds(Money::new(Decimal::from(50)).unwrap()));
/// assert_eq!(counters.total_users_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    username: Username,
    email: Email,
    country: Country,
    wallet_balance: Money,
    payment_methods: Vec<PaymentMethod>,
}

impl User {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a user and count it in `counters`.
    pub fn new(
        username: Username,
        email: Email,
        country: Country,
        wallet_balance: Money,
        counters: &CounterRegistry,
    ) -> Self {
        counters.record_user();
        Self {
            id: UserId::new(),
            username,
            email,
            country,
            wallet_balance,
            payment_methods: Vec::new(),
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the user's ID (used when an identity is assigned externally).
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = id;
        self
    }
}

impl Customer for User {
    #[inline]
    fn id(&self) -> UserId {
        self.id
    }

    #[inline]
    fn username(&self) -> &Username {
        &self.username
    }

    #[inline]
    fn email(&self) -> &Email {
        &self.email
    }

    #[inline]
    fn country(&self) -> &Country {
        &self.country
    }

    #[inline]
    fn wallet_balance(&self) -> Money {
        self.wallet_balance
    }

    #[inline]
    fn payment_methods(&self) -> &[PaymentMethod] {
        &self.payment_methods
    }

    fn add_payment_method(&mut self, method: PaymentMethod) {
        self.payment_methods.push(method);
    }

    fn view_payment_methods(&self) -> Vec<String> {
        self.payment_methods.iter().map(ToString::to_string).collect()
    }

    fn check_funds(&self, amount: Money) -> bool {
        self.wallet_balance >= amount
    }

    fn deduct_funds(&mut self, amount: Money) -> Result<(), DomainError> {
        match self.wallet_balance.checked_sub(amount) {
            Some(remaining) => {
                self.wallet_balance = remaining;
                Ok(())
            }
            None => Err(DomainError::insufficient_funds(self.wallet_balance, amount)),
        }
    }

    fn set_data(&mut self, username: Username, wallet_balance: Money) {
        self.username = username;
        self.wallet_balance = wallet_balance;
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User: {}, Email: {}, Country: {}, Wallet: {}$",
            self.username, self.email, self.country, self.wallet_balance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn money(amount: Decimal) -> Money {
        Money::new(amount).unwrap()
    }

    fn create_test_user(counters: &CounterRegistry, balance: Decimal) -> User {
        User::new(
            Username::new("player_one").unwrap(),
            Email::new("player1@mail.com").unwrap(),
            Country::new("USA").unwrap(),
            money(balance),
            counters,
        )
    }

    mod constructor {
        use super::*;

        #[test]
        fn new_counts_the_user() {
            let counters = CounterRegistry::new();
            let user = create_test_user(&counters, dec!(50));

            assert_eq!(counters.total_users_count(), 1);
            assert_eq!(user.username().as_str(), "player_one");
            assert_eq!(user.wallet_balance(), money(dec!(50)));
            assert!(user.payment_methods().is_empty());
            assert!(user.membership_level().is_none());
            assert!(user.discount().is_none());
        }

        #[test]
        fn display_lists_identity_and_wallet() {
            let counters = CounterRegistry::new();
            let user = create_test_user(&counters, dec!(50));

            assert_eq!(
                user.to_string(),
                "User: player_one, Email: player1@mail.com, Country: USA, Wallet: 50.00$"
            );
        }
    }

    mod funds {
        use super::*;

        #[test]
        fn check_funds_is_inclusive() {
            let counters = CounterRegistry::new();
            let user = create_test_user(&counters, dec!(50));

            assert!(user.check_funds(money(dec!(49.99))));
            assert!(user.check_funds(money(dec!(50))));
            assert!(!user.check_funds(money(dec!(50.01))));
        }

        #[test]
        fn deduct_funds_reduces_balance_exactly() {
            let counters = CounterRegistry::new();
            let mut user = create_test_user(&counters, dec!(50));

            user.deduct_funds(money(dec!(48))).unwrap();
            assert_eq!(user.wallet_balance(), money(dec!(2)));
        }

        #[test]
        fn deduct_funds_rejects_overdraw_without_mutation() {
            let counters = CounterRegistry::new();
            let mut user = create_test_user(&counters, dec!(50));

            let err = user.deduct_funds(money(dec!(60))).unwrap_err();
            assert_eq!(
                err,
                DomainError::InsufficientFunds {
                    balance: money(dec!(50)),
                    required: money(dec!(60)),
                }
            );
            assert_eq!(user.wallet_balance(), money(dec!(50)));
        }

        #[test]
        fn deduct_succeeds_iff_check_passes() {
            let counters = CounterRegistry::new();
            for amount in [dec!(0), dec!(25), dec!(50), dec!(50.01), dec!(100)] {
                let mut user = create_test_user(&counters, dec!(50));
                let before = user.wallet_balance();
                let covered = user.check_funds(money(amount));

                let result = user.deduct_funds(money(amount));

                assert_eq!(result.is_ok(), covered, "amount {}", amount);
                if covered {
                    assert_eq!(user.wallet_balance().amount(), before.amount() - amount);
                } else {
                    assert_eq!(user.wallet_balance(), before);
                }
            }
        }
    }

    mod mutation {
        use super::*;

        #[test]
        fn payment_methods_keep_insertion_order() {
            let counters = CounterRegistry::new();
            let mut user = create_test_user(&counters, dec!(50));
            user.add_payment_method(PaymentMethod::PayPal);
            user.add_payment_method(PaymentMethod::Card);

            assert_eq!(
                user.view_payment_methods(),
                vec!["Payment Method: PayPal", "Payment Method: Card"]
            );
        }

        #[test]
        fn set_data_overwrites_username_and_balance() {
            let counters = CounterRegistry::new();
            let mut user = create_test_user(&counters, dec!(50));
            user.set_data(Username::new("renamed").unwrap(), money(dec!(75)));

            assert_eq!(user.username().as_str(), "renamed");
            assert_eq!(user.wallet_balance(), money(dec!(75)));
            assert_eq!(user.email().as_str(), "player1@mail.com");
        }
    }
}
