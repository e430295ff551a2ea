//! UserAccount - any customer variant, as held by a store registry

use std::fmt;

use super::{PremiumDiscountedUser, PremiumUser, User};
use crate::capabilities::{Customer, Discount};
use crate::error::DomainError;
use crate::value_objects::{Country, Email, MembershipLevel, Money, PaymentMethod, Username};
use crate::UserId;

#[derive(Debug, Clone, PartialEq)]
pub enum UserAccount {
    Standard(User),
    Premium(PremiumUser),
    PremiumDiscounted(PremiumDiscountedUser),
}

impl UserAccount {
    /// Name of the concrete variant, e.g. `"PremiumUser"`.
    pub fn kind(&self) -> &'static str {
        match self {
            UserAccount::Standard(_) => "User",
            UserAccount::Premium(_) => "PremiumUser",
            UserAccount::PremiumDiscounted(_) => "PremiumDiscountedUser",
        }
    }

    pub fn as_premium_discounted(&self) -> Option<&PremiumDiscountedUser> {
        match self {
            UserAccount::PremiumDiscounted(user) => Some(user),
            _ => None,
        }
    }

    fn customer(&self) -> &dyn Customer {
        match self {
            UserAccount::Standard(user) => user,
            UserAccount::Premium(user) => user,
            UserAccount::PremiumDiscounted(user) => user,
        }
    }

    fn customer_mut(&mut self) -> &mut dyn Customer {
        match self {
            UserAccount::Standard(user) => user,
            UserAccount::Premium(user) => user,
            UserAccount::PremiumDiscounted(user) => user,
        }
    }
}

impl Customer for UserAccount {
    fn id(&self) -> UserId {
        self.customer().id()
    }

    fn username(&self) -> &Username {
        self.customer().username()
    }

    fn email(&self) -> &Email {
        self.customer().email()
    }

    fn country(&self) -> &Country {
        self.customer().country()
    }

    fn wallet_balance(&self) -> Money {
        self.customer().wallet_balance()
    }

    fn payment_methods(&self) -> &[PaymentMethod] {
        self.customer().payment_methods()
    }

    fn membership_level(&self) -> Option<MembershipLevel> {
        self.customer().membership_level()
    }

    fn discount(&self) -> Option<Discount> {
        self.customer().discount()
    }

    fn add_payment_method(&mut self, method: PaymentMethod) {
        self.customer_mut().add_payment_method(method);
    }

    fn view_payment_methods(&self) -> Vec<String> {
        self.customer().view_payment_methods()
    }

    fn check_funds(&self, amount: Money) -> bool {
        self.customer().check_funds(amount)
    }

    fn deduct_funds(&mut self, amount: Money) -> Result<(), DomainError> {
        self.customer_mut().deduct_funds(amount)
    }

    fn set_data(&mut self, username: Username, wallet_balance: Money) {
        self.customer_mut().set_data(username, wallet_balance);
    }
}

impl fmt::Display for UserAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAccount::Standard(user) => fmt::Display::fmt(user, f),
            UserAccount::Premium(user) => fmt::Display::fmt(user, f),
            UserAccount::PremiumDiscounted(user) => fmt::Display::fmt(user, f),
        }
    }
}

impl From<User> for UserAccount {
    fn from(user: User) -> Self {
        UserAccount::Standard(user)
    }
}

impl From<PremiumUser> for UserAccount {
    fn from(user: PremiumUser) -> Self {
        UserAccount::Premium(user)
    }
}

impl From<PremiumDiscountedUser> for UserAccount {
    fn from(user: PremiumDiscountedUser) -> Self {
        UserAccount::PremiumDiscounted(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counters::CounterRegistry;
    use rust_decimal_macros::dec;

    fn identity(name: &str) -> (Username, Email, Country, Money) {
        (
            Username::new(name).unwrap(),
            Email::new(format!("{}@mail.com", name)).unwrap(),
            Country::new("Canada").unwrap(),
            Money::new(dec!(100)).unwrap(),
        )
    }

    fn all_variants(counters: &CounterRegistry) -> Vec<UserAccount> {
        let (u, e, c, w) = identity("standard");
        let standard = User::new(u, e, c, w, counters);
        let (u, e, c, w) = identity("premium");
        let premium = PremiumUser::new(u, e, c, w, MembershipLevel::Silver, counters);
        let (u, e, c, w) = identity("discounted");
        let discounted =
            PremiumDiscountedUser::new(u, e, c, w, MembershipLevel::Gold, dec!(0.1), counters)
                .unwrap();
        vec![standard.into(), premium.into(), discounted.into()]
    }

    #[test]
    fn display_is_selected_by_most_specific_variant() {
        let counters = CounterRegistry::new();
        let rendered: Vec<String> = all_variants(&counters)
            .iter()
            .map(ToString::to_string)
            .collect();

        assert!(rendered[0].starts_with("User: standard"));
        assert!(rendered[1].starts_with("Premium User: premium"));
        assert!(rendered[2].starts_with("Premium Discounted User: discounted"));
    }

    #[test]
    fn capabilities_reflect_variant() {
        let counters = CounterRegistry::new();
        let accounts = all_variants(&counters);

        assert_eq!(
            accounts.iter().map(UserAccount::kind).collect::<Vec<_>>(),
            vec!["User", "PremiumUser", "PremiumDiscountedUser"]
        );
        assert!(accounts[0].membership_level().is_none());
        assert_eq!(accounts[1].membership_level(), Some(MembershipLevel::Silver));
        assert!(accounts[1].discount().is_none());
        assert!(accounts[2].discount().is_some());
        assert!(accounts[2].as_premium_discounted().is_some());
        assert!(accounts[0].as_premium_discounted().is_none());
        assert_eq!(counters.total_users_count(), 3);
    }

    #[test]
    fn mutations_forward_to_variant() {
        let counters = CounterRegistry::new();
        for mut account in all_variants(&counters) {
            account.deduct_funds(Money::new(dec!(30)).unwrap()).unwrap();
            assert_eq!(account.wallet_balance(), Money::new(dec!(70)).unwrap());
            assert!(account.deduct_funds(Money::new(dec!(71)).unwrap()).is_err());
        }
    }
}
