//! Call interception for domain entities.
//!
//! [`Instrumented<T>`] owns an entity and records every operation invoked
//! through it to a [`CallLogPort`] before delegating to the entity. The
//! recorded operation set is explicit: it is exactly the operation half of
//! each capability trait (`Customer`, `CatalogItem`, `DiscountCapability`,
//! `Storefront`). Accessors, `Display` and construction are not recorded.
//!
//! Because the capability impls below are generic over the wrapped type,
//! every entity variant gets the same interception, and a variant never
//! needs to opt in per operation.
//!
//! There is no `Deref` to the inner entity: the only way to reach it
//! uninstrumented is to consume the wrapper with [`Instrumented::into_inner`].
//! `Instrumented<T>` is not itself [`Observable`], so a wrapper can never be
//! wrapped a second time.

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use storefront_domain::{
    CatalogGame, CatalogItem, Category, Country, Customer, Discount, DiscountCapability,
    DiscountRate, DomainError, Email, Game, GameId, GameTitle, MembershipLevel, Money,
    PaymentMethod, PremiumDiscountedUser, PremiumGame, PremiumUser, User, UserAccount, UserId,
    Username,
};

use crate::infrastructure::ports::{CallLogPort, CallRecord};

/// Builds the argument list of a [`CallRecord`], `Debug`-formatting each value.
macro_rules! call_args {
    () => {
        Vec::new()
    };
    ($($arg:expr),+ $(,)?) => {
        vec![$(format!("{:?}", $arg)),+]
    };
}

pub(crate) use call_args;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// An entity whose operations may be intercepted.
///
/// Sealed: implemented for the storefront's entity types and shared
/// references to them, never for [`Instrumented`].
pub trait Observable: sealed::Sealed {
    /// Entity kind written to each [`CallRecord`], e.g. `"PremiumUser"`.
    fn entity_kind(&self) -> &'static str;
}

macro_rules! observable {
    ($($ty:ty => $kind:literal),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Observable for $ty {
                fn entity_kind(&self) -> &'static str {
                    $kind
                }
            }
        )+
    };
}

observable! {
    User => "User",
    PremiumUser => "PremiumUser",
    PremiumDiscountedUser => "PremiumDiscountedUser",
    Game => "Game",
    PremiumGame => "PremiumGame",
    Discount => "Discount",
}

impl sealed::Sealed for UserAccount {}

impl Observable for UserAccount {
    fn entity_kind(&self) -> &'static str {
        self.kind()
    }
}

impl sealed::Sealed for CatalogGame {}

impl Observable for CatalogGame {
    fn entity_kind(&self) -> &'static str {
        self.kind()
    }
}

impl<T: Observable + ?Sized> sealed::Sealed for &T {}

impl<T: Observable + ?Sized> Observable for &T {
    fn entity_kind(&self) -> &'static str {
        (**self).entity_kind()
    }
}

/// Wrap an entity so that its operations are recorded.
pub trait Instrument: Observable + Sized {
    fn instrument(self, call_log: &Arc<dyn CallLogPort>) -> Instrumented<Self> {
        Instrumented::new(self, Arc::clone(call_log))
    }
}

impl<T: Observable> Instrument for T {}

// =============================================================================
// Instrumented
// =============================================================================

/// An entity plus the call log its operations are recorded to.
pub struct Instrumented<T> {
    inner: T,
    call_log: Arc<dyn CallLogPort>,
}

impl<T: Observable> Instrumented<T> {
    pub fn new(inner: T, call_log: Arc<dyn CallLogPort>) -> Self {
        Self { inner, call_log }
    }

    /// Give up interception and return the entity.
    pub fn into_inner(self) -> T {
        self.inner
    }

    // Unrecorded access for accessor passthrough.
    pub(crate) fn inner(&self) -> &T {
        &self.inner
    }

    pub(crate) fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Record `operation`, then run it against the entity.
    ///
    /// The result is returned as-is, errors included.
    pub(crate) fn intercept<R>(
        &self,
        operation: &'static str,
        args: Vec<String>,
        op: impl FnOnce(&T) -> R,
    ) -> R {
        self.call_log
            .record(CallRecord::new(self.inner.entity_kind(), operation, args));
        op(&self.inner)
    }

    pub(crate) fn intercept_mut<R>(
        &mut self,
        operation: &'static str,
        args: Vec<String>,
        op: impl FnOnce(&mut T) -> R,
    ) -> R {
        self.call_log
            .record(CallRecord::new(self.inner.entity_kind(), operation, args));
        op(&mut self.inner)
    }
}

impl Instrumented<UserAccount> {
    /// Instrumented view of the account's member discount, if it has one.
    ///
    /// Calls through the view are recorded to the same call log.
    pub fn member_discount(&self) -> Option<Instrumented<&PremiumDiscountedUser>> {
        self.inner
            .as_premium_discounted()
            .map(|user| Instrumented::new(user, Arc::clone(&self.call_log)))
    }
}

impl<T: fmt::Display> fmt::Display for Instrumented<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl<T: fmt::Debug> fmt::Debug for Instrumented<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instrumented")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Customer
// =============================================================================

impl<T: Customer + Observable> Customer for Instrumented<T> {
    fn id(&self) -> UserId {
        self.inner.id()
    }

    fn username(&self) -> &Username {
        self.inner.username()
    }

    fn email(&self) -> &Email {
        self.inner.email()
    }

    fn country(&self) -> &Country {
        self.inner.country()
    }

    fn wallet_balance(&self) -> Money {
        self.inner.wallet_balance()
    }

    fn payment_methods(&self) -> &[PaymentMethod] {
        self.inner.payment_methods()
    }

    fn membership_level(&self) -> Option<MembershipLevel> {
        self.inner.membership_level()
    }

    fn discount(&self) -> Option<Discount> {
        self.inner.discount()
    }

    fn add_payment_method(&mut self, method: PaymentMethod) {
        self.intercept_mut("add_payment_method", call_args![method], |user| {
            user.add_payment_method(method)
        })
    }

    fn view_payment_methods(&self) -> Vec<String> {
        self.intercept("view_payment_methods", call_args![], |user| {
            user.view_payment_methods()
        })
    }

    fn check_funds(&self, amount: Money) -> bool {
        self.intercept("check_funds", call_args![amount], |user| {
            user.check_funds(amount)
        })
    }

    fn deduct_funds(&mut self, amount: Money) -> Result<(), DomainError> {
        self.intercept_mut("deduct_funds", call_args![amount], |user| {
            user.deduct_funds(amount)
        })
    }

    fn set_data(&mut self, username: Username, wallet_balance: Money) {
        self.intercept_mut("set_data", call_args![username, wallet_balance], |user| {
            user.set_data(username, wallet_balance)
        })
    }
}

// =============================================================================
// CatalogItem
// =============================================================================

impl<T: CatalogItem + Observable> CatalogItem for Instrumented<T> {
    fn id(&self) -> GameId {
        self.inner.id()
    }

    fn title(&self) -> &GameTitle {
        self.inner.title()
    }

    fn price(&self) -> Money {
        self.inner.price()
    }

    fn category(&self) -> &Category {
        self.inner.category()
    }

    fn owners(&self) -> &[UserId] {
        self.inner.owners()
    }

    fn exclusive_content(&self) -> Option<bool> {
        self.inner.exclusive_content()
    }

    fn add_owner(&mut self, user_id: UserId) {
        self.intercept_mut("add_owner", call_args![user_id], |game| {
            game.add_owner(user_id)
        })
    }

    fn apply_discount(&mut self, rate: Decimal) -> Result<Money, DomainError> {
        self.intercept_mut("apply_discount", call_args![rate], |game| {
            game.apply_discount(rate)
        })
    }
}

// =============================================================================
// DiscountCapability
// =============================================================================

impl<T: DiscountCapability + Observable> DiscountCapability for Instrumented<T> {
    fn discount_rate(&self) -> DiscountRate {
        self.inner.discount_rate()
    }

    fn apply_discount(&self, price: Money) -> Money {
        self.intercept("apply_discount", call_args![price], |discount| {
            discount.apply_discount(price)
        })
    }
}
