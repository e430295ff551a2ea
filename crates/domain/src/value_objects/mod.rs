//! Value objects - Immutable objects defined by their attributes

mod discount_rate;
mod membership;
mod money;
mod names;
mod payment_method;

pub use discount_rate::DiscountRate;
pub use membership::MembershipLevel;
pub use money::Money;
pub use names::{Category, Country, Email, GameTitle, StoreName, Username};
pub use payment_method::PaymentMethod;
