//! Domain entities - Core business objects with identity

mod account;
mod catalog_game;
mod game;
mod premium_discounted_user;
mod premium_game;
mod premium_user;
mod transaction;
mod user;

pub use account::UserAccount;
pub use catalog_game::CatalogGame;
pub use game::Game;
pub use premium_discounted_user::PremiumDiscountedUser;
pub use premium_game::PremiumGame;
pub use premium_user::PremiumUser;
pub use transaction::Transaction;
pub(crate) use transaction::SaleRecord;
pub use user::User;
