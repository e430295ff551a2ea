//! PremiumGame - a catalog listing that may ship exclusive content

use std::fmt;

use rust_decimal::Decimal;

use super::Game;
use crate::capabilities::CatalogItem;
use crate::counters::CounterRegistry;
use crate::error::DomainError;
use crate::value_objects::{Category, GameTitle, Money};
use crate::{GameId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct PremiumGame {
    game: Game,
    exclusive_content: bool,
}

impl PremiumGame {
    /// Create a premium game. Counted once, as a game.
    pub fn new(
        title: GameTitle,
        price: Money,
        category: Category,
        exclusive_content: bool,
        counters: &CounterRegistry,
    ) -> Self {
        Self {
            game: Game::new(title, price, category, counters),
            exclusive_content,
        }
    }

    /// The embedded base listing.
    pub fn game(&self) -> &Game {
        &self.game
    }
}

impl CatalogItem for PremiumGame {
    fn id(&self) -> GameId {
        self.game.id()
    }

    fn title(&self) -> &GameTitle {
        self.game.title()
    }

    fn price(&self) -> Money {
        self.game.price()
    }

    fn category(&self) -> &Category {
        self.game.category()
    }

    fn owners(&self) -> &[UserId] {
        self.game.owners()
    }

    fn exclusive_content(&self) -> Option<bool> {
        Some(self.exclusive_content)
    }

    fn add_owner(&mut self, user_id: UserId) {
        self.game.add_owner(user_id);
    }

    fn apply_discount(&mut self, rate: Decimal) -> Result<Money, DomainError> {
        self.game.apply_discount(rate)
    }
}

impl fmt::Display for PremiumGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let content_status = if self.exclusive_content {
            "with exclusive content"
        } else {
            "without exclusive content"
        };
        write!(
            f,
            "Premium Game: {}, Price: {}$, {}",
            self.game.title(),
            self.game.price(),
            content_status
        )
    }
}
