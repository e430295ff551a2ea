//! CatalogGame - any game variant, as held by a store catalog

use std::fmt;

use rust_decimal::Decimal;

use super::{Game, PremiumGame};
use crate::capabilities::CatalogItem;
use crate::error::DomainError;
use crate::value_objects::{Category, GameTitle, Money};
use crate::{GameId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogGame {
    Standard(Game),
    Premium(PremiumGame),
}

impl CatalogGame {
    /// Name of the concrete variant, e.g. `"PremiumGame"`.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogGame::Standard(_) => "Game",
            CatalogGame::Premium(_) => "PremiumGame",
        }
    }

    fn item(&self) -> &dyn CatalogItem {
        match self {
            CatalogGame::Standard(game) => game,
            CatalogGame::Premium(game) => game,
        }
    }

    fn item_mut(&mut self) -> &mut dyn CatalogItem {
        match self {
            CatalogGame::Standard(game) => game,
            CatalogGame::Premium(game) => game,
        }
    }
}

impl CatalogItem for CatalogGame {
    fn id(&self) -> GameId {
        self.item().id()
    }

    fn title(&self) -> &GameTitle {
        self.item().title()
    }

    fn price(&self) -> Money {
        self.item().price()
    }

    fn category(&self) -> &Category {
        self.item().category()
    }

    fn owners(&self) -> &[UserId] {
        self.item().owners()
    }

    fn exclusive_content(&self) -> Option<bool> {
        self.item().exclusive_content()
    }

    fn add_owner(&mut self, user_id: UserId) {
        self.item_mut().add_owner(user_id);
    }

    fn apply_discount(&mut self, rate: Decimal) -> Result<Money, DomainError> {
        self.item_mut().apply_discount(rate)
    }
}

impl fmt::Display for CatalogGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogGame::Standard(game) => fmt::Display::fmt(game, f),
            CatalogGame::Premium(game) => fmt::Display::fmt(game, f),
        }
    }
}

impl From<Game> for CatalogGame {
    fn from(game: Game) -> Self {
        CatalogGame::Standard(game)
    }
}

impl From<PremiumGame> for CatalogGame {
    fn from(game: PremiumGame) -> Self {
        CatalogGame::Premium(game)
    }
}
