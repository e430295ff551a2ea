//! Game entity - a priced catalog listing with an owner list
//!
//! # Invariants
//!
//! - `price` is never negative (enforced by `Money`)
//! - a discount only applies for rates strictly inside (0, 1)

use std::fmt;

use rust_decimal::Decimal;

use crate::capabilities::CatalogItem;
use crate::counters::CounterRegistry;
use crate::error::DomainError;
use crate::value_objects::{Category, DiscountRate, GameTitle, Money};
use crate::{GameId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    id: GameId,
    title: GameTitle,
    price: Money,
    category: Category,
    owners: Vec<UserId>,
}

impl Game {
    /// Create a game and count it in `counters`.
    pub fn new(
        title: GameTitle,
        price: Money,
        category: Category,
        counters: &CounterRegistry,
    ) -> Self {
        counters.record_game();
        Self {
            id: GameId::new(),
            title,
            price,
            category,
            owners: Vec::new(),
        }
    }

    /// Set the game's ID (used when an identity is assigned externally).
    pub fn with_id(mut self, id: GameId) -> Self {
        self.id = id;
        self
    }

    /// Number of ownership records.
    pub fn owner_count(&self) -> usize {
        self.owners.len()
    }
}

impl CatalogItem for Game {
    #[inline]
    fn id(&self) -> GameId {
        self.id
    }

    #[inline]
    fn title(&self) -> &GameTitle {
        &self.title
    }

    #[inline]
    fn price(&self) -> Money {
        self.price
    }

    #[inline]
    fn category(&self) -> &Category {
        &self.category
    }

    #[inline]
    fn owners(&self) -> &[UserId] {
        &self.owners
    }

    fn add_owner(&mut self, user_id: UserId) {
        self.owners.push(user_id);
    }

    fn apply_discount(&mut self, rate: Decimal) -> Result<Money, DomainError> {
        let rate = DiscountRate::new(rate)?;
        self.price = self.price.discounted(rate);
        Ok(self.price)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Game: {}, Price: {}$, Category: {}",
            self.title, self.price, self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_test_game(counters: &CounterRegistry, price: Decimal) -> Game {
        Game::new(
            GameTitle::new("Cyberpunk 2077").unwrap(),
            Money::new(price).unwrap(),
            Category::new("RPG").unwrap(),
            counters,
        )
    }

    mod constructor {
        use super::*;

        #[test]
        fn new_counts_the_game() {
            let counters = CounterRegistry::new();
            let game = create_test_game(&counters, dec!(60));

            assert_eq!(counters.total_games_count(), 1);
            assert_eq!(game.title().as_str(), "Cyberpunk 2077");
            assert!(game.owners().is_empty());
            assert!(game.exclusive_content().is_none());
        }

        #[test]
        fn display() {
            let counters = CounterRegistry::new();
            let game = create_test_game(&counters, dec!(60));
            assert_eq!(
                game.to_string(),
                "Game: Cyberpunk 2077, Price: 60.00$, Category: RPG"
            );
        }
    }

    mod discount {
        use super::*;

        #[test]
        fn valid_rate_multiplies_price() {
            let counters = CounterRegistry::new();
            let mut game = create_test_game(&counters, dec!(60));

            let new_price = game.apply_discount(dec!(0.2)).unwrap();

            assert_eq!(new_price, Money::new(dec!(48)).unwrap());
            assert_eq!(game.price(), new_price);
        }

        #[test]
        fn discounts_compound() {
            let counters = CounterRegistry::new();
            let mut game = create_test_game(&counters, dec!(100));

            game.apply_discount(dec!(0.5)).unwrap();
            game.apply_discount(dec!(0.5)).unwrap();

            assert_eq!(game.price(), Money::new(dec!(25)).unwrap());
        }

        #[test]
        fn out_of_range_rates_leave_price_unchanged() {
            let counters = CounterRegistry::new();
            let mut game = create_test_game(&counters, dec!(60));

            for rate in [dec!(0), dec!(1), dec!(-0.2), dec!(1.5)] {
                let err = game.apply_discount(rate).unwrap_err();
                assert_eq!(err, DomainError::InvalidDiscount { rate });
                assert_eq!(game.price(), Money::new(dec!(60)).unwrap());
            }
        }
    }

    mod ownership {
        use super::*;

        #[test]
        fn owners_keep_purchase_order() {
            let counters = CounterRegistry::new();
            let mut game = create_test_game(&counters, dec!(60));
            let first = UserId::new();
            let second = UserId::new();

            game.add_owner(first);
            game.add_owner(second);

            assert_eq!(game.owners(), &[first, second]);
            assert_eq!(game.owner_count(), 2);
        }
    }
}
