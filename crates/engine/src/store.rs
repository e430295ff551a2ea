//! Game store - aggregate root over the catalog and the user registry.
//!
//! The store is the only place purchases happen. Games and users are moved
//! into the store on registration and wrapped with the store's call log, so
//! every operation the purchase workflow performs on them is recorded.

use std::fmt;
use std::sync::Arc;

use storefront_domain::purchase::purchase;
use storefront_domain::{
    CatalogGame, CatalogItem, CounterRegistry, Customer, DomainError, GameId, PaymentMethod,
    StoreName, Transaction, UserAccount, UserId,
};

use crate::infrastructure::ports::{CallLogPort, ClockPort};
use crate::interceptor::{call_args, sealed, Instrument, Instrumented, Observable};

/// Operations a storefront exposes to its clients.
pub trait Storefront {
    // =========================================================================
    // Accessors
    // =========================================================================

    fn name(&self) -> &StoreName;

    fn game(&self, id: GameId) -> Option<&Instrumented<CatalogGame>>;

    fn game_mut(&mut self, id: GameId) -> Option<&mut Instrumented<CatalogGame>>;

    fn user(&self, id: UserId) -> Option<&Instrumented<UserAccount>>;

    fn user_mut(&mut self, id: UserId) -> Option<&mut Instrumented<UserAccount>>;

    fn games_len(&self) -> usize;

    fn users_len(&self) -> usize;

    // =========================================================================
    // Operations
    // =========================================================================

    /// Append a game to the catalog.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if a game with the same ID is
    /// already listed.
    fn add_game(&mut self, game: CatalogGame) -> Result<GameId, DomainError>;

    /// Append a user to the registry.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if a user with the same ID is
    /// already registered.
    fn register_user(&mut self, user: UserAccount) -> Result<UserId, DomainError>;

    /// Display form of every listed game, in catalog order.
    fn list_games(&self) -> Vec<String>;

    /// Display form of every registered user, in registration order.
    fn list_users(&self) -> Vec<String>;

    /// Sell a listed game to a registered user from their wallet.
    ///
    /// Either the wallet is charged the game's price, the user is recorded
    /// as an owner and a `Wallet` transaction is returned, or nothing
    /// changes and an error is returned.
    ///
    /// # Errors
    ///
    /// - `DomainError::NotFound` if either ID is not in this store
    /// - `DomainError::InsufficientFunds` if the wallet does not cover the price
    fn purchase_game(&mut self, user_id: UserId, game_id: GameId)
        -> Result<Transaction, DomainError>;
}

// =============================================================================
// GameStore
// =============================================================================

pub struct GameStore {
    name: StoreName,
    catalog: Vec<Instrumented<CatalogGame>>,
    registry: Vec<Instrumented<UserAccount>>,
    call_log: Arc<dyn CallLogPort>,
    counters: Arc<CounterRegistry>,
    clock: Arc<dyn ClockPort>,
}

impl GameStore {
    pub fn new(
        name: StoreName,
        call_log: Arc<dyn CallLogPort>,
        counters: Arc<CounterRegistry>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            name,
            catalog: Vec::new(),
            registry: Vec::new(),
            call_log,
            counters,
            clock,
        }
    }
}

impl Storefront for GameStore {
    fn name(&self) -> &StoreName {
        &self.name
    }

    fn game(&self, id: GameId) -> Option<&Instrumented<CatalogGame>> {
        self.catalog.iter().find(|game| game.id() == id)
    }

    fn game_mut(&mut self, id: GameId) -> Option<&mut Instrumented<CatalogGame>> {
        self.catalog.iter_mut().find(|game| game.id() == id)
    }

    fn user(&self, id: UserId) -> Option<&Instrumented<UserAccount>> {
        self.registry.iter().find(|user| user.id() == id)
    }

    fn user_mut(&mut self, id: UserId) -> Option<&mut Instrumented<UserAccount>> {
        self.registry.iter_mut().find(|user| user.id() == id)
    }

    fn games_len(&self) -> usize {
        self.catalog.len()
    }

    fn users_len(&self) -> usize {
        self.registry.len()
    }

    fn add_game(&mut self, game: CatalogGame) -> Result<GameId, DomainError> {
        let id = game.id();
        if self.game(id).is_some() {
            return Err(DomainError::validation(format!(
                "Game {} is already listed in {}",
                id, self.name
            )));
        }
        tracing::debug!(store = %self.name, game_id = %id, title = %game.title(), "Game listed");
        self.catalog.push(game.instrument(&self.call_log));
        Ok(id)
    }

    fn register_user(&mut self, user: UserAccount) -> Result<UserId, DomainError> {
        let id = user.id();
        if self.user(id).is_some() {
            return Err(DomainError::validation(format!(
                "User {} is already registered in {}",
                id, self.name
            )));
        }
        tracing::debug!(store = %self.name, user_id = %id, username = %user.username(), "User registered");
        self.registry.push(user.instrument(&self.call_log));
        Ok(id)
    }

    fn list_games(&self) -> Vec<String> {
        self.catalog.iter().map(ToString::to_string).collect()
    }

    fn list_users(&self) -> Vec<String> {
        self.registry.iter().map(ToString::to_string).collect()
    }

    fn purchase_game(
        &mut self,
        user_id: UserId,
        game_id: GameId,
    ) -> Result<Transaction, DomainError> {
        // Resolve both sides before touching either.
        let user = self
            .registry
            .iter_mut()
            .find(|user| user.id() == user_id)
            .ok_or_else(|| DomainError::not_found("User", user_id.to_string()))?;
        let game = self
            .catalog
            .iter_mut()
            .find(|game| game.id() == game_id)
            .ok_or_else(|| DomainError::not_found("Game", game_id.to_string()))?;

        match purchase(
            user,
            game,
            PaymentMethod::Wallet,
            self.clock.now(),
            &self.counters,
        ) {
            Ok(transaction) => {
                tracing::info!(
                    store = %self.name,
                    transaction_id = %transaction.id(),
                    username = %transaction.username(),
                    game = %transaction.game_title(),
                    amount = %transaction.amount(),
                    "Purchase completed"
                );
                Ok(transaction)
            }
            Err(err) => {
                tracing::warn!(
                    store = %self.name,
                    username = %user.username(),
                    game = %game.title(),
                    error = %err,
                    "Purchase rejected"
                );
                Err(err)
            }
        }
    }
}

impl fmt::Display for GameStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Game Store: {}", self.name)
    }
}

impl sealed::Sealed for GameStore {}

impl Observable for GameStore {
    fn entity_kind(&self) -> &'static str {
        "GameStore"
    }
}

// =============================================================================
// Instrumented storefront
// =============================================================================

impl<T: Storefront + Observable> Storefront for Instrumented<T> {
    fn name(&self) -> &StoreName {
        self.inner().name()
    }

    fn game(&self, id: GameId) -> Option<&Instrumented<CatalogGame>> {
        self.inner().game(id)
    }

    fn game_mut(&mut self, id: GameId) -> Option<&mut Instrumented<CatalogGame>> {
        self.inner_mut().game_mut(id)
    }

    fn user(&self, id: UserId) -> Option<&Instrumented<UserAccount>> {
        self.inner().user(id)
    }

    fn user_mut(&mut self, id: UserId) -> Option<&mut Instrumented<UserAccount>> {
        self.inner_mut().user_mut(id)
    }

    fn games_len(&self) -> usize {
        self.inner().games_len()
    }

    fn users_len(&self) -> usize {
        self.inner().users_len()
    }

    fn add_game(&mut self, game: CatalogGame) -> Result<GameId, DomainError> {
        self.intercept_mut("add_game", call_args![game], |store| store.add_game(game))
    }

    fn register_user(&mut self, user: UserAccount) -> Result<UserId, DomainError> {
        self.intercept_mut("register_user", call_args![user], |store| {
            store.register_user(user)
        })
    }

    fn list_games(&self) -> Vec<String> {
        self.intercept("list_games", call_args![], |store| store.list_games())
    }

    fn list_users(&self) -> Vec<String> {
        self.intercept("list_users", call_args![], |store| store.list_users())
    }

    fn purchase_game(
        &mut self,
        user_id: UserId,
        game_id: GameId,
    ) -> Result<Transaction, DomainError> {
        self.intercept_mut("purchase_game", call_args![user_id, game_id], |store| {
            store.purchase_game(user_id, game_id)
        })
    }
}
