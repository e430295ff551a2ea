//! Process-wide construction counters
//!
//! One registry is created by the composition root and shared (usually via
//! `Arc`) with everything that constructs users, games or transactions.
//! Counters only ever go up: entities are never retired in this model.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Monotonic counts of constructed users, games and transactions
#[derive(Debug, Default)]
pub struct CounterRegistry {
    users: AtomicU64,
    games: AtomicU64,
    transactions: AtomicU64,
}

/// Point-in-time copy of a [`CounterRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterSnapshot {
    pub users: u64,
    pub games: u64,
    pub transactions: u64,
}

impl CounterRegistry {
    pub const fn new() -> Self {
        Self {
            users: AtomicU64::new(0),
            games: AtomicU64::new(0),
            transactions: AtomicU64::new(0),
        }
    }

    /// Number of users constructed so far, across every user variant.
    pub fn total_users_count(&self) -> u64 {
        self.users.load(Ordering::SeqCst)
    }

    /// Number of games constructed so far, premium games included.
    pub fn total_games_count(&self) -> u64 {
        self.games.load(Ordering::SeqCst)
    }

    /// Number of transactions produced by successful purchases.
    pub fn total_transactions_count(&self) -> u64 {
        self.transactions.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            users: self.total_users_count(),
            games: self.total_games_count(),
            transactions: self.total_transactions_count(),
        }
    }

    pub(crate) fn record_user(&self) {
        self.users.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn record_game(&self) {
        self.games.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn record_transaction(&self) {
        self.transactions.fetch_add(1, Ordering::SeqCst);
    }
}
