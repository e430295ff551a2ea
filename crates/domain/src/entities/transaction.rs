//! Transaction - the immutable record of a completed purchase
//!
//! Transactions are produced only by [`crate::purchase::purchase`]; there is
//! no public constructor and no deserializer.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::counters::CounterRegistry;
use crate::value_objects::{GameTitle, Money, PaymentMethod, Username};
use crate::{GameId, TransactionId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    id: TransactionId,
    user_id: UserId,
    username: Username,
    game_id: GameId,
    game_title: GameTitle,
    payment_method: PaymentMethod,
    amount: Money,
    purchased_at: DateTime<Utc>,
}

/// Purchase details captured at the moment of sale.
pub(crate) struct SaleRecord {
    pub user_id: UserId,
    pub username: Username,
    pub game_id: GameId,
    pub game_title: GameTitle,
    pub payment_method: PaymentMethod,
    pub amount: Money,
    pub purchased_at: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn record(sale: SaleRecord, counters: &CounterRegistry) -> Self {
        counters.record_transaction();
        Self {
            id: TransactionId::new(),
            user_id: sale.user_id,
            username: sale.username,
            game_id: sale.game_id,
            game_title: sale.game_title,
            payment_method: sale.payment_method,
            amount: sale.amount,
            purchased_at: sale.purchased_at,
        }
    }

    #[inline]
    pub fn id(&self) -> TransactionId {
        self.id
    }

    #[inline]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Buyer's username at the time of sale.
    #[inline]
    pub fn username(&self) -> &Username {
        &self.username
    }

    #[inline]
    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    /// Game title at the time of sale.
    #[inline]
    pub fn game_title(&self) -> &GameTitle {
        &self.game_title
    }

    #[inline]
    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Price charged, i.e. the game's price at the time of sale.
    #[inline]
    pub fn amount(&self) -> Money {
        self.amount
    }

    #[inline]
    pub fn purchased_at(&self) -> DateTime<Utc> {
        self.purchased_at
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transaction: User: {}, Game: {}, Payment Method: {}",
            self.username,
            self.game_title,
            self.payment_method.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn sale() -> SaleRecord {
        SaleRecord {
            user_id: UserId::new(),
            username: Username::new("elite_gamer").unwrap(),
            game_id: GameId::new(),
            game_title: GameTitle::new("Hades").unwrap(),
            payment_method: PaymentMethod::Wallet,
            amount: Money::new(dec!(20)).unwrap(),
            purchased_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        }
    }

    #[test]
    fn record_counts_the_transaction() {
        let counters = CounterRegistry::new();
        let transaction = Transaction::record(sale(), &counters);

        assert_eq!(counters.total_transactions_count(), 1);
        assert_eq!(transaction.payment_method(), PaymentMethod::Wallet);
        assert_eq!(transaction.amount(), Money::new(dec!(20)).unwrap());
    }

    #[test]
    fn display() {
        let counters = CounterRegistry::new();
        let transaction = Transaction::record(sale(), &counters);
        assert_eq!(
            transaction.to_string(),
            "Transaction: User: elite_gamer, Game: Hades, Payment Method: Wallet"
        );
    }

    #[test]
    fn serializes_camel_case() {
        let counters = CounterRegistry::new();
        let transaction = Transaction::record(sale(), &counters);
        let json = serde_json::to_value(&transaction).unwrap();

        assert_eq!(json["username"], "elite_gamer");
        assert_eq!(json["gameTitle"], "Hades");
        assert_eq!(json["paymentMethod"], "Wallet");
        assert_eq!(json["amount"], "20");
        assert!(json.get("purchasedAt").is_some());
    }
}
