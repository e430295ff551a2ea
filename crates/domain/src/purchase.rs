//! Purchase domain service
//!
//! The one place a [`Transaction`] comes into existence. A purchase either
//! applies all three of its effects (funds deducted, owner recorded,
//! transaction produced) or none of them.

use chrono::{DateTime, Utc};

use crate::capabilities::{CatalogItem, Customer};
use crate::counters::CounterRegistry;
use crate::entities::{SaleRecord, Transaction};
use crate::error::DomainError;
use crate::value_objects::PaymentMethod;

/// Sell `game` to `customer` at the game's current price.
///
/// # Errors
///
/// Returns `DomainError::InsufficientFunds` when the wallet does not cover
/// the price. Nothing is mutated and no transaction is counted.
pub fn purchase<C, G>(
    customer: &mut C,
    game: &mut G,
    payment_method: PaymentMethod,
    now: DateTime<Utc>,
    counters: &CounterRegistry,
) -> Result<Transaction, DomainError>
where
    C: Customer + ?Sized,
    G: CatalogItem + ?Sized,
{
    let price = game.price();
    if !customer.check_funds(price) {
        return Err(DomainError::insufficient_funds(
            customer.wallet_balance(),
            price,
        ));
    }

    // Exclusive borrows of both sides: nothing can move the balance between
    // the check above and this deduction.
    customer.deduct_funds(price)?;
    game.add_owner(customer.id());

    Ok(Transaction::record(
        SaleRecord {
            user_id: customer.id(),
            username: customer.username().clone(),
            game_id: game.id(),
            game_title: game.title().clone(),
            payment_method,
            amount: price,
            purchased_at: now,
        },
        counters,
    ))
}
