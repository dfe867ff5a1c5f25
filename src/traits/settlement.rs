//! Settlement boundary between pool accounting and token custody.
//!
//! The engines and [`Pool`](crate::pool::Pool) only move numbers inside
//! the [`ReserveLedger`](crate::state::ReserveLedger); actual token
//! custody — vault transfers, LP mint and burn — belongs to the host.
//! [`SettlementAdapter`] is the contract a host implements so a driver
//! can turn an applied quote into balance movements.
//!
//! # Ordering
//!
//! Drivers must apply the quote to the ledger first and settle second,
//! so a settlement failure can be surfaced while the quote that caused
//! it is still at hand.

use crate::domain::{AccountId, Amount, LpUnits, TokenId};
use crate::error::AmmError;

/// Host-side custody operations backing a pool.
///
/// Implementations are expected to be atomic per call: a returned error
/// means no balances moved for that call.
pub trait SettlementAdapter {
    /// Moves `amount` of `token` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns an [`AmmError`] if the transfer cannot be performed, for
    /// example because `from` lacks the balance.
    fn transfer(
        &mut self,
        token: TokenId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), AmmError>;

    /// Creates `amount` LP units in `to`'s balance.
    ///
    /// # Errors
    ///
    /// Returns an [`AmmError`] if minting fails in the host.
    fn mint_lp(&mut self, to: AccountId, amount: LpUnits) -> Result<(), AmmError>;

    /// Destroys `amount` LP units from `from`'s balance.
    ///
    /// # Errors
    ///
    /// Returns an [`AmmError`] if `from` holds fewer than `amount`
    /// units.
    fn burn_lp(&mut self, from: AccountId, amount: LpUnits) -> Result<(), AmmError>;
}
