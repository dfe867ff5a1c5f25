//! Trait abstractions at the boundary between pool math and the
//! hosting environment.
//!
//! This module defines [`SettlementAdapter`], the seam through which a
//! host moves real balances once a quote has been applied, and
//! [`BetAttestor`], the randomness-attestation capability used by the
//! dice game.

mod attestor;
mod settlement;

pub use attestor::BetAttestor;
pub use settlement::SettlementAdapter;
