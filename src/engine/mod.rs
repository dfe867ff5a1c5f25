//! Pure quoting engines.
//!
//! Both engines are stateless functions over a config plus a ledger
//! snapshot: they validate, compute a proposed delta, and return it
//! without touching the ledger. The caller applies the delta atomically
//! (see [`Pool`](crate::pool::Pool)), so every failure in this module is
//! a pre-mutation failure by construction.

pub mod liquidity;
pub mod swap;

#[cfg(test)]
mod proptest_properties;

pub use liquidity::{quote_deposit, quote_withdraw};
pub use swap::quote_swap;
