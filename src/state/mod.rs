//! Durable pool state: immutable configuration and the mutable ledger.
//!
//! These two types are the entire persisted record of a pool. Both derive
//! `Serialize`/`Deserialize` with fixed-width integer fields so the
//! hosting layer can round-trip them losslessly.

mod config;
mod ledger;

pub use config::PoolConfig;
pub use ledger::ReserveLedger;
