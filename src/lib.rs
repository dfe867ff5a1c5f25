//! # xyk-pool
//!
//! Constant-product pool engine: integer-only reserve accounting,
//! quote-then-apply operations, and a settlement seam for the hosting
//! environment.
//!
//! A pool holds two reserves and an LP supply under the invariant
//! `x · y = k`. Deposits mint a caller-chosen number of LP units
//! against ceiling-rounded pro-rata amounts, withdrawals burn LP for
//! floor-rounded shares, and swaps charge a basis-point fee on the
//! input before the constant-product formula prices the output. All
//! arithmetic is checked `u128`; every rounding decision favours the
//! pool, so the reserve product never decreases across a swap.
//!
//! # Quick Start
//!
//! ```rust
//! use xyk_pool::prelude::*;
//!
//! // 1. Two distinct token identities and a 6% fee
//! let sol = TokenId::from_bytes([1u8; 32]);
//! let usd = TokenId::from_bytes([2u8; 32]);
//! let fee = FeeBps::new(600).expect("valid fee");
//!
//! // 2. Register the pool under a creator-chosen seed
//! let mut registry = PoolRegistry::new();
//! let id = registry
//!     .initialize(69_420, sol, usd, fee, None)
//!     .expect("fresh identity");
//! let pool = registry.get_mut(&id).expect("just registered");
//!
//! // 3. Fund it: the first deposit sets the price
//! pool.deposit(
//!     LpUnits::new(1_000_000),
//!     Amount::new(20_000_000),
//!     Amount::new(30_000_000),
//! )
//! .expect("first deposit");
//!
//! // 4. Swap 5 000 000 X for Y
//! let quote = pool
//!     .swap(SwapDirection::XtoY, Amount::new(5_000_000), Amount::ZERO)
//!     .expect("swap succeeded");
//!
//! assert!(quote.amount_out().get() > 0);
//! assert!(quote.fee().get() > 0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Consumer   │  uses PoolRegistry / Pool
//! └──────┬──────┘
//!        │ deposit / withdraw / swap / lock
//!        ▼
//! ┌─────────────┐
//! │     Pool     │  quotes against a snapshot, applies atomically
//! └──────┬──────┘
//!        │ quote_deposit / quote_withdraw / quote_swap
//!        ▼
//! ┌─────────────┐
//! │   Engines    │  pure functions over (PoolConfig, ReserveLedger)
//! └──────┬──────┘
//!        │ mul_div / checked arithmetic
//!        ▼
//! ┌─────────────┐
//! │    Domain    │  Amount, LpUnits, FeeBps, TokenId, quotes, …
//! └─────────────┘
//! ```
//!
//! Token custody is out of scope: the ledger tracks numbers, and the
//! host moves balances through [`SettlementAdapter`](traits::SettlementAdapter)
//! after each applied quote.
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`LpUnits`](domain::LpUnits), [`FeeBps`](domain::FeeBps), quote types |
//! | [`state`] | [`PoolConfig`](state::PoolConfig) and [`ReserveLedger`](state::ReserveLedger) |
//! | [`engine`] | Pure quoting functions for liquidity and swaps |
//! | [`pool`] | [`Pool`](pool::Pool): config + ledger with atomic operations |
//! | [`registry`] | [`PoolRegistry`](registry::PoolRegistry): initialize-once by [`PoolId`](registry::PoolId) |
//! | [`traits`] | [`SettlementAdapter`](traits::SettlementAdapter), [`BetAttestor`](traits::BetAttestor) |
//! | [`math`] | [`mul_div`](math::mul_div), [`isqrt`](math::isqrt), checked arithmetic |
//! | [`dice`] | Roll-under dice bets with attested resolution and timeout refunds |
//! | [`voting`] | Quadratic voting tallies |
//! | [`error`] | [`AmmError`](error::AmmError) and companion error enums |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod dice;
pub mod domain;
pub mod engine;
pub mod error;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod registry;
pub mod state;
pub mod traits;
pub mod voting;
