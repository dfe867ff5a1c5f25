//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use xyk_pool::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{
    AccountId, Amount, FeeBps, LiquidityQuote, LpUnits, Rounding, SwapDirection, SwapQuote,
    TokenId, TokenPair,
};

// Re-export state
pub use crate::state::{PoolConfig, ReserveLedger};

// Re-export the pool surface
pub use crate::pool::Pool;
pub use crate::registry::{PoolId, PoolRegistry};

// Re-export core traits
pub use crate::traits::{BetAttestor, SettlementAdapter};

// Re-export math utilities
pub use crate::math::CheckedArithmetic;

// Re-export error types
pub use crate::error::{AmmError, Result};
