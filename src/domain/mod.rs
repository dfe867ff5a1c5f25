//! Fundamental domain value types used throughout the pool engine.
//!
//! Every type here is a newtype with a validated constructor: raw integers
//! enter the crate exactly once, at the boundary, and all arithmetic past
//! that point is checked. Quoting results ([`SwapQuote`],
//! [`LiquidityQuote`]) also live here so that the state layer can apply
//! them without depending on the engine.

mod account;
mod amount;
mod fee_bps;
mod liquidity_quote;
mod lp_units;
mod rounding;
mod swap;
mod swap_quote;
mod token;
mod token_pair;

pub use account::AccountId;
pub use amount::Amount;
pub use fee_bps::{FeeBps, BPS_DENOMINATOR};
pub use liquidity_quote::LiquidityQuote;
pub use lp_units::LpUnits;
pub use rounding::Rounding;
pub use swap::SwapDirection;
pub use swap_quote::SwapQuote;
pub use token::TokenId;
pub use token_pair::TokenPair;
