//! Unified error types for the pool engine.
//!
//! Every fallible operation in the core returns [`AmmError`]. All variants
//! describe pre-mutation validation failures: a rejected operation leaves
//! [`PoolConfig`](crate::state::PoolConfig) and
//! [`ReserveLedger`](crate::state::ReserveLedger) untouched, so callers may
//! adjust bounds and retry immediately.
//!
//! The companion subsystems carry their own enums ([`DiceError`],
//! [`VotingError`]) so pool consumers never match on game variants.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Errors produced by pool construction, quoting, and state transitions.
///
/// The static string payloads identify the failing computation site; they
/// are diagnostics, not part of the error identity for callers deciding
/// whether to retry with adjusted bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmmError {
    /// A multiplication or addition exceeded the working integer width.
    /// The engine fails closed rather than truncating.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// Division with a zero denominator.
    #[error("division by zero")]
    DivideByZero,

    /// A computed amount fell outside the caller-supplied bounds.
    #[error("slippage bound exceeded: {0}")]
    SlippageExceeded(&'static str),

    /// A reserve is empty, or the request exceeds outstanding liquidity.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// The pool is locked; deposits and swaps are disabled.
    #[error("pool is locked")]
    PoolLocked,

    /// The first deposit must fund both reserves and mint a non-zero supply.
    #[error("invalid initial deposit: {0}")]
    InvalidInitialDeposit(&'static str),

    /// A pool with this identity already exists in the registry.
    #[error("pool already initialized")]
    AlreadyInitialized,

    /// Lock attempted by a principal other than the configured authority.
    #[error("not authorized: {0}")]
    NotAuthorized(&'static str),

    /// A token identity failed validation (e.g. `token_x == token_y`).
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// A request quantity failed validation (e.g. zero amount).
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// A fee outside `[0, 10_000)` basis points.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),
}

/// Errors produced by the dice-game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiceError {
    /// Attestation over the bet's byte layout failed verification.
    #[error("attestation rejected: {0}")]
    AttestationRejected(&'static str),

    /// The bet is not in the state the transition requires.
    #[error("invalid bet state: {0}")]
    InvalidBetState(&'static str),

    /// Refund requested before the timeout slot was reached.
    #[error("timeout not reached")]
    TimeoutNotReached,

    /// Payout arithmetic exceeded the working integer width.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// The requested roll-under target is outside the playable range.
    #[error("invalid roll target: {0}")]
    InvalidRollTarget(&'static str),

    /// A bet amount of zero.
    #[error("invalid bet amount: {0}")]
    InvalidBetAmount(&'static str),
}

/// Errors produced by the quadratic-voting tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VotingError {
    /// Voting with a zero token balance mints zero credits.
    #[error("insufficient balance: {0}")]
    InsufficientBalance(&'static str),

    /// Credit accumulation exceeded the counter width.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// The voter already holds a receipt for this proposal.
    #[error("already voted")]
    AlreadyVoted,
}
