//! Computed ledger delta for a liquidity operation.

use core::fmt;

use super::{Amount, LpUnits};

/// The delta a liquidity operation proposes to apply to the ledger.
///
/// Produced by the pure quoting functions in
/// [`engine::liquidity`](crate::engine::liquidity); consumed by
/// [`ReserveLedger::apply_liquidity`](crate::state::ReserveLedger::apply_liquidity).
/// The variant records the sign of the delta so a withdraw quote can
/// never be credited as a deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum LiquidityQuote {
    /// Reserves grow, LP supply grows.
    Deposit {
        /// Token X the depositor must pay in.
        delta_x: Amount,
        /// Token Y the depositor must pay in.
        delta_y: Amount,
        /// LP units minted to the depositor.
        delta_lp: LpUnits,
    },
    /// Reserves shrink, LP supply shrinks.
    Withdraw {
        /// Token X returned to the withdrawer.
        delta_x: Amount,
        /// Token Y returned to the withdrawer.
        delta_y: Amount,
        /// LP units burned from the withdrawer.
        delta_lp: LpUnits,
    },
}

impl LiquidityQuote {
    /// Returns the token-X delta, sign given by the variant.
    #[must_use]
    pub const fn delta_x(&self) -> Amount {
        match self {
            Self::Deposit { delta_x, .. } | Self::Withdraw { delta_x, .. } => *delta_x,
        }
    }

    /// Returns the token-Y delta, sign given by the variant.
    #[must_use]
    pub const fn delta_y(&self) -> Amount {
        match self {
            Self::Deposit { delta_y, .. } | Self::Withdraw { delta_y, .. } => *delta_y,
        }
    }

    /// Returns the LP-supply delta, sign given by the variant.
    #[must_use]
    pub const fn delta_lp(&self) -> LpUnits {
        match self {
            Self::Deposit { delta_lp, .. } | Self::Withdraw { delta_lp, .. } => *delta_lp,
        }
    }

    /// Returns `true` for a deposit quote.
    #[must_use]
    pub const fn is_deposit(&self) -> bool {
        matches!(self, Self::Deposit { .. })
    }
}

impl fmt::Display for LiquidityQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit {
                delta_x,
                delta_y,
                delta_lp,
            } => write!(f, "deposit x={delta_x} y={delta_y} lp={delta_lp}"),
            Self::Withdraw {
                delta_x,
                delta_y,
                delta_lp,
            } => write!(f, "withdraw x={delta_x} y={delta_y} lp={delta_lp}"),
        }
    }
}
