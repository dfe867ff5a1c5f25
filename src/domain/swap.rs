//! Swap direction selector.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Which side of the pair is being sold into the pool.
///
/// Selects the `(reserve_in, reserve_out)` orientation for a swap; see
/// [`ReserveLedger::oriented`](crate::state::ReserveLedger::oriented).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapDirection {
    /// Sell token X, receive token Y.
    XtoY,
    /// Sell token Y, receive token X.
    YtoX,
}

impl SwapDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        match self {
            Self::XtoY => Self::YtoX,
            Self::YtoX => Self::XtoY,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XtoY => write!(f, "X->Y"),
            Self::YtoX => write!(f, "Y->X"),
        }
    }
}
