//! Computed ledger delta for a swap.

use core::fmt;

use super::{Amount, SwapDirection};
use crate::error::AmmError;

/// The delta a swap proposes to apply to the ledger.
///
/// `amount_in` is the full input including the fee: the fee is retained
/// inside the pool, compounding into LP value, so the input reserve grows
/// by the whole input while the output reserve shrinks by `amount_out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct SwapQuote {
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapQuote {
    /// Creates a validated swap quote.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if `amount_in` is zero or if
    /// `fee` exceeds `amount_in`.
    pub const fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidQuantity("swap input must be non-zero"));
        }
        if fee.get() > amount_in.get() {
            return Err(AmmError::InvalidQuantity("fee cannot exceed swap input"));
        }
        Ok(Self {
            direction,
            amount_in,
            amount_out,
            fee,
        })
    }

    /// Returns the swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the full input amount (fee included).
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount credited to the trader.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the fee portion of the input, retained by the pool.
    #[must_use]
    pub const fn fee(&self) -> Amount {
        self.fee
    }
}

impl fmt::Display for SwapQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "swap {} in={} out={} fee={}",
            self.direction, self.amount_in, self.amount_out, self.fee
        )
    }
}
