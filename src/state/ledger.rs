//! Mutable reserve and LP-supply record.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, LiquidityQuote, LpUnits, SwapDirection, SwapQuote};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// The mutable state of one pool: both token reserves and the total
/// outstanding LP supply.
///
/// # Invariants
///
/// - `reserve_x == 0 <=> reserve_y == 0 <=> lp_supply == 0`: the pool is
///   either empty or fully funded, never one-sided.
/// - `reserve_x * reserve_y` is non-decreasing across swaps.
///
/// All mutation goes through [`apply_liquidity`](Self::apply_liquidity)
/// and [`apply_swap`](Self::apply_swap), which compute the candidate
/// state first and assign only after every check passes: a failed apply
/// leaves the ledger untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReserveLedger {
    reserve_x: Amount,
    reserve_y: Amount,
    lp_supply: LpUnits,
}

impl ReserveLedger {
    /// The all-zero ledger a pool starts with.
    pub const EMPTY: Self = Self {
        reserve_x: Amount::ZERO,
        reserve_y: Amount::ZERO,
        lp_supply: LpUnits::ZERO,
    };

    /// Restores a ledger from persisted parts, re-validating the
    /// empty-iff-empty invariant.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if the parts describe a
    /// one-sided ledger.
    pub const fn restore(
        reserve_x: Amount,
        reserve_y: Amount,
        lp_supply: LpUnits,
    ) -> crate::error::Result<Self> {
        let ledger = Self {
            reserve_x,
            reserve_y,
            lp_supply,
        };
        if !ledger.is_consistent() {
            return Err(AmmError::InvalidQuantity(
                "ledger parts are one-sided: reserves and supply must be all zero or all non-zero",
            ));
        }
        Ok(ledger)
    }

    /// Returns the token-X reserve.
    #[must_use]
    pub const fn reserve_x(&self) -> Amount {
        self.reserve_x
    }

    /// Returns the token-Y reserve.
    #[must_use]
    pub const fn reserve_y(&self) -> Amount {
        self.reserve_y
    }

    /// Returns the total outstanding LP supply.
    #[must_use]
    pub const fn lp_supply(&self) -> LpUnits {
        self.lp_supply
    }

    /// Returns `true` if the pool holds nothing and no claims exist.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lp_supply.is_zero()
    }

    /// Returns `(reserve_in, reserve_out)` for the given direction.
    #[must_use]
    pub const fn oriented(&self, direction: SwapDirection) -> (Amount, Amount) {
        match direction {
            SwapDirection::XtoY => (self.reserve_x, self.reserve_y),
            SwapDirection::YtoX => (self.reserve_y, self.reserve_x),
        }
    }

    /// Returns the constant-product invariant `reserve_x * reserve_y`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the product exceeds
    /// `u128`.
    pub const fn constant_product(&self) -> crate::error::Result<u128> {
        match self.reserve_x.get().checked_mul(self.reserve_y.get()) {
            Some(k) => Ok(k),
            None => Err(AmmError::ArithmeticOverflow("constant product")),
        }
    }

    /// Empty-iff-empty check over all three fields.
    const fn is_consistent(&self) -> bool {
        let empty = self.lp_supply.is_zero();
        self.reserve_x.is_zero() == empty && self.reserve_y.is_zero() == empty
    }

    /// Applies a liquidity quote atomically.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ArithmeticOverflow`] if a reserve or the supply
    ///   would overflow or underflow.
    /// - [`AmmError::InvalidQuantity`] if the result would be one-sided.
    ///
    /// On any error the ledger is unchanged.
    pub fn apply_liquidity(&mut self, quote: &LiquidityQuote) -> crate::error::Result<()> {
        let candidate = match quote {
            LiquidityQuote::Deposit {
                delta_x,
                delta_y,
                delta_lp,
            } => Self {
                reserve_x: self.reserve_x.safe_add(delta_x, "reserve_x on deposit")?,
                reserve_y: self.reserve_y.safe_add(delta_y, "reserve_y on deposit")?,
                lp_supply: self.lp_supply.safe_add(delta_lp, "lp supply on deposit")?,
            },
            LiquidityQuote::Withdraw {
                delta_x,
                delta_y,
                delta_lp,
            } => Self {
                reserve_x: self.reserve_x.safe_sub(delta_x, "reserve_x on withdraw")?,
                reserve_y: self.reserve_y.safe_sub(delta_y, "reserve_y on withdraw")?,
                lp_supply: self.lp_supply.safe_sub(delta_lp, "lp supply on withdraw")?,
            },
        };

        if !candidate.is_consistent() {
            return Err(AmmError::InvalidQuantity(
                "delta would leave a one-sided ledger",
            ));
        }

        *self = candidate;
        Ok(())
    }

    /// Applies a swap quote atomically.
    ///
    /// The input reserve grows by the full input (fee included); the
    /// output reserve shrinks by the output amount.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ArithmeticOverflow`] if the input reserve would
    ///   overflow or the output reserve would underflow.
    /// - [`AmmError::InsufficientLiquidity`] if the swap would drain the
    ///   output reserve to zero.
    ///
    /// On any error the ledger is unchanged.
    pub fn apply_swap(&mut self, quote: &SwapQuote) -> crate::error::Result<()> {
        let (reserve_in, reserve_out) = self.oriented(quote.direction());

        let new_in = reserve_in.safe_add(&quote.amount_in(), "input reserve on swap")?;
        let new_out = reserve_out.safe_sub(&quote.amount_out(), "output reserve on swap")?;

        if new_out.is_zero() {
            return Err(AmmError::InsufficientLiquidity);
        }

        match quote.direction() {
            SwapDirection::XtoY => {
                self.reserve_x = new_in;
                self.reserve_y = new_out;
            }
            SwapDirection::YtoX => {
                self.reserve_y = new_in;
                self.reserve_x = new_out;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ReserveLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={} y={} lp={}",
            self.reserve_x, self.reserve_y, self.lp_supply
        )
    }
}
