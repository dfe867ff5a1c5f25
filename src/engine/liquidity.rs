//! Deposit and withdraw share math.
//!
//! Rounding always favours the pool: deposits round the required amounts
//! **up** (the pool is never short-funded), withdrawals round the returned
//! amounts **down** (the pool never pays out more than the burned share).

use crate::domain::{Amount, LiquidityQuote, LpUnits, Rounding};
use crate::error::AmmError;
use crate::math::mul_div;
use crate::state::{PoolConfig, ReserveLedger};

/// Quotes a deposit of `requested_lp` new LP units.
///
/// For the first deposit (`lp_supply == 0`) the caller-supplied bounds
/// `(max_x, max_y)` are taken literally as the initial reserves and
/// `requested_lp` becomes the initial supply — the first depositor sets
/// the initial price. Subsequent deposits pay the proportional share
/// `ceil(requested_lp * reserve / lp_supply)` per token, bounded by the
/// caller's maxima.
///
/// # Errors
///
/// - [`AmmError::PoolLocked`] if the pool is locked.
/// - [`AmmError::InvalidQuantity`] if `requested_lp` is zero.
/// - [`AmmError::InvalidInitialDeposit`] on a first deposit with a zero
///   amount on either side.
/// - [`AmmError::SlippageExceeded`] if a required amount exceeds its
///   maximum.
/// - [`AmmError::ArithmeticOverflow`] if the share numerator overflows.
pub fn quote_deposit(
    config: &PoolConfig,
    ledger: &ReserveLedger,
    requested_lp: LpUnits,
    max_x: Amount,
    max_y: Amount,
) -> crate::error::Result<LiquidityQuote> {
    if config.is_locked() {
        return Err(AmmError::PoolLocked);
    }
    if requested_lp.is_zero() {
        return Err(AmmError::InvalidQuantity("requested LP must be non-zero"));
    }

    if ledger.is_empty() {
        if max_x.is_zero() || max_y.is_zero() {
            return Err(AmmError::InvalidInitialDeposit(
                "first deposit must fund both reserves",
            ));
        }
        return Ok(LiquidityQuote::Deposit {
            delta_x: max_x,
            delta_y: max_y,
            delta_lp: requested_lp,
        });
    }

    let supply = ledger.lp_supply().get();
    let required_x = Amount::new(mul_div(
        requested_lp.get(),
        ledger.reserve_x().get(),
        supply,
        Rounding::Up,
    )?);
    let required_y = Amount::new(mul_div(
        requested_lp.get(),
        ledger.reserve_y().get(),
        supply,
        Rounding::Up,
    )?);

    if required_x > max_x {
        return Err(AmmError::SlippageExceeded("deposit needs more X than max_x"));
    }
    if required_y > max_y {
        return Err(AmmError::SlippageExceeded("deposit needs more Y than max_y"));
    }

    Ok(LiquidityQuote::Deposit {
        delta_x: required_x,
        delta_y: required_y,
        delta_lp: requested_lp,
    })
}

/// Quotes a withdrawal burning `lp_amount` LP units.
///
/// Withdrawal stays permitted on a locked pool: the lock removes entry
/// (deposits, swaps) but never exit.
///
/// # Errors
///
/// - [`AmmError::InvalidQuantity`] if `lp_amount` is zero.
/// - [`AmmError::InsufficientLiquidity`] if `lp_amount` exceeds the
///   outstanding supply (including any withdrawal from an empty pool).
/// - [`AmmError::SlippageExceeded`] if a returned amount falls below its
///   minimum.
/// - [`AmmError::ArithmeticOverflow`] if the share numerator overflows.
pub fn quote_withdraw(
    _config: &PoolConfig,
    ledger: &ReserveLedger,
    lp_amount: LpUnits,
    min_x: Amount,
    min_y: Amount,
) -> crate::error::Result<LiquidityQuote> {
    if lp_amount.is_zero() {
        return Err(AmmError::InvalidQuantity("LP amount must be non-zero"));
    }

    let supply = ledger.lp_supply();
    if lp_amount > supply {
        return Err(AmmError::InsufficientLiquidity);
    }

    let out_x = Amount::new(mul_div(
        lp_amount.get(),
        ledger.reserve_x().get(),
        supply.get(),
        Rounding::Down,
    )?);
    let out_y = Amount::new(mul_div(
        lp_amount.get(),
        ledger.reserve_y().get(),
        supply.get(),
        Rounding::Down,
    )?);

    if out_x < min_x {
        return Err(AmmError::SlippageExceeded("withdraw returns less X than min_x"));
    }
    if out_y < min_y {
        return Err(AmmError::SlippageExceeded("withdraw returns less Y than min_y"));
    }

    Ok(LiquidityQuote::Withdraw {
        delta_x: out_x,
        delta_y: out_y,
        delta_lp: lp_amount,
    })
}
