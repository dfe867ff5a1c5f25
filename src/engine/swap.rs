//! Constant-product swap quoting.
//!
//! The fee is charged on the input before pricing, then the full input
//! (fee included) lands in the input reserve, so `reserve_x * reserve_y`
//! never decreases and strictly grows whenever the fee is non-zero.
//!
//! The output uses the subtraction form
//!
//! ```text
//! retained    = ceil(reserve_in * reserve_out / (reserve_in + net_in))
//! amount_out  = reserve_out - retained
//! ```
//!
//! Rounding the retained reserve up makes this identical to the classic
//! `floor(reserve_out * net_in / (reserve_in + net_in))` while needing
//! only the one unavoidable wide multiplication, and it makes two
//! properties structural: `retained >= 1`, so a swap can never drain the
//! output reserve, and `(in + net) * (out - amount_out) >= in * out`, so
//! the invariant never shrinks even on adversarial dust inputs.

use crate::domain::{Amount, FeeBps, Rounding, SwapDirection, SwapQuote, BPS_DENOMINATOR};
use crate::error::AmmError;
use crate::math::{mul_div, CheckedArithmetic};
use crate::state::{PoolConfig, ReserveLedger};

/// Quotes a swap of `amount_in` in the given direction.
///
/// # Errors
///
/// - [`AmmError::PoolLocked`] if the pool is locked.
/// - [`AmmError::InvalidQuantity`] if `amount_in` is zero or the fee
///   consumes it entirely.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is empty or
///   the input is too small to buy a single output unit.
/// - [`AmmError::SlippageExceeded`] if the output is below
///   `min_amount_out`.
/// - [`AmmError::ArithmeticOverflow`] if any intermediate exceeds `u128`.
pub fn quote_swap(
    config: &PoolConfig,
    ledger: &ReserveLedger,
    direction: SwapDirection,
    amount_in: Amount,
    min_amount_out: Amount,
) -> crate::error::Result<SwapQuote> {
    if config.is_locked() {
        return Err(AmmError::PoolLocked);
    }
    if amount_in.is_zero() {
        return Err(AmmError::InvalidQuantity("swap input must be non-zero"));
    }

    let (reserve_in, reserve_out) = ledger.oriented(direction);
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }

    let net_in = net_input(amount_in, config.fee())?;
    if net_in.is_zero() {
        return Err(AmmError::InvalidQuantity("swap input is all fee"));
    }
    let fee = amount_in.safe_sub(&net_in, "fee from net input")?;

    let denom = reserve_in.safe_add(&net_in, "swap denominator")?;
    let retained = Amount::new(mul_div(
        reserve_in.get(),
        reserve_out.get(),
        denom.get(),
        Rounding::Up,
    )?);
    let amount_out = reserve_out.safe_sub(&retained, "swap output")?;

    if amount_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }

    if amount_out < min_amount_out {
        return Err(AmmError::SlippageExceeded("swap output below minimum"));
    }

    SwapQuote::new(direction, amount_in, amount_out, fee)
}

/// Input remaining after the basis-point fee, rounded down (the fee keeps
/// the rounding dust).
fn net_input(amount_in: Amount, fee: FeeBps) -> crate::error::Result<Amount> {
    let net = mul_div(
        amount_in.get(),
        u128::from(fee.complement()),
        u128::from(BPS_DENOMINATOR),
        Rounding::Down,
    )?;
    Ok(Amount::new(net))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{AccountId, LpUnits, TokenId};

    fn config_with_fee(bps: u16) -> PoolConfig {
        let Ok(fee) = FeeBps::new(bps) else {
            panic!("valid fee");
        };
        let Ok(config) = PoolConfig::new(
            69_420,
            TokenId::from_bytes([1u8; 32]),
            TokenId::from_bytes([2u8; 32]),
            fee,
            Some(AccountId::from_bytes([9u8; 32])),
        ) else {
            panic!("valid config");
        };
        config
    }

    fn funded(x: u128, y: u128) -> ReserveLedger {
        let Ok(ledger) =
            ReserveLedger::restore(Amount::new(x), Amount::new(y), LpUnits::new(1_000_000))
        else {
            panic!("consistent ledger");
        };
        ledger
    }

    // -- pricing --------------------------------------------------------------

    #[test]
    fn swap_x_to_y_at_600bps() {
        let config = config_with_fee(600);
        let ledger = funded(20_000_000, 30_000_000);
        let Ok(quote) = quote_swap(
            &config,
            &ledger,
            SwapDirection::XtoY,
            Amount::new(5_000_000),
            Amount::ZERO,
        ) else {
            panic!("expected Ok");
        };
        // net      = 5_000_000 * 9400 / 10000 = 4_700_000
        // retained = ceil(20e6 * 30e6 / 24_700_000) = 24_291_498
        // out      = 30_000_000 - 24_291_498 = 5_708_502
        assert_eq!(quote.amount_in(), Amount::new(5_000_000));
        assert_eq!(quote.fee(), Amount::new(300_000));
        assert_eq!(quote.amount_out(), Amount::new(5_708_502));
        assert!(quote.amount_out() < ledger.reserve_y());
    }

    #[test]
    fn swap_y_to_x_orients_reserves() {
        let config = config_with_fee(600);
        let ledger = funded(20_000_000, 30_000_000);
        let Ok(quote) = quote_swap(
            &config,
            &ledger,
            SwapDirection::YtoX,
            Amount::new(5_000_000),
            Amount::ZERO,
        ) else {
            panic!("expected Ok");
        };
        // retained = ceil(30e6 * 20e6 / 34_700_000) = 17_291_067
        // out      = 20_000_000 - 17_291_067 = 2_708_933
        assert_eq!(quote.amount_out(), Amount::new(2_708_933));
        assert!(quote.amount_out() < ledger.reserve_x());
    }

    #[test]
    fn zero_fee_uses_full_input() {
        let config = config_with_fee(0);
        let ledger = funded(1_000_000, 2_000_000);
        let Ok(quote) = quote_swap(
            &config,
            &ledger,
            SwapDirection::XtoY,
            Amount::new(1_000),
            Amount::ZERO,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(quote.fee(), Amount::ZERO);
        // retained = ceil(1e6 * 2e6 / 1_001_000) = 1_998_002; out = 1_998
        assert_eq!(quote.amount_out(), Amount::new(1_998));
    }

    #[test]
    fn fee_keeps_rounding_dust() {
        let config = config_with_fee(600);
        let ledger = funded(1_000_000, 2_000_000);
        // net = floor(999 * 9400 / 10000) = floor(939.06) = 939, fee = 60
        let Ok(quote) = quote_swap(
            &config,
            &ledger,
            SwapDirection::XtoY,
            Amount::new(999),
            Amount::ZERO,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(quote.fee(), Amount::new(60));
    }

    // -- invariant ------------------------------------------------------------

    #[test]
    fn constant_product_grows_with_fee() {
        let config = config_with_fee(600);
        let mut ledger = funded(20_000_000, 30_000_000);
        let Ok(k_before) = ledger.constant_product() else {
            panic!("k fits");
        };
        let Ok(quote) = quote_swap(
            &config,
            &ledger,
            SwapDirection::XtoY,
            Amount::new(5_000_000),
            Amount::ZERO,
        ) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.apply_swap(&quote) else {
            panic!("apply");
        };
        let Ok(k_after) = ledger.constant_product() else {
            panic!("k fits");
        };
        assert!(k_after > k_before);
    }

    #[test]
    fn constant_product_never_shrinks_at_zero_fee() {
        let config = config_with_fee(0);
        let mut ledger = funded(1_000_000, 2_000_000);
        let Ok(k_before) = ledger.constant_product() else {
            panic!("k fits");
        };
        let Ok(quote) = quote_swap(
            &config,
            &ledger,
            SwapDirection::YtoX,
            Amount::new(10_000),
            Amount::ZERO,
        ) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.apply_swap(&quote) else {
            panic!("apply");
        };
        let Ok(k_after) = ledger.constant_product() else {
            panic!("k fits");
        };
        assert!(k_after >= k_before);
    }

    #[test]
    fn output_reserve_never_drained_even_by_huge_input() {
        let config = config_with_fee(0);
        // reserve_in * reserve_out < denom: the retained term still
        // rounds up to 1, so at most reserve_out - 1 can leave.
        let Ok(tiny) =
            ReserveLedger::restore(Amount::new(1), Amount::new(5), LpUnits::new(2))
        else {
            panic!("consistent ledger");
        };
        let Ok(quote) = quote_swap(
            &config,
            &tiny,
            SwapDirection::XtoY,
            Amount::new(10),
            Amount::ZERO,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(quote.amount_out(), Amount::new(4));
        assert!(quote.amount_out() < tiny.reserve_y());
    }

    // -- rejections -----------------------------------------------------------

    #[test]
    fn locked_pool_rejected() {
        let mut config = config_with_fee(600);
        let Ok(()) = config.lock(AccountId::from_bytes([9u8; 32])) else {
            panic!("lock");
        };
        let ledger = funded(20, 30);
        assert_eq!(
            quote_swap(
                &config,
                &ledger,
                SwapDirection::XtoY,
                Amount::new(1),
                Amount::ZERO
            ),
            Err(AmmError::PoolLocked)
        );
    }

    #[test]
    fn zero_input_rejected() {
        let config = config_with_fee(600);
        let ledger = funded(20, 30);
        assert!(quote_swap(
            &config,
            &ledger,
            SwapDirection::XtoY,
            Amount::ZERO,
            Amount::ZERO
        )
        .is_err());
    }

    #[test]
    fn empty_reserves_rejected() {
        let config = config_with_fee(600);
        assert_eq!(
            quote_swap(
                &config,
                &ReserveLedger::EMPTY,
                SwapDirection::XtoY,
                Amount::new(1),
                Amount::ZERO
            ),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn all_fee_input_rejected() {
        let config = config_with_fee(9_999);
        let ledger = funded(1_000_000, 1_000_000);
        // net = floor(1 * 1 / 10000) = 0
        assert_eq!(
            quote_swap(
                &config,
                &ledger,
                SwapDirection::XtoY,
                Amount::new(1),
                Amount::ZERO
            ),
            Err(AmmError::InvalidQuantity("swap input is all fee"))
        );
    }

    #[test]
    fn dust_input_buying_nothing_rejected() {
        let config = config_with_fee(0);
        // retained = ceil(10e6 * 5 / 10_000_001) = 5 → zero output.
        let Ok(skewed) = ReserveLedger::restore(
            Amount::new(10_000_000),
            Amount::new(5),
            LpUnits::new(1_000),
        ) else {
            panic!("consistent ledger");
        };
        assert_eq!(
            quote_swap(
                &config,
                &skewed,
                SwapDirection::XtoY,
                Amount::new(1),
                Amount::ZERO
            ),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn slippage_bound_enforced() {
        let config = config_with_fee(600);
        let ledger = funded(20_000_000, 30_000_000);
        assert_eq!(
            quote_swap(
                &config,
                &ledger,
                SwapDirection::XtoY,
                Amount::new(5_000_000),
                Amount::new(5_708_503),
            ),
            Err(AmmError::SlippageExceeded("swap output below minimum"))
        );
        // An exactly-met bound passes.
        assert!(quote_swap(
            &config,
            &ledger,
            SwapDirection::XtoY,
            Amount::new(5_000_000),
            Amount::new(5_708_502),
        )
        .is_ok());
    }

    #[test]
    fn overflow_fails_closed_and_ledger_unchanged() {
        let config = config_with_fee(600);
        let ledger = funded(20_000_000, 30_000_000);
        let before = ledger;
        // amount_in * 9400 overflows u128 long before the reserve sum.
        assert_eq!(
            quote_swap(
                &config,
                &ledger,
                SwapDirection::XtoY,
                Amount::MAX,
                Amount::ZERO
            ),
            Err(AmmError::ArithmeticOverflow("mul_div product"))
        );
        assert_eq!(ledger, before);
    }
}
