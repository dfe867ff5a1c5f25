//! Property-based tests using `proptest` for pool invariant validation.
//!
//! Covers the behavioural guarantees the engines must uphold:
//!
//! 1. **Swap reversibility** — round-trip X→Y→X returns ≤ original.
//! 2. **Invariant preservation** — reserve product non-decreasing after swaps.
//! 3. **Fee monotonicity** — larger input ⇒ larger or equal fee.
//! 4. **Liquidity conservation** — deposit then withdraw returns ≤ deposited.
//! 5. **Deposit rounding** — required amounts never undercut pro-rata share.

use proptest::prelude::*;

use crate::domain::{Amount, FeeBps, LpUnits, SwapDirection, TokenId};
use crate::engine::{quote_deposit, quote_swap, quote_withdraw};
use crate::state::{PoolConfig, ReserveLedger};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn make_config(fee_bps: u16) -> PoolConfig {
    let Ok(fee) = FeeBps::new(fee_bps) else {
        panic!("valid fee");
    };
    let Ok(config) = PoolConfig::new(
        1,
        TokenId::from_bytes([1u8; 32]),
        TokenId::from_bytes([2u8; 32]),
        fee,
        None,
    ) else {
        panic!("valid config");
    };
    config
}

fn make_ledger(rx: u128, ry: u128, lp: u128) -> ReserveLedger {
    let Ok(ledger) = ReserveLedger::restore(Amount::new(rx), Amount::new(ry), LpUnits::new(lp))
    else {
        panic!("valid ledger");
    };
    ledger
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Fee values across the full valid range, zero included.
fn fee_strategy() -> impl Strategy<Value = u16> {
    0u16..=9_999u16
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // -- Property 1: swap reversibility ------------------------------------

    #[test]
    fn prop_round_trip_never_profits(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        fee_bps in fee_strategy(),
    ) {
        let config = make_config(fee_bps);
        let mut ledger = make_ledger(rx, ry, 1_000_000);
        let swap_in = (rx / 1_000).max(1);

        // X → Y
        let Ok(out) = quote_swap(
            &config,
            &ledger,
            SwapDirection::XtoY,
            Amount::new(swap_in),
            Amount::ZERO,
        ) else {
            return Ok(());
        };
        let Ok(()) = ledger.apply_swap(&out) else {
            return Ok(());
        };
        if out.amount_out().is_zero() { return Ok(()); }

        // Y → X
        let Ok(back) = quote_swap(
            &config,
            &ledger,
            SwapDirection::YtoX,
            out.amount_out(),
            Amount::ZERO,
        ) else {
            return Ok(());
        };

        prop_assert!(
            back.amount_out().get() <= swap_in,
            "round-trip should lose value: final={} > original={}",
            back.amount_out().get(), swap_in
        );
    }

    // -- Property 2: invariant preservation --------------------------------

    #[test]
    fn prop_reserve_product_never_decreases(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        fee_bps in fee_strategy(),
        divisor in 1u128..=1_000u128,
    ) {
        let config = make_config(fee_bps);
        let mut ledger = make_ledger(rx, ry, 1_000_000);
        let Ok(k_before) = ledger.constant_product() else {
            panic!("product fits");
        };

        let swap_in = (rx / divisor).max(1);
        let Ok(quote) = quote_swap(
            &config,
            &ledger,
            SwapDirection::XtoY,
            Amount::new(swap_in),
            Amount::ZERO,
        ) else {
            return Ok(());
        };
        let Ok(()) = ledger.apply_swap(&quote) else {
            return Ok(());
        };
        let Ok(k_after) = ledger.constant_product() else {
            panic!("product fits");
        };

        prop_assert!(
            k_after >= k_before,
            "invariant shrank: before={k_before} after={k_after}"
        );
    }

    // -- Property 3: fee monotonicity --------------------------------------

    #[test]
    fn prop_fee_monotone_in_input(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        fee_bps in 1u16..=9_999u16,
        small in 1u128..=100_000u128,
        bump in 0u128..=100_000u128,
    ) {
        let config = make_config(fee_bps);
        let ledger = make_ledger(rx, ry, 1_000_000);

        let Ok(a) = quote_swap(
            &config,
            &ledger,
            SwapDirection::XtoY,
            Amount::new(small),
            Amount::ZERO,
        ) else {
            return Ok(());
        };
        let Ok(b) = quote_swap(
            &config,
            &ledger,
            SwapDirection::XtoY,
            Amount::new(small + bump),
            Amount::ZERO,
        ) else {
            return Ok(());
        };

        prop_assert!(
            b.fee().get() >= a.fee().get(),
            "fee not monotone: fee({})={} < fee({})={}",
            small + bump, b.fee().get(), small, a.fee().get()
        );
    }

    // -- Property 4: liquidity conservation --------------------------------

    #[test]
    fn prop_deposit_withdraw_never_profits(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        lp_in in 1u128..=1_000_000u128,
    ) {
        let config = make_config(600);
        let mut ledger = make_ledger(rx, ry, 1_000_000);

        let Ok(deposit) = quote_deposit(
            &config,
            &ledger,
            LpUnits::new(lp_in),
            Amount::MAX,
            Amount::MAX,
        ) else {
            return Ok(());
        };
        let Ok(()) = ledger.apply_liquidity(&deposit) else {
            return Ok(());
        };

        let Ok(withdraw) = quote_withdraw(
            &config,
            &ledger,
            LpUnits::new(lp_in),
            Amount::ZERO,
            Amount::ZERO,
        ) else {
            panic!("withdraw of freshly minted LP must quote");
        };

        prop_assert!(
            withdraw.delta_x().get() <= deposit.delta_x().get(),
            "withdraw returned more X than deposited: {} > {}",
            withdraw.delta_x().get(), deposit.delta_x().get()
        );
        prop_assert!(
            withdraw.delta_y().get() <= deposit.delta_y().get(),
            "withdraw returned more Y than deposited: {} > {}",
            withdraw.delta_y().get(), deposit.delta_y().get()
        );
    }

    // -- Property 5: deposit rounding favours the pool ---------------------

    #[test]
    fn prop_deposit_never_undercuts_pro_rata(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        lp_in in 1u128..=1_000_000u128,
    ) {
        let config = make_config(600);
        let ledger = make_ledger(rx, ry, 1_000_000);

        let Ok(quote) = quote_deposit(
            &config,
            &ledger,
            LpUnits::new(lp_in),
            Amount::MAX,
            Amount::MAX,
        ) else {
            return Ok(());
        };

        // floor(lp_in * reserve / supply) is the exact pro-rata share;
        // the quoted amount must be that or one unit more.
        let floor_x = lp_in * rx / 1_000_000;
        let floor_y = lp_in * ry / 1_000_000;
        prop_assert!(quote.delta_x().get() >= floor_x);
        prop_assert!(quote.delta_x().get() <= floor_x + 1);
        prop_assert!(quote.delta_y().get() >= floor_y);
        prop_assert!(quote.delta_y().get() <= floor_y + 1);
    }
}
