//! A pool instance: configuration plus ledger, with quote-then-apply
//! operations.

use tracing::debug;

use crate::domain::{AccountId, Amount, FeeBps, LiquidityQuote, LpUnits, SwapDirection, SwapQuote, TokenId};
use crate::engine;
use crate::error::AmmError;
use crate::state::{PoolConfig, ReserveLedger};

/// One pool: its immutable [`PoolConfig`] and mutable [`ReserveLedger`].
///
/// Operations follow compute-then-validate-then-apply: the engine quotes
/// against a snapshot, and the quote is applied to the ledger only after
/// every check has passed, so a returned error guarantees an unchanged
/// pool. The pool assumes the hosting layer serialises operations per
/// pool identity; it holds no lock of its own.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::{Amount, FeeBps, LpUnits, SwapDirection, TokenId};
/// use xyk_pool::pool::Pool;
///
/// let x = TokenId::from_bytes([1u8; 32]);
/// let y = TokenId::from_bytes([2u8; 32]);
/// let fee = FeeBps::new(600).expect("valid fee");
/// let mut pool = Pool::initialize(69_420, x, y, fee, None).expect("valid pool");
///
/// pool.deposit(
///     LpUnits::new(1_000_000),
///     Amount::new(20_000_000),
///     Amount::new(30_000_000),
/// )
/// .expect("first deposit");
///
/// let quote = pool
///     .swap(SwapDirection::XtoY, Amount::new(5_000_000), Amount::ZERO)
///     .expect("swap");
/// assert!(quote.amount_out().get() > 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    config: PoolConfig,
    ledger: ReserveLedger,
}

impl Pool {
    /// Creates an active pool with an all-zero ledger.
    ///
    /// Initialize-once enforcement across pool identities lives in
    /// [`PoolRegistry`](crate::registry::PoolRegistry); this constructor
    /// only validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token_x == token_y`.
    pub fn initialize(
        seed: u64,
        token_x: TokenId,
        token_y: TokenId,
        fee: FeeBps,
        authority: Option<AccountId>,
    ) -> Result<Self, AmmError> {
        let config = PoolConfig::new(seed, token_x, token_y, fee, authority)?;
        debug!(seed, %token_x, %token_y, fee = %fee, "pool initialized");
        Ok(Self {
            config,
            ledger: ReserveLedger::EMPTY,
        })
    }

    /// Reassembles a pool from persisted state.
    pub const fn resume(config: PoolConfig, ledger: ReserveLedger) -> Self {
        Self { config, ledger }
    }

    /// Returns the pool configuration.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Returns the current ledger.
    #[must_use]
    pub const fn ledger(&self) -> &ReserveLedger {
        &self.ledger
    }

    /// Deposits liquidity, minting `requested_lp` new units.
    ///
    /// Returns the applied quote so the caller can drive settlement
    /// (debit the depositor, credit the vaults, mint LP).
    ///
    /// # Errors
    ///
    /// Propagates [`engine::quote_deposit`] errors; the pool is
    /// unchanged on failure.
    pub fn deposit(
        &mut self,
        requested_lp: LpUnits,
        max_x: Amount,
        max_y: Amount,
    ) -> crate::error::Result<LiquidityQuote> {
        let quote = engine::quote_deposit(&self.config, &self.ledger, requested_lp, max_x, max_y)?;
        self.ledger.apply_liquidity(&quote)?;
        debug!(seed = self.config.seed(), %quote, ledger = %self.ledger, "deposit applied");
        Ok(quote)
    }

    /// Withdraws liquidity, burning `lp_amount` units.
    ///
    /// Permitted even when the pool is locked.
    ///
    /// # Errors
    ///
    /// Propagates [`engine::quote_withdraw`] errors; the pool is
    /// unchanged on failure.
    pub fn withdraw(
        &mut self,
        lp_amount: LpUnits,
        min_x: Amount,
        min_y: Amount,
    ) -> crate::error::Result<LiquidityQuote> {
        let quote = engine::quote_withdraw(&self.config, &self.ledger, lp_amount, min_x, min_y)?;
        self.ledger.apply_liquidity(&quote)?;
        debug!(seed = self.config.seed(), %quote, ledger = %self.ledger, "withdraw applied");
        Ok(quote)
    }

    /// Swaps `amount_in` in the given direction.
    ///
    /// # Errors
    ///
    /// Propagates [`engine::quote_swap`] errors; the pool is unchanged
    /// on failure.
    pub fn swap(
        &mut self,
        direction: SwapDirection,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> crate::error::Result<SwapQuote> {
        let quote = engine::quote_swap(
            &self.config,
            &self.ledger,
            direction,
            amount_in,
            min_amount_out,
        )?;
        self.ledger.apply_swap(&quote)?;
        debug!(seed = self.config.seed(), %quote, ledger = %self.ledger, "swap applied");
        Ok(quote)
    }

    /// Locks the pool (authority only). Deposits and swaps are rejected
    /// from this point on; withdrawals continue to work.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NotAuthorized`] if `by` is not the configured
    /// authority.
    pub fn lock(&mut self, by: AccountId) -> crate::error::Result<()> {
        self.config.lock(by)?;
        debug!(seed = self.config.seed(), %by, "pool locked");
        Ok(())
    }
}
