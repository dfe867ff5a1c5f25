//! Immutable per-pool parameters.

use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, FeeBps, TokenId, TokenPair};
use crate::error::AmmError;

/// Per-pool parameters fixed at initialization.
///
/// Every field except `locked` is immutable for the pool's lifetime.
/// `locked` moves `false -> true` exactly once, via [`lock`](Self::lock),
/// and never back: there is no unlock path, so liquidity providers can
/// rely on a locked pool staying withdraw-only.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::{FeeBps, TokenId};
/// use xyk_pool::state::PoolConfig;
///
/// let x = TokenId::from_bytes([1u8; 32]);
/// let y = TokenId::from_bytes([2u8; 32]);
/// let fee = FeeBps::new(600).expect("valid fee");
/// let config = PoolConfig::new(69_420, x, y, fee, None).expect("valid config");
/// assert!(!config.is_locked());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    seed: u64,
    pair: TokenPair,
    fee: FeeBps,
    authority: Option<AccountId>,
    locked: bool,
}

impl PoolConfig {
    /// Creates a new unlocked configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token_x == token_y`.
    pub fn new(
        seed: u64,
        token_x: TokenId,
        token_y: TokenId,
        fee: FeeBps,
        authority: Option<AccountId>,
    ) -> Result<Self, AmmError> {
        let pair = TokenPair::new(token_x, token_y)?;
        Ok(Self {
            seed,
            pair,
            fee,
            authority,
            locked: false,
        })
    }

    /// Returns the pool seed distinguishing pools over the same pair.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the token pair.
    #[must_use]
    pub const fn pair(&self) -> &TokenPair {
        &self.pair
    }

    /// Returns the X-side token identity.
    #[must_use]
    pub const fn token_x(&self) -> TokenId {
        self.pair.token_x()
    }

    /// Returns the Y-side token identity.
    #[must_use]
    pub const fn token_y(&self) -> TokenId {
        self.pair.token_y()
    }

    /// Returns the swap fee.
    #[must_use]
    pub const fn fee(&self) -> FeeBps {
        self.fee
    }

    /// Returns the lock authority, if one was configured.
    #[must_use]
    pub const fn authority(&self) -> Option<AccountId> {
        self.authority
    }

    /// Returns `true` if the pool is locked.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Locks the pool, permanently disabling deposits and swaps.
    ///
    /// Withdrawals stay permitted so providers can always exit.
    /// Idempotent for the authority: locking an already-locked pool
    /// succeeds without change.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NotAuthorized`] if the pool has no authority
    /// or `by` is not it.
    pub fn lock(&mut self, by: AccountId) -> Result<(), AmmError> {
        match self.authority {
            None => Err(AmmError::NotAuthorized("pool has no lock authority")),
            Some(authority) if authority != by => {
                Err(AmmError::NotAuthorized("caller is not the pool authority"))
            }
            Some(_) => {
                self.locked = true;
                Ok(())
            }
        }
    }
}
