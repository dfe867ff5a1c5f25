//! Pool identity and the initialize-once registry.
//!
//! A pool is addressed by its seed plus its token pair, so two pools
//! over the same tokens can coexist under different seeds. The
//! [`PoolRegistry`] enforces that each [`PoolId`] is initialized exactly
//! once.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{AccountId, FeeBps, TokenId};
use crate::error::AmmError;
use crate::pool::Pool;

/// Unique address of a pool: the creator-chosen seed plus both token
/// identities in their X/Y roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolId {
    seed: u64,
    token_x: TokenId,
    token_y: TokenId,
}

impl PoolId {
    /// Builds a pool identity. Token order matters: `(seed, a, b)` and
    /// `(seed, b, a)` name different pools.
    #[must_use]
    pub const fn new(seed: u64, token_x: TokenId, token_y: TokenId) -> Self {
        Self {
            seed,
            token_x,
            token_y,
        }
    }

    /// Returns the seed component.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

/// In-memory collection of live pools keyed by [`PoolId`].
#[derive(Debug, Default, Clone)]
pub struct PoolRegistry {
    pools: HashMap<PoolId, Pool>,
}

impl PoolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates and registers a new pool.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::AlreadyInitialized`] if a pool with the same
    /// identity exists, or [`AmmError::InvalidToken`] for a degenerate
    /// pair.
    pub fn initialize(
        &mut self,
        seed: u64,
        token_x: TokenId,
        token_y: TokenId,
        fee: FeeBps,
        authority: Option<AccountId>,
    ) -> crate::error::Result<PoolId> {
        let id = PoolId::new(seed, token_x, token_y);
        if self.pools.contains_key(&id) {
            return Err(AmmError::AlreadyInitialized);
        }
        let pool = Pool::initialize(seed, token_x, token_y, fee, authority)?;
        self.pools.insert(id, pool);
        debug!(seed, pools = self.pools.len(), "pool registered");
        Ok(id)
    }

    /// Looks up a pool by identity.
    #[must_use]
    pub fn get(&self, id: &PoolId) -> Option<&Pool> {
        self.pools.get(id)
    }

    /// Looks up a pool mutably, for deposits, withdrawals, and swaps.
    pub fn get_mut(&mut self, id: &PoolId) -> Option<&mut Pool> {
        self.pools.get_mut(id)
    }

    /// Number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Whether the registry holds no pools.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}
