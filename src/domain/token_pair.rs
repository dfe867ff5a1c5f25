//! The two token identities a pool trades between.

use serde::{Deserialize, Serialize};

use super::TokenId;
use crate::error::AmmError;

/// The `(token_x, token_y)` identities of a pool.
///
/// Unlike exchanges that canonicalise pair ordering, the X/Y roles here
/// are positional and chosen at initialization: deposits, reserves and
/// swap directions all refer to them. The only structural invariant is
/// that the two identities differ.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::{TokenId, TokenPair};
///
/// let x = TokenId::from_bytes([1u8; 32]);
/// let y = TokenId::from_bytes([2u8; 32]);
/// let pair = TokenPair::new(x, y).expect("distinct tokens");
/// assert_eq!(pair.token_x(), x);
/// assert_eq!(pair.token_y(), y);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenPair {
    token_x: TokenId,
    token_y: TokenId,
}

impl TokenPair {
    /// Creates a new pair, preserving the given X/Y roles.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if both identities are equal.
    pub fn new(token_x: TokenId, token_y: TokenId) -> Result<Self, AmmError> {
        if token_x == token_y {
            return Err(AmmError::InvalidToken(
                "pool requires two distinct token identities",
            ));
        }
        Ok(Self { token_x, token_y })
    }

    /// Returns the X-side token identity.
    #[must_use]
    pub const fn token_x(&self) -> TokenId {
        self.token_x
    }

    /// Returns the Y-side token identity.
    #[must_use]
    pub const fn token_y(&self) -> TokenId {
        self.token_y
    }

    /// Returns `true` if the given token is one of the pair.
    #[must_use]
    pub fn contains(&self, token: &TokenId) -> bool {
        self.token_x == *token || self.token_y == *token
    }
}
