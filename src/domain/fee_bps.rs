//! Swap fee in basis points.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AmmError;

/// Basis-point denominator (10 000 = 100%).
pub const BPS_DENOMINATOR: u16 = 10_000;

/// A swap fee expressed in basis points (1 bp = 0.01%).
///
/// Valid fees lie in `[0, 10_000)`: a 100% fee would consume the entire
/// input and is rejected at construction, so downstream math never has to
/// guard against a zero fee complement.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::FeeBps;
///
/// let fee = FeeBps::new(600).expect("valid fee");
/// assert_eq!(fee.get(), 600);
/// assert_eq!(fee.complement(), 9_400);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FeeBps(u16);

impl FeeBps {
    /// Zero fee.
    pub const ZERO: Self = Self(0);

    /// Creates a new `FeeBps`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `value >= 10_000`.
    pub const fn new(value: u16) -> crate::error::Result<Self> {
        if value >= BPS_DENOMINATOR {
            return Err(AmmError::InvalidFee("fee must be below 10000 basis points"));
        }
        Ok(Self(value))
    }

    /// Returns the fee in basis points.
    #[must_use]
    pub const fn get(&self) -> u16 {
        self.0
    }

    /// Returns `10_000 - fee`, the input fraction kept after the fee.
    ///
    /// Always positive by construction.
    #[must_use]
    pub const fn complement(&self) -> u16 {
        BPS_DENOMINATOR - self.0
    }

    /// Returns `true` if the fee is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for FeeBps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
