//! Checked add/sub trait for domain wrapper types.

use crate::domain::{Amount, LpUnits};
use crate::error::AmmError;

/// Fallible addition and subtraction for domain newtypes.
///
/// Lifts the `Option`-returning checked operations on [`Amount`] and
/// [`LpUnits`] into crate errors with a named failure site, so engine
/// code can use `?` throughout.
///
/// # Contract
///
/// - No panics: all failure conditions produce `Err`.
/// - No saturation: saturation hides bugs; errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] naming `site` on overflow.
    fn safe_add(&self, other: &Self, site: &'static str) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] naming `site` if the
    /// result would be negative.
    fn safe_sub(&self, other: &Self, site: &'static str) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self, site: &'static str) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::ArithmeticOverflow(site))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, site: &'static str) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::ArithmeticOverflow(site))
    }
}

impl CheckedArithmetic for LpUnits {
    #[inline]
    fn safe_add(&self, other: &Self, site: &'static str) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::ArithmeticOverflow(site))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, site: &'static str) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::ArithmeticOverflow(site))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_safe_add() {
        assert_eq!(
            Amount::new(1).safe_add(&Amount::new(2), "t"),
            Ok(Amount::new(3))
        );
        assert_eq!(
            Amount::MAX.safe_add(&Amount::new(1), "reserve overflow"),
            Err(AmmError::ArithmeticOverflow("reserve overflow"))
        );
    }

    #[test]
    fn amount_safe_sub() {
        assert_eq!(
            Amount::new(3).safe_sub(&Amount::new(2), "t"),
            Ok(Amount::new(1))
        );
        assert_eq!(
            Amount::ZERO.safe_sub(&Amount::new(1), "reserve underflow"),
            Err(AmmError::ArithmeticOverflow("reserve underflow"))
        );
    }

    #[test]
    fn lp_units_safe_ops() {
        assert_eq!(
            LpUnits::new(10).safe_sub(&LpUnits::new(10), "t"),
            Ok(LpUnits::ZERO)
        );
        assert!(LpUnits::new(u128::MAX)
            .safe_add(&LpUnits::new(1), "supply overflow")
            .is_err());
    }
}
