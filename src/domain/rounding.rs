//! Explicit rounding direction for division.

/// Rounding direction for [`mul_div`](crate::math::mul_div).
///
/// Every division in the engine names its rounding direction at the call
/// site. The convention is always in the pool's favour: deposits round
/// required amounts **up**, withdrawals and swap outputs round **down**.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
