//! `mul_div` and integer square root.

use crate::domain::Rounding;
use crate::error::AmmError;

/// Computes `a * b / denom` with an explicit rounding direction.
///
/// The multiplication is performed at full `u128` width and checked: if
/// `a * b` would overflow before the division, the call fails rather than
/// truncating. Engine callers that need a wider intermediate avoid it
/// algebraically (see the subtraction-form swap output in
/// [`engine::swap`](crate::engine::swap)) instead of reaching for a
/// bigint.
///
/// # Errors
///
/// - [`AmmError::DivideByZero`] if `denom == 0`.
/// - [`AmmError::ArithmeticOverflow`] if `a * b` overflows `u128`.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::Rounding;
/// use xyk_pool::math::mul_div;
///
/// assert_eq!(mul_div(10, 3, 4, Rounding::Down), Ok(7));
/// assert_eq!(mul_div(10, 3, 4, Rounding::Up), Ok(8));
/// ```
pub const fn mul_div(
    a: u128,
    b: u128,
    denom: u128,
    rounding: Rounding,
) -> crate::error::Result<u128> {
    if denom == 0 {
        return Err(AmmError::DivideByZero);
    }

    let product = match a.checked_mul(b) {
        Some(p) => p,
        None => return Err(AmmError::ArithmeticOverflow("mul_div product")),
    };

    let quotient = product / denom;
    match rounding {
        Rounding::Down => Ok(quotient),
        Rounding::Up => {
            if product % denom != 0 {
                // quotient + 1 cannot overflow: a remainder implies
                // product < u128::MAX or denom > 1, so quotient < u128::MAX.
                Ok(quotient + 1)
            } else {
                Ok(quotient)
            }
        }
    }
}

/// Floor of the integer square root, by Newton's method.
///
/// Converges from above, so the loop exit `y >= x` yields the floor
/// exactly for every `u128` input.
#[must_use]
pub const fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}
