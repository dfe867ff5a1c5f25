//! Overflow-checked fixed-point arithmetic.
//!
//! Every product and quotient in the engine goes through [`mul_div`];
//! addition and subtraction on domain types go through
//! [`CheckedArithmetic`]. Silent wraparound is a correctness violation
//! anywhere in this crate — arithmetic that would overflow fails closed
//! with [`AmmError::ArithmeticOverflow`](crate::error::AmmError).

mod checked;
mod fixed_point;

pub use checked::CheckedArithmetic;
pub use fixed_point::{isqrt, mul_div};
