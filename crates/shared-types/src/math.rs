//! # Fixed-Point Arithmetic
//!
//! Multiply-divide helpers used by the sanity bounds and the exchange rate.
//! Products are formed in 256 bits so `a * b` never overflows for `u128`
//! operands, or in 512 bits when three factors meet; quotients round toward
//! zero and saturate at `u128::MAX`.

use crate::entities::{Amount, U256};
use primitive_types::U512;

/// Denominator for basis-point fractions (1 bp = 0.01%).
pub const BASIS_POINTS_DENOMINATOR: u128 = 10_000;

/// Denominator for parts-per-million fractions.
pub const PPM_DENOMINATOR: u128 = 1_000_000;

/// Denominator for parts-per-trillion fractions.
pub const PPT_DENOMINATOR: u128 = 1_000_000_000_000;

/// `floor(a * b / denominator)`, or `None` when `denominator` is zero or the
/// quotient does not fit in 128 bits.
pub fn checked_mul_div(a: Amount, b: Amount, denominator: Amount) -> Option<Amount> {
    if denominator == 0 {
        return None;
    }
    let quotient = U256::from(a) * U256::from(b) / U256::from(denominator);
    if quotient > U256::from(u128::MAX) {
        None
    } else {
        Some(quotient.as_u128())
    }
}

/// `floor(a * b / denominator)`, saturating at `u128::MAX`.
///
/// A zero denominator saturates as well; callers that must distinguish it
/// use [`checked_mul_div`].
pub fn mul_div(a: Amount, b: Amount, denominator: Amount) -> Amount {
    checked_mul_div(a, b, denominator).unwrap_or(u128::MAX)
}

/// `floor(a * b * c / (d1 * d2))` with both products formed in 512 bits,
/// so no combination of `u128` operands overflows. Saturates like
/// [`mul_div`].
pub fn mul_div_wide(a: Amount, b: Amount, c: Amount, d1: Amount, d2: Amount) -> Amount {
    let divisor = U512::from(d1) * U512::from(d2);
    if divisor.is_zero() {
        return u128::MAX;
    }
    let quotient = U512::from(a) * U512::from(b) * U512::from(c) / divisor;
    if quotient > U512::from(u128::MAX) {
        u128::MAX
    } else {
        quotient.as_u128()
    }
}
