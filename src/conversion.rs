//! Conversion between arbitrary-precision decimals and `f64`
//!
//! Decimal to float rounds to the nearest double. Float to decimal is exact:
//! the decimal carries every digit of the binary value, so `0.1f64` becomes
//! `0.1000000000000000055511151231257827021181583404541015625`.

use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, ToPrimitive};

const MANTISSA_BITS: u32 = 52;
const EXPONENT_MASK: u64 = 0x7ff;
const EXPONENT_BIAS: i64 = 1023;

/// Convert a decimal to the nearest `f64`.
///
/// Magnitudes above `f64::MAX` become infinite and magnitudes below the
/// smallest subnormal become zero.
pub fn to_f64(value: &BigDecimal) -> f64 {
    // NaN is suppressed downstream, so an unconvertible value reads as absent
    ToPrimitive::to_f64(value).unwrap_or(f64::NAN)
}

/// Build the decimal holding the exact binary value of `value`.
///
/// Returns `None` for NaN and infinities. The scale of the result is the
/// smallest non-negative scale that represents the value exactly.
pub fn from_f64_exact(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    BigDecimal::from_f64(value)
}

/// Unbiased binary exponent of `value`.
///
/// Zero and subnormals report `-1023`, infinities and NaN report `1024`.
pub fn unbiased_exponent(value: f64) -> i32 {
    (((value.to_bits() >> MANTISSA_BITS) & EXPONENT_MASK) as i64 - EXPONENT_BIAS) as i32
}
