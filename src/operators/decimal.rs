//! Core decimal operators
//!
//! Everything except `abs` goes through the float pipeline in
//! [`crate::adapter`]. `abs` stays on the decimal so no digits are lost.

use crate::adapter::{DecimalValue, apply_unary};
use crate::conversion::unbiased_exponent;
use bigdecimal::BigDecimal;

/// Absolute value
pub fn abs(n: Option<&BigDecimal>) -> DecimalValue {
    n.map(BigDecimal::abs)
}

/// Arc cosine, in [0, pi]
pub fn acos(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, f64::acos)
}

/// Arc sine, in [-pi/2, pi/2]
pub fn asin(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, f64::asin)
}

/// Arc tangent, in [-pi/2, pi/2]
pub fn atan(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, f64::atan)
}

/// Cube root
pub fn cbrt(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, f64::cbrt)
}

/// Smallest integer greater than or equal to `n`
pub fn ceil(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, f64::ceil)
}

/// Cosine of an angle in radians
pub fn cos(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, f64::cos)
}

/// Hyperbolic cosine
pub fn cosh(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, f64::cosh)
}

/// e raised to `n`
pub fn exp(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, f64::exp)
}

/// e raised to `n`, minus one
pub fn expm1(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, f64::exp_m1)
}

/// Largest integer less than or equal to `n`
pub fn floor(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, f64::floor)
}

/// Unbiased binary exponent of `n` as a double
pub fn exponent(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, |v| f64::from(unbiased_exponent(v)))
}

/// Natural logarithm
pub fn loge(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, f64::ln)
}

/// Base 10 logarithm
pub fn log10(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, f64::log10)
}

/// Natural logarithm of `1 + n`
pub fn log1p(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, f64::ln_1p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_abs_keeps_every_digit() {
        // More digits than a double can carry
        let precise = dec("-0.12345678901234567890123456789");
        assert_eq!(abs(Some(&precise)), Some(dec("0.12345678901234567890123456789")));
    }

    #[test]
    fn test_abs_beyond_float_range() {
        assert_eq!(abs(Some(&dec("-1e400"))), Some(dec("1e400")));
    }

    #[test]
    fn test_exponent_of_out_of_range_input() {
        // Parses to infinity, whose exponent field is all ones
        assert_eq!(exponent(Some(&dec("1e400"))), Some(dec("1024")));
        assert_eq!(exponent(Some(&dec("0"))), Some(dec("-1023")));
    }

    #[test]
    fn test_log1p_domain() {
        assert_eq!(log1p(Some(&dec("0"))), Some(dec("0")));
        assert_eq!(log1p(Some(&dec("-1"))), None);
        assert_eq!(log1p(Some(&dec("-2"))), None);
    }
}
