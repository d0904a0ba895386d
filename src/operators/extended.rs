//! Extended operators
//!
//! Same contract as the core catalog. Binary operators return absent when
//! either argument is absent. `max` and `min` compare decimals directly.

use crate::adapter::{DecimalValue, apply_binary, apply_unary};
use bigdecimal::BigDecimal;

/// Sine of an angle in radians
pub fn sin(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, f64::sin)
}

/// Tangent of an angle in radians
pub fn tan(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, f64::tan)
}

/// Hyperbolic sine
pub fn sinh(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, f64::sinh)
}

/// Hyperbolic tangent
pub fn tanh(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, f64::tanh)
}

/// Square root
pub fn sqrt(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, f64::sqrt)
}

/// -1, 0 or 1 depending on the sign of `n`
pub fn signum(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, signum_f64)
}

/// Nearest integer, ties to even
pub fn rint(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, f64::round_ties_even)
}

/// Nearest integer, ties toward positive infinity
pub fn round(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, round_half_up)
}

/// Radians to degrees
pub fn to_degrees(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, f64::to_degrees)
}

/// Degrees to radians
pub fn to_radians(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, f64::to_radians)
}

/// Gap between `n` and the next double of larger magnitude
pub fn ulp(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, ulp_f64)
}

/// Next double toward positive infinity
pub fn next_up(n: Option<&BigDecimal>) -> DecimalValue {
    apply_unary(n, next_up_f64)
}

/// Angle theta of the polar form of (x, y)
pub fn atan2(y: Option<&BigDecimal>, x: Option<&BigDecimal>) -> DecimalValue {
    apply_binary(y, x, f64::atan2)
}

/// sqrt(x^2 + y^2) without intermediate overflow
pub fn hypot(x: Option<&BigDecimal>, y: Option<&BigDecimal>) -> DecimalValue {
    apply_binary(x, y, f64::hypot)
}

/// `a` raised to `b`
pub fn pow(a: Option<&BigDecimal>, b: Option<&BigDecimal>) -> DecimalValue {
    apply_binary(a, b, f64::powf)
}

/// Magnitude of the first argument with the sign of the second
pub fn copy_sign(magnitude: Option<&BigDecimal>, sign: Option<&BigDecimal>) -> DecimalValue {
    apply_binary(magnitude, sign, f64::copysign)
}

/// Greater of two decimals
pub fn max(a: Option<&BigDecimal>, b: Option<&BigDecimal>) -> DecimalValue {
    let (a, b) = (a?, b?);
    Some(std::cmp::max(a, b).clone())
}

/// Smaller of two decimals
pub fn min(a: Option<&BigDecimal>, b: Option<&BigDecimal>) -> DecimalValue {
    let (a, b) = (a?, b?);
    Some(std::cmp::min(a, b).clone())
}

fn signum_f64(v: f64) -> f64 {
    // f64::signum maps zero to one
    if v == 0.0 || v.is_nan() { v } else { v.signum() }
}

fn round_half_up(v: f64) -> f64 {
    let floor = v.floor();
    if v - floor >= 0.5 { floor + 1.0 } else { floor }
}

fn ulp_f64(v: f64) -> f64 {
    if !v.is_finite() {
        return v.abs();
    }
    let magnitude = v.abs();
    if magnitude == f64::MAX {
        return 2f64.powi(971);
    }
    f64::from_bits(magnitude.to_bits() + 1) - magnitude
}

fn next_up_f64(v: f64) -> f64 {
    if v.is_nan() || v == f64::INFINITY {
        return v;
    }
    if v == 0.0 {
        return f64::from_bits(1);
    }
    let bits = v.to_bits();
    f64::from_bits(if v > 0.0 { bits + 1 } else { bits - 1 })
}
