//! Shared convert, compute, sanitize and convert-back pipeline
//!
//! Every float-backed operator is one of these helpers applied to a plain
//! `f64` transform. An absent argument short-circuits before the transform
//! runs, and a NaN or infinite result comes back as absent.

use crate::conversion::{from_f64_exact, to_f64};
use bigdecimal::BigDecimal;

/// Optional decimal: `None` is the absence state, distinct from zero
pub type DecimalValue = Option<BigDecimal>;

/// Float transform backing a unary operator
pub type UnaryTransform = fn(f64) -> f64;

/// Float transform backing a binary operator
pub type BinaryTransform = fn(f64, f64) -> f64;

/// Apply `transform` to a single optional decimal.
pub fn apply_unary(value: Option<&BigDecimal>, transform: UnaryTransform) -> DecimalValue {
    let input = to_f64(value?);
    sanitize(transform(input))
}

/// Apply `transform` to two optional decimals; absent if either is absent.
pub fn apply_binary(
    left: Option<&BigDecimal>,
    right: Option<&BigDecimal>,
    transform: BinaryTransform,
) -> DecimalValue {
    let (left, right) = (to_f64(left?), to_f64(right?));
    sanitize(transform(left, right))
}

/// Turn a float result into a decimal, suppressing NaN and infinities.
pub fn sanitize(result: f64) -> DecimalValue {
    let decimal = from_f64_exact(result);
    if decimal.is_none() {
        log::debug!("suppressing non-finite result {result}");
    }
    decimal
}
