//! Parsing and rendering of host-supplied decimal values

use crate::adapter::DecimalValue;
use crate::error::{OperatorError, OperatorResult};
use bigdecimal::{BigDecimal, Zero};
use std::str::FromStr;

/// Literal accepted for the absence state
pub const ABSENT_LITERAL: &str = "null";

/// Parse a decimal literal, treating `null` as the absence state
pub fn parse_decimal(literal: &str) -> OperatorResult<DecimalValue> {
    let trimmed = literal.trim();
    if trimmed.eq_ignore_ascii_case(ABSENT_LITERAL) {
        return Ok(None);
    }

    BigDecimal::from_str(trimmed)
        .map(Some)
        .map_err(|e| OperatorError::InvalidDecimal {
            literal: literal.to_string(),
            message: e.to_string(),
        })
}

/// Largest decimal exponent rendered in plain notation
///
/// Beyond this the digit string would be dominated by padding zeros, so the
/// value is rendered in scientific notation instead.
pub const PLAIN_EXPONENT_LIMIT: i64 = 4096;

/// Render a value in plain (non-scientific) notation, or `null` when absent
///
/// Values whose exponent lies outside [`PLAIN_EXPONENT_LIMIT`] fall back to
/// scientific notation.
pub fn format_decimal(value: Option<&BigDecimal>) -> String {
    let Some(decimal) = value else {
        return ABSENT_LITERAL.to_string();
    };
    if decimal.is_zero() {
        return "0".to_string();
    }

    let (_, scale) = decimal.as_bigint_and_exponent();
    let exponent = decimal.digits() as i64 - 1 - scale;
    if exponent.abs() > PLAIN_EXPONENT_LIMIT {
        decimal.to_scientific_notation()
    } else {
        decimal.to_plain_string()
    }
}
