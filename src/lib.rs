//! Decimal math operators for business-rule engines
//!
//! A catalog of named operators over optional arbitrary-precision decimals.
//! Each operator converts its argument to `f64`, applies a standard math
//! function and converts the result back to the exact decimal value of the
//! double. An absent argument gives an absent result, and so does any NaN or
//! infinite result. Operators never return an error.
//!
//! ```
//! use decimal_math_operators::{create_standard_registry, parse_decimal};
//!
//! let registry = create_standard_registry().unwrap();
//! let result = registry.invoke("ceil", &[parse_decimal("2.1").unwrap()]).unwrap();
//! assert_eq!(result, parse_decimal("3").unwrap());
//!
//! // Outside the domain of acos
//! assert_eq!(registry.invoke("acos", &[parse_decimal("2").unwrap()]).unwrap(), None);
//! ```

#![warn(missing_docs)]

pub mod adapter;
pub mod config;
pub mod conversion;
pub mod error;
pub mod metadata;
pub mod operator;
pub mod operators;
pub mod registry;
pub mod value;

pub use adapter::{DecimalValue, apply_binary, apply_unary};
pub use bigdecimal::BigDecimal;
pub use config::RegistryConfig;
pub use error::{OperatorError, OperatorResult};
pub use metadata::{ArgumentMetadata, LocalizedText, OperatorMetadata};
pub use operator::{Operator, OperatorFn};
pub use registry::OperatorRegistry;
pub use value::{format_decimal, parse_decimal};

/// Create a registry with the core catalog
///
/// Same as [`OperatorRegistry::with_config`] with the default configuration.
pub fn create_standard_registry() -> OperatorResult<OperatorRegistry> {
    OperatorRegistry::with_config(&RegistryConfig::default())
}
