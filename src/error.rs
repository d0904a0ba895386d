//! Error types for operator registration and invocation
//!
//! Math operators never fail: undefined results are reported as an absent
//! value. These errors only cover misuse of the registry by the host.

use thiserror::Error;

/// Result type for registry operations
pub type OperatorResult<T> = Result<T, OperatorError>;

/// Errors raised while registering, configuring or invoking operators
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperatorError {
    /// No operator is registered under the requested name
    #[error("Operator '{name}' not found")]
    UnknownOperator {
        /// The requested operator name
        name: String,
    },

    /// Wrong number of arguments supplied
    #[error("Operator '{name}' expects {expected} argument(s), got {actual}")]
    InvalidArity {
        /// Operator name
        name: String,
        /// Declared arity
        expected: usize,
        /// Arguments actually provided
        actual: usize,
    },

    /// An operator with the same name is already registered
    #[error("Operator '{name}' is already registered")]
    AlreadyRegistered {
        /// The duplicate name
        name: String,
    },

    /// Operator metadata failed validation
    #[error("Invalid metadata for operator '{name}': {reason}")]
    InvalidMetadata {
        /// Operator name as declared
        name: String,
        /// Why the metadata was rejected
        reason: String,
    },

    /// Registry configuration failed to load or validate
    #[error("Invalid registry configuration: {reason}")]
    InvalidConfig {
        /// Why the configuration was rejected
        reason: String,
    },

    /// A decimal literal could not be parsed
    #[error("Invalid decimal literal '{literal}': {message}")]
    InvalidDecimal {
        /// The offending literal
        literal: String,
        /// Parser message
        message: String,
    },
}

impl OperatorError {
    /// Create an unknown operator error
    pub fn unknown_operator(name: impl Into<String>) -> Self {
        Self::UnknownOperator { name: name.into() }
    }

    /// Create an arity mismatch error
    pub fn invalid_arity(name: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::InvalidArity {
            name: name.into(),
            expected,
            actual,
        }
    }

    /// Create an already registered error
    pub fn already_registered(name: impl Into<String>) -> Self {
        Self::AlreadyRegistered { name: name.into() }
    }

    /// Create an invalid metadata error
    pub fn invalid_metadata(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidMetadata {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
