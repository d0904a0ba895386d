//! Registered operator: a function pointer plus its metadata

use crate::adapter::DecimalValue;
use crate::error::{OperatorError, OperatorResult};
use crate::metadata::OperatorMetadata;
use bigdecimal::BigDecimal;

/// Unary operator entry point
pub type UnaryOperatorFn = fn(Option<&BigDecimal>) -> DecimalValue;

/// Binary operator entry point
pub type BinaryOperatorFn = fn(Option<&BigDecimal>, Option<&BigDecimal>) -> DecimalValue;

/// Callable behind an operator, tagged by arity
#[derive(Clone, Copy)]
pub enum OperatorFn {
    /// One argument
    Unary(UnaryOperatorFn),
    /// Two arguments
    Binary(BinaryOperatorFn),
}

impl OperatorFn {
    /// Number of arguments the function takes
    pub fn arity(&self) -> usize {
        match self {
            OperatorFn::Unary(_) => 1,
            OperatorFn::Binary(_) => 2,
        }
    }
}

impl std::fmt::Debug for OperatorFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperatorFn::Unary(_) => f.write_str("Unary"),
            OperatorFn::Binary(_) => f.write_str("Binary"),
        }
    }
}

/// A named operator the host can call
#[derive(Debug, Clone)]
pub struct Operator {
    metadata: OperatorMetadata,
    function: OperatorFn,
}

impl Operator {
    /// Pair metadata with a function, checking that both agree on arity
    pub fn new(metadata: OperatorMetadata, function: OperatorFn) -> OperatorResult<Self> {
        metadata
            .validate()
            .map_err(|reason| OperatorError::invalid_metadata(&metadata.name, reason))?;

        if metadata.arity() != function.arity() {
            return Err(OperatorError::invalid_metadata(
                &metadata.name,
                format!(
                    "declares {} argument(s) but the function takes {}",
                    metadata.arity(),
                    function.arity()
                ),
            ));
        }

        Ok(Self { metadata, function })
    }

    /// Operator name
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Number of arguments
    pub fn arity(&self) -> usize {
        self.function.arity()
    }

    /// Presentation metadata
    pub fn metadata(&self) -> &OperatorMetadata {
        &self.metadata
    }

    /// Underlying function
    pub fn function(&self) -> OperatorFn {
        self.function
    }

    /// Call the operator. Only an argument count mismatch is an error;
    /// undefined math results come back as `Ok(None)`.
    pub fn invoke(&self, args: &[DecimalValue]) -> OperatorResult<DecimalValue> {
        if args.len() != self.arity() {
            return Err(OperatorError::invalid_arity(
                self.name(),
                self.arity(),
                args.len(),
            ));
        }

        let result = match self.function {
            OperatorFn::Unary(f) => f(args[0].as_ref()),
            OperatorFn::Binary(f) => f(args[0].as_ref(), args[1].as_ref()),
        };
        log::trace!("{}({:?}) = {:?}", self.name(), args, result);
        Ok(result)
    }
}
