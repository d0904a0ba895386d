//! Operator catalogs
//!
//! Each catalog is a static table of name, description, argument names and
//! function. The registry turns table rows into [`Operator`]s at start-up.

pub mod decimal;
pub mod extended;

use crate::error::OperatorResult;
use crate::metadata::OperatorMetadata;
use crate::operator::{BinaryOperatorFn, Operator, OperatorFn, UnaryOperatorFn};

/// Folder every catalog operator is listed under
pub const DECIMAL_FOLDER: &str = "Decimal";

/// One row of an operator catalog
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Operator name
    pub name: &'static str,
    /// English description
    pub description: &'static str,
    /// English argument names, in call order
    pub arguments: &'static [&'static str],
    /// Implementation
    pub function: OperatorFn,
}

impl CatalogEntry {
    const fn unary(name: &'static str, description: &'static str, function: UnaryOperatorFn) -> Self {
        Self {
            name,
            description,
            arguments: &["n"],
            function: OperatorFn::Unary(function),
        }
    }

    const fn binary(
        name: &'static str,
        description: &'static str,
        arguments: &'static [&'static str],
        function: BinaryOperatorFn,
    ) -> Self {
        Self {
            name,
            description,
            arguments,
            function: OperatorFn::Binary(function),
        }
    }

    /// Build the registrable operator for this row
    pub fn to_operator(&self, extended: bool) -> OperatorResult<Operator> {
        let mut metadata = OperatorMetadata::new(self.name, DECIMAL_FOLDER, self.description);
        for argument in self.arguments {
            metadata = metadata.with_argument(*argument);
        }
        if extended {
            metadata = metadata.extended();
        }
        Operator::new(metadata, self.function)
    }
}

/// The core catalog
pub const CORE_CATALOG: &[CatalogEntry] = &[
    CatalogEntry::unary("abs", "Returns the absolute value of a decimal value.", decimal::abs),
    CatalogEntry::unary(
        "acos",
        "Returns the arc cosine of a value; the returned angle is in the range 0.0 through pi.",
        decimal::acos,
    ),
    CatalogEntry::unary(
        "asin",
        "Returns the arc sine of a value; the returned angle is in the range -pi/2 through pi/2.",
        decimal::asin,
    ),
    CatalogEntry::unary(
        "atan",
        "Returns the arc tangent of a value; the returned angle is in the range -pi/2 through pi/2.",
        decimal::atan,
    ),
    CatalogEntry::unary("cbrt", "Returns the cube root of a value.", decimal::cbrt),
    CatalogEntry::unary(
        "ceil",
        "Returns the smallest value that is greater than or equal to the argument and is equal to a mathematical integer.",
        decimal::ceil,
    ),
    CatalogEntry::unary("cos", "Returns the trigonometric cosine of an angle.", decimal::cos),
    CatalogEntry::unary("cosh", "Returns the hyperbolic cosine of a value.", decimal::cosh),
    CatalogEntry::unary(
        "exp",
        "Returns Euler's number e raised to the power of a value.",
        decimal::exp,
    ),
    CatalogEntry::unary("expm1", "Returns e raised to the value, minus 1.", decimal::expm1),
    CatalogEntry::unary(
        "floor",
        "Returns the largest value that is less than or equal to the argument and is equal to a mathematical integer.",
        decimal::floor,
    ),
    CatalogEntry::unary(
        "exponent",
        "Returns the unbiased exponent used in the binary floating-point representation of a value.",
        decimal::exponent,
    ),
    CatalogEntry::unary(
        "loge",
        "Returns the natural logarithm (base e) of a value.",
        decimal::loge,
    ),
    CatalogEntry::unary("log10", "Returns the base 10 logarithm of a value.", decimal::log10),
    CatalogEntry::unary(
        "log1p",
        "Returns the natural logarithm of the sum of the argument and 1.",
        decimal::log1p,
    ),
];

/// Operators enabled by `RegistryConfig::include_extended`
pub const EXTENDED_CATALOG: &[CatalogEntry] = &[
    CatalogEntry::unary("sin", "Returns the trigonometric sine of an angle.", extended::sin),
    CatalogEntry::unary("tan", "Returns the trigonometric tangent of an angle.", extended::tan),
    CatalogEntry::unary("sinh", "Returns the hyperbolic sine of a value.", extended::sinh),
    CatalogEntry::unary("tanh", "Returns the hyperbolic tangent of a value.", extended::tanh),
    CatalogEntry::unary(
        "sqrt",
        "Returns the correctly rounded positive square root of a value.",
        extended::sqrt,
    ),
    CatalogEntry::unary(
        "signum",
        "Returns zero if the argument is zero, 1.0 if it is greater than zero, -1.0 if it is less than zero.",
        extended::signum,
    ),
    CatalogEntry::unary(
        "rint",
        "Returns the mathematical integer closest to the argument, ties to even.",
        extended::rint,
    ),
    CatalogEntry::unary(
        "round",
        "Returns the mathematical integer closest to the argument, ties rounding up.",
        extended::round,
    ),
    CatalogEntry::unary(
        "toDegrees",
        "Converts an angle measured in radians to an approximately equivalent angle measured in degrees.",
        extended::to_degrees,
    ),
    CatalogEntry::unary(
        "toRadians",
        "Converts an angle measured in degrees to an approximately equivalent angle measured in radians.",
        extended::to_radians,
    ),
    CatalogEntry::unary("ulp", "Returns the size of an ulp of the argument.", extended::ulp),
    CatalogEntry::unary(
        "nextUp",
        "Returns the floating-point value adjacent to the argument in the direction of positive infinity.",
        extended::next_up,
    ),
    CatalogEntry::binary(
        "atan2",
        "Returns the angle theta from the conversion of rectangular coordinates (x, y) to polar coordinates (r, theta).",
        &["y", "x"],
        extended::atan2,
    ),
    CatalogEntry::binary(
        "hypot",
        "Returns sqrt(x^2 + y^2) without intermediate overflow or underflow.",
        &["x", "y"],
        extended::hypot,
    ),
    CatalogEntry::binary(
        "pow",
        "Returns the value of the first argument raised to the power of the second argument.",
        &["a", "b"],
        extended::pow,
    ),
    CatalogEntry::binary(
        "copySign",
        "Returns the first argument with the sign of the second argument.",
        &["magnitude", "sign"],
        extended::copy_sign,
    ),
    CatalogEntry::binary("max", "Returns the greater of two decimal values.", &["a", "b"], extended::max),
    CatalogEntry::binary("min", "Returns the smaller of two decimal values.", &["a", "b"], extended::min),
];
