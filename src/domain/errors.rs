// ============================================================================
// Calculation Errors
// Field-qualified failures reported by the calculator pipeline
// ============================================================================

use crate::numeric::{ExactDecimal, NumericError};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Broad category of a [`CalculationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    /// Malformed input, unsupported notation, unknown operator or policy,
    /// too many fractional digits
    Validation,
    /// A value fell outside the configured range at some stage
    Range,
    /// Arithmetic failure (division by zero)
    Arithmetic,
}

/// Errors produced while parsing, evaluating or rounding an expression.
///
/// Every variant renders a human-readable message that names the offending
/// field or stage where one applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    /// Operand does not match the plain decimal grammar
    InvalidFormat { field: String, input: String },
    /// Operand uses `e`/`E` notation
    ExponentialNotation { field: String },
    /// Operand has more fractional digits than allowed
    TooManyFractionDigits { field: String, max: u32 },
    /// Operator tag is not one of `+ - * /`
    UnknownOperator(String),
    /// Rounding policy tag is not recognised
    UnknownRoundingPolicy(String),
    /// Value outside `[min, max]`
    OutOfRange {
        field: String,
        min: ExactDecimal,
        max: ExactDecimal,
    },
    /// Arithmetic failure from the numeric layer
    Arithmetic(NumericError),
}

impl CalculationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalculationError::InvalidFormat { .. }
            | CalculationError::ExponentialNotation { .. }
            | CalculationError::TooManyFractionDigits { .. }
            | CalculationError::UnknownOperator(_)
            | CalculationError::UnknownRoundingPolicy(_) => ErrorKind::Validation,
            CalculationError::OutOfRange { .. } => ErrorKind::Range,
            CalculationError::Arithmetic(_) => ErrorKind::Arithmetic,
        }
    }

    /// The field or stage the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            CalculationError::InvalidFormat { field, .. }
            | CalculationError::ExponentialNotation { field }
            | CalculationError::TooManyFractionDigits { field, .. }
            | CalculationError::OutOfRange { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl fmt::Display for CalculationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationError::InvalidFormat { field, input } => {
                write!(f, "Invalid format for {}: {}", field.to_lowercase(), input)
            },
            CalculationError::ExponentialNotation { field } => {
                write!(f, "{}: exponential notation is not supported", field)
            },
            CalculationError::TooManyFractionDigits { field, max } => write!(
                f,
                "{}: too many digits after the decimal point (maximum {})",
                field, max
            ),
            CalculationError::UnknownOperator(tag) => write!(f, "Unknown operation: {}", tag),
            CalculationError::UnknownRoundingPolicy(tag) => {
                write!(f, "Unknown rounding type: {}", tag)
            },
            CalculationError::OutOfRange { field, min, max } => write!(
                f,
                "{} is outside the allowed range [{}, {}]",
                field, min, max
            ),
            CalculationError::Arithmetic(err) => write!(f, "Arithmetic error: {}", err),
        }
    }
}

impl std::error::Error for CalculationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalculationError::Arithmetic(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for CalculationError {
    fn from(err: NumericError) -> Self {
        CalculationError::Arithmetic(err)
    }
}

/// Result type alias for calculator operations
pub type CalculationResult<T> = Result<T, CalculationError>;
