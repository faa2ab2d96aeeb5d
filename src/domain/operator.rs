// ============================================================================
// Operator Domain Model
// ============================================================================

use super::errors::CalculationError;
use crate::numeric::{ExactDecimal, NumericResult, RoundingMode};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "+"))]
    Add,
    #[cfg_attr(feature = "serde", serde(rename = "-"))]
    Subtract,
    #[cfg_attr(feature = "serde", serde(rename = "*"))]
    Multiply,
    #[cfg_attr(feature = "serde", serde(rename = "/"))]
    Divide,
}

impl Operator {
    /// All operators in display order
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Operator::Add => "Addition",
            Operator::Subtract => "Subtraction",
            Operator::Multiply => "Multiplication",
            Operator::Divide => "Division",
        }
    }

    /// Multiply and Divide bind tighter than Add and Subtract
    #[inline]
    pub fn is_high_priority(self) -> bool {
        matches!(self, Operator::Multiply | Operator::Divide)
    }

    /// Look up an operator by its display symbol.
    ///
    /// # Errors
    /// Returns `UnknownOperator` for anything other than `+ - * /`.
    pub fn from_symbol(symbol: &str) -> Result<Self, CalculationError> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == symbol)
            .ok_or_else(|| CalculationError::UnknownOperator(symbol.to_string()))
    }

    /// Apply the operator to two operands.
    ///
    /// Add, Subtract and Multiply are exact. Divide produces a quotient with
    /// `division_scale` fractional digits, rounded half-up.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when dividing by an exact zero.
    pub fn apply(
        self,
        lhs: &ExactDecimal,
        rhs: &ExactDecimal,
        division_scale: u32,
    ) -> NumericResult<ExactDecimal> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide => lhs.checked_div(rhs, division_scale, RoundingMode::HalfUp),
        }
    }
}

impl FromStr for Operator {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s.trim())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
