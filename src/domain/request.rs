// ============================================================================
// Request / Result Records
// Plain boundary records consumed and produced by the calculator
// ============================================================================

use super::errors::CalculationError;
use super::{Operator, RoundingPolicy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Input of one evaluation of `n1 op1 (n2 op2 n3) op3 n4`.
///
/// Operands stay raw strings; parsing and validation happen inside the
/// calculator so errors can name the offending field. A blank operand is
/// zero, a missing operator is `+`, a missing policy is Mathematical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct EvaluationRequest {
    pub number1: String,
    pub number2: String,
    pub number3: String,
    pub number4: String,

    /// Between `number1` and the bracket
    pub op1: Option<Operator>,
    /// Inside the bracket, between `number2` and `number3`
    pub op2: Option<Operator>,
    /// Between the bracket and `number4`
    pub op3: Option<Operator>,

    #[cfg_attr(feature = "serde", serde(rename = "roundingType"))]
    pub rounding: Option<RoundingPolicy>,
}

impl EvaluationRequest {
    /// Create a request with the given operands and default operators/policy.
    pub fn new(numbers: [&str; 4]) -> Self {
        let [number1, number2, number3, number4] = numbers.map(str::to_string);
        Self {
            number1,
            number2,
            number3,
            number4,
            ..Self::default()
        }
    }

    /// Builder method: set all three operators
    pub fn with_operators(mut self, op1: Operator, op2: Operator, op3: Operator) -> Self {
        self.op1 = Some(op1);
        self.op2 = Some(op2);
        self.op3 = Some(op3);
        self
    }

    /// Builder method: set the final rounding policy
    pub fn with_rounding(mut self, policy: RoundingPolicy) -> Self {
        self.rounding = Some(policy);
        self
    }

    /// Build a request from boundary tags.
    ///
    /// Blank operator or policy tags fall back to the defaults.
    ///
    /// # Errors
    /// Returns `UnknownOperator` / `UnknownRoundingPolicy` for unrecognised tags.
    pub fn from_tags(
        numbers: [&str; 4],
        operators: [&str; 3],
        rounding: &str,
    ) -> Result<Self, CalculationError> {
        let parse_op = |tag: &str| -> Result<Option<Operator>, CalculationError> {
            if tag.trim().is_empty() {
                Ok(None)
            } else {
                tag.parse().map(Some)
            }
        };

        let [op1, op2, op3] = operators;
        let mut request = Self::new(numbers);
        request.op1 = parse_op(op1)?;
        request.op2 = parse_op(op2)?;
        request.op3 = parse_op(op3)?;
        request.rounding = if rounding.trim().is_empty() {
            None
        } else {
            Some(rounding.parse()?)
        };

        Ok(request)
    }

    /// Raw operand strings in expression order
    pub fn numbers(&self) -> [&str; 4] {
        [
            self.number1.as_str(),
            self.number2.as_str(),
            self.number3.as_str(),
            self.number4.as_str(),
        ]
    }

    /// Operators in expression order, defaults applied
    pub fn operators(&self) -> [Operator; 3] {
        [
            self.op1.unwrap_or_default(),
            self.op2.unwrap_or_default(),
            self.op3.unwrap_or_default(),
        ]
    }

    /// Final rounding policy, default applied
    pub fn rounding_policy(&self) -> RoundingPolicy {
        self.rounding.unwrap_or_default()
    }

    /// Human-readable expression, e.g. `1 + (2 + 3) * 4`
    pub fn expression(&self) -> String {
        let show = |raw: &str| {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                "0".to_string()
            } else {
                trimmed.to_string()
            }
        };
        let [op1, op2, op3] = self.operators();
        format!(
            "{} {} ({} {} {}) {} {}",
            show(&self.number1),
            op1,
            show(&self.number2),
            op2,
            show(&self.number3),
            op3,
            show(&self.number4)
        )
    }
}

/// Outcome of one evaluation: both display strings, or an error message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum EvaluationResult {
    Success {
        result: String,
        #[cfg_attr(feature = "serde", serde(rename = "roundedResult"))]
        rounded_result: String,
    },
    Failure {
        error: String,
    },
}

impl EvaluationResult {
    pub fn is_error(&self) -> bool {
        matches!(self, EvaluationResult::Failure { .. })
    }

    /// Unrounded display value, if the evaluation succeeded
    pub fn result(&self) -> Option<&str> {
        match self {
            EvaluationResult::Success { result, .. } => Some(result),
            EvaluationResult::Failure { .. } => None,
        }
    }

    /// Final-rounded display value, if the evaluation succeeded
    pub fn rounded_result(&self) -> Option<&str> {
        match self {
            EvaluationResult::Success { rounded_result, .. } => Some(rounded_result),
            EvaluationResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            EvaluationResult::Success { .. } => None,
            EvaluationResult::Failure { error } => Some(error),
        }
    }
}

impl From<CalculationError> for EvaluationResult {
    fn from(err: CalculationError) -> Self {
        EvaluationResult::Failure {
            error: err.to_string(),
        }
    }
}
