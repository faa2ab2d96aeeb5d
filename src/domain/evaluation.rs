// ============================================================================
// Evaluation Domain Model
// Typed outcome of a successful evaluation, including the stage trace
// ============================================================================

use super::RoundingPolicy;
use crate::numeric::ExactDecimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Order in which the bracket was combined with the outer operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Associativity {
    /// `(n1 op1 bracket) op3 n4`
    LeftToRight,
    /// `n1 op1 (bracket op3 n4)`: a trailing `*` or `/` pulls the bracket
    /// in before a leading `+` or `-`
    BracketFirst,
}

/// Named points in the pipeline at which values are range-checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stage {
    Bracket,
    RightPart,
    LeftPart,
    Final,
}

impl Stage {
    /// Label used in range error messages
    pub fn label(self) -> &'static str {
        match self {
            Stage::Bracket => "Bracket result",
            Stage::RightPart => "Intermediate result (right part)",
            Stage::LeftPart => "Intermediate result (left part)",
            Stage::Final => "Final result",
        }
    }
}

/// Values produced at each stage of the evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvaluationTrace {
    /// `n2 op2 n3`, intermediate-rounded
    pub bracket: ExactDecimal,
    pub associativity: Associativity,
    /// Right part (`bracket op3 n4`) or left part (`n1 op1 bracket`),
    /// depending on `associativity`
    pub intermediate: ExactDecimal,
    /// Final unrounded result, intermediate-rounded
    pub result: ExactDecimal,
}

impl EvaluationTrace {
    /// Stage at which `intermediate` was validated
    pub fn intermediate_stage(&self) -> Stage {
        match self.associativity {
            Associativity::LeftToRight => Stage::LeftPart,
            Associativity::BracketFirst => Stage::RightPart,
        }
    }
}

/// A successful evaluation before display formatting
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Evaluation {
    /// Unrounded result (intermediate scale)
    pub raw: ExactDecimal,
    /// Result after the final rounding policy (scale 0)
    pub rounded: ExactDecimal,
    pub policy: RoundingPolicy,
    pub trace: EvaluationTrace,
}
