// ============================================================================
// Mathematical Rounding (half-up)
// The rounding taught in school: ties move away from zero
// ============================================================================

use crate::domain::RoundingPolicy;
use crate::interfaces::RoundingStrategy;
use crate::numeric::{ExactDecimal, RoundingMode};

/// Half-up rounding to a whole number
///
/// # Example
/// ```text
///  2.5 ->  3
/// -2.5 -> -3
///  2.4 ->  2
/// ```
pub struct MathematicalRounding;

impl MathematicalRounding {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MathematicalRounding {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundingStrategy for MathematicalRounding {
    fn round(&self, value: &ExactDecimal) -> ExactDecimal {
        value.round_to(0, RoundingMode::HalfUp)
    }

    fn policy(&self) -> RoundingPolicy {
        RoundingPolicy::Mathematical
    }
}
