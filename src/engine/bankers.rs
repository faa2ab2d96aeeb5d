// ============================================================================
// Bankers Rounding (half-to-even)
// Ties go to the even neighbour so repeated rounding carries no upward bias
// ============================================================================

use crate::domain::RoundingPolicy;
use crate::interfaces::RoundingStrategy;
use crate::numeric::{ExactDecimal, RoundingMode};

/// Half-to-even rounding to a whole number
///
/// The value is split into integer and fractional parts. Only an exact
/// half (`|fraction| == 0.5`) is resolved toward the even integer; every
/// other fraction is rounded half-up.
///
/// # Example
/// ```text
///  2.5 ->  2      3.5 ->  4
/// -2.5 -> -2     -3.5 -> -4
///  2.6 ->  3
/// ```
pub struct BankersRounding {
    half: ExactDecimal,
}

impl BankersRounding {
    pub fn new() -> Self {
        Self {
            half: ExactDecimal::new(5, 1),
        }
    }
}

impl Default for BankersRounding {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundingStrategy for BankersRounding {
    fn round(&self, value: &ExactDecimal) -> ExactDecimal {
        let integer_part = value.trunc();
        let fractional_part = value.fract().abs();

        if fractional_part != self.half {
            return value.round_to(0, RoundingMode::HalfUp);
        }

        if integer_part.is_even_integer() {
            integer_part
        } else if value.is_negative() {
            &integer_part - &ExactDecimal::one()
        } else {
            &integer_part + &ExactDecimal::one()
        }
    }

    fn policy(&self) -> RoundingPolicy {
        RoundingPolicy::Bankers
    }
}
