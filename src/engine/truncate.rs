// ============================================================================
// Truncate Rounding (toward zero)
// ============================================================================

use crate::domain::RoundingPolicy;
use crate::interfaces::RoundingStrategy;
use crate::numeric::{ExactDecimal, RoundingMode};

/// Drops the fractional part. Positive values round down, negative values
/// round up, so the magnitude never grows.
pub struct TruncateRounding;

impl TruncateRounding {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TruncateRounding {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundingStrategy for TruncateRounding {
    fn round(&self, value: &ExactDecimal) -> ExactDecimal {
        // RoundingMode::Down is symmetric: toward zero for either sign
        value.round_to(0, RoundingMode::Down)
    }

    fn policy(&self) -> RoundingPolicy {
        RoundingPolicy::Truncate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(s: &str) -> String {
        TruncateRounding::new().round(&s.parse().unwrap()).to_string()
    }

    #[test]
    fn test_positive_rounds_down() {
        assert_eq!(round("2.9999999999"), "2");
        assert_eq!(round("0.5"), "0");
        assert_eq!(round("5"), "5");
    }

    #[test]
    fn test_negative_rounds_toward_zero() {
        assert_eq!(round("-2.7"), "-2");
        assert_eq!(round("-0.9"), "0");
        assert_eq!(round("-5.0000000000"), "-5");
    }
}
