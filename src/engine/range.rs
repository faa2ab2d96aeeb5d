// ============================================================================
// Range Validation
// Inclusive bounds re-applied after every arithmetic step
// ============================================================================

use crate::domain::{CalculationError, CalculationResult, CalculatorConfig};
use crate::numeric::ExactDecimal;

/// Checks values against an inclusive `[min, max]` range.
///
/// Intermediate values can leave the range even when every operand is
/// inside it, so the check runs at each stage, not just on input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeValidator {
    min: ExactDecimal,
    max: ExactDecimal,
}

impl RangeValidator {
    pub fn new(min: ExactDecimal, max: ExactDecimal) -> Self {
        Self { min, max }
    }

    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(config.min_value.clone(), config.max_value.clone())
    }

    pub fn min(&self) -> &ExactDecimal {
        &self.min
    }

    pub fn max(&self) -> &ExactDecimal {
        &self.max
    }

    /// # Errors
    /// Returns `OutOfRange` naming `field` when `value < min` or `value > max`.
    pub fn validate(&self, value: &ExactDecimal, field: &str) -> CalculationResult<()> {
        if *value < self.min || *value > self.max {
            return Err(CalculationError::OutOfRange {
                field: field.to_string(),
                min: self.min.clone(),
                max: self.max.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;

    fn dec(s: &str) -> ExactDecimal {
        s.parse().unwrap()
    }

    fn standard() -> RangeValidator {
        RangeValidator::from_config(&CalculatorConfig::standard())
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let range = standard();
        assert!(range.validate(&dec("1000000000000"), "x").is_ok());
        assert!(range.validate(&dec("-1000000000000.0000000000"), "x").is_ok());
        assert!(range.validate(&dec("0"), "x").is_ok());
    }

    #[test]
    fn test_out_of_range() {
        let range = standard();

        let err = range
            .validate(&dec("1000000000000.0000000001"), "Final result")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.field(), Some("Final result"));

        assert!(range.validate(&dec("-1000000000000.000001"), "x").is_err());
    }
}
