// ============================================================================
// Formatter
// Exact decimal -> display string with digit grouping
// ============================================================================

use crate::domain::{CalculatorConfig, FormatConfig};
use crate::numeric::{ExactDecimal, RoundingMode};

/// Renders values for display.
///
/// - `.` as the decimal point
/// - integer digits grouped (default: groups of 3 separated by a space)
/// - at most `max_fraction_digits` fractional digits, trailing zeros dropped
/// - never exponential notation
///
/// ```
/// use decimal_calculator::engine::Formatter;
///
/// let formatter = Formatter::default();
/// let value = "-1234567.8900".parse().unwrap();
/// assert_eq!(formatter.format(&value), "-1 234 567.89");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(config.format.clone())
    }

    pub fn format(&self, value: &ExactDecimal) -> String {
        let max_digits = self.config.max_fraction_digits;
        let shown = if value.scale() > max_digits {
            value.round_to(max_digits, RoundingMode::HalfEven)
        } else {
            value.clone()
        };

        // Display of ExactDecimal is plain positional notation
        let plain = shown.normalized().to_string();
        self.group_digits(&plain)
    }

    /// Insert the grouping separator every `group_size` integer digits,
    /// walking right to left and stopping at the sign.
    fn group_digits(&self, plain: &str) -> String {
        let (integer_part, fraction_part) = match plain.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (plain, None),
        };

        let mut reversed = String::with_capacity(plain.len() + plain.len() / 3);
        let mut count = 0;

        for c in integer_part.chars().rev() {
            if c == '-' {
                reversed.push(c);
                break;
            }
            if count > 0 && count % self.config.group_size == 0 {
                reversed.push(self.config.grouping_separator);
            }
            reversed.push(c);
            count += 1;
        }

        let mut formatted: String = reversed.chars().rev().collect();
        if let Some(fraction) = fraction_part {
            formatted.push('.');
            formatted.push_str(fraction);
        }
        formatted
    }
}
