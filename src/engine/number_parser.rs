// ============================================================================
// Number Parser
// Raw operand strings -> exact decimals, with scale and range limits
// ============================================================================

use crate::domain::{CalculationError, CalculationResult, CalculatorConfig};
use crate::engine::range::RangeValidator;
use crate::numeric::ExactDecimal;

/// Parses user-entered operands.
///
/// Accepted input:
/// - blank -> zero
/// - whitespace anywhere (digit grouping such as `986 282 584 876,635029`)
/// - `,` or `.` as the decimal separator
/// - `-?[0-9]+([.,][0-9]*)?` once whitespace is removed
///
/// Exponential notation is rejected outright, never interpreted.
#[derive(Debug, Clone)]
pub struct NumberParser {
    max_input_scale: u32,
    range: RangeValidator,
}

impl NumberParser {
    pub fn new(max_input_scale: u32, range: RangeValidator) -> Self {
        Self {
            max_input_scale,
            range,
        }
    }

    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(config.max_input_scale, RangeValidator::from_config(config))
    }

    pub fn max_input_scale(&self) -> u32 {
        self.max_input_scale
    }

    /// Parse and validate one operand; `field` names it in error messages.
    ///
    /// # Errors
    /// - `ExponentialNotation` if the input contains `e` or `E`
    /// - `InvalidFormat` if the input is not a plain decimal
    /// - `TooManyFractionDigits` if it has more than `max_input_scale`
    ///   digits after the separator
    /// - `OutOfRange` if the value is outside the configured range
    pub fn parse(&self, raw: &str, field: &str) -> CalculationResult<ExactDecimal> {
        if raw.trim().is_empty() {
            return Ok(ExactDecimal::zero());
        }

        let normalized: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| if c == ',' { '.' } else { c })
            .collect();

        if normalized.contains(['e', 'E']) {
            return Err(CalculationError::ExponentialNotation {
                field: field.to_string(),
            });
        }

        let value: ExactDecimal =
            normalized
                .parse()
                .map_err(|_| CalculationError::InvalidFormat {
                    field: field.to_string(),
                    input: raw.to_string(),
                })?;

        if value.scale() > self.max_input_scale {
            return Err(CalculationError::TooManyFractionDigits {
                field: field.to_string(),
                max: self.max_input_scale,
            });
        }

        self.range.validate(&value, field)?;

        Ok(value)
    }
}

impl Default for NumberParser {
    fn default() -> Self {
        Self::from_config(&CalculatorConfig::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;

    fn dec(s: &str) -> ExactDecimal {
        s.parse().unwrap()
    }

    fn parse(raw: &str) -> CalculationResult<ExactDecimal> {
        NumberParser::default().parse(raw, "First number")
    }

    #[test]
    fn test_blank_is_zero() {
        assert!(parse("").unwrap().is_zero());
        assert!(parse("   ").unwrap().is_zero());
        assert!(parse("\t\n").unwrap().is_zero());
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse("42").unwrap(), dec("42"));
        assert_eq!(parse("-0.5").unwrap(), dec("-0.5"));
        assert_eq!(parse("  7.  ").unwrap(), dec("7"));
    }

    #[test]
    fn test_grouping_and_comma_separator() {
        assert_eq!(
            parse("986 282 584 876,635029").unwrap(),
            dec("986282584876.635029")
        );
        assert_eq!(parse("1\u{a0}234,5").unwrap(), dec("1234.5"));
        assert_eq!(parse("- 12").unwrap(), dec("-12"));
    }

    #[test]
    fn test_exponential_rejected() {
        for raw in ["1e5", "1E5", "2.5e-3", "e"] {
            let err = parse(raw).unwrap_err();
            assert_eq!(
                err,
                CalculationError::ExponentialNotation {
                    field: "First number".to_string()
                },
                "input {:?}",
                raw
            );
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
    }

    #[test]
    fn test_invalid_format() {
        for raw in ["abc", "1.2.3", "1,2.3", ".5", "+5", "--5", "5-", "1_000", "0x10"] {
            let err = parse(raw).unwrap_err();
            assert_eq!(
                err,
                CalculationError::InvalidFormat {
                    field: "First number".to_string(),
                    input: raw.to_string(),
                },
                "input {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_invalid_format_message_names_field() {
        let err = parse("12abc").unwrap_err();
        assert_eq!(err.to_string(), "Invalid format for first number: 12abc");
    }

    #[test]
    fn test_scale_limit() {
        assert_eq!(parse("0.1234567891").unwrap().scale(), 10);

        let err = parse("0.12345678901").unwrap_err();
        assert_eq!(
            err,
            CalculationError::TooManyFractionDigits {
                field: "First number".to_string(),
                max: 10,
            }
        );

        // Trailing zeros still count as written digits
        assert!(parse("1.00000000000").is_err());
    }

    #[test]
    fn test_range_applied() {
        assert!(parse("1000000000000").is_ok());
        assert!(parse("-1 000 000 000 000,000000").is_ok());

        let err = parse("1000000000000.0000000001").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.field(), Some("First number"));
    }
}
