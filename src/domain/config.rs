// ============================================================================
// Calculator Configuration
// Range bounds, scales and display settings for the evaluation pipeline
// ============================================================================

use crate::numeric::ExactDecimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inclusive bound magnitude, 1,000,000,000,000.000000
const RANGE_LIMIT_UNSCALED: i64 = 1_000_000_000_000_000_000;
const RANGE_LIMIT_SCALE: u32 = 6;

// ============================================================================
// Display Configuration
// ============================================================================

/// How results are rendered for display
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatConfig {
    /// Inserted between groups of integer digits
    pub grouping_separator: char,

    /// Number of integer digits per group
    pub group_size: usize,

    /// Maximum fractional digits shown; trailing zeros are never shown
    pub max_fraction_digits: u32,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            grouping_separator: ' ',
            group_size: 3,
            max_fraction_digits: 10,
        }
    }
}

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

/// Comprehensive configuration for creating a calculator
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Smallest value accepted at any stage (inclusive)
    pub min_value: ExactDecimal,

    /// Largest value accepted at any stage (inclusive)
    pub max_value: ExactDecimal,

    /// Maximum digits after the decimal separator in an operand
    pub max_input_scale: u32,

    /// Scale every intermediate value is rounded (half-up) to
    pub intermediate_scale: u32,

    /// Scale of a division quotient (half-up)
    pub division_scale: u32,

    /// Display settings
    pub format: FormatConfig,
}

impl CalculatorConfig {
    /// Standard four-operand configuration
    /// - Range: ±1,000,000,000,000.000000
    /// - Up to 10 fractional digits per operand
    /// - Intermediate scale 10, division scale 6
    /// - Space-grouped display with up to 10 fractional digits
    pub fn standard() -> Self {
        Self {
            min_value: ExactDecimal::new(-RANGE_LIMIT_UNSCALED, RANGE_LIMIT_SCALE),
            max_value: ExactDecimal::new(RANGE_LIMIT_UNSCALED, RANGE_LIMIT_SCALE),
            max_input_scale: 10,
            intermediate_scale: 10,
            division_scale: 6,
            format: FormatConfig::default(),
        }
    }

    /// Builder method: Set the inclusive value range
    pub fn with_range(mut self, min_value: ExactDecimal, max_value: ExactDecimal) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    /// Builder method: Set the maximum operand scale
    pub fn with_max_input_scale(mut self, scale: u32) -> Self {
        self.max_input_scale = scale;
        self
    }

    /// Builder method: Set the intermediate rounding scale
    pub fn with_intermediate_scale(mut self, scale: u32) -> Self {
        self.intermediate_scale = scale;
        self
    }

    /// Builder method: Set the division quotient scale
    pub fn with_division_scale(mut self, scale: u32) -> Self {
        self.division_scale = scale;
        self
    }

    /// Builder method: Set the display settings
    pub fn with_format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_value > self.max_value {
            return Err("Minimum value cannot exceed maximum value".to_string());
        }

        if self.min_value.is_positive() || self.max_value.is_negative() {
            return Err("Range must contain zero (blank operands evaluate to zero)".to_string());
        }

        if self.division_scale > self.intermediate_scale {
            return Err("Division scale cannot exceed intermediate scale".to_string());
        }

        if self.format.group_size == 0 {
            return Err("Group size must be positive".to_string());
        }

        let separator = self.format.grouping_separator;
        if separator.is_ascii_digit() || separator == '.' || separator == '-' {
            return Err(format!("Invalid grouping separator: {:?}", separator));
        }

        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::standard()
    }
}
