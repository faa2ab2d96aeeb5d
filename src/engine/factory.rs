// ============================================================================
// Calculator Factory
// Creates calculators and rounding strategies with proper configuration
// ============================================================================

use crate::domain::config::{CalculatorConfig, FormatConfig};
use crate::domain::RoundingPolicy;
use crate::engine::{BankersRounding, Calculator, MathematicalRounding, Rounder, TruncateRounding};
use crate::interfaces::{EventHandler, RoundingStrategy};
use crate::numeric::ExactDecimal;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `event_handler` - Event handler for evaluation events
///
/// # Returns
/// * `Result<Calculator, String>` - Configured calculator or error
///
/// # Example
/// ```
/// use decimal_calculator::prelude::*;
/// use decimal_calculator::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::standard();
/// let calculator = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Calculator, String> {
    // Validate configuration first
    config.validate()?;

    Ok(Calculator::new(config, event_handler))
}

/// Creates the built-in rounding strategy for a policy
pub fn create_rounding_strategy(policy: RoundingPolicy) -> Arc<dyn RoundingStrategy> {
    match policy {
        RoundingPolicy::Mathematical => Arc::new(MathematicalRounding::new()),
        RoundingPolicy::Bankers => Arc::new(BankersRounding::new()),
        RoundingPolicy::Truncate => Arc::new(TruncateRounding::new()),
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use decimal_calculator::prelude::*;
/// use decimal_calculator::engine::factory::CalculatorBuilder;
/// use std::sync::Arc;
/// use rust_decimal::Decimal;
///
/// let calculator = CalculatorBuilder::new()
///     .with_range(Decimal::new(-1_000_000, 0), Decimal::new(1_000_000, 0))
///     .with_max_input_scale(4)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// ```
pub struct CalculatorBuilder {
    config: CalculatorConfig,
    strategies: Vec<Arc<dyn RoundingStrategy>>,
}

impl CalculatorBuilder {
    /// Create a new builder with the standard configuration
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::standard(),
            strategies: Vec::new(),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self {
            config,
            strategies: Vec::new(),
        }
    }

    // ========================================================================
    // Limits
    // ========================================================================

    /// Set the inclusive value range (rust_decimal bounds at the API boundary)
    pub fn with_range(mut self, min: rust_decimal::Decimal, max: rust_decimal::Decimal) -> Self {
        self.config.min_value = ExactDecimal::from_decimal(min);
        self.config.max_value = ExactDecimal::from_decimal(max);
        self
    }

    /// Set the maximum operand scale
    pub fn with_max_input_scale(mut self, scale: u32) -> Self {
        self.config.max_input_scale = scale;
        self
    }

    // ========================================================================
    // Precision
    // ========================================================================

    /// Set the intermediate rounding scale
    pub fn with_intermediate_scale(mut self, scale: u32) -> Self {
        self.config.intermediate_scale = scale;
        self
    }

    /// Set the division quotient scale
    pub fn with_division_scale(mut self, scale: u32) -> Self {
        self.config.division_scale = scale;
        self
    }

    // ========================================================================
    // Display and Rounding
    // ========================================================================

    /// Set the grouping separator and group size
    pub fn with_grouping(mut self, separator: char, group_size: usize) -> Self {
        self.config.format = FormatConfig {
            grouping_separator: separator,
            group_size,
            ..self.config.format
        };
        self
    }

    /// Set the maximum displayed fractional digits
    pub fn with_max_fraction_digits(mut self, digits: u32) -> Self {
        self.config.format.max_fraction_digits = digits;
        self
    }

    /// Replace the built-in strategy for `strategy.policy()`
    pub fn with_rounding_strategy(mut self, strategy: Arc<dyn RoundingStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the calculator
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<Calculator, String> {
        self.config.validate()?;

        let rounder = self
            .strategies
            .into_iter()
            .fold(Rounder::new(self.config.intermediate_scale), Rounder::with_strategy);

        Ok(Calculator::with_rounder(rounder, self.config, event_handler))
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
