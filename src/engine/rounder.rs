// ============================================================================
// Rounder
// Fixed intermediate rounding plus policy-selected final rounding
// ============================================================================

use crate::domain::RoundingPolicy;
use crate::engine::factory::create_rounding_strategy;
use crate::interfaces::RoundingStrategy;
use crate::numeric::{ExactDecimal, RoundingMode};
use std::sync::Arc;

/// Applies the two kinds of rounding used by the calculator.
///
/// - Intermediate: half-up to a fixed scale after every arithmetic step,
///   independent of the selected policy.
/// - Final: to a whole number through the strategy registered for the
///   requested [`RoundingPolicy`].
#[derive(Clone)]
pub struct Rounder {
    intermediate_scale: u32,
    strategies: Vec<Arc<dyn RoundingStrategy>>,
}

impl Rounder {
    /// Create a rounder with the built-in strategy for every policy
    pub fn new(intermediate_scale: u32) -> Self {
        Self {
            intermediate_scale,
            strategies: RoundingPolicy::ALL
                .into_iter()
                .map(create_rounding_strategy)
                .collect(),
        }
    }

    /// Replace the strategy used for `strategy.policy()`
    pub fn with_strategy(mut self, strategy: Arc<dyn RoundingStrategy>) -> Self {
        let policy = strategy.policy();
        self.strategies.retain(|existing| existing.policy() != policy);
        self.strategies.push(strategy);
        self
    }

    pub fn intermediate_scale(&self) -> u32 {
        self.intermediate_scale
    }

    /// Round half-up to the intermediate scale. An absent value is zero.
    pub fn round_intermediate(&self, value: Option<&ExactDecimal>) -> ExactDecimal {
        match value {
            Some(value) => value.round_to(self.intermediate_scale, RoundingMode::HalfUp),
            None => ExactDecimal::zero().round_to(self.intermediate_scale, RoundingMode::HalfUp),
        }
    }

    /// Round to a whole number under `policy`.
    pub fn round_final(&self, value: &ExactDecimal, policy: RoundingPolicy) -> ExactDecimal {
        let strategy = self
            .strategies
            .iter()
            .find(|strategy| strategy.policy() == policy);

        match strategy {
            Some(strategy) => {
                let rounded = strategy.round(value);
                tracing::debug!("{} applied: {} -> {}", strategy.name(), value, rounded);
                rounded
            },
            // Every policy is registered in new(); with_strategy only replaces
            None => create_rounding_strategy(policy).round(value),
        }
    }
}

impl Default for Rounder {
    fn default() -> Self {
        Self::new(10)
    }
}
