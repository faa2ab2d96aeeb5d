// ============================================================================
// Rounding Strategy Interface
// Defines the contract for pluggable final-rounding policies
// ============================================================================

use crate::domain::RoundingPolicy;
use crate::numeric::ExactDecimal;

/// Strategy pattern interface for final rounding
/// Implementations: Mathematical (half-up), Bankers (half-to-even), Truncate
pub trait RoundingStrategy: Send + Sync {
    /// Round `value` to a whole number (scale 0)
    fn round(&self, value: &ExactDecimal) -> ExactDecimal;

    /// The policy this strategy implements
    fn policy(&self) -> RoundingPolicy;

    /// Get the strategy name for logging
    fn name(&self) -> &str {
        self.policy().description()
    }
}
