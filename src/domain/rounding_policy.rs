// ============================================================================
// Rounding Policy
// User-selectable behaviour of the final rounding to a whole number
// ============================================================================

use super::errors::CalculationError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selects how the finished result is rounded to an integer.
///
/// Intermediate rounding is unaffected by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum RoundingPolicy {
    /// Half-up: ties away from zero (0.5 -> 1, -0.5 -> -1)
    #[default]
    Mathematical,
    /// Half-to-even: ties to the even neighbour (2.5 -> 2, 3.5 -> 4)
    Bankers,
    /// Toward zero: the fractional part is dropped
    Truncate,
}

impl RoundingPolicy {
    pub const ALL: [RoundingPolicy; 3] = [
        RoundingPolicy::Mathematical,
        RoundingPolicy::Bankers,
        RoundingPolicy::Truncate,
    ];

    /// Canonical tag used at the request boundary
    pub fn tag(self) -> &'static str {
        match self {
            RoundingPolicy::Mathematical => "MATHEMATICAL",
            RoundingPolicy::Bankers => "BANKERS",
            RoundingPolicy::Truncate => "TRUNCATE",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RoundingPolicy::Mathematical => "Mathematical rounding",
            RoundingPolicy::Bankers => "Bankers (half-to-even) rounding",
            RoundingPolicy::Truncate => "Truncation (drop the fractional part)",
        }
    }
}

impl FromStr for RoundingPolicy {
    type Err = CalculationError;

    /// Tags are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|policy| policy.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| CalculationError::UnknownRoundingPolicy(tag.to_string()))
    }
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
