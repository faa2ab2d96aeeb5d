// ============================================================================
// Rounding Mode
// Direction used when an exact value is brought to fewer fractional digits
// ============================================================================

use std::fmt;

/// How discarded digits are resolved when reducing the scale of a value.
///
/// All modes are symmetric around zero: the magnitude is rounded and the
/// sign is reapplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Nearest neighbour, ties away from zero (0.5 -> 1, -0.5 -> -1)
    HalfUp,
    /// Nearest neighbour, ties to the even neighbour (2.5 -> 2, 3.5 -> 4)
    HalfEven,
    /// Toward zero (drop the discarded digits)
    Down,
    /// Away from zero whenever any discarded digit is non-zero
    Up,
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HalfUp => write!(f, "HalfUp"),
            Self::HalfEven => write!(f, "HalfEven"),
            Self::Down => write!(f, "Down"),
            Self::Up => write!(f, "Up"),
        }
    }
}
