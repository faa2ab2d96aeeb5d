// ============================================================================
// Numeric Module
// Exact base-10 arithmetic for the calculator pipeline
// ============================================================================
//
// This module provides:
// - ExactDecimal: arbitrary-precision decimal (BigInt unscaled value + scale)
// - RoundingMode: how a value is brought down to fewer fractional digits
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - No floating-point operations
// - Add/Sub/Mul are exact; only rescaling and division round, explicitly
// - Fallible operations return Result (no panics)

mod errors;
mod exact_decimal;
mod rounding_mode;

pub use errors::{NumericError, NumericResult};
pub use exact_decimal::ExactDecimal;
pub use rounding_mode::RoundingMode;
