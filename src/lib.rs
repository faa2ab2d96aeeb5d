// ============================================================================
// Decimal Calculator Library
// Exact four-operand decimal calculator with pluggable rounding policies
// ============================================================================

//! # Decimal Calculator
//!
//! Evaluates expressions of the fixed shape `n1 op1 (n2 op2 n3) op3 n4` over
//! exact base-10 decimals and renders both the unrounded result and the
//! result rounded to an integer.
//!
//! ## Features
//!
//! - **Exact arithmetic** on arbitrary-precision decimals, never binary floats
//! - **Range checks** on every operand and after every arithmetic step
//! - **Pluggable rounding policies** (Mathematical, Bankers, Truncate)
//! - **Grouped output** with a plain-string renderer (no exponent form)
//! - **Evaluation events** for audit and tracing
//!
//! ## Example
//!
//! ```rust
//! use decimal_calculator::prelude::*;
//! use std::sync::Arc;
//!
//! let calculator = Calculator::new(CalculatorConfig::standard(), Arc::new(NoOpEventHandler));
//!
//! // 1 + (2 + 3) * 4: the trailing `*` binds the bracket to 4 first
//! let result = calculator.calculate_tags(["1", "2", "3", "4"], ["+", "+", "*"], "MATHEMATICAL");
//! assert_eq!(result.result(), Some("21"));
//!
//! // 0 + (5 / 2) + 0 under bankers rounding
//! let result = calculator.calculate_tags(["0", "5", "2", "0"], ["+", "/", "+"], "BANKERS");
//! assert_eq!(result.result(), Some("2.5"));
//! assert_eq!(result.rounded_result(), Some("2"));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Associativity, CalculationError, CalculationResult, CalculatorConfig, ErrorKind,
        Evaluation, EvaluationRequest, EvaluationResult, EvaluationTrace, FormatConfig, Operator,
        RoundingPolicy, Stage,
    };
    pub use crate::engine::{
        create_from_config, BankersRounding, Calculator, CalculatorBuilder, Formatter,
        MathematicalRounding, NumberParser, Rounder, TruncateRounding,
    };
    pub use crate::interfaces::{
        EvaluationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
        RecordingEventHandler, RoundingStrategy,
    };
    pub use crate::numeric::{ExactDecimal, NumericError, RoundingMode};
}
