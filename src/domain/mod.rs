// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod errors;
pub mod evaluation;
pub mod operator;
pub mod request;
pub mod rounding_policy;

pub use config::{CalculatorConfig, FormatConfig};
pub use errors::{CalculationError, CalculationResult, ErrorKind};
pub use evaluation::{Associativity, Evaluation, EvaluationTrace, Stage};
pub use operator::Operator;
pub use request::{EvaluationRequest, EvaluationResult};
pub use rounding_policy::RoundingPolicy;
