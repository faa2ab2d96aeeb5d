// ============================================================================
// Engine Module
// Contains the core calculation pipeline
// ============================================================================

mod bankers;
mod calculator;
mod evaluator;
mod formatter;
mod mathematical;
mod number_parser;
mod range;
mod rounder;
mod truncate;

pub mod factory;

pub use bankers::BankersRounding;
pub use calculator::{Calculator, OPERAND_FIELDS};
pub use evaluator::Evaluator;
pub use factory::{create_from_config, create_rounding_strategy, CalculatorBuilder};
pub use formatter::Formatter;
pub use mathematical::MathematicalRounding;
pub use number_parser::NumberParser;
pub use range::RangeValidator;
pub use rounder::Rounder;
pub use truncate::TruncateRounding;
