// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod rounding_strategy;

pub use event_handler::{
    EvaluationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, RecordingEventHandler,
};
pub use rounding_strategy::RoundingStrategy;
