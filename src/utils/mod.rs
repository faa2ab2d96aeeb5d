// ============================================================================
// Utilities Module
// Helper functions shared by binaries, demos and benchmarks
// ============================================================================

pub mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
pub use logging::level_from_str;
