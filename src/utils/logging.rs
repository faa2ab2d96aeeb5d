// ============================================================================
// Logging Setup
// Installs a tracing subscriber for the calculator's debug!/warn! output
// ============================================================================

use tracing::Level;

/// Parse a level name (`"trace"`, `"DEBUG"`, ...). Unknown names give `None`.
pub fn level_from_str(name: &str) -> Option<Level> {
    name.trim().parse().ok()
}

/// Install a global fmt subscriber at `level`.
///
/// Returns an error if a global subscriber is already set.
#[cfg(feature = "logging")]
pub fn init_logging(level: Level) -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| format!("Failed to install tracing subscriber: {}", e))
}
