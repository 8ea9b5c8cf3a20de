// ============================================================================
// Logging Setup
// Installs a tracing-subscriber fmt subscriber for binaries and demos
// ============================================================================
//
// The library only emits `tracing` events:
// - numeric: debug! when an operand is rejected (division by zero, negative sqrt)
// - engine:  debug! when an expression is rejected, trace! on success
//
// Applications that already install their own subscriber should not call this.
// ============================================================================

use tracing::Level;

/// Error returned when a global subscriber is already installed
pub type LoggingInitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Install a global `fmt` subscriber filtering at `level`.
///
/// # Errors
/// Fails if a global default subscriber has already been set.
pub fn init_logging(level: Level) -> Result<(), LoggingInitError> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .try_init()
}
