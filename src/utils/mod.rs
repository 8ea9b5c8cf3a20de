// ============================================================================
// Utilities Module
// Helper functions for applications embedding the calculator
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::{init_logging, LoggingInitError};
