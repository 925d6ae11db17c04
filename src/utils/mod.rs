// ============================================================================
// Utilities Module
// Helper functions shared by binaries and demos
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
