//! Tracing and logging (shared setup).

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize observability from an explicit configuration.
pub fn init_with(config: &ObservabilityConfig) -> Result<(), ConfigError> {
    tracing::init_with(config)
}

/// Environment-driven logging configuration.
pub mod config;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};
