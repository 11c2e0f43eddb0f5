//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, LogFormat, ObservabilityConfig};

/// Initialize tracing/logging for the process from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops). A malformed
/// environment falls back to the defaults and is reported once logging is up.
pub fn init() {
    match ObservabilityConfig::from_env().and_then(|config| init_with(&config)) {
        Ok(()) => {}
        Err(err) => {
            let _ = init_with(&ObservabilityConfig::default());
            tracing::warn!("invalid observability config, using defaults: {err}");
        }
    }
}

/// Initialize tracing/logging with an explicit configuration.
///
/// Returns an error only for an unparsable filter; an already installed global
/// subscriber is left in place.
pub fn init_with(config: &ObservabilityConfig) -> Result<(), ConfigError> {
    let filter = build_filter(&config.filter)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    Ok(())
}

fn build_filter(directives: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(directives).map_err(|e| ConfigError::InvalidFilter {
        filter: directives.to_string(),
        reason: e.to_string(),
    })
}
