use core::str::FromStr;

use thiserror::Error;

/// Filter directives; takes precedence over `RUST_LOG`.
pub const FILTER_VAR: &str = "GILDEDROSE_LOG";
/// Output format (`json`, `pretty`, `compact`).
pub const FORMAT_VAR: &str = "GILDEDROSE_LOG_FORMAT";

const FALLBACK_FILTER_VAR: &str = "RUST_LOG";
const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid log format `{0}` (expected json, pretty or compact)")]
    InvalidFormat(String),

    #[error("invalid log filter `{filter}`: {reason}")]
    InvalidFilter { filter: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let filter = get(FILTER_VAR)
            .or_else(|| get(FALLBACK_FILTER_VAR))
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let format = match get(FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self { filter, format })
    }
}
