//! Tracing Setup
//!
//! Installs the global `tracing` subscriber.
//!
//! # Configuration
//!
//! - `RUST_LOG`: filter directives; overrides `observability.logging.level`
//! - `observability.logging.format`: `pretty`, `compact` or `json`
//!
//! # Usage
//!
//! ```rust,ignore
//! use moneywap_engine::telemetry::init_tracing;
//!
//! init_tracing(&config.observability.logging)?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Errors installing the subscriber.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The configured filter directive does not parse.
    #[error("invalid log filter '{directive}': {message}")]
    InvalidFilter {
        /// The rejected directive.
        directive: String,
        /// Parser message.
        message: String,
    },
    /// The format is not one of `pretty`, `compact` or `json`.
    #[error("unknown log format '{0}'")]
    UnknownFormat(String),
    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Build the filter: `RUST_LOG` when set, otherwise the configured level.
///
/// # Errors
///
/// Returns `InvalidFilter` if the configured directive does not parse.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level).map_err(|e| TelemetryError::InvalidFilter {
        directive: config.level.clone(),
        message: e.to_string(),
    })
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns error if the filter or format is invalid, or a subscriber is
/// already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match config.format.as_str() {
        "pretty" => builder.pretty().try_init(),
        "compact" => builder.compact().try_init(),
        "json" => builder.json().flatten_event(true).try_init(),
        other => return Err(TelemetryError::UnknownFormat(other.to_string())),
    };

    result.map_err(|e| TelemetryError::Install(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_format() {
        let config = LoggingConfig {
            level: "info".to_string(),
            format: "xml".to_string(),
        };
        assert!(matches!(
            init_tracing(&config),
            Err(TelemetryError::UnknownFormat(_))
        ));
    }

    #[test]
    fn default_level_parses() {
        assert!(build_filter(&LoggingConfig::default()).is_ok());
    }
}
