//! Top-level error type for the engine.
//!
//! Wraps the error of every stage a paper session goes through so the
//! binary can propagate them with `?`.

use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::moneywap::AlgoError;
use crate::observability::MetricsError;
use crate::telemetry::TelemetryError;

/// Errors that abort a paper session.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration could not be loaded or validated.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The controller refused to start.
    #[error("execution failed to start: {0}")]
    Algo(#[from] AlgoError),

    /// The tracing subscriber could not be installed.
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    /// The metrics exporter could not be installed.
    #[error(transparent)]
    Metrics(#[from] MetricsError),

    /// The host loop task failed.
    #[error("host task failed: {0}")]
    Host(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algo_error_converts() {
        let err: EngineError = AlgoError::QuoteUnavailable {
            instrument_id: "2330".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "execution failed to start: No quote available for 2330"
        );
    }

    #[test]
    fn config_error_is_transparent() {
        let err: EngineError = ConfigError::ValidationError("bad".to_string()).into();
        assert_eq!(err.to_string(), "Config validation failed: bad");
    }
}
