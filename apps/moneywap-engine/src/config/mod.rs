//! Configuration module for the MoneyWAP engine.
//!
//! Loads a YAML file, interpolates environment variables and validates the
//! result before anything is started.
//!
//! # Usage
//!
//! ```rust,ignore
//! use moneywap_engine::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! let execution = config.execution_config()?;
//! ```

mod algo;
mod host;
mod observability;
mod simulation;

use std::net::SocketAddr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use algo::AlgoSettings;
pub use host::HostSettings;
pub use observability::{LoggingConfig, MetricsSettings, ObservabilityConfig};
pub use simulation::SimulationSettings;

use crate::domain::moneywap::AlgoError;
use crate::domain::moneywap::value_objects::ExecutionConfig;

/// Supported log output formats.
pub const LOG_FORMATS: [&str; 3] = ["pretty", "compact", "json"];

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),

    /// The algorithm section does not describe a valid execution.
    #[error("Invalid algo section: {0}")]
    Algo(#[from] AlgoError),
}

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Execution parameters.
    pub algo: AlgoSettings,
    /// Host loop settings.
    #[serde(default)]
    pub host: HostSettings,
    /// Simulated market settings.
    #[serde(default)]
    pub simulation: SimulationSettings,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Validated execution parameters from the `algo` section.
    ///
    /// # Errors
    ///
    /// Returns error if the section fails domain validation.
    pub fn execution_config(&self) -> Result<ExecutionConfig, ConfigError> {
        Ok(self.algo.to_execution_config()?)
    }
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("config.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map(|m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    config.algo.to_execution_config()?;

    if config.host.tick_interval_ms == 0 {
        return Err(ConfigError::ValidationError(
            "host.tick_interval_ms must be positive".to_string(),
        ));
    }

    let sim = &config.simulation;
    if sim.reference_price <= Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "simulation.reference_price must be positive".to_string(),
        ));
    }

    if sim.tick_size <= Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "simulation.tick_size must be positive".to_string(),
        ));
    }

    if sim.limit_band <= Decimal::ZERO || sim.limit_band >= Decimal::ONE {
        return Err(ConfigError::ValidationError(
            "simulation.limit_band must be between 0 and 1".to_string(),
        ));
    }

    let format = config.observability.logging.format.as_str();
    if !LOG_FORMATS.contains(&format) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {LOG_FORMATS:?}"
        )));
    }

    let metrics = &config.observability.metrics;
    if metrics.enabled && metrics.listen_addr.parse::<SocketAddr>().is_err() {
        return Err(ConfigError::ValidationError(format!(
            "observability.metrics.listen_addr '{}' is not a socket address",
            metrics.listen_addr
        )));
    }

    Ok(())
}
