//! Execution Observer Port (Driven Port)
//!
//! Receives parameter and variable snapshots plus human-readable log lines.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::moneywap::value_objects::{ExecutionConfig, VariablesSnapshot};

/// Severity of an observer log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Normal progress.
    Info,
    /// Something was skipped or ignored.
    Warn,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
        }
    }
}

/// Port for publishing execution progress.
///
/// All methods are fire-and-forget and must not block.
pub trait ExecutionObserverPort: Send + Sync {
    /// Called once with the validated parameters.
    fn on_parameters(&self, parameters: &ExecutionConfig);

    /// Called whenever the variables change.
    fn on_variables(&self, variables: &VariablesSnapshot);

    /// Called with a log line.
    fn on_log(&self, level: LogLevel, message: &str);
}

/// Observer that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl ExecutionObserverPort for NoOpObserver {
    fn on_parameters(&self, _parameters: &ExecutionConfig) {}

    fn on_variables(&self, _variables: &VariablesSnapshot) {}

    fn on_log(&self, _level: LogLevel, _message: &str) {}
}
