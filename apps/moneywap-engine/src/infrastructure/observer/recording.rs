//! Observer that keeps everything it receives.

use parking_lot::Mutex;

use crate::application::ports::{ExecutionObserverPort, LogLevel};
use crate::domain::moneywap::value_objects::{ExecutionConfig, VariablesSnapshot};

/// Records parameters, snapshots and log lines for later inspection.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    parameters: Mutex<Vec<ExecutionConfig>>,
    variables: Mutex<Vec<VariablesSnapshot>>,
    logs: Mutex<Vec<(LogLevel, String)>>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters received.
    #[must_use]
    pub fn parameters(&self) -> Vec<ExecutionConfig> {
        self.parameters.lock().clone()
    }

    /// Snapshots received, oldest first.
    #[must_use]
    pub fn variables(&self) -> Vec<VariablesSnapshot> {
        self.variables.lock().clone()
    }

    /// Most recent snapshot.
    #[must_use]
    pub fn last_variables(&self) -> Option<VariablesSnapshot> {
        self.variables.lock().last().cloned()
    }

    /// Log lines received.
    #[must_use]
    pub fn logs(&self) -> Vec<(LogLevel, String)> {
        self.logs.lock().clone()
    }

    /// Log lines at `level`.
    #[must_use]
    pub fn logs_at(&self, level: LogLevel) -> Vec<String> {
        self.logs
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl ExecutionObserverPort for RecordingObserver {
    fn on_parameters(&self, parameters: &ExecutionConfig) {
        self.parameters.lock().push(parameters.clone());
    }

    fn on_variables(&self, variables: &VariablesSnapshot) {
        self.variables.lock().push(variables.clone());
    }

    fn on_log(&self, level: LogLevel, message: &str) {
        self.logs.lock().push((level, message.to_string()));
    }
}
