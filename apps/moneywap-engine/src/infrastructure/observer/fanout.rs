//! Observer that forwards to several observers.

use std::sync::Arc;

use crate::application::ports::{ExecutionObserverPort, LogLevel};
use crate::domain::moneywap::value_objects::{ExecutionConfig, VariablesSnapshot};

/// Forwards every event to each inner observer in order.
#[derive(Default, Clone)]
pub struct FanoutObserver {
    observers: Vec<Arc<dyn ExecutionObserverPort>>,
}

impl FanoutObserver {
    /// Create an empty fan-out.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer.
    #[must_use]
    pub fn with(mut self, observer: Arc<dyn ExecutionObserverPort>) -> Self {
        self.observers.push(observer);
        self
    }
}

impl std::fmt::Debug for FanoutObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FanoutObserver")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ExecutionObserverPort for FanoutObserver {
    fn on_parameters(&self, parameters: &ExecutionConfig) {
        for observer in &self.observers {
            observer.on_parameters(parameters);
        }
    }

    fn on_variables(&self, variables: &VariablesSnapshot) {
        for observer in &self.observers {
            observer.on_variables(variables);
        }
    }

    fn on_log(&self, level: LogLevel, message: &str) {
        for observer in &self.observers {
            observer.on_log(level, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::observer::RecordingObserver;

    #[test]
    fn forwards_to_every_observer() {
        let a = Arc::new(RecordingObserver::new());
        let b = Arc::new(RecordingObserver::new());
        let fanout = FanoutObserver::new()
            .with(Arc::clone(&a) as Arc<dyn ExecutionObserverPort>)
            .with(Arc::clone(&b) as Arc<dyn ExecutionObserverPort>);

        fanout.on_log(LogLevel::Warn, "no quote for 2330, retrying");

        assert_eq!(a.logs_at(LogLevel::Warn), vec!["no quote for 2330, retrying"]);
        assert_eq!(b.logs().len(), 1);
    }
}
