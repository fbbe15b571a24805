//! Observer that updates Prometheus gauges.

use crate::application::ports::{ExecutionObserverPort, LogLevel};
use crate::domain::moneywap::value_objects::{ExecutionConfig, VariablesSnapshot};
use crate::observability;

/// Mirrors every variables snapshot into gauges.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObserver;

impl ExecutionObserverPort for MetricsObserver {
    fn on_parameters(&self, _parameters: &ExecutionConfig) {}

    fn on_variables(&self, variables: &VariablesSnapshot) {
        let instrument = variables.instrument_id.as_str();
        observability::update_filled_lots(instrument, variables.filled_quantity);
        observability::update_notional_spent(instrument, variables.notional_spent);
        observability::update_limit_price(instrument, variables.current_limit_price);
        observability::update_running(instrument, variables.status.is_running());
    }

    fn on_log(&self, _level: LogLevel, _message: &str) {}
}
