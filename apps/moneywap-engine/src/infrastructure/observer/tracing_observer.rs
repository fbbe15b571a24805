//! Observer that writes to `tracing`.

use crate::application::ports::{ExecutionObserverPort, LogLevel};
use crate::domain::moneywap::value_objects::{ExecutionConfig, VariablesSnapshot};

/// Routes observer events to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ExecutionObserverPort for TracingObserver {
    fn on_parameters(&self, parameters: &ExecutionConfig) {
        tracing::info!(
            instrument = %parameters.instrument_id(),
            side = %parameters.side(),
            target_notional = %parameters.target_notional(),
            target_lots = ?parameters.target_lots(),
            deadline = %parameters.deadline(),
            limit_price = ?parameters.limit_price(),
            close_position_mode = %parameters.close_position_mode(),
            stop_at_deadline = parameters.stop_at_deadline(),
            "MoneyWAP parameters"
        );
    }

    fn on_variables(&self, variables: &VariablesSnapshot) {
        tracing::trace!(
            instrument = %variables.instrument_id,
            status = %variables.status,
            ticks = variables.total_ticks_elapsed,
            ticks_since_last_action = variables.ticks_since_last_action,
            filled = variables.filled_quantity,
            lots_sent = variables.orders_placed_count,
            notional_spent = %variables.notional_spent,
            limit_price = %variables.current_limit_price,
            "MoneyWAP variables"
        );
    }

    fn on_log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => tracing::info!(target: "moneywap_engine::algo", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "moneywap_engine::algo", "{message}"),
        }
    }
}
