//! Algorithm configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::moneywap::AlgoError;
use crate::domain::moneywap::value_objects::{
    ClosePositionMode, DeadlineTime, ExecutionConfig, OrderSide,
};

/// Parameters of the execution to run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgoSettings {
    /// Instrument to execute.
    pub instrument_id: String,
    /// `buy` or `sell`.
    pub side: OrderSide,
    /// Notional to execute. May be omitted when `target_lots` is set.
    #[serde(default)]
    pub target_notional: Decimal,
    /// Deadline as `HH:MM` local time.
    pub deadline: DeadlineTime,
    /// Starting price. Zero or absent derives it from the price limits.
    #[serde(default)]
    pub limit_price: Option<Decimal>,
    /// `none` or `close_today`.
    #[serde(default)]
    pub close_position_mode: ClosePositionMode,
    /// Explicit lot target (quantity mode).
    #[serde(default)]
    pub target_lots: Option<u64>,
    /// Stop on the first tick at or after the deadline.
    #[serde(default)]
    pub stop_at_deadline: bool,
}

impl AlgoSettings {
    /// Build the validated execution configuration.
    ///
    /// # Errors
    ///
    /// Returns error if any field fails validation.
    pub fn to_execution_config(&self) -> Result<ExecutionConfig, AlgoError> {
        let mut builder =
            ExecutionConfig::builder(self.instrument_id.as_str(), self.side, self.deadline)
                .target_notional(self.target_notional)
                .close_position_mode(self.close_position_mode)
                .stop_at_deadline(self.stop_at_deadline);

        if let Some(price) = self.limit_price {
            builder = builder.limit_price(price);
        }
        if let Some(lots) = self.target_lots {
            builder = builder.target_lots(lots);
        }

        builder.build()
    }
}
