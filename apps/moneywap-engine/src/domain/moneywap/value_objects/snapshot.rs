//! Variables snapshot published to observers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AlgoStatus;
use crate::domain::shared::InstrumentId;

/// Point-in-time view of the mutable execution state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariablesSnapshot {
    /// Instrument being executed.
    pub instrument_id: InstrumentId,
    /// Lots confirmed by fills.
    pub filled_quantity: u64,
    /// Lots per slice order.
    pub order_volume: u64,
    /// Ticks since the interval was last reset.
    pub ticks_since_last_action: u64,
    /// Ticks since initialization.
    pub total_ticks_elapsed: u64,
    /// Notional target.
    pub target_notional: Decimal,
    /// Seconds (ticks) between slice attempts.
    pub interval_seconds: u64,
    /// Lots to execute.
    pub target_quantity: u64,
    /// Lots sent.
    pub orders_placed_count: u64,
    /// Estimated notional spent at submission time.
    pub notional_spent: Decimal,
    /// Working limit price.
    pub current_limit_price: Decimal,
    /// Lifecycle status.
    pub status: AlgoStatus,
}
