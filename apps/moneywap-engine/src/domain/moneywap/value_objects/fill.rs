//! Fill value object.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{InstrumentId, OrderId};

/// A confirmed (possibly partial) fill reported by the host.
///
/// Fills are instrument-level: the host is not required to correlate them
/// with a specific slice order, so `order_id` is informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    /// Instrument that traded.
    pub instrument_id: InstrumentId,
    /// Lots filled.
    pub quantity: u64,
    /// Fill price.
    pub price: Decimal,
    /// Originating client order ID, when the venue echoes it.
    pub order_id: Option<OrderId>,
    /// Fill timestamp.
    pub timestamp: DateTime<Utc>,
}

impl Fill {
    /// Create a new fill stamped with the current time.
    #[must_use]
    pub fn new(instrument_id: InstrumentId, quantity: u64, price: Decimal) -> Self {
        Self {
            instrument_id,
            quantity,
            price,
            order_id: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach the originating client order ID.
    #[must_use]
    pub fn with_order_id(mut self, order_id: OrderId) -> Self {
        self.order_id = Some(order_id);
        self
    }
}
