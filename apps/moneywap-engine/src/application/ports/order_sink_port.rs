//! Order Sink Port (Driven Port)
//!
//! Fire-and-forget order submission. Fills come back asynchronously through
//! the controller's `on_trade` entry point.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::moneywap::value_objects::{ClosePositionMode, OrderSide};
use crate::domain::shared::{InstrumentId, OrderId};

/// One slice order sent by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceOrder {
    /// Client order ID.
    pub order_id: OrderId,
    /// Instrument to trade.
    pub instrument_id: InstrumentId,
    /// Buy or sell.
    pub side: OrderSide,
    /// Limit price.
    pub price: Decimal,
    /// Lots.
    pub quantity: u64,
    /// Close tag, forwarded untouched.
    pub close_position_mode: ClosePositionMode,
}

impl SliceOrder {
    /// Create a slice order with a freshly generated client ID.
    #[must_use]
    pub fn new(
        instrument_id: InstrumentId,
        side: OrderSide,
        price: Decimal,
        quantity: u64,
        close_position_mode: ClosePositionMode,
    ) -> Self {
        Self {
            order_id: OrderId::generate(),
            instrument_id,
            side,
            price,
            quantity,
            close_position_mode,
        }
    }
}

/// Port for sending orders to the venue.
///
/// Submission has no synchronous result. Rejections and fills are the
/// host's concern.
pub trait OrderSinkPort: Send + Sync {
    /// Send an order.
    fn submit(&self, order: SliceOrder);
}
