//! Paper order sink.
//!
//! Records every slice order and, with a fill channel attached, fills it in
//! full at its limit price.

use parking_lot::Mutex;
use tokio::sync::mpsc::UnboundedSender;

use crate::application::ports::{OrderSinkPort, SliceOrder};
use crate::domain::moneywap::value_objects::Fill;

/// In-process order sink for paper sessions and tests.
#[derive(Debug, Default)]
pub struct PaperOrderSink {
    orders: Mutex<Vec<SliceOrder>>,
    fills: Option<UnboundedSender<Fill>>,
}

impl PaperOrderSink {
    /// Create a sink that only records orders.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink that fills every order through `fills`.
    #[must_use]
    pub fn with_auto_fill(fills: UnboundedSender<Fill>) -> Self {
        Self {
            orders: Mutex::new(Vec::new()),
            fills: Some(fills),
        }
    }

    /// Orders received so far.
    #[must_use]
    pub fn orders(&self) -> Vec<SliceOrder> {
        self.orders.lock().clone()
    }

    /// Number of orders received.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.orders.lock().len()
    }
}

impl OrderSinkPort for PaperOrderSink {
    fn submit(&self, order: SliceOrder) {
        tracing::debug!(
            order_id = %order.order_id,
            side = %order.side,
            price = %order.price,
            quantity = order.quantity,
            close = %order.close_position_mode,
            "Paper order accepted"
        );

        if let Some(fills) = &self.fills {
            let fill = Fill::new(order.instrument_id.clone(), order.quantity, order.price)
                .with_order_id(order.order_id.clone());
            if fills.send(fill).is_err() {
                tracing::debug!(order_id = %order.order_id, "Fill channel closed");
            }
        }

        self.orders.lock().push(order);
    }
}
