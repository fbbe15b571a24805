//! Observability module for metrics.
//!
//! Prometheus export and the counters and gauges the engine records.

mod metrics;

pub use metrics::{
    MetricsConfig, MetricsError, init_metrics, record_fill, record_order_submitted,
    record_quote_unavailable, record_reprice, update_filled_lots, update_limit_price,
    update_notional_spent, update_running,
};
