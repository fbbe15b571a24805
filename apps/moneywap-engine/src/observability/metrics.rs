//! Prometheus metrics for the MoneyWAP engine.
//!
//! # Example
//!
//! ```ignore
//! use moneywap_engine::observability::{init_metrics, MetricsConfig};
//!
//! init_metrics(&MetricsConfig::default())?;
//! record_order_submitted("2330", "buy");
//! ```

use metrics::{counter, gauge};
use metrics_exporter_prometheus::PrometheusBuilder;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::net::{Ipv4Addr, SocketAddr};

use crate::config::MetricsSettings;

/// Configuration for the metrics exporter.
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Address to bind the metrics HTTP listener.
    pub listen_addr: SocketAddr,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 9090)),
        }
    }
}

impl MetricsConfig {
    /// Create a new metrics configuration with custom address.
    #[must_use]
    pub const fn with_addr(addr: SocketAddr) -> Self {
        Self { listen_addr: addr }
    }
}

impl TryFrom<&MetricsSettings> for MetricsConfig {
    type Error = MetricsError;

    fn try_from(settings: &MetricsSettings) -> Result<Self, Self::Error> {
        settings
            .listen_addr
            .parse()
            .map(Self::with_addr)
            .map_err(|e| MetricsError::Configuration(format!("{}: {e}", settings.listen_addr)))
    }
}

/// Initialize the Prometheus metrics exporter.
///
/// This starts an HTTP server that exposes metrics at `/metrics`.
///
/// # Errors
///
/// Returns an error if the metrics exporter fails to start (e.g., port already in use).
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    PrometheusBuilder::new()
        .with_http_listener(config.listen_addr)
        .install()
        .map_err(|e| MetricsError::Installation(e.to_string()))?;

    tracing::info!(
        addr = %config.listen_addr,
        "Prometheus metrics exporter started"
    );

    Ok(())
}

/// Error type for metrics operations.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Failed to configure metrics exporter.
    #[error("metrics configuration error: {0}")]
    Configuration(String),
    /// Failed to install metrics exporter.
    #[error("metrics installation error: {0}")]
    Installation(String),
}

// ============================================================================
// Slice Metrics
// ============================================================================

/// Record a slice order sent.
pub fn record_order_submitted(instrument: &str, side: &str) {
    counter!(
        "moneywap_orders_submitted_total",
        "instrument" => instrument.to_string(),
        "side" => side.to_string()
    )
    .increment(1);
}

/// Record a fill forwarded to the controller.
pub fn record_fill(instrument: &str, lots: u64) {
    counter!("moneywap_fills_total", "instrument" => instrument.to_string()).increment(1);
    counter!("moneywap_filled_lots_total", "instrument" => instrument.to_string()).increment(lots);
}

/// Record a working-price move.
pub fn record_reprice(instrument: &str) {
    counter!("moneywap_reprices_total", "instrument" => instrument.to_string()).increment(1);
}

/// Record a qualifying tick that found no quote.
pub fn record_quote_unavailable(instrument: &str) {
    counter!(
        "moneywap_quote_unavailable_total",
        "instrument" => instrument.to_string()
    )
    .increment(1);
}

// ============================================================================
// State Gauges
// ============================================================================

/// Update the filled lots gauge.
pub fn update_filled_lots(instrument: &str, lots: u64) {
    gauge!("moneywap_filled_lots", "instrument" => instrument.to_string()).set(lots as f64);
}

/// Update the estimated notional gauge.
pub fn update_notional_spent(instrument: &str, notional: Decimal) {
    gauge!("moneywap_notional_spent", "instrument" => instrument.to_string())
        .set(notional.to_f64().unwrap_or_default());
}

/// Update the working price gauge.
pub fn update_limit_price(instrument: &str, price: Decimal) {
    gauge!("moneywap_limit_price", "instrument" => instrument.to_string())
        .set(price.to_f64().unwrap_or_default());
}

/// Update the running gauge (1 while running, 0 once stopped).
pub fn update_running(instrument: &str, running: bool) {
    gauge!("moneywap_running", "instrument" => instrument.to_string())
        .set(if running { 1.0 } else { 0.0 });
}
