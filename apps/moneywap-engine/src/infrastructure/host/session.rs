//! Paper session wiring.
//!
//! Builds a simulated market, a paper order sink and the observers from the
//! configuration, initializes the controller and runs it on a host task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::{AlgoHost, HostReport};
use crate::application::ports::{ExecutionObserverPort, SystemClock};
use crate::application::services::{ExecutionController, ExecutionPorts};
use crate::config::Config;
use crate::error::EngineError;
use crate::infrastructure::broker::PaperOrderSink;
use crate::infrastructure::market_data::{InMemoryQuoteBook, SimulatedMarket};
use crate::infrastructure::observer::{FanoutObserver, MetricsObserver, TracingObserver};

/// Run one paper execution to completion or cancellation.
///
/// # Errors
///
/// Returns error if the algo section is invalid, the controller refuses to
/// start, or the host task panics.
pub async fn run_paper_session(
    config: &Config,
    shutdown: CancellationToken,
) -> Result<HostReport, EngineError> {
    let execution = config.execution_config()?;
    let instrument_id = execution.instrument_id().clone();

    let book = Arc::new(InMemoryQuoteBook::new());
    let mut market = SimulatedMarket::new(instrument_id, &config.simulation, Arc::clone(&book));

    let (fill_tx, fill_rx) = mpsc::unbounded_channel();
    let orders = if config.simulation.auto_fill {
        PaperOrderSink::with_auto_fill(fill_tx)
    } else {
        PaperOrderSink::new()
    };

    let observer = FanoutObserver::new()
        .with(Arc::new(TracingObserver) as Arc<dyn ExecutionObserverPort>)
        .with(Arc::new(MetricsObserver) as Arc<dyn ExecutionObserverPort>);

    let controller = ExecutionController::initialize(
        execution,
        ExecutionPorts {
            quotes: book,
            orders: Arc::new(orders),
            observer: Arc::new(observer),
            clock: Arc::new(SystemClock),
        },
    )?;

    let host = AlgoHost::new(
        controller,
        fill_rx,
        Duration::from_millis(config.host.tick_interval_ms),
        shutdown,
    )
    .with_before_tick(Box::new(move || {
        market.step();
    }));

    tokio::spawn(host.run())
        .await
        .map_err(|e| EngineError::Host(e.to_string()))
}
