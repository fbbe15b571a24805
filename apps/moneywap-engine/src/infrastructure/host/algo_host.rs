//! Algo Host
//!
//! Drives one controller from a tokio timer and a fill channel. Every call
//! into the controller happens on the task running [`AlgoHost::run`], so
//! the controller itself needs no locking.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::application::ports::{ClockPort, ExecutionObserverPort, OrderSinkPort, QuoteSourcePort};
use crate::application::services::{ExecutionController, FillOutcome, TickOutcome};
use crate::domain::moneywap::value_objects::{Fill, VariablesSnapshot};
use crate::observability;

/// Hook run before every timer tick (e.g. stepping a simulated market).
pub type TickHook = Box<dyn FnMut() + Send>;

enum HostEvent {
    Shutdown,
    Fill(Fill),
    Tick,
}

/// Summary of a finished host run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostReport {
    /// Variables when the loop exited.
    pub final_snapshot: VariablesSnapshot,
    /// Timer ticks delivered to the controller.
    pub ticks: u64,
    /// Fills delivered to the controller.
    pub fills_forwarded: u64,
    /// Whether the run ended through cancellation.
    pub cancelled: bool,
}

/// Tokio driver loop for an [`ExecutionController`].
pub struct AlgoHost<Q, O, E, C>
where
    Q: QuoteSourcePort,
    O: OrderSinkPort,
    E: ExecutionObserverPort,
    C: ClockPort,
{
    controller: ExecutionController<Q, O, E, C>,
    fills: UnboundedReceiver<Fill>,
    tick_interval: Duration,
    shutdown: CancellationToken,
    before_tick: Option<TickHook>,
}

impl<Q, O, E, C> AlgoHost<Q, O, E, C>
where
    Q: QuoteSourcePort,
    O: OrderSinkPort,
    E: ExecutionObserverPort,
    C: ClockPort,
{
    /// Create a host for an initialized controller.
    pub fn new(
        controller: ExecutionController<Q, O, E, C>,
        fills: UnboundedReceiver<Fill>,
        tick_interval: Duration,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            controller,
            fills,
            tick_interval,
            shutdown,
            before_tick: None,
        }
    }

    /// Run `hook` before every tick.
    #[must_use]
    pub fn with_before_tick(mut self, hook: TickHook) -> Self {
        self.before_tick = Some(hook);
        self
    }

    /// Drive the controller until it stops or the token is cancelled.
    pub async fn run(mut self) -> HostReport {
        let mut ticker = tokio::time::interval(self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;

        let instrument = self.controller.config().instrument_id().to_string();
        let mut ticks = 0_u64;
        let mut fills_forwarded = 0_u64;
        let mut cancelled = false;

        tracing::info!(
            instrument = %instrument,
            tick_interval_ms = self.tick_interval.as_millis() as u64,
            "Host loop started"
        );

        while self.controller.is_running() {
            let event = tokio::select! {
                biased;

                () = self.shutdown.cancelled() => HostEvent::Shutdown,
                Some(fill) = self.fills.recv() => HostEvent::Fill(fill),
                _ = ticker.tick() => HostEvent::Tick,
            };

            match event {
                HostEvent::Shutdown => {
                    tracing::info!(
                        instrument = %instrument,
                        "Shutdown requested, stopping execution"
                    );
                    self.controller.stop();
                    cancelled = true;
                }
                HostEvent::Fill(fill) => {
                    fills_forwarded += 1;
                    match self.controller.on_trade(&fill) {
                        FillOutcome::Recorded | FillOutcome::TargetReached => {
                            observability::record_fill(&instrument, fill.quantity);
                        }
                        FillOutcome::Ignored => {}
                    }
                }
                HostEvent::Tick => {
                    if let Some(hook) = self.before_tick.as_mut() {
                        hook();
                    }
                    ticks += 1;
                    record_tick(&instrument, &self.controller.on_timer_tick());
                }
            }
        }

        let final_snapshot = self.controller.snapshot();
        tracing::info!(
            instrument = %instrument,
            ticks,
            fills_forwarded,
            filled = final_snapshot.filled_quantity,
            lots_sent = final_snapshot.orders_placed_count,
            cancelled,
            "Host loop finished"
        );

        HostReport {
            final_snapshot,
            ticks,
            fills_forwarded,
            cancelled,
        }
    }
}

fn record_tick(instrument: &str, outcome: &TickOutcome) {
    match outcome {
        TickOutcome::Submitted(order) => {
            observability::record_order_submitted(
                instrument,
                &order.side.to_string().to_lowercase(),
            );
        }
        TickOutcome::Repriced { .. } => observability::record_reprice(instrument),
        TickOutcome::QuoteUnavailable => observability::record_quote_unavailable(instrument),
        _ => {}
    }
}
