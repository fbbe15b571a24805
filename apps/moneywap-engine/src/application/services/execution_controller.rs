//! Execution Controller
//!
//! Drives one MoneyWAP execution. The host calls [`ExecutionController::on_timer_tick`]
//! on a fixed cadence and forwards every fill through
//! [`ExecutionController::on_trade`]; the controller counts ticks and acts
//! once per planned interval.

use std::sync::Arc;

use crate::application::ports::{
    ClockPort, ExecutionObserverPort, LogLevel, OrderSinkPort, QuoteSourcePort, SliceOrder,
};
use crate::domain::moneywap::AlgoError;
use crate::domain::moneywap::aggregate::ExecutionState;
use crate::domain::moneywap::services::{PriceWalk, SliceDecision, SlicePlan, SlicePlanner};
use crate::domain::moneywap::value_objects::{AlgoStatus, ExecutionConfig, Fill, VariablesSnapshot};
use rust_decimal::Decimal;

/// Collaborators the controller talks to.
pub struct ExecutionPorts<Q, O, E, C> {
    /// Latest quotes.
    pub quotes: Arc<Q>,
    /// Order submission.
    pub orders: Arc<O>,
    /// Snapshot and log sink.
    pub observer: Arc<E>,
    /// Local wall clock.
    pub clock: Arc<C>,
}

impl<Q, O, E, C> Clone for ExecutionPorts<Q, O, E, C> {
    fn clone(&self) -> Self {
        Self {
            quotes: Arc::clone(&self.quotes),
            orders: Arc::clone(&self.orders),
            observer: Arc::clone(&self.observer),
            clock: Arc::clone(&self.clock),
        }
    }
}

/// What a timer tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The controller is stopped; nothing happened.
    Inactive,
    /// The completion target was met on this tick and the controller stopped.
    Completed,
    /// The deadline cutoff was reached and the controller stopped.
    DeadlineReached,
    /// The interval has not elapsed yet.
    Waiting,
    /// The interval elapsed but no quote was available; the next tick retries.
    QuoteUnavailable,
    /// A slice order was sent.
    Submitted(SliceOrder),
    /// Top-of-book was unfavorable; the working price moved.
    Repriced {
        /// Previous working price.
        from: Decimal,
        /// New working price.
        to: Decimal,
    },
    /// Fills already cover the target quantity.
    NothingRemaining,
}

/// What a fill did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// The controller is stopped or the fill belongs to another instrument.
    Ignored,
    /// The fill was counted.
    Recorded,
    /// The fill completed the target quantity and the controller stopped.
    TargetReached,
}

/// MoneyWAP execution controller.
///
/// Exists only once initialization succeeded, so a controller is always
/// either `Running` or `Stopped`.
pub struct ExecutionController<Q, O, E, C>
where
    Q: QuoteSourcePort,
    O: OrderSinkPort,
    E: ExecutionObserverPort,
    C: ClockPort,
{
    config: ExecutionConfig,
    plan: SlicePlan,
    state: ExecutionState,
    ports: ExecutionPorts<Q, O, E, C>,
}

impl<Q, O, E, C> ExecutionController<Q, O, E, C>
where
    Q: QuoteSourcePort,
    O: OrderSinkPort,
    E: ExecutionObserverPort,
    C: ClockPort,
{
    /// Plan the execution from a reference quote and start running.
    ///
    /// # Errors
    ///
    /// Returns `QuoteUnavailable` if the quote source has nothing for the
    /// instrument, or any sizing error from [`SlicePlanner::plan`].
    pub fn initialize(
        config: ExecutionConfig,
        ports: ExecutionPorts<Q, O, E, C>,
    ) -> Result<Self, AlgoError> {
        match Self::build_plan(&config, &ports) {
            Ok(plan) => {
                let state = ExecutionState::new(&config, &plan);
                let controller = Self {
                    config,
                    plan,
                    state,
                    ports,
                };
                controller.announce();
                Ok(controller)
            }
            Err(e) => {
                tracing::error!(
                    instrument = %config.instrument_id(),
                    error = %e,
                    "MoneyWAP initialization failed"
                );
                ports
                    .observer
                    .on_log(LogLevel::Warn, &format!("initialization failed: {e}"));
                Err(e)
            }
        }
    }

    fn build_plan(
        config: &ExecutionConfig,
        ports: &ExecutionPorts<Q, O, E, C>,
    ) -> Result<SlicePlan, AlgoError> {
        let quote = ports
            .quotes
            .get_quote(config.instrument_id())
            .ok_or_else(|| AlgoError::QuoteUnavailable {
                instrument_id: config.instrument_id().to_string(),
            })?;
        SlicePlanner::plan(config, &quote, ports.clock.now())
    }

    fn announce(&self) {
        tracing::info!(
            instrument = %self.config.instrument_id(),
            side = %self.config.side(),
            target_quantity = self.plan.target_quantity,
            interval_seconds = self.plan.interval_seconds,
            starting_price = %self.plan.starting_price,
            deadline = %self.plan.deadline_at,
            "MoneyWAP started"
        );
        self.ports.observer.on_parameters(&self.config);
        self.publish_variables();
        self.log(
            LogLevel::Info,
            &format!(
                "every {} seconds, {} lots in total",
                self.plan.interval_seconds, self.plan.target_quantity
            ),
        );
    }

    /// Account for a fill reported by the host.
    pub fn on_trade(&mut self, fill: &Fill) -> FillOutcome {
        if !self.state.is_running() {
            return FillOutcome::Ignored;
        }

        if fill.instrument_id != *self.state.instrument_id() {
            tracing::warn!(
                expected = %self.state.instrument_id(),
                received = %fill.instrument_id,
                "Ignoring fill for another instrument"
            );
            self.log(
                LogLevel::Warn,
                &format!("ignored fill for {}", fill.instrument_id),
            );
            return FillOutcome::Ignored;
        }

        let reached = self.state.record_fill(fill.quantity);
        tracing::debug!(
            quantity = fill.quantity,
            price = %fill.price,
            filled = self.state.filled_quantity(),
            "Fill recorded"
        );

        if reached {
            self.log(
                LogLevel::Info,
                &format!(
                    "filled {} of {} lots, execution complete",
                    self.state.filled_quantity(),
                    self.state.target_quantity()
                ),
            );
            self.stop();
            FillOutcome::TargetReached
        } else {
            self.publish_variables();
            FillOutcome::Recorded
        }
    }

    /// Advance the controller by one tick.
    pub fn on_timer_tick(&mut self) -> TickOutcome {
        if !self.state.is_running() {
            return TickOutcome::Inactive;
        }

        self.state.record_tick();
        self.publish_variables();

        if self.state.completion_reached() {
            self.log(
                LogLevel::Info,
                &format!(
                    "target reached: {} lots sent, notional spent {}",
                    self.state.orders_placed_count(),
                    self.state.notional_spent()
                ),
            );
            self.stop();
            return TickOutcome::Completed;
        }

        if self.state.deadline_passed(self.ports.clock.now()) {
            self.log(
                LogLevel::Info,
                &format!(
                    "deadline {} reached with {} of {} lots filled",
                    self.state.deadline_at(),
                    self.state.filled_quantity(),
                    self.state.target_quantity()
                ),
            );
            self.stop();
            return TickOutcome::DeadlineReached;
        }

        if !self.state.interval_elapsed() {
            return TickOutcome::Waiting;
        }
        self.state.reset_interval();

        let Some(quote) = self.ports.quotes.get_quote(self.state.instrument_id()) else {
            self.state.rearm_interval();
            tracing::warn!(
                instrument = %self.state.instrument_id(),
                "No quote, retrying next tick"
            );
            self.log(
                LogLevel::Warn,
                &format!("no quote for {}, retrying", self.state.instrument_id()),
            );
            return TickOutcome::QuoteUnavailable;
        };

        let slice_size = self.state.slice_size();
        if slice_size == 0 {
            return TickOutcome::NothingRemaining;
        }

        let side = self.state.side();
        match PriceWalk::decide(side, &quote, self.state.current_limit_price(), slice_size) {
            SliceDecision::Submit { price, quantity } => {
                let order = SliceOrder::new(
                    self.state.instrument_id().clone(),
                    side,
                    price,
                    quantity,
                    self.state.close_position_mode(),
                );
                self.ports.orders.submit(order.clone());
                self.state.record_submission(quote.last_price);

                tracing::info!(
                    order_id = %order.order_id,
                    side = %side,
                    price = %price,
                    quantity,
                    lots_sent = self.state.orders_placed_count(),
                    "Slice submitted"
                );
                self.log(
                    LogLevel::Info,
                    &format!("{side} {quantity} lots at {price}"),
                );
                self.publish_variables();
                TickOutcome::Submitted(order)
            }
            SliceDecision::Reprice { to } => {
                let from = self.state.reprice(to);
                tracing::info!(side = %side, from = %from, to = %to, "Working price moved");
                self.log(
                    LogLevel::Info,
                    &format!("book unfavorable, working price {from} -> {to}"),
                );
                self.publish_variables();
                TickOutcome::Repriced { from, to }
            }
        }
    }

    /// Stop the execution. Returns `false` if it was already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.state.stop() {
            return false;
        }
        tracing::info!(
            instrument = %self.state.instrument_id(),
            filled = self.state.filled_quantity(),
            lots_sent = self.state.orders_placed_count(),
            "MoneyWAP stopped"
        );
        self.publish_variables();
        true
    }

    fn publish_variables(&self) {
        self.ports.observer.on_variables(&self.state.snapshot());
    }

    fn log(&self, level: LogLevel, message: &str) {
        self.ports.observer.on_log(level, message);
    }

    /// Validated parameters.
    #[must_use]
    pub const fn config(&self) -> &ExecutionConfig {
        &self.config
    }

    /// Parameters fixed at initialization.
    #[must_use]
    pub const fn plan(&self) -> &SlicePlan {
        &self.plan
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &ExecutionState {
        &self.state
    }

    /// Current variables.
    #[must_use]
    pub fn snapshot(&self) -> VariablesSnapshot {
        self.state.snapshot()
    }

    /// Lifecycle status.
    #[must_use]
    pub const fn status(&self) -> AlgoStatus {
        self.state.status()
    }

    /// Whether the execution may still act.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.state.is_running()
    }
}
