//! Execution State Aggregate
//!
//! Owns the counters and working price of a single MoneyWAP execution. All
//! mutation goes through the transition methods below so the status and
//! tick invariants hold after every call.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::domain::moneywap::services::{LOT_NOTIONAL_MULTIPLIER, ORDER_VOLUME_PER_SLICE, SlicePlan};
use crate::domain::moneywap::value_objects::{
    AlgoStatus, ClosePositionMode, CompletionBasis, ExecutionConfig, OrderSide, VariablesSnapshot,
};
use crate::domain::shared::InstrumentId;

/// Mutable state of a running (or stopped) MoneyWAP execution.
///
/// Quantity is tracked from confirmed fills while notional is estimated
/// optimistically at submission time from the last price. The two can
/// diverge; completion checks read whichever one the configuration selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionState {
    instrument_id: InstrumentId,
    side: OrderSide,
    close_position_mode: ClosePositionMode,
    completion_basis: CompletionBasis,
    stop_at_deadline: bool,
    deadline_at: NaiveDateTime,
    target_notional: Decimal,
    target_quantity: u64,
    interval_seconds: u64,
    order_volume: u64,
    ticks_since_last_action: u64,
    total_ticks_elapsed: u64,
    filled_quantity: u64,
    orders_placed_count: u64,
    notional_spent: Decimal,
    current_limit_price: Decimal,
    status: AlgoStatus,
}

impl ExecutionState {
    /// Create the running state for a planned execution.
    #[must_use]
    pub fn new(config: &ExecutionConfig, plan: &SlicePlan) -> Self {
        Self {
            instrument_id: config.instrument_id().clone(),
            side: config.side(),
            close_position_mode: config.close_position_mode(),
            completion_basis: config.completion_basis(),
            stop_at_deadline: config.stop_at_deadline(),
            deadline_at: plan.deadline_at,
            target_notional: config.target_notional(),
            target_quantity: plan.target_quantity,
            interval_seconds: plan.interval_seconds,
            order_volume: ORDER_VOLUME_PER_SLICE,
            ticks_since_last_action: 0,
            total_ticks_elapsed: 0,
            filled_quantity: 0,
            orders_placed_count: 0,
            notional_spent: Decimal::ZERO,
            current_limit_price: plan.starting_price,
            status: AlgoStatus::Running,
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Count one timer tick.
    pub const fn record_tick(&mut self) {
        self.total_ticks_elapsed += 1;
        self.ticks_since_last_action += 1;
    }

    /// Whether enough ticks have passed to attempt a slice.
    #[must_use]
    pub const fn interval_elapsed(&self) -> bool {
        self.ticks_since_last_action >= self.interval_seconds
    }

    /// Start a new interval.
    pub const fn reset_interval(&mut self) {
        self.ticks_since_last_action = 0;
    }

    /// Make the next tick qualify again.
    pub const fn rearm_interval(&mut self) {
        self.ticks_since_last_action = self.interval_seconds.saturating_sub(1);
    }

    /// Whether the tick-side completion target has been met.
    #[must_use]
    pub fn completion_reached(&self) -> bool {
        match self.completion_basis {
            CompletionBasis::Notional => self.notional_spent >= self.target_notional,
            CompletionBasis::Lots => self.orders_placed_count >= self.target_quantity,
        }
    }

    /// Whether the opt-in deadline cutoff applies at `now`.
    #[must_use]
    pub fn deadline_passed(&self, now: NaiveDateTime) -> bool {
        self.stop_at_deadline && now >= self.deadline_at
    }

    /// Lots not yet confirmed by fills.
    #[must_use]
    pub const fn remaining_quantity(&self) -> u64 {
        self.target_quantity.saturating_sub(self.filled_quantity)
    }

    /// Lots to send on the next slice.
    #[must_use]
    pub fn slice_size(&self) -> u64 {
        self.order_volume.min(self.remaining_quantity())
    }

    /// Add confirmed lots. Returns `true` once the fills reach the target.
    pub const fn record_fill(&mut self, quantity: u64) -> bool {
        self.filled_quantity = self.filled_quantity.saturating_add(quantity);
        self.filled_quantity >= self.target_quantity
    }

    /// Account for a sent slice, estimating its notional from `last_price`.
    pub fn record_submission(&mut self, last_price: Decimal) {
        self.orders_placed_count += 1;
        self.notional_spent +=
            last_price * LOT_NOTIONAL_MULTIPLIER * Decimal::from(self.order_volume);
    }

    /// Move the working price, returning the previous one.
    pub const fn reprice(&mut self, to: Decimal) -> Decimal {
        let from = self.current_limit_price;
        self.current_limit_price = to;
        from
    }

    /// Transition to `Stopped`. Returns `false` if already stopped.
    pub const fn stop(&mut self) -> bool {
        if self.status.is_running() {
            self.status = AlgoStatus::Stopped;
            true
        } else {
            false
        }
    }

    /// Point-in-time copy of the variables.
    #[must_use]
    pub fn snapshot(&self) -> VariablesSnapshot {
        VariablesSnapshot {
            instrument_id: self.instrument_id.clone(),
            filled_quantity: self.filled_quantity,
            order_volume: self.order_volume,
            ticks_since_last_action: self.ticks_since_last_action,
            total_ticks_elapsed: self.total_ticks_elapsed,
            target_notional: self.target_notional,
            interval_seconds: self.interval_seconds,
            target_quantity: self.target_quantity,
            orders_placed_count: self.orders_placed_count,
            notional_spent: self.notional_spent,
            current_limit_price: self.current_limit_price,
            status: self.status,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Instrument being executed.
    #[must_use]
    pub const fn instrument_id(&self) -> &InstrumentId {
        &self.instrument_id
    }

    /// Direction of the execution.
    #[must_use]
    pub const fn side(&self) -> OrderSide {
        self.side
    }

    /// Close tag forwarded on every order.
    #[must_use]
    pub const fn close_position_mode(&self) -> ClosePositionMode {
        self.close_position_mode
    }

    /// Lifecycle status.
    #[must_use]
    pub const fn status(&self) -> AlgoStatus {
        self.status
    }

    /// Whether the execution may still act.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.status.is_running()
    }

    /// Lots to execute.
    #[must_use]
    pub const fn target_quantity(&self) -> u64 {
        self.target_quantity
    }

    /// Notional target.
    #[must_use]
    pub const fn target_notional(&self) -> Decimal {
        self.target_notional
    }

    /// Ticks between slice attempts.
    #[must_use]
    pub const fn interval_seconds(&self) -> u64 {
        self.interval_seconds
    }

    /// Ticks since the interval was last reset.
    #[must_use]
    pub const fn ticks_since_last_action(&self) -> u64 {
        self.ticks_since_last_action
    }

    /// Ticks since initialization.
    #[must_use]
    pub const fn total_ticks_elapsed(&self) -> u64 {
        self.total_ticks_elapsed
    }

    /// Lots confirmed by fills.
    #[must_use]
    pub const fn filled_quantity(&self) -> u64 {
        self.filled_quantity
    }

    /// Lots sent.
    #[must_use]
    pub const fn orders_placed_count(&self) -> u64 {
        self.orders_placed_count
    }

    /// Estimated notional spent.
    #[must_use]
    pub const fn notional_spent(&self) -> Decimal {
        self.notional_spent
    }

    /// Working limit price.
    #[must_use]
    pub const fn current_limit_price(&self) -> Decimal {
        self.current_limit_price
    }

    /// Resolved deadline.
    #[must_use]
    pub const fn deadline_at(&self) -> NaiveDateTime {
        self.deadline_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::moneywap::value_objects::DeadlineTime;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn deadline_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(9, 1, 0)
            .unwrap()
    }

    fn plan(target_quantity: u64, interval_seconds: u64) -> SlicePlan {
        SlicePlan {
            target_quantity,
            interval_seconds,
            remaining_seconds: target_quantity * interval_seconds,
            reference_price: Some(dec!(50)),
            starting_price: dec!(70),
            deadline_at: deadline_at(),
        }
    }

    fn state(target_quantity: u64, interval_seconds: u64) -> ExecutionState {
        let deadline = DeadlineTime::parse("09:01").unwrap();
        let config = ExecutionConfig::builder("2330", OrderSide::Buy, deadline)
            .target_notional(dec!(100000))
            .build()
            .unwrap();
        ExecutionState::new(&config, &plan(target_quantity, interval_seconds))
    }

    #[test]
    fn starts_running_at_starting_price() {
        let state = state(2, 30);
        assert!(state.is_running());
        assert_eq!(state.current_limit_price(), dec!(70));
        assert_eq!(state.snapshot().order_volume, 1);
    }

    #[test]
    fn interval_gating() {
        let mut state = state(2, 5);
        for _ in 0..4 {
            state.record_tick();
            assert!(!state.interval_elapsed());
        }
        state.record_tick();
        assert!(state.interval_elapsed());
        state.reset_interval();
        assert_eq!(state.ticks_since_last_action(), 0);
        assert_eq!(state.total_ticks_elapsed(), 5);
    }

    #[test]
    fn rearm_makes_next_tick_qualify() {
        let mut state = state(2, 5);
        state.rearm_interval();
        assert!(!state.interval_elapsed());
        state.record_tick();
        assert!(state.interval_elapsed());
    }

    #[test]
    fn submission_estimates_notional() {
        let mut state = state(2, 30);
        state.record_submission(dec!(60));
        assert_eq!(state.orders_placed_count(), 1);
        assert_eq!(state.notional_spent(), dec!(60000));
        assert!(!state.completion_reached());
        state.record_submission(dec!(45));
        assert!(state.completion_reached());
    }

    #[test]
    fn fills_drive_remaining_quantity() {
        let mut state = state(2, 30);
        assert_eq!(state.slice_size(), 1);
        assert!(!state.record_fill(1));
        assert_eq!(state.remaining_quantity(), 1);
        assert!(state.record_fill(2));
        assert_eq!(state.remaining_quantity(), 0);
        assert_eq!(state.slice_size(), 0);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut state = state(2, 30);
        assert!(state.stop());
        assert!(!state.stop());
        assert_eq!(state.status(), AlgoStatus::Stopped);
    }

    #[test]
    fn deadline_cutoff_is_opt_in() {
        let state = state(2, 30);
        assert!(!state.deadline_passed(deadline_at()));
    }
}
