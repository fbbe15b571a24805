// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::option_if_let_else,
        clippy::items_after_statements
    )
)]

//! MoneyWAP Engine - Rust Core Library
//!
//! Money-weighted average price execution: a notional (or lot) target is
//! spread evenly over the time left before a wall-clock deadline, one lot
//! per interval, with a working price that walks to the fifth book level
//! whenever top-of-book is unfavorable.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: value objects, the `ExecutionState` aggregate, sizing and
//!   price-walk services
//! - **Application**: ports (`QuoteSourcePort`, `OrderSinkPort`,
//!   `ExecutionObserverPort`, `ClockPort`) and the `ExecutionController`
//! - **Infrastructure**: in-memory quote book, simulated market, paper
//!   order sink, observers and the tokio host loop
//!
//! Cross-cutting: `config` (YAML), `telemetry` (tracing subscriber),
//! `observability` (Prometheus metrics), `error`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Ports and the execution controller.
pub mod application;

/// Infrastructure layer - Adapters and the host loop.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// YAML configuration loading and validation.
pub mod config;

/// Top-level error type.
pub mod error;

/// Prometheus metrics.
pub mod observability;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

pub use application::ports::{
    ClockPort, ExecutionObserverPort, LogLevel, ManualClock, NoOpObserver, OrderSinkPort,
    QuoteSourcePort, SliceOrder, SystemClock,
};
pub use application::services::{ExecutionController, ExecutionPorts, FillOutcome, TickOutcome};
pub use domain::moneywap::AlgoError;
pub use domain::moneywap::value_objects::{
    AlgoStatus, ClosePositionMode, CompletionBasis, DeadlineTime, ExecutionConfig, Fill,
    OrderSide, Quote, VariablesSnapshot,
};
pub use domain::shared::{InstrumentId, OrderId};
pub use error::EngineError;
