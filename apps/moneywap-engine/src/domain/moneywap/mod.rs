//! MoneyWAP Bounded Context
//!
//! Money-weighted average price execution: a notional target is sized into
//! lots from the session price limits, spread evenly across the time left
//! before a deadline, and sent one lot per interval at a working price that
//! walks deeper into the book whenever top-of-book is unfavorable.
//!
//! # Key Types
//!
//! - [`ExecutionConfig`](value_objects::ExecutionConfig): validated parameters
//! - [`ExecutionState`](aggregate::ExecutionState): counters and working price
//! - [`SlicePlanner`](services::SlicePlanner): sizing and interval
//! - [`PriceWalk`](services::PriceWalk): submit or reprice decision

pub mod aggregate;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::AlgoError;
