//! Application Services
//!
//! Orchestration of the domain through the ports.

mod execution_controller;

pub use execution_controller::{ExecutionController, ExecutionPorts, FillOutcome, TickOutcome};
