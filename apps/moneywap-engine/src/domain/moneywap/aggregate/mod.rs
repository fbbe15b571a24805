//! MoneyWAP Aggregate

mod execution_state;

pub use execution_state::ExecutionState;
