//! MoneyWAP Value Objects

mod close_position_mode;
mod deadline;
mod execution_config;
mod fill;
mod order_side;
mod quote;
mod snapshot;
mod status;

pub use close_position_mode::ClosePositionMode;
pub use deadline::DeadlineTime;
pub use execution_config::{CompletionBasis, ExecutionConfig, ExecutionConfigBuilder};
pub use fill::Fill;
pub use order_side::OrderSide;
pub use quote::{LAST_PRICE_SIZING_FACTOR, Quote};
pub use snapshot::VariablesSnapshot;
pub use status::AlgoStatus;
