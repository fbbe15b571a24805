//! MoneyWAP Domain Services

mod price_walk;
mod sizing;

pub use price_walk::{PriceWalk, SliceDecision};
pub use sizing::{LOT_NOTIONAL_MULTIPLIER, ORDER_VOLUME_PER_SLICE, SlicePlan, SlicePlanner};
