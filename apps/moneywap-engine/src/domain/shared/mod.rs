//! Shared Domain Types
//!
//! Identifiers shared between the algorithm and its ports.

pub mod value_objects;

pub use value_objects::{InstrumentId, OrderId};
