//! Shared Value Objects
//!
//! Immutable domain types used across the engine.
//! Value objects are compared by value, not identity.

mod identifiers;

pub use identifiers::{InstrumentId, OrderId};
