//! Domain Layer
//!
//! Business logic with no infrastructure dependencies: value objects,
//! the execution state aggregate and stateless domain services.
//!
//! # Bounded Contexts
//!
//! - [`moneywap`]: money-weighted average price slicing and price walk
//! - [`shared`]: identifiers used across layers

pub mod moneywap;
pub mod shared;
