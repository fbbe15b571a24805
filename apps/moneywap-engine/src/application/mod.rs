//! Application Layer
//!
//! Orchestrates the domain through ports:
//!
//! - **Ports**: quote source, order sink, observer and clock interfaces
//! - **Services**: the execution controller

pub mod ports;
pub mod services;

pub use ports::*;
pub use services::*;
