//! Infrastructure Layer
//!
//! Adapters for the ports defined in the application layer:
//!
//! - `market_data/`: in-memory quote book and simulated market
//! - `broker/`: paper order sink
//! - `observer/`: tracing, metrics, recording and fan-out observers
//! - `host/`: tokio loop driving the controller

pub mod broker;
pub mod host;
pub mod market_data;
pub mod observer;
