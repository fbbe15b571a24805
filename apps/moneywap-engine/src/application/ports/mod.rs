//! Application Ports (Driven)
//!
//! Interfaces the execution controller uses to reach the outside world.
//! All ports are synchronous: the controller never suspends.

mod clock_port;
mod observer_port;
mod order_sink_port;
mod quote_source_port;

pub use clock_port::{ClockPort, ManualClock, SystemClock};
pub use observer_port::{ExecutionObserverPort, LogLevel, NoOpObserver};
pub use order_sink_port::{OrderSinkPort, SliceOrder};
pub use quote_source_port::QuoteSourcePort;
