//! Execution observer adapters.

mod fanout;
mod metrics_observer;
mod recording;
mod tracing_observer;

pub use fanout::FanoutObserver;
pub use metrics_observer::MetricsObserver;
pub use recording::RecordingObserver;
pub use tracing_observer::TracingObserver;
