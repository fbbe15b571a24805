//! Order sink adapters.

mod paper;

pub use paper::PaperOrderSink;
