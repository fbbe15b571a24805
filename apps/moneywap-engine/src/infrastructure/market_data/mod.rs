//! Market data adapters.

mod in_memory;
mod simulated;

pub use in_memory::InMemoryQuoteBook;
pub use simulated::SimulatedMarket;
