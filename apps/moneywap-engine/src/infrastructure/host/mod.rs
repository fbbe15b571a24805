//! Paper host: tokio driver loop and session wiring.

mod algo_host;
mod session;

pub use algo_host::{AlgoHost, HostReport, TickHook};
pub use session::run_paper_session;
