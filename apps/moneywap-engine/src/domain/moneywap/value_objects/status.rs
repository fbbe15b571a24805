//! Algorithm lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a MoneyWAP algorithm.
///
/// `Stopped` is terminal. A controller only exists once initialization
/// succeeded, so there is no pre-running state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgoStatus {
    /// Slicing is active.
    Running,
    /// No further orders will be placed.
    Stopped,
}

impl AlgoStatus {
    /// Whether the algorithm may still act.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

impl fmt::Display for AlgoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => write!(f, "RUNNING"),
            Self::Stopped => write!(f, "STOPPED"),
        }
    }
}
