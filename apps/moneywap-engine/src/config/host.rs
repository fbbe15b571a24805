//! Paper host configuration.

use serde::{Deserialize, Serialize};

/// Timer settings for the host loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostSettings {
    /// Milliseconds between timer ticks.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

const fn default_tick_interval_ms() -> u64 {
    1000
}
