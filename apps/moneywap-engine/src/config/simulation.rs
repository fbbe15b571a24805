//! Simulated market configuration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Random-walk market and paper fills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// Price the walk starts from and the daily limits are centered on.
    #[serde(default = "default_reference_price")]
    pub reference_price: Decimal,
    /// Minimum price increment.
    #[serde(default = "default_tick_size")]
    pub tick_size: Decimal,
    /// Maximum ticks the last price moves per step.
    #[serde(default = "default_volatility_ticks")]
    pub volatility_ticks: u32,
    /// Daily limit band as a fraction of the reference price.
    #[serde(default = "default_limit_band")]
    pub limit_band: Decimal,
    /// RNG seed.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Fill every paper order in full at its price.
    #[serde(default = "default_auto_fill")]
    pub auto_fill: bool,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            reference_price: default_reference_price(),
            tick_size: default_tick_size(),
            volatility_ticks: default_volatility_ticks(),
            limit_band: default_limit_band(),
            seed: default_seed(),
            auto_fill: default_auto_fill(),
        }
    }
}

const fn default_reference_price() -> Decimal {
    dec!(100)
}

const fn default_tick_size() -> Decimal {
    dec!(0.5)
}

const fn default_volatility_ticks() -> u32 {
    2
}

const fn default_limit_band() -> Decimal {
    dec!(0.1)
}

const fn default_seed() -> u64 {
    42
}

const fn default_auto_fill() -> bool {
    true
}
