//! Order side value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of the execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Accumulate the instrument.
    #[serde(alias = "long")]
    Buy,
    /// Distribute the instrument.
    #[serde(alias = "short")]
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_uppercase() {
        assert_eq!(OrderSide::Buy.to_string(), "BUY");
        assert_eq!(OrderSide::Sell.to_string(), "SELL");
    }

    #[test]
    fn serde_lowercase_with_alias() {
        let side: OrderSide = serde_json::from_str("\"short\"").unwrap();
        assert_eq!(side, OrderSide::Sell);
        assert_eq!(serde_json::to_string(&OrderSide::Buy).unwrap(), "\"buy\"");
    }
}
