//! Close-position tag passed through to the order sink.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How slice orders are tagged with respect to closing positions.
///
/// The controller never interprets this value; it is forwarded untouched on
/// every [`SliceOrder`](crate::application::ports::SliceOrder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosePositionMode {
    /// No close tag.
    #[default]
    None,
    /// Closes a position opened in the same session.
    #[serde(alias = "closetoday")]
    CloseToday,
}

impl fmt::Display for ClosePositionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "NONE"),
            Self::CloseToday => write!(f, "CLOSE_TODAY"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_none() {
        assert_eq!(ClosePositionMode::default(), ClosePositionMode::None);
    }

    #[test]
    fn serde_snake_case() {
        let mode: ClosePositionMode = serde_json::from_str("\"close_today\"").unwrap();
        assert_eq!(mode, ClosePositionMode::CloseToday);
        let mode: ClosePositionMode = serde_json::from_str("\"closetoday\"").unwrap();
        assert_eq!(mode, ClosePositionMode::CloseToday);
    }
}
