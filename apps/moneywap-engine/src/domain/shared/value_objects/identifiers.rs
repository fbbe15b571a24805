//! Strongly-typed identifiers for domain entities.
//!
//! These prevent mixing up an instrument code with a client order ID.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::moneywap::AlgoError;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Get the inner string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

define_id!(OrderId, "Client-side identifier attached to every slice order.");
define_id!(
    InstrumentId,
    "Opaque identifier of the tradable instrument (exchange code, ticker, ...)."
);

impl OrderId {
    /// Generate a new unique order ID using UUID v4.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl InstrumentId {
    /// Validate the instrument ID before an algorithm is configured with it.
    ///
    /// # Errors
    ///
    /// Returns error if the ID is blank or carries surrounding whitespace.
    pub fn validate(&self) -> Result<(), AlgoError> {
        if self.0.trim().is_empty() {
            return Err(AlgoError::InvalidConfiguration {
                field: "instrument_id".to_string(),
                message: "instrument_id cannot be empty".to_string(),
            });
        }

        if self.0.trim() != self.0 {
            return Err(AlgoError::InvalidConfiguration {
                field: "instrument_id".to_string(),
                message: "instrument_id has leading or trailing whitespace".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_generate_is_unique() {
        let id1 = OrderId::generate();
        let id2 = OrderId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn instrument_id_display_and_conversions() {
        let id: InstrumentId = "2330".into();
        assert_eq!(id.as_str(), "2330");
        assert_eq!(format!("{id}"), "2330");

        let id: InstrumentId = String::from("TXFL4").into();
        assert_eq!(id.into_inner(), "TXFL4");
    }

    #[test]
    fn instrument_id_validate_rejects_blank() {
        let err = InstrumentId::new("   ").validate().unwrap_err();
        assert!(err.to_string().contains("instrument_id"));
    }

    #[test]
    fn instrument_id_validate_rejects_padding() {
        assert!(InstrumentId::new(" 2330").validate().is_err());
        assert!(InstrumentId::new("2330").validate().is_ok());
    }

    #[test]
    fn serde_is_transparent() {
        let id = OrderId::new("ord-123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ord-123\"");

        let parsed: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
