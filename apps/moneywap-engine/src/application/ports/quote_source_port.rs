//! Quote Source Port (Driven Port)
//!
//! Latest book snapshot for an instrument.

use crate::domain::moneywap::value_objects::Quote;
use crate::domain::shared::InstrumentId;

/// Port for reading the latest quote of an instrument.
///
/// Implementations return the most recent snapshot they hold and never
/// block. `None` means no quote is currently known.
pub trait QuoteSourcePort: Send + Sync {
    /// Get the latest quote for `instrument_id`.
    fn get_quote(&self, instrument_id: &InstrumentId) -> Option<Quote>;
}
