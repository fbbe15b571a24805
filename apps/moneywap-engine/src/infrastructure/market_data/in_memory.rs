//! In-memory quote book.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::application::ports::QuoteSourcePort;
use crate::domain::moneywap::value_objects::Quote;
use crate::domain::shared::InstrumentId;

/// Latest quote per instrument, written by a feed and read by controllers.
#[derive(Debug, Default)]
pub struct InMemoryQuoteBook {
    quotes: RwLock<HashMap<InstrumentId, Quote>>,
}

impl InMemoryQuoteBook {
    /// Create an empty quote book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the quote for its instrument.
    pub fn publish(&self, quote: Quote) {
        if !quote.has_consistent_depth() {
            tracing::debug!(
                instrument = %quote.instrument_id,
                "Quote depth is inside top-of-book"
            );
        }
        self.quotes
            .write()
            .insert(quote.instrument_id.clone(), quote);
    }

    /// Drop the quote for an instrument.
    pub fn clear(&self, instrument_id: &InstrumentId) {
        self.quotes.write().remove(instrument_id);
    }

    /// Number of instruments with a quote.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.read().len()
    }

    /// Whether no quotes are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.read().is_empty()
    }
}

impl QuoteSourcePort for InMemoryQuoteBook {
    fn get_quote(&self, instrument_id: &InstrumentId) -> Option<Quote> {
        self.quotes.read().get(instrument_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn publish_and_read() {
        let book = InMemoryQuoteBook::new();
        let id = InstrumentId::new("2330");
        assert!(book.get_quote(&id).is_none());

        book.publish(Quote::new(id.clone(), dec!(99), dec!(100), dec!(99.5)));
        assert_eq!(book.get_quote(&id).unwrap().best_ask, dec!(100));
        assert_eq!(book.len(), 1);

        book.publish(Quote::new(id.clone(), dec!(100), dec!(101), dec!(100.5)));
        assert_eq!(book.get_quote(&id).unwrap().best_ask, dec!(101));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn clear_removes_quote() {
        let book = InMemoryQuoteBook::new();
        let id = InstrumentId::new("2330");
        book.publish(Quote::new(id.clone(), dec!(99), dec!(100), dec!(99.5)));
        book.clear(&id);
        assert!(book.get_quote(&id).is_none());
        assert!(book.is_empty());
    }
}
