//! Simulated market.
//!
//! Random-walks the last price in whole ticks and publishes a five-level
//! book around it into an [`InMemoryQuoteBook`]. Daily limits are fixed at
//! construction from the reference price and the limit band.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use super::InMemoryQuoteBook;
use crate::config::SimulationSettings;
use crate::domain::moneywap::value_objects::Quote;
use crate::domain::shared::InstrumentId;

/// Book levels published on each side.
const BOOK_DEPTH: i64 = 5;

/// Random-walk quote generator.
#[derive(Debug)]
pub struct SimulatedMarket {
    instrument_id: InstrumentId,
    book: Arc<InMemoryQuoteBook>,
    rng: StdRng,
    tick_size: Decimal,
    volatility_ticks: i64,
    upper_limit: Decimal,
    lower_limit: Decimal,
    last_price: Decimal,
}

impl SimulatedMarket {
    /// Create a market and publish its opening quote.
    #[must_use]
    pub fn new(
        instrument_id: InstrumentId,
        settings: &SimulationSettings,
        book: Arc<InMemoryQuoteBook>,
    ) -> Self {
        let tick = settings.tick_size;
        let reference = settings.reference_price;
        let upper_limit = round_down(reference * (Decimal::ONE + settings.limit_band), tick);
        let lower_limit = round_up(reference * (Decimal::ONE - settings.limit_band), tick);

        let market = Self {
            instrument_id,
            book,
            rng: StdRng::seed_from_u64(settings.seed),
            tick_size: tick,
            volatility_ticks: i64::from(settings.volatility_ticks),
            upper_limit,
            lower_limit,
            last_price: round_down(reference, tick),
        };
        market.book.publish(market.quote());
        market
    }

    /// Move the last price and publish the new quote.
    pub fn step(&mut self) -> Quote {
        let moved = if self.volatility_ticks > 0 {
            self.rng
                .random_range(-self.volatility_ticks..=self.volatility_ticks)
        } else {
            0
        };
        let next = self.last_price + self.tick_size * Decimal::from(moved);
        // Keep a full book inside the limits.
        let floor = self.lower_limit + self.tick_size * Decimal::from(BOOK_DEPTH - 1);
        let ceiling = self.upper_limit - self.tick_size * Decimal::from(BOOK_DEPTH);
        self.last_price = next.max(floor).min(ceiling.max(floor));

        let quote = self.quote();
        self.book.publish(quote.clone());
        quote
    }

    /// Current last price.
    #[must_use]
    pub const fn last_price(&self) -> Decimal {
        self.last_price
    }

    /// Daily upper limit.
    #[must_use]
    pub const fn upper_limit(&self) -> Decimal {
        self.upper_limit
    }

    /// Daily lower limit.
    #[must_use]
    pub const fn lower_limit(&self) -> Decimal {
        self.lower_limit
    }

    fn quote(&self) -> Quote {
        let tick = self.tick_size;
        let best_bid = self.last_price;
        let best_ask = self.last_price + tick;
        Quote::new(self.instrument_id.clone(), best_bid, best_ask, self.last_price)
            .with_depth(
                best_bid - tick * Decimal::from(BOOK_DEPTH - 1),
                best_ask + tick * Decimal::from(BOOK_DEPTH - 1),
            )
            .with_limits(self.upper_limit, self.lower_limit)
    }
}

fn round_down(price: Decimal, tick: Decimal) -> Decimal {
    (price / tick).floor() * tick
}

fn round_up(price: Decimal, tick: Decimal) -> Decimal {
    (price / tick).ceil() * tick
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::QuoteSourcePort;
    use rust_decimal_macros::dec;

    fn settings(seed: u64) -> SimulationSettings {
        SimulationSettings {
            reference_price: dec!(100),
            tick_size: dec!(0.5),
            volatility_ticks: 3,
            limit_band: dec!(0.1),
            seed,
            auto_fill: true,
        }
    }

    #[test]
    fn opening_quote_is_published() {
        let book = Arc::new(InMemoryQuoteBook::new());
        let market = SimulatedMarket::new(
            InstrumentId::new("2330"),
            &settings(7),
            Arc::clone(&book),
        );

        let quote = book.get_quote(&InstrumentId::new("2330")).unwrap();
        assert_eq!(quote.last_price, dec!(100));
        assert_eq!(quote.best_ask, dec!(100.5));
        assert_eq!(quote.ask5, dec!(102.5));
        assert_eq!(quote.bid5, dec!(98));
        assert_eq!(market.upper_limit(), dec!(110));
        assert_eq!(market.lower_limit(), dec!(90));
    }

    #[test]
    fn walk_stays_inside_limits_with_consistent_depth() {
        let book = Arc::new(InMemoryQuoteBook::new());
        let mut market = SimulatedMarket::new(InstrumentId::new("2330"), &settings(11), book);

        for _ in 0..2_000 {
            let quote = market.step();
            assert!(quote.has_consistent_depth());
            assert!(quote.bid5 >= quote.lower_limit);
            assert!(quote.ask5 <= quote.upper_limit);
            assert_eq!(quote.last_price % dec!(0.5), Decimal::ZERO);
        }
    }

    #[test]
    fn same_seed_same_path() {
        let mut a = SimulatedMarket::new(
            InstrumentId::new("2330"),
            &settings(3),
            Arc::new(InMemoryQuoteBook::new()),
        );
        let mut b = SimulatedMarket::new(
            InstrumentId::new("2330"),
            &settings(3),
            Arc::new(InMemoryQuoteBook::new()),
        );
        for _ in 0..50 {
            assert_eq!(a.step().last_price, b.step().last_price);
        }
    }
}
