//! Market quote value object.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::OrderSide;
use crate::domain::shared::InstrumentId;

/// Fraction of the last price used for sizing when the session has no lower limit.
pub const LAST_PRICE_SIZING_FACTOR: Decimal = dec!(0.9);

/// Latest top-of-book, fifth-level depth and session limits for an instrument.
///
/// Invariants expected from quote sources: `bid5 <= best_bid` and
/// `ask5 >= best_ask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Instrument the quote belongs to.
    pub instrument_id: InstrumentId,
    /// Best bid price.
    pub best_bid: Decimal,
    /// Best ask price.
    pub best_ask: Decimal,
    /// Fifth-level bid price.
    pub bid5: Decimal,
    /// Fifth-level ask price.
    pub ask5: Decimal,
    /// Last traded price.
    pub last_price: Decimal,
    /// Session upper price limit (zero when the venue publishes none).
    pub upper_limit: Decimal,
    /// Session lower price limit (zero when the venue publishes none).
    pub lower_limit: Decimal,
    /// Quote timestamp.
    pub timestamp: DateTime<Utc>,
}

impl Quote {
    /// Create a quote with a flat book (depth equals top-of-book) and no limits.
    #[must_use]
    pub fn new(
        instrument_id: InstrumentId,
        best_bid: Decimal,
        best_ask: Decimal,
        last_price: Decimal,
    ) -> Self {
        Self {
            instrument_id,
            best_bid,
            best_ask,
            bid5: best_bid,
            ask5: best_ask,
            last_price,
            upper_limit: Decimal::ZERO,
            lower_limit: Decimal::ZERO,
            timestamp: Utc::now(),
        }
    }

    /// Set the fifth-level bid and ask.
    #[must_use]
    pub const fn with_depth(mut self, bid5: Decimal, ask5: Decimal) -> Self {
        self.bid5 = bid5;
        self.ask5 = ask5;
        self
    }

    /// Set the session price limits.
    #[must_use]
    pub const fn with_limits(mut self, upper_limit: Decimal, lower_limit: Decimal) -> Self {
        self.upper_limit = upper_limit;
        self.lower_limit = lower_limit;
        self
    }

    /// Price used to convert a notional target into lots.
    ///
    /// This is the lower limit for both sides, falling back to 90% of the
    /// last price when no lower limit is published.
    #[must_use]
    pub fn sizing_reference_price(&self) -> Decimal {
        if self.lower_limit > Decimal::ZERO {
            self.lower_limit
        } else {
            self.last_price * LAST_PRICE_SIZING_FACTOR
        }
    }

    /// Session limit used as the working price when none is configured.
    #[must_use]
    pub const fn limit_for(&self, side: OrderSide) -> Decimal {
        match side {
            OrderSide::Buy => self.upper_limit,
            OrderSide::Sell => self.lower_limit,
        }
    }

    /// Whether an order at `price` would cross the opposite top-of-book.
    #[must_use]
    pub fn is_marketable(&self, side: OrderSide, price: Decimal) -> bool {
        match side {
            OrderSide::Buy => self.best_ask <= price,
            OrderSide::Sell => self.best_bid >= price,
        }
    }

    /// Fifth level on the side the order has to take liquidity from.
    #[must_use]
    pub const fn deeper_level(&self, side: OrderSide) -> Decimal {
        match side {
            OrderSide::Buy => self.ask5,
            OrderSide::Sell => self.bid5,
        }
    }

    /// Whether the depth prices are ordered consistently with top-of-book.
    #[must_use]
    pub fn has_consistent_depth(&self) -> bool {
        self.bid5 <= self.best_bid && self.ask5 >= self.best_ask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote() -> Quote {
        Quote::new(InstrumentId::new("2330"), dec!(100), dec!(100.5), dec!(100.5))
            .with_depth(dec!(98), dec!(102.5))
            .with_limits(dec!(110), dec!(90))
    }

    #[test]
    fn new_defaults_depth_to_top_of_book() {
        let q = Quote::new(InstrumentId::new("2330"), dec!(10), dec!(11), dec!(10.5));
        assert_eq!(q.bid5, dec!(10));
        assert_eq!(q.ask5, dec!(11));
        assert_eq!(q.lower_limit, Decimal::ZERO);
        assert!(q.has_consistent_depth());
    }

    #[test]
    fn sizing_reference_prefers_lower_limit() {
        assert_eq!(quote().sizing_reference_price(), dec!(90));
    }

    #[test]
    fn sizing_reference_falls_back_to_last_price() {
        let q = Quote::new(InstrumentId::new("2330"), dec!(99), dec!(101), dec!(100));
        assert_eq!(q.sizing_reference_price(), dec!(90.0));
    }

    #[test]
    fn limit_for_side() {
        let q = quote();
        assert_eq!(q.limit_for(OrderSide::Buy), dec!(110));
        assert_eq!(q.limit_for(OrderSide::Sell), dec!(90));
    }

    #[test]
    fn marketability_is_inclusive() {
        let q = quote();
        assert!(q.is_marketable(OrderSide::Buy, dec!(100.5)));
        assert!(!q.is_marketable(OrderSide::Buy, dec!(100.4)));
        assert!(q.is_marketable(OrderSide::Sell, dec!(100)));
        assert!(!q.is_marketable(OrderSide::Sell, dec!(100.1)));
    }

    #[test]
    fn deeper_level_takes_opposite_book() {
        let q = quote();
        assert_eq!(q.deeper_level(OrderSide::Buy), dec!(102.5));
        assert_eq!(q.deeper_level(OrderSide::Sell), dec!(98));
    }

    #[test]
    fn inconsistent_depth_detected() {
        let q = quote().with_depth(dec!(101), dec!(102.5));
        assert!(!q.has_consistent_depth());
    }
}
