//! Slice Planning Domain Service
//!
//! Turns a validated configuration and a reference quote into the fixed
//! parameters of an execution: lots to trade, the interval between slice
//! attempts and the starting working price.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

use crate::domain::moneywap::AlgoError;
use crate::domain::moneywap::value_objects::{ExecutionConfig, Quote};

/// Notional represented by one lot per unit of price.
pub const LOT_NOTIONAL_MULTIPLIER: Decimal = dec!(1000);

/// Lots sent per slice order.
pub const ORDER_VOLUME_PER_SLICE: u64 = 1;

/// Fixed parameters computed once at initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlicePlan {
    /// Lots to execute.
    pub target_quantity: u64,
    /// Ticks between slice attempts.
    pub interval_seconds: u64,
    /// Seconds between initialization and the deadline.
    pub remaining_seconds: u64,
    /// Price the notional was sized at (`None` in quantity mode).
    pub reference_price: Option<Decimal>,
    /// Initial working limit price.
    pub starting_price: Decimal,
    /// Resolved deadline.
    pub deadline_at: NaiveDateTime,
}

/// Stateless planner for MoneyWAP executions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlicePlanner;

impl SlicePlanner {
    /// Plan an execution from its configuration and a reference quote.
    ///
    /// Sizing always uses the session lower limit (or 90% of the last price
    /// when no lower limit is published), for both sides. Buys therefore size
    /// against the cheapest tradable price.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReferencePrice` if the working or sizing price is not
    /// positive, `ZeroTargetQuantity` if the notional buys no whole lot, and
    /// `IntervalTooShort` if the deadline leaves less than one second per lot.
    pub fn plan(
        config: &ExecutionConfig,
        quote: &Quote,
        now: NaiveDateTime,
    ) -> Result<SlicePlan, AlgoError> {
        let starting_price = config
            .limit_price()
            .unwrap_or_else(|| quote.limit_for(config.side()));
        if starting_price <= Decimal::ZERO {
            return Err(AlgoError::InvalidReferencePrice {
                purpose: "working".to_string(),
                price: starting_price,
            });
        }

        let (target_quantity, reference_price) = match config.target_lots() {
            Some(lots) => (lots, None),
            None => {
                let reference = quote.sizing_reference_price();
                let lots = Self::lots_for_notional(config.target_notional(), reference)?;
                (lots, Some(reference))
            }
        };

        let remaining_seconds = config.deadline().seconds_until(now);
        let interval_seconds = remaining_seconds / target_quantity;
        if interval_seconds == 0 {
            return Err(AlgoError::IntervalTooShort {
                remaining_seconds,
                target_quantity,
            });
        }

        Ok(SlicePlan {
            target_quantity,
            interval_seconds,
            remaining_seconds,
            reference_price,
            starting_price,
            deadline_at: config.deadline().resolve(now),
        })
    }

    /// Whole lots a notional buys at `reference_price`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReferencePrice` for a non-positive price and
    /// `ZeroTargetQuantity` when the result rounds down to zero.
    pub fn lots_for_notional(
        target_notional: Decimal,
        reference_price: Decimal,
    ) -> Result<u64, AlgoError> {
        if reference_price <= Decimal::ZERO {
            return Err(AlgoError::InvalidReferencePrice {
                purpose: "sizing".to_string(),
                price: reference_price,
            });
        }

        let lots = (target_notional / LOT_NOTIONAL_MULTIPLIER)
            .checked_div(reference_price)
            .map(|raw| raw.floor())
            .and_then(|raw| raw.to_u64())
            .ok_or_else(|| AlgoError::InvalidConfiguration {
                field: "target_notional".to_string(),
                message: format!("cannot size {target_notional} at {reference_price}"),
            })?;

        if lots == 0 {
            return Err(AlgoError::ZeroTargetQuantity {
                target_notional,
                reference_price,
            });
        }

        Ok(lots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::moneywap::value_objects::{DeadlineTime, OrderSide};
    use crate::domain::shared::InstrumentId;
    use chrono::NaiveDate;
    use test_case::test_case;

    fn nine_am() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn quote(lower: Decimal, upper: Decimal) -> Quote {
        Quote::new(InstrumentId::new("2330"), dec!(59), dec!(60), dec!(60))
            .with_depth(dec!(58), dec!(61))
            .with_limits(upper, lower)
    }

    fn config(side: OrderSide, deadline: &str) -> ExecutionConfig {
        ExecutionConfig::builder("2330", side, DeadlineTime::parse(deadline).unwrap())
            .target_notional(dec!(100000))
            .build()
            .unwrap()
    }

    #[test_case(dec!(100000), dec!(50), 2 ; "two lots at fifty")]
    #[test_case(dec!(100000), dec!(33), 3 ; "floors fractional lots")]
    #[test_case(dec!(1500), dec!(0.5), 3 ; "sub-unit price")]
    #[test_case(dec!(5000000), dec!(100), 50 ; "large notional")]
    fn lots_for_notional(notional: Decimal, price: Decimal, expected: u64) {
        assert_eq!(
            SlicePlanner::lots_for_notional(notional, price).unwrap(),
            expected
        );
    }

    #[test]
    fn lots_for_notional_rejects_zero_result() {
        let err = SlicePlanner::lots_for_notional(dec!(40000), dec!(50)).unwrap_err();
        assert!(matches!(err, AlgoError::ZeroTargetQuantity { .. }));
    }

    #[test]
    fn lots_for_notional_rejects_non_positive_price() {
        let err = SlicePlanner::lots_for_notional(dec!(40000), Decimal::ZERO).unwrap_err();
        assert!(matches!(
            err,
            AlgoError::InvalidReferencePrice { ref purpose, .. } if purpose == "sizing"
        ));
    }

    #[test]
    fn plan_one_minute_two_lots() {
        let plan = SlicePlanner::plan(
            &config(OrderSide::Buy, "09:01"),
            &quote(dec!(50), dec!(70)),
            nine_am(),
        )
        .unwrap();

        assert_eq!(plan.target_quantity, 2);
        assert_eq!(plan.remaining_seconds, 60);
        assert_eq!(plan.interval_seconds, 30);
        assert_eq!(plan.reference_price, Some(dec!(50)));
        assert_eq!(plan.starting_price, dec!(70));
    }

    #[test]
    fn sell_starts_at_lower_limit() {
        let plan = SlicePlanner::plan(
            &config(OrderSide::Sell, "09:01"),
            &quote(dec!(50), dec!(70)),
            nine_am(),
        )
        .unwrap();
        assert_eq!(plan.starting_price, dec!(50));
    }

    #[test]
    fn explicit_limit_price_wins() {
        let deadline = DeadlineTime::parse("09:01").unwrap();
        let config = ExecutionConfig::builder("2330", OrderSide::Buy, deadline)
            .target_notional(dec!(100000))
            .limit_price(dec!(62))
            .build()
            .unwrap();
        let plan = SlicePlanner::plan(&config, &quote(dec!(50), dec!(70)), nine_am()).unwrap();
        assert_eq!(plan.starting_price, dec!(62));
    }

    #[test]
    fn missing_lower_limit_sizes_from_last_price() {
        // 0.9 * 60 = 54 → 100000 / 1000 / 54 = 1.85 → 1 lot
        let plan = SlicePlanner::plan(
            &config(OrderSide::Buy, "09:01"),
            &quote(Decimal::ZERO, dec!(70)),
            nine_am(),
        )
        .unwrap();
        assert_eq!(plan.reference_price, Some(dec!(54.0)));
        assert_eq!(plan.target_quantity, 1);
        assert_eq!(plan.interval_seconds, 60);
    }

    #[test]
    fn missing_working_price_is_rejected() {
        let err = SlicePlanner::plan(
            &config(OrderSide::Buy, "09:01"),
            &quote(dec!(50), Decimal::ZERO),
            nine_am(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AlgoError::InvalidReferencePrice { ref purpose, .. } if purpose == "working"
        ));
    }

    #[test]
    fn quantity_mode_skips_sizing() {
        let deadline = DeadlineTime::parse("10:00").unwrap();
        let config = ExecutionConfig::builder("2330", OrderSide::Buy, deadline)
            .target_lots(12)
            .build()
            .unwrap();
        let plan = SlicePlanner::plan(&config, &quote(Decimal::ZERO, dec!(70)), nine_am()).unwrap();
        assert_eq!(plan.target_quantity, 12);
        assert_eq!(plan.interval_seconds, 300);
        assert_eq!(plan.reference_price, None);
    }

    #[test]
    fn deadline_too_close_is_rejected() {
        let err = SlicePlanner::plan(
            &config(OrderSide::Buy, "09:00"),
            &quote(dec!(50), dec!(70)),
            nine_am(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            AlgoError::IntervalTooShort {
                remaining_seconds: 0,
                target_quantity: 2,
            }
        );
    }

    #[test]
    fn passed_deadline_wraps_to_tomorrow() {
        let plan = SlicePlanner::plan(
            &config(OrderSide::Buy, "08:59"),
            &quote(dec!(50), dec!(70)),
            nine_am(),
        )
        .unwrap();
        assert_eq!(plan.remaining_seconds, 86_340);
        assert_eq!(plan.interval_seconds, 43_170);
        assert_eq!(plan.deadline_at.date(), NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
    }
}
