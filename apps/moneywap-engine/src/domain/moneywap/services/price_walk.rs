//! Price Walk Domain Service
//!
//! Decides, for one qualifying tick, whether the working price is
//! marketable against the current book. If it is, a slice is sent at the
//! working price; if not, the working price moves to the fifth level of the
//! opposite book so the next attempt is more aggressive.

use rust_decimal::Decimal;

use crate::domain::moneywap::value_objects::{OrderSide, Quote};

/// What to do with the current slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceDecision {
    /// Send `quantity` lots at `price`.
    Submit {
        /// Limit price of the order.
        price: Decimal,
        /// Lots to send.
        quantity: u64,
    },
    /// Send nothing and move the working price.
    Reprice {
        /// New working price.
        to: Decimal,
    },
}

/// Stateless price walk.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceWalk;

impl PriceWalk {
    /// Decide the slice action for `side` at `working_price`.
    #[must_use]
    pub fn decide(
        side: OrderSide,
        quote: &Quote,
        working_price: Decimal,
        slice_size: u64,
    ) -> SliceDecision {
        if quote.is_marketable(side, working_price) {
            SliceDecision::Submit {
                price: working_price,
                quantity: slice_size,
            }
        } else {
            SliceDecision::Reprice {
                to: quote.deeper_level(side),
            }
        }
    }
}
