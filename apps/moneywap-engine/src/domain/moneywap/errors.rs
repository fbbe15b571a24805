//! MoneyWAP Algorithm Errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that prevent a MoneyWAP algorithm from starting.
///
/// Every variant is a configuration error: the controller is never built,
/// so it never reaches `Running`. Runtime conditions such as a missing quote
/// on a tick are logged and retried instead of surfacing here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlgoError {
    /// A configuration field failed validation.
    #[error("Invalid algorithm configuration for '{field}': {message}")]
    InvalidConfiguration {
        /// Field name.
        field: String,
        /// Error details.
        message: String,
    },

    /// The deadline could not be parsed as a time of day.
    #[error("Invalid deadline '{value}': expected HH:MM")]
    InvalidDeadline {
        /// The rejected input.
        value: String,
    },

    /// No reference quote was available at initialization.
    #[error("No quote available for {instrument_id}")]
    QuoteUnavailable {
        /// Instrument that had no quote.
        instrument_id: String,
    },

    /// A price derived from the reference quote was not positive.
    #[error("Reference {purpose} price is not positive: {price}")]
    InvalidReferencePrice {
        /// What the price was going to be used for.
        purpose: String,
        /// The offending price.
        price: Decimal,
    },

    /// The notional target is too small to buy a single lot.
    #[error(
        "Target notional {target_notional} sizes to zero lots at reference price {reference_price}"
    )]
    ZeroTargetQuantity {
        /// Configured notional.
        target_notional: Decimal,
        /// Price used for sizing.
        reference_price: Decimal,
    },

    /// The time left before the deadline cannot fit one tick per lot.
    #[error(
        "Slice interval is zero: {remaining_seconds}s until deadline for {target_quantity} lots"
    )]
    IntervalTooShort {
        /// Seconds until the deadline.
        remaining_seconds: u64,
        /// Lots to execute.
        target_quantity: u64,
    },
}
