//! MoneyWAP execution configuration.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{ClosePositionMode, DeadlineTime, OrderSide};
use crate::domain::moneywap::AlgoError;
use crate::domain::shared::InstrumentId;

/// How the controller decides that the target has been reached on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionBasis {
    /// Estimated notional spent is compared against the notional target.
    Notional,
    /// Lots sent are compared against an explicit lot target.
    Lots,
}

/// Validated, immutable parameters of one MoneyWAP execution.
///
/// Built through [`ExecutionConfigBuilder`]; an `ExecutionConfig` that exists
/// has passed validation. Serializes as the parameters snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionConfig {
    instrument_id: InstrumentId,
    side: OrderSide,
    target_notional: Decimal,
    deadline: DeadlineTime,
    limit_price: Option<Decimal>,
    close_position_mode: ClosePositionMode,
    target_lots: Option<u64>,
    stop_at_deadline: bool,
}

impl ExecutionConfig {
    /// Start building a configuration.
    #[must_use]
    pub fn builder(
        instrument_id: impl Into<InstrumentId>,
        side: OrderSide,
        deadline: DeadlineTime,
    ) -> ExecutionConfigBuilder {
        ExecutionConfigBuilder {
            instrument_id: instrument_id.into(),
            side,
            deadline,
            target_notional: Decimal::ZERO,
            limit_price: None,
            close_position_mode: ClosePositionMode::default(),
            target_lots: None,
            stop_at_deadline: false,
        }
    }

    /// Instrument to execute.
    #[must_use]
    pub const fn instrument_id(&self) -> &InstrumentId {
        &self.instrument_id
    }

    /// Direction of the execution.
    #[must_use]
    pub const fn side(&self) -> OrderSide {
        self.side
    }

    /// Total monetary amount to execute.
    #[must_use]
    pub const fn target_notional(&self) -> Decimal {
        self.target_notional
    }

    /// Time of day the execution should be spread up to.
    #[must_use]
    pub const fn deadline(&self) -> DeadlineTime {
        self.deadline
    }

    /// Explicit starting price, if one was configured.
    #[must_use]
    pub const fn limit_price(&self) -> Option<Decimal> {
        self.limit_price
    }

    /// Close tag forwarded on every order.
    #[must_use]
    pub const fn close_position_mode(&self) -> ClosePositionMode {
        self.close_position_mode
    }

    /// Explicit lot target (quantity mode).
    #[must_use]
    pub const fn target_lots(&self) -> Option<u64> {
        self.target_lots
    }

    /// Whether the controller stops on the first tick past the deadline.
    #[must_use]
    pub const fn stop_at_deadline(&self) -> bool {
        self.stop_at_deadline
    }

    /// Completion rule implied by the configured targets.
    #[must_use]
    pub const fn completion_basis(&self) -> CompletionBasis {
        if self.target_lots.is_some() {
            CompletionBasis::Lots
        } else {
            CompletionBasis::Notional
        }
    }
}

/// Builder for [`ExecutionConfig`].
#[derive(Debug, Clone)]
pub struct ExecutionConfigBuilder {
    instrument_id: InstrumentId,
    side: OrderSide,
    deadline: DeadlineTime,
    target_notional: Decimal,
    limit_price: Option<Decimal>,
    close_position_mode: ClosePositionMode,
    target_lots: Option<u64>,
    stop_at_deadline: bool,
}

impl ExecutionConfigBuilder {
    /// Set the notional target.
    #[must_use]
    pub const fn target_notional(mut self, target_notional: Decimal) -> Self {
        self.target_notional = target_notional;
        self
    }

    /// Set the starting price. Zero means "derive from the price limits".
    #[must_use]
    pub const fn limit_price(mut self, limit_price: Decimal) -> Self {
        self.limit_price = Some(limit_price);
        self
    }

    /// Set the close tag.
    #[must_use]
    pub const fn close_position_mode(mut self, mode: ClosePositionMode) -> Self {
        self.close_position_mode = mode;
        self
    }

    /// Switch to quantity mode with an explicit lot target.
    #[must_use]
    pub const fn target_lots(mut self, lots: u64) -> Self {
        self.target_lots = Some(lots);
        self
    }

    /// Stop on the first tick at or after the deadline.
    #[must_use]
    pub const fn stop_at_deadline(mut self, enabled: bool) -> Self {
        self.stop_at_deadline = enabled;
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` when the instrument ID is blank, a
    /// price or notional is negative, or no positive target is set.
    pub fn build(self) -> Result<ExecutionConfig, AlgoError> {
        self.instrument_id.validate()?;

        if self.target_notional < Decimal::ZERO {
            return Err(invalid("target_notional", "must not be negative"));
        }

        let limit_price = match self.limit_price {
            Some(price) if price < Decimal::ZERO => {
                return Err(invalid("limit_price", "must not be negative"));
            }
            Some(price) if price.is_zero() => None,
            other => other,
        };

        match self.target_lots {
            Some(0) => return Err(invalid("target_lots", "must be greater than zero")),
            Some(_) => {}
            None if self.target_notional <= Decimal::ZERO => {
                return Err(invalid(
                    "target_notional",
                    "must be greater than zero unless target_lots is set",
                ));
            }
            None => {}
        }

        Ok(ExecutionConfig {
            instrument_id: self.instrument_id,
            side: self.side,
            target_notional: self.target_notional,
            deadline: self.deadline,
            limit_price,
            close_position_mode: self.close_position_mode,
            target_lots: self.target_lots,
            stop_at_deadline: self.stop_at_deadline,
        })
    }
}

fn invalid(field: &str, message: &str) -> AlgoError {
    AlgoError::InvalidConfiguration {
        field: field.to_string(),
        message: message.to_string(),
    }
}
