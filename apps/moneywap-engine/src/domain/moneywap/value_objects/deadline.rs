//! Deadline value object (wall-clock time of day).

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::moneywap::AlgoError;

const SECONDS_PER_DAY: i64 = 86_400;

/// Time of day by which an execution should finish.
///
/// The deadline is stored without a date and resolved against the local
/// date at initialization. A time that has already passed today resolves to
/// the same clock time tomorrow, so the remaining duration is always within
/// `[0, 24h)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeadlineTime(NaiveTime);

impl DeadlineTime {
    /// Create a deadline from a time of day.
    #[must_use]
    pub const fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    /// Parse an `HH:MM` string.
    ///
    /// # Errors
    ///
    /// Returns error if the string is not a valid 24-hour `HH:MM` time.
    pub fn parse(value: &str) -> Result<Self, AlgoError> {
        NaiveTime::parse_from_str(value.trim(), "%H:%M")
            .map(Self)
            .map_err(|_| AlgoError::InvalidDeadline {
                value: value.to_string(),
            })
    }

    /// Get the time of day.
    #[must_use]
    pub const fn time(&self) -> NaiveTime {
        self.0
    }

    /// The next occurrence of this time at or after `now`.
    #[must_use]
    pub fn resolve(&self, now: NaiveDateTime) -> NaiveDateTime {
        let today = now.date().and_time(self.0);
        if today >= now {
            today
        } else {
            today + TimeDelta::days(1)
        }
    }

    /// Whole seconds from `now` until the next occurrence of this time.
    #[must_use]
    pub fn seconds_until(&self, now: NaiveDateTime) -> u64 {
        let seconds = (self.resolve(now) - now).num_seconds();
        seconds.clamp(0, SECONDS_PER_DAY) as u64
    }
}

impl fmt::Display for DeadlineTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for DeadlineTime {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DeadlineTime {
    type Error = AlgoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DeadlineTime> for String {
    fn from(deadline: DeadlineTime) -> Self {
        deadline.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn parse_valid() {
        let deadline = DeadlineTime::parse("13:25").unwrap();
        assert_eq!(deadline.to_string(), "13:25");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(DeadlineTime::parse("25:00").is_err());
        assert!(DeadlineTime::parse("9am").is_err());
        assert!(matches!(
            DeadlineTime::parse(""),
            Err(AlgoError::InvalidDeadline { .. })
        ));
    }

    #[test]
    fn seconds_until_later_today() {
        let deadline = DeadlineTime::parse("09:01").unwrap();
        assert_eq!(deadline.seconds_until(at(9, 0, 0)), 60);
    }

    #[test]
    fn seconds_until_wraps_past_deadline() {
        let deadline = DeadlineTime::parse("09:00").unwrap();
        // Ten seconds late wraps to tomorrow 09:00.
        assert_eq!(deadline.seconds_until(at(9, 0, 10)), 86_390);
    }

    #[test]
    fn seconds_until_exactly_now_is_zero() {
        let deadline = DeadlineTime::parse("09:00").unwrap();
        assert_eq!(deadline.seconds_until(at(9, 0, 0)), 0);
    }

    #[test]
    fn resolve_rolls_to_next_day() {
        let deadline = DeadlineTime::parse("08:00").unwrap();
        let resolved = deadline.resolve(at(9, 0, 0));
        assert_eq!(resolved.date(), NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
        assert_eq!(resolved.time(), NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    }

    #[test]
    fn serde_as_string() {
        let deadline: DeadlineTime = serde_json::from_str("\"14:30\"").unwrap();
        assert_eq!(serde_json::to_string(&deadline).unwrap(), "\"14:30\"");
        assert!(serde_json::from_str::<DeadlineTime>("\"later\"").is_err());
    }
}
