//! Calendar date value for scheduled events.
//!
//! # Responsibility
//! - Parse the `YYYY-MM-DD` wire representation strictly.
//! - Provide whole-day arithmetic against a caller-supplied "today".
//!
//! # Invariants
//! - An `EventDate` always holds a real calendar date.
//! - `Display` output is exactly the accepted input shape (`YYYY-MM-DD`).

use crate::model::event::EventError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid iso date regex"));

/// Single-day event date without time or timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventDate(NaiveDate);

impl EventDate {
    /// Parses `YYYY-MM-DD` text.
    ///
    /// # Errors
    /// - Returns [`EventError::InvalidDateFormat`] when the text is not
    ///   zero-padded `YYYY-MM-DD` or names a day that does not exist
    ///   (`2025-02-30`, `2025-13-01`).
    pub fn parse(value: &str) -> Result<Self, EventError> {
        // chrono alone accepts unpadded fields such as `2025-3-4`.
        if !ISO_DATE_RE.is_match(value) {
            return Err(EventError::invalid_date(value));
        }
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| EventError::invalid_date(value))
    }

    /// Wraps an already-valid chrono date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the underlying chrono date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Whole days from `today` until this date.
    ///
    /// Negative when the date is already in the past, zero on the day itself.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        self.0.signed_duration_since(today).num_days()
    }
}

impl Display for EventDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for EventDate {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EventDate {
    type Error = EventError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EventDate> for String {
    fn from(value: EventDate) -> Self {
        value.to_string()
    }
}

impl From<NaiveDate> for EventDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::EventDate;
    use crate::model::event::EventError;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn parse_accepts_padded_iso_date() {
        let date = EventDate::parse("2025-03-14").expect("valid date should parse");
        assert_eq!(date.as_naive(), ymd(2025, 3, 14));
        assert_eq!(date.to_string(), "2025-03-14");
    }

    #[test]
    fn parse_rejects_impossible_days() {
        for raw in ["2025-02-30", "2025-13-01", "2025-00-10", "2023-02-29"] {
            let err = EventDate::parse(raw).expect_err("impossible date must fail");
            assert_eq!(
                err,
                EventError::InvalidDateFormat {
                    value: raw.to_string()
                }
            );
        }
    }

    #[test]
    fn parse_rejects_loose_shapes() {
        for raw in ["2025-3-14", " 2025-03-14", "14/03/2025", "", "2025-03-14T00:00"] {
            assert!(EventDate::parse(raw).is_err(), "`{raw}` should be rejected");
        }
    }

    #[test]
    fn parse_accepts_leap_day() {
        assert!(EventDate::parse("2024-02-29").is_ok());
    }

    #[test]
    fn days_until_is_signed() {
        let date = EventDate::from_naive(ymd(2025, 3, 14));
        assert_eq!(date.days_until(ymd(2025, 3, 4)), 10);
        assert_eq!(date.days_until(ymd(2025, 3, 14)), 0);
        assert_eq!(date.days_until(ymd(2025, 3, 15)), -1);
    }
}
