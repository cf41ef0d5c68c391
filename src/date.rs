// SPDX-License-Identifier: MPL-2.0
//! Calendar date value type and bound resolution.
//!
//! All calendar arithmetic goes through `chrono` so leap years and month
//! lengths follow the real calendar rather than a fixed table.

use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar date with no time-of-day component.
///
/// Field order matters: the derived `Ord` compares year, then month, then day.
/// Serializes as a `YYYY-MM-DD` string so config files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Creates a date after validating month and day against the real calendar.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {} out of range 1-12", month)));
        }
        let last = days_in_month(year, month);
        if day == 0 || day > last {
            return Err(Error::Date(format!(
                "day {} out of range 1-{} for {}-{:02}",
                day, last, year, month
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Creates a date without validation. Intended for constants whose
    /// validity is obvious at the call site.
    #[must_use]
    pub const fn from_ymd_unchecked(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Returns the same year/month with the day clamped into the month's real length.
    #[must_use]
    pub fn with_day_clamped(self, day: u32) -> Self {
        let last = days_in_month(self.year, self.month);
        Self {
            day: day.clamp(1, last),
            ..self
        }
    }

    /// Converts to a `chrono` date, or `None` if the fields are not a real date.
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    /// Parses `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self> {
        let parsed = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|err| Error::Date(format!("cannot parse {:?}: {}", s, err)))?;
        Ok(Self {
            year: parsed.year(),
            month: parsed.month(),
            day: parsed.day(),
        })
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

/// Returns the current local date.
#[must_use]
pub fn today() -> CalendarDate {
    chrono::Local::now().date_naive().into()
}

/// Returns the number of days in the given month, leap years included.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}

/// Resolved selection bounds: the caller minimum and the effective maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    pub min: CalendarDate,
    /// `min(max_date, today)` unless future dates are explicitly allowed.
    pub max: CalendarDate,
}

impl DateBounds {
    /// Resolves caller-supplied bounds into a usable range.
    ///
    /// `today` is injected rather than read from the clock so callers and
    /// tests control it. A caller maximum past `today` is clamped down unless
    /// `allow_future` is set. An inverted range collapses onto the effective
    /// maximum instead of failing, so the dialog always stays interactive.
    #[must_use]
    pub fn resolve(
        min: CalendarDate,
        max: CalendarDate,
        today: CalendarDate,
        allow_future: bool,
    ) -> Self {
        let max = if allow_future { max } else { max.min(today) };
        let min = min.min(max);
        Self { min, max }
    }

    /// Clamps a date into `[min, max]` without touching month/day validity.
    #[must_use]
    pub fn clamp(&self, date: CalendarDate) -> CalendarDate {
        date.clamp(self.min, self.max)
    }

    /// Returns true when the date lies inside the bounds.
    #[must_use]
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.min <= date && date <= self.max
    }
}
