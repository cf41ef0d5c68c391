// SPDX-License-Identifier: MPL-2.0
//! Picker configuration and its defaults.

use crate::date::{today, CalendarDate, DateBounds};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default lower bound of the selectable range.
pub const DEFAULT_MIN_DATE: CalendarDate = CalendarDate::from_ymd_unchecked(1945, 1, 1);

/// Caller-facing configuration, validated and clamped when the dialog opens.
///
/// Malformed combinations never fail the dialog open; they are clamped to the
/// nearest valid bound instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Seed selection when the dialog opens. `None` means today.
    pub initial_date: Option<CalendarDate>,
    /// Lower bound of the selectable range.
    pub min_date: CalendarDate,
    /// Upper bound of the selectable range. `None` means today. A future
    /// value is clamped down to today unless `allow_future` is set.
    pub max_date: Option<CalendarDate>,
    /// Permit selecting dates after today. Off by default: the historical
    /// behavior silently disallowed future dates, and that stays the default
    /// policy, but it is now an explicit switch.
    pub allow_future: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_date: None,
            min_date: DEFAULT_MIN_DATE,
            max_date: None,
            allow_future: false,
        }
    }
}

impl PickerConfig {
    /// Resolves the effective bounds for the given notion of "today".
    #[must_use]
    pub fn resolve_bounds(&self, today: CalendarDate) -> DateBounds {
        DateBounds::resolve(
            self.min_date,
            self.max_date.unwrap_or(today),
            today,
            self.allow_future,
        )
    }

    /// Seed date for the given notion of "today", before clamping.
    #[must_use]
    pub fn seed_date(&self, today: CalendarDate) -> CalendarDate {
        self.initial_date.unwrap_or(today)
    }

    /// Strict validation for callers that prefer an error over silent
    /// clamping. The dialog itself never calls this; opening always degrades
    /// gracefully.
    pub fn validate(&self) -> Result<()> {
        let now = today();
        let max = self.max_date.unwrap_or(now);
        if self.min_date > max {
            return Err(Error::Config(format!(
                "min_date {} is after max_date {}",
                self.min_date, max
            )));
        }
        if !self.allow_future && max > now {
            return Err(Error::Config(format!(
                "max_date {} is in the future and allow_future is off",
                max
            )));
        }
        Ok(())
    }
}
