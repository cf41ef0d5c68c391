// SPDX-License-Identifier: MPL-2.0
//! Cross-column selection state machine.
//!
//! The coordinator owns the selected date, the only state shared between
//! columns. Column value changes flow through it and come back out as a
//! [`Cascade`]: which dependent columns must be re-centered, and where.
//! While `Initializing`, cascades are suppressed entirely; the seeding path
//! already produces a mutually consistent year/month/day and re-running the
//! sync against half-updated lists would corrupt it.

use crate::column::ColumnKind;
use crate::date::{CalendarDate, DateBounds};
use crate::range;
use Phase::{Idle, Initializing};

/// Coordinator lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Dialog is being seeded; reactive sync is suppressed.
    Initializing,
    /// Normal interactive operation.
    Idle,
}

/// Dependent-column realignments required after a value change.
///
/// An entry is present whenever the column's list may have shifted, even if
/// the selected value inside it did not change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cascade {
    /// New centered index for the month column.
    pub month_index: Option<usize>,
    /// New centered index for the day column.
    pub day_index: Option<usize>,
}

impl Cascade {
    /// Returns true when no dependent column needs re-centering.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.month_index.is_none() && self.day_index.is_none()
    }
}

/// Holds the selected date and enforces cross-column consistency.
#[derive(Debug, Clone)]
pub struct SelectionCoordinator {
    selected: CalendarDate,
    bounds: DateBounds,
    phase: Phase,
}

impl SelectionCoordinator {
    /// Creates a coordinator with placeholder state; [`seed`](Self::seed)
    /// must run before the dialog becomes interactive.
    #[must_use]
    pub fn new() -> Self {
        let placeholder = CalendarDate::from_ymd_unchecked(1970, 1, 1);
        Self {
            selected: placeholder,
            bounds: DateBounds {
                min: placeholder,
                max: placeholder,
            },
            phase: Initializing,
        }
    }

    /// Seeds the selection from the initial date and enters `Initializing`.
    ///
    /// A date whose year lies outside the bounds snaps to that bound
    /// entirely (`1944-05-01` seeds the minimum, not the minimum year with
    /// May kept). Within a legal year, the month and day are repaired
    /// component-wise against the narrowed lists with the nearest-endpoint
    /// policy, so a merely-too-late month keeps its day where possible.
    pub fn seed(&mut self, initial: CalendarDate, bounds: DateBounds) {
        self.bounds = bounds;
        self.phase = Initializing;

        let initial = if initial.year < bounds.min.year {
            bounds.min
        } else if initial.year > bounds.max.year {
            bounds.max
        } else {
            initial
        };
        let year = initial.year;
        let months = range::months(year, &bounds);
        let month = clamp_to_endpoints(initial.month as i32, &months).unwrap_or(1) as u32;
        let days = range::days(year, month, &bounds);
        let day = clamp_to_endpoints(initial.day as i32, &days).unwrap_or(1) as u32;

        self.selected = CalendarDate { year, month, day };
    }

    /// Leaves `Initializing` once the seeded alignments have settled.
    pub fn finish_init(&mut self) {
        self.phase = Idle;
    }

    /// The externally visible selected date.
    #[must_use]
    pub fn selected(&self) -> CalendarDate {
        self.selected
    }

    /// The resolved bounds the selection is constrained to.
    #[must_use]
    pub fn bounds(&self) -> &DateBounds {
        &self.bounds
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_initializing(&self) -> bool {
        self.phase == Initializing
    }

    /// The selected value for one column, as it appears in that column's list.
    #[must_use]
    pub fn value_of(&self, column: ColumnKind) -> i32 {
        match column {
            ColumnKind::Year => self.selected.year,
            ColumnKind::Month => self.selected.month as i32,
            ColumnKind::Day => self.selected.day as i32,
        }
    }

    /// Applies a provisional or final value for one column and returns the
    /// realignments its dependents need. No-op while `Initializing` or when
    /// the value is unchanged.
    pub fn apply(&mut self, column: ColumnKind, value: i32) -> Cascade {
        if self.phase == Initializing || value == self.value_of(column) {
            return Cascade::default();
        }
        match column {
            ColumnKind::Year => self.apply_year(value),
            ColumnKind::Month => self.apply_month(value as u32),
            ColumnKind::Day => {
                self.selected.day = value as u32;
                Cascade::default()
            }
        }
    }

    fn apply_year(&mut self, year: i32) -> Cascade {
        self.selected.year = year;

        let months = range::months(year, &self.bounds);
        if months.is_empty() {
            return Cascade::default();
        }
        // The month moves to the first legal value when it falls out of
        // range; the list may also have shifted under an unchanged value,
        // so the month column re-centers either way.
        if !months.contains(&(self.selected.month as i32)) {
            self.selected.month = months[0] as u32;
        }
        let month_index = months
            .iter()
            .position(|m| *m == self.selected.month as i32)
            .unwrap_or(0);

        let day_index = self.reclamp_day();
        Cascade {
            month_index: Some(month_index),
            day_index,
        }
    }

    fn apply_month(&mut self, month: u32) -> Cascade {
        self.selected.month = month;
        Cascade {
            month_index: None,
            day_index: self.reclamp_day(),
        }
    }

    /// Recomputes the day list for the current year/month, clamps the day to
    /// the nearest endpoint, and returns its index in the new list.
    fn reclamp_day(&mut self) -> Option<usize> {
        let days = range::days(self.selected.year, self.selected.month, &self.bounds);
        let day = clamp_to_endpoints(self.selected.day as i32, &days)?;
        self.selected.day = day as u32;
        days.iter().position(|d| *d == day)
    }
}

impl Default for SelectionCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Nearest-endpoint clamp into an ascending contiguous list. Returns the
/// kept value, or `None` for an empty list.
fn clamp_to_endpoints(value: i32, list: &[i32]) -> Option<i32> {
    let first = *list.first()?;
    let last = *list.last()?;
    Some(value.clamp(first, last))
}
