// SPDX-License-Identifier: MPL-2.0
//! Pure derivation of the legal year/month/day lists from the resolved
//! bounds and the currently selected parent values.
//!
//! These functions are cheap and deterministic; they are recomputed on every
//! reaction instead of cached, since a stale list is a correctness bug.

use crate::date::{days_in_month, DateBounds};

/// Contiguous ascending years from `min` to the effective maximum.
///
/// Empty only if the resolved bounds are inverted, which `DateBounds::resolve`
/// prevents.
#[must_use]
pub fn years(bounds: &DateBounds) -> Vec<i32> {
    (bounds.min.year..=bounds.max.year).collect()
}

/// Legal months (1-12) for the given year, narrowed at the boundary years.
///
/// Returns an empty list for years outside the bounds; upstream clamping
/// keeps that from happening in normal operation.
#[must_use]
pub fn months(year: i32, bounds: &DateBounds) -> Vec<i32> {
    if year < bounds.min.year || year > bounds.max.year {
        return Vec::new();
    }
    let first = if year == bounds.min.year {
        bounds.min.month
    } else {
        1
    };
    let last = if year == bounds.max.year {
        bounds.max.month
    } else {
        12
    };
    (first..=last).map(|m| m as i32).collect()
}

/// Legal days for the given year/month, using the real calendar length and
/// narrowed at both boundary months.
#[must_use]
pub fn days(year: i32, month: u32, bounds: &DateBounds) -> Vec<i32> {
    if !(1..=12).contains(&month) {
        return Vec::new();
    }
    let month_length = days_in_month(year, month);
    let first = if year == bounds.min.year && month == bounds.min.month {
        bounds.min.day
    } else {
        1
    };
    let last = if year == bounds.max.year && month == bounds.max.month {
        bounds.max.day.min(month_length)
    } else {
        month_length
    };
    (first..=last).map(|d| d as i32).collect()
}
