// SPDX-License-Identifier: MPL-2.0
//! Turns raw scroll-position updates into centered-index changes.
//!
//! Programmatic scrolls must never be reinterpreted as user selection, so
//! everything here is gated on the column's auto-scroll flag (and on the
//! coordinator's initialization phase, passed in as `suppressed`).

use crate::column::ColumnState;
use crate::geometry;
use std::time::Duration;

/// Debounce before a stopped column snaps back onto an item boundary.
pub const SETTLE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Physical offsets closer than this to the target count as converged.
pub const CONVERGENCE_EPSILON: f32 = 0.5;

/// Result of interpreting one scroll-position update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// Programmatic or suppressed movement; nothing to do.
    Ignored,
    /// User movement that stayed within the current row.
    Unchanged,
    /// The centered index moved; carries the column's new provisional value.
    Recentered(i32),
}

/// Applies a scroll-position update to the column record.
///
/// The physical offset is recorded even for ignored events so convergence
/// checks stay accurate. A `Recentered` outcome means the caller must
/// propagate the value into the coordinator and re-arm the settle debounce.
pub fn interpret_scroll(
    column: &mut ColumnState,
    offset: f32,
    values: &[i32],
    suppressed: bool,
) -> ScrollOutcome {
    column.last_offset = Some(offset);
    if column.auto_scrolling || suppressed {
        return ScrollOutcome::Ignored;
    }
    let Some(candidate) = geometry::index_from_offset(offset, values.len()) else {
        return ScrollOutcome::Ignored;
    };
    if candidate == column.centered_index {
        return ScrollOutcome::Unchanged;
    }
    column.centered_index = candidate;
    ScrollOutcome::Recentered(values[candidate])
}

/// True when the column's resting offset is off the item grid and a snap is
/// still required. Used on momentum end to snap immediately instead of
/// waiting out the debounce.
#[must_use]
pub fn snap_pending(column: &ColumnState) -> bool {
    match column.last_offset {
        Some(offset) => {
            (offset - geometry::offset_for_index(column.centered_index)).abs()
                > CONVERGENCE_EPSILON
        }
        // Never scrolled; alignment from initialization already holds.
        None => false,
    }
}
