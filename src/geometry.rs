// SPDX-License-Identifier: MPL-2.0
//! Offset math for the wheel columns.
//!
//! A column is a list of fixed-height rows inside a viewport showing an odd
//! number of rows, with `2 * ROW_HEIGHT` of padding above and below the items
//! so the first and last entries can reach the center row. `offset_for_index`
//! and `index_from_offset` are exact inverses over the legal index range;
//! both sides of the engine must use the same constants.

/// Height of one wheel row in logical pixels.
pub const ROW_HEIGHT: f32 = 40.0;

/// Number of rows visible in a column viewport. Must stay odd so a single
/// row sits exactly on the center line.
pub const VISIBLE_ROWS: usize = 5;

/// Index of the center row within the viewport.
pub const CENTER_ROW: usize = (VISIBLE_ROWS - 1) / 2;

/// Rows of padding above and below the item list.
pub const PADDING_ROWS: usize = 2;

/// Vertical padding above and below the item list.
pub const LIST_PADDING: f32 = PADDING_ROWS as f32 * ROW_HEIGHT;

/// Height of a column viewport.
#[must_use]
pub fn viewport_height() -> f32 {
    VISIBLE_ROWS as f32 * ROW_HEIGHT
}

/// Scroll offset that centers the item at `index`.
#[must_use]
pub fn offset_for_index(index: usize) -> f32 {
    ((index as f32 - CENTER_ROW as f32) * ROW_HEIGHT + LIST_PADDING).max(0.0)
}

/// Inverts [`offset_for_index`]: the item index whose row is closest to the
/// center line at the given scroll offset, clamped into the list.
///
/// Returns `None` for an empty list so callers never index into one.
#[must_use]
pub fn index_from_offset(offset: f32, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let raw =
        ((offset + ROW_HEIGHT * CENTER_ROW as f32) / ROW_HEIGHT).round() as i64 - PADDING_ROWS as i64;
    Some(raw.clamp(0, len as i64 - 1) as usize)
}
