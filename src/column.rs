// SPDX-License-Identifier: MPL-2.0
//! Per-column state and the generation-token debounce primitive.

/// One of the three wheel columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Year,
    Month,
    Day,
}

impl ColumnKind {
    /// All columns in cascade order (parents before children).
    pub const ALL: [ColumnKind; 3] = [ColumnKind::Year, ColumnKind::Month, ColumnKind::Day];

    /// Storage index for column state arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            ColumnKind::Year => 0,
            ColumnKind::Month => 1,
            ColumnKind::Day => 2,
        }
    }

    /// Identifier of the scrollable widget backing this column.
    #[must_use]
    pub const fn scrollable_id(self) -> &'static str {
        match self {
            ColumnKind::Year => "datewheel-year-column",
            ColumnKind::Month => "datewheel-month-column",
            ColumnKind::Day => "datewheel-day-column",
        }
    }
}

/// Cancel-and-reschedule token for deferred work.
///
/// Arming returns a generation; a timer callback carries the generation it
/// was armed with and is honored only if no newer arm (or cancel) happened
/// in between. This makes "last call wins" checkable without real timers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Debounce {
    generation: u64,
}

impl Debounce {
    /// Supersedes any outstanding arm and returns the new generation.
    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Invalidates any outstanding arm without scheduling a new one.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    /// Returns true when the given generation is still the latest arm.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Generation of the most recent arm or cancel.
    #[must_use]
    pub fn latest(&self) -> u64 {
        self.generation
    }
}

/// Mutable record for one wheel column.
///
/// `centered_index` is the logical analogue of the physical scroll offset;
/// the interpreter and the alignment engine keep the two converged.
#[derive(Debug, Clone, Default)]
pub struct ColumnState {
    /// Index into the column's current value list treated as selected.
    pub centered_index: usize,
    /// Set while a programmatic scroll is in flight; scroll events for the
    /// column are ignored until the completion timer clears it.
    pub auto_scrolling: bool,
    /// Debounce for the snap-after-scroll settle timer.
    pub settle: Debounce,
    /// Debounce for the alignment completion timer; re-entrant aligns re-arm
    /// it instead of queueing.
    pub align: Debounce,
    /// Last physical offset reported for the column, if any.
    pub last_offset: Option<f32>,
}

impl ColumnState {
    /// Clears the record and invalidates all outstanding timers.
    pub fn reset(&mut self) {
        self.centered_index = 0;
        self.auto_scrolling = false;
        self.settle.cancel();
        self.align.cancel();
        self.last_offset = None;
    }
}
