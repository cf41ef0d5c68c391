// SPDX-License-Identifier: MPL-2.0
//! Dialog lifecycle and the picker component facade.
//!
//! `DateWheel` is driven like any other component: the host feeds it
//! [`Message`]s, and `update` answers with an [`Event`] for the host plus a
//! task of deferred work (physical scrolls and timers). All timers are
//! generation-tokened, so closing the dialog or superseding an action makes
//! late callbacks harmless no-ops.

use crate::align::{self, align_to};
use crate::column::{ColumnKind, ColumnState, Debounce};
use crate::config::PickerConfig;
use crate::coordinator::{Cascade, SelectionCoordinator};
use crate::date::{self, CalendarDate};
use crate::interpret::{self, ScrollOutcome, SETTLE_DEBOUNCE};
use crate::range;
use iced::Task;
use std::time::Duration;

/// Settle window after opening, long enough for the three unanimated seed
/// alignments to complete before reactive sync is enabled.
pub const INIT_SETTLE_DELAY: Duration = Duration::from_millis(200);

/// Messages consumed by the picker.
#[derive(Debug, Clone)]
pub enum Message {
    /// A column's scroll position changed (user drag or momentum).
    ColumnScrolled { column: ColumnKind, offset: f32 },
    /// The host toolkit reported the end of a momentum scroll, where it
    /// distinguishes one. Columns otherwise settle via the debounce.
    MomentumEnded(ColumnKind),
    /// Direct tap on a row.
    ItemTapped { column: ColumnKind, index: usize },
    /// A settle debounce elapsed.
    SettleElapsed { column: ColumnKind, generation: u64 },
    /// An alignment completion timer elapsed.
    AlignCompleted { column: ColumnKind, generation: u64 },
    /// The post-open settle window elapsed.
    InitSettled { generation: u64 },
    /// Confirm button pressed.
    ConfirmPressed,
    /// Cancel button pressed.
    CancelPressed,
    /// Tap on the backdrop outside the dialog.
    BackdropPressed,
    /// Hardware/system back request while the dialog is open.
    BackPressed,
    /// Internal close bookkeeping; produces the dismiss notification.
    CloseCompleted,
}

/// Events surfaced to the host application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Nothing for the host to do.
    None,
    /// The user confirmed this date. Followed by exactly one `Dismissed`.
    Confirmed(CalendarDate),
    /// The user backed out. Followed by exactly one `Dismissed`.
    Cancelled,
    /// The open/close cycle finished. Fired once per cycle, after any
    /// confirm/cancel handling, regardless of how the dialog closed.
    Dismissed,
}

/// Three-column rolling date selector dialog.
#[derive(Debug)]
pub struct DateWheel {
    config: PickerConfig,
    coordinator: SelectionCoordinator,
    columns: [ColumnState; 3],
    init: Debounce,
    open: bool,
    /// Dismiss notifications owed but not yet delivered. A counter rather
    /// than a flag: the host may reopen before the previous cycle's close
    /// bookkeeping message arrives, and that cycle's dismiss is still owed.
    pending_dismissals: u32,
}

impl DateWheel {
    /// Creates a closed picker with the given configuration.
    #[must_use]
    pub fn new(config: PickerConfig) -> Self {
        Self {
            config,
            coordinator: SelectionCoordinator::new(),
            columns: [
                ColumnState::default(),
                ColumnState::default(),
                ColumnState::default(),
            ],
            init: Debounce::default(),
            open: false,
            pending_dismissals: 0,
        }
    }

    /// Opens the dialog: resolves bounds against the current date, seeds and
    /// clamps the selection, and centers all three columns without
    /// animation. Reactive sync stays suppressed until the returned settle
    /// timer fires.
    pub fn open(&mut self) -> Task<Message> {
        self.open_at(date::today())
    }

    /// [`open`](Self::open) with "today" injected, for deterministic tests.
    pub fn open_at(&mut self, today: CalendarDate) -> Task<Message> {
        let bounds = self.config.resolve_bounds(today);
        self.coordinator.seed(self.config.seed_date(today), bounds);
        for column in &mut self.columns {
            column.reset();
        }
        self.open = true;

        let mut tasks = Vec::with_capacity(4);
        for kind in ColumnKind::ALL {
            let values = self.list(kind);
            let index = values
                .iter()
                .position(|v| *v == self.coordinator.value_of(kind))
                .unwrap_or(0);
            tasks.push(align_to(
                &mut self.columns[kind.index()],
                kind,
                index,
                values.len(),
                false,
            ));
        }
        let generation = self.init.arm();
        tasks.push(align::delayed(
            INIT_SETTLE_DELAY,
            Message::InitSettled { generation },
        ));
        Task::batch(tasks)
    }

    /// Closes the dialog without a confirm or cancel outcome. The dismiss
    /// notification still fires through the returned task.
    pub fn close(&mut self) -> Task<Message> {
        if !self.open {
            return Task::none();
        }
        self.begin_close()
    }

    /// True while the dialog is visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Generation carried by the pending post-open settle timer, as echoed
    /// back in [`Message::InitSettled`]. For embeddings that drive their own
    /// timers instead of running the returned tasks.
    #[must_use]
    pub fn init_generation(&self) -> u64 {
        self.init.latest()
    }

    /// The date the dialog will emit on confirm.
    #[must_use]
    pub fn selection(&self) -> CalendarDate {
        self.coordinator.selected()
    }

    /// The current value list for one column. Recomputed on every call;
    /// lists are never cached.
    #[must_use]
    pub fn list(&self, column: ColumnKind) -> Vec<i32> {
        let selected = self.coordinator.selected();
        let bounds = self.coordinator.bounds();
        match column {
            ColumnKind::Year => range::years(bounds),
            ColumnKind::Month => range::months(selected.year, bounds),
            ColumnKind::Day => range::days(selected.year, selected.month, bounds),
        }
    }

    /// Read access to a column's state, for rendering.
    #[must_use]
    pub fn column(&self, column: ColumnKind) -> &ColumnState {
        &self.columns[column.index()]
    }

    /// Handles a message and returns the host event plus deferred work.
    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            // Close bookkeeping runs regardless of `open`: a reopen may land
            // before the previous cycle's message is delivered.
            Message::CloseCompleted => {
                if self.pending_dismissals > 0 {
                    self.pending_dismissals -= 1;
                    return (Event::Dismissed, Task::none());
                }
                (Event::None, Task::none())
            }
            _ if !self.open => (Event::None, Task::none()),
            Message::ColumnScrolled { column, offset } => self.handle_scroll(column, offset),
            Message::MomentumEnded(column) => self.handle_momentum_end(column),
            Message::ItemTapped { column, index } => self.handle_tap(column, index),
            Message::SettleElapsed { column, generation } => {
                self.handle_settle(column, generation)
            }
            Message::AlignCompleted { column, generation } => {
                let state = &mut self.columns[column.index()];
                if state.align.is_current(generation) {
                    state.auto_scrolling = false;
                }
                (Event::None, Task::none())
            }
            Message::InitSettled { generation } => {
                if self.init.is_current(generation) {
                    self.coordinator.finish_init();
                }
                (Event::None, Task::none())
            }
            Message::ConfirmPressed => {
                let selected = self.coordinator.selected();
                let close = self.begin_close();
                (Event::Confirmed(selected), close)
            }
            Message::CancelPressed | Message::BackdropPressed | Message::BackPressed => {
                let close = self.begin_close();
                (Event::Cancelled, close)
            }
        }
    }

    fn handle_scroll(&mut self, column: ColumnKind, offset: f32) -> (Event, Task<Message>) {
        let values = self.list(column);
        let suppressed = self.coordinator.is_initializing();
        let outcome = interpret_scroll_for(&mut self.columns, column, offset, &values, suppressed);

        let mut tasks = Vec::with_capacity(2);
        if let ScrollOutcome::Recentered(value) = outcome {
            let cascade = self.coordinator.apply(column, value);
            tasks.push(self.apply_cascade(cascade));
        }
        if outcome != ScrollOutcome::Ignored {
            let state = &mut self.columns[column.index()];
            let generation = state.settle.arm();
            tasks.push(align::delayed(
                SETTLE_DEBOUNCE,
                Message::SettleElapsed { column, generation },
            ));
        }
        (Event::None, Task::batch(tasks))
    }

    fn handle_settle(&mut self, column: ColumnKind, generation: u64) -> (Event, Task<Message>) {
        let len = self.list(column).len();
        let suppressed = self.coordinator.is_initializing();
        let state = &mut self.columns[column.index()];
        if !state.settle.is_current(generation) || state.auto_scrolling || suppressed {
            return (Event::None, Task::none());
        }
        let index = state.centered_index;
        (Event::None, align_to(state, column, index, len, true))
    }

    fn handle_momentum_end(&mut self, column: ColumnKind) -> (Event, Task<Message>) {
        let len = self.list(column).len();
        let suppressed = self.coordinator.is_initializing();
        let state = &mut self.columns[column.index()];
        if state.auto_scrolling || suppressed {
            return (Event::None, Task::none());
        }
        // The debounce would get there eventually; snap now so the column
        // never rests visibly off-grid.
        state.settle.cancel();
        if !interpret::snap_pending(state) {
            return (Event::None, Task::none());
        }
        let index = state.centered_index;
        (Event::None, align_to(state, column, index, len, true))
    }

    fn handle_tap(&mut self, column: ColumnKind, index: usize) -> (Event, Task<Message>) {
        if self.coordinator.is_initializing() {
            return (Event::None, Task::none());
        }
        let values = self.list(column);
        if values.is_empty() {
            return (Event::None, Task::none());
        }
        let index = index.min(values.len() - 1);

        // A tap overrides whatever was in flight: clear the auto-scroll flag
        // unconditionally so the new animated alignment cannot be blocked by
        // a stale completion timer, and drop any pending settle.
        let state = &mut self.columns[column.index()];
        state.auto_scrolling = false;
        state.settle.cancel();
        state.centered_index = index;

        let cascade = self.coordinator.apply(column, values[index]);
        let realign = align_to(
            &mut self.columns[column.index()],
            column,
            index,
            values.len(),
            true,
        );
        let dependents = self.apply_cascade(cascade);
        (Event::None, Task::batch([realign, dependents]))
    }

    /// Re-centers dependent columns after a coordinator cascade. The lists
    /// are recomputed here, after the selection moved.
    fn apply_cascade(&mut self, cascade: Cascade) -> Task<Message> {
        let mut tasks = Vec::with_capacity(2);
        if let Some(index) = cascade.month_index {
            let len = self.list(ColumnKind::Month).len();
            tasks.push(align_to(
                &mut self.columns[ColumnKind::Month.index()],
                ColumnKind::Month,
                index,
                len,
                true,
            ));
        }
        if let Some(index) = cascade.day_index {
            let len = self.list(ColumnKind::Day).len();
            tasks.push(align_to(
                &mut self.columns[ColumnKind::Day.index()],
                ColumnKind::Day,
                index,
                len,
                true,
            ));
        }
        Task::batch(tasks)
    }

    /// Tears the interactive state down and schedules the dismiss
    /// notification. All pending timers are invalidated so no callback can
    /// fire against the closed dialog.
    fn begin_close(&mut self) -> Task<Message> {
        self.open = false;
        self.init.cancel();
        for column in &mut self.columns {
            column.settle.cancel();
            column.align.cancel();
            column.auto_scrolling = false;
        }
        // Paired with exactly one `CloseCompleted` from the task below.
        self.pending_dismissals += 1;
        Task::done(Message::CloseCompleted)
    }
}

/// Free function so `handle_scroll` can split borrows between the column
/// array and the coordinator.
fn interpret_scroll_for(
    columns: &mut [ColumnState; 3],
    column: ColumnKind,
    offset: f32,
    values: &[i32],
    suppressed: bool,
) -> ScrollOutcome {
    interpret::interpret_scroll(&mut columns[column.index()], offset, values, suppressed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::CalendarDate;
    use crate::geometry::offset_for_index;

    fn d(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd_unchecked(year, month, day)
    }

    fn open_picker(initial: CalendarDate, today: CalendarDate) -> DateWheel {
        let mut picker = DateWheel::new(PickerConfig {
            initial_date: Some(initial),
            ..PickerConfig::default()
        });
        let _ = picker.open_at(today);
        settle_init(&mut picker);
        picker
    }

    /// Drives the picker out of initialization the way the runtime would:
    /// alignment completions for all columns, then the init settle window.
    fn settle_init(picker: &mut DateWheel) {
        for kind in ColumnKind::ALL {
            let generation = picker.column(kind).align.latest();
            let _ = picker.update(Message::AlignCompleted {
                column: kind,
                generation,
            });
        }
        let generation = picker.init_generation();
        let _ = picker.update(Message::InitSettled { generation });
    }

    fn scroll_to_value(picker: &mut DateWheel, column: ColumnKind, value: i32) {
        let index = picker
            .list(column)
            .iter()
            .position(|v| *v == value)
            .expect("value in list");
        let _ = picker.update(Message::ColumnScrolled {
            column,
            offset: offset_for_index(index),
        });
    }

    #[test]
    fn open_seeds_and_centers_selection() {
        let picker = open_picker(d(2000, 5, 20), d(2024, 6, 15));
        assert!(picker.is_open());
        assert_eq!(picker.selection(), d(2000, 5, 20));
        let years = picker.list(ColumnKind::Year);
        assert_eq!(
            years[picker.column(ColumnKind::Year).centered_index],
            2000
        );
    }

    #[test]
    fn open_clamps_initial_date_to_effective_max() {
        let picker = open_picker(d(2024, 6, 20), d(2024, 6, 15));
        assert_eq!(picker.selection(), d(2024, 6, 15));
    }

    #[test]
    fn open_clamps_initial_date_to_minimum() {
        let picker = open_picker(d(1944, 5, 1), d(2024, 6, 15));
        assert_eq!(picker.selection(), d(1945, 1, 1));
    }

    #[test]
    fn scrolls_are_suppressed_until_init_settles() {
        let mut picker = DateWheel::new(PickerConfig {
            initial_date: Some(d(2000, 5, 20)),
            ..PickerConfig::default()
        });
        let _ = picker.open_at(d(2024, 6, 15));
        // Alignment completions have not run; the year column is still
        // auto-scrolling and the coordinator is still initializing.
        let (_, _task) = picker.update(Message::ColumnScrolled {
            column: ColumnKind::Year,
            offset: offset_for_index(10),
        });
        assert_eq!(picker.selection(), d(2000, 5, 20));
    }

    #[test]
    fn user_scroll_updates_provisional_selection() {
        let mut picker = open_picker(d(2000, 5, 20), d(2024, 6, 15));
        scroll_to_value(&mut picker, ColumnKind::Day, 7);
        assert_eq!(picker.selection(), d(2000, 5, 7));
    }

    #[test]
    fn year_scroll_cascades_into_day_clamp() {
        let mut picker = open_picker(d(2024, 2, 29), d(2024, 6, 15));
        scroll_to_value(&mut picker, ColumnKind::Year, 2023);
        assert_eq!(picker.selection(), d(2023, 2, 28));
        // Dependent columns were re-centered programmatically.
        assert!(picker.column(ColumnKind::Month).auto_scrolling);
        assert!(picker.column(ColumnKind::Day).auto_scrolling);
        // Day column centered on the clamped value.
        let days = picker.list(ColumnKind::Day);
        assert_eq!(days.len(), 28);
        assert_eq!(days[picker.column(ColumnKind::Day).centered_index], 28);
    }

    #[test]
    fn cascaded_columns_ignore_their_own_scroll_echo() {
        let mut picker = open_picker(d(2024, 2, 29), d(2024, 6, 15));
        scroll_to_value(&mut picker, ColumnKind::Year, 2023);
        // The programmatic re-centering of the day column echoes back as a
        // scroll event; it must not be reinterpreted as user selection.
        let (_, _task) = picker.update(Message::ColumnScrolled {
            column: ColumnKind::Day,
            offset: offset_for_index(0),
        });
        assert_eq!(picker.selection(), d(2023, 2, 28));
    }

    #[test]
    fn stale_settle_timer_is_dropped() {
        let mut picker = open_picker(d(2000, 5, 20), d(2024, 6, 15));
        scroll_to_value(&mut picker, ColumnKind::Day, 7);
        let stale = picker.column(ColumnKind::Day).settle.latest();
        scroll_to_value(&mut picker, ColumnKind::Day, 9);
        let (_, _task) = picker.update(Message::SettleElapsed {
            column: ColumnKind::Day,
            generation: stale,
        });
        assert!(!picker.column(ColumnKind::Day).auto_scrolling);
    }

    #[test]
    fn current_settle_timer_snaps_the_column() {
        let mut picker = open_picker(d(2000, 5, 20), d(2024, 6, 15));
        // Rest between rows 6 and 7.
        let offset = offset_for_index(6) + 12.0;
        let _ = picker.update(Message::ColumnScrolled {
            column: ColumnKind::Day,
            offset,
        });
        let generation = picker.column(ColumnKind::Day).settle.latest();
        let (_, _task) = picker.update(Message::SettleElapsed {
            column: ColumnKind::Day,
            generation,
        });
        assert!(picker.column(ColumnKind::Day).auto_scrolling);
        assert_eq!(picker.column(ColumnKind::Day).centered_index, 6);
    }

    #[test]
    fn momentum_end_snaps_only_when_off_grid() {
        let mut picker = open_picker(d(2000, 5, 20), d(2024, 6, 15));
        // Exactly on-grid: no snap needed.
        scroll_to_value(&mut picker, ColumnKind::Day, 7);
        let (_, _task) = picker.update(Message::MomentumEnded(ColumnKind::Day));
        assert!(!picker.column(ColumnKind::Day).auto_scrolling);

        // Off-grid: snap immediately.
        let _ = picker.update(Message::ColumnScrolled {
            column: ColumnKind::Day,
            offset: offset_for_index(6) + 12.0,
        });
        let (_, _task) = picker.update(Message::MomentumEnded(ColumnKind::Day));
        assert!(picker.column(ColumnKind::Day).auto_scrolling);
    }

    #[test]
    fn tap_applies_selection_and_overrides_in_flight_alignment() {
        let mut picker = open_picker(d(2000, 5, 20), d(2024, 6, 15));
        // Put the day column into a programmatic move first.
        scroll_to_value(&mut picker, ColumnKind::Year, 2010);
        assert!(picker.column(ColumnKind::Day).auto_scrolling);

        let (_, _task) = picker.update(Message::ItemTapped {
            column: ColumnKind::Day,
            index: 0,
        });
        assert_eq!(picker.selection(), d(2010, 5, 1));
        // The tap re-armed its own alignment.
        assert!(picker.column(ColumnKind::Day).auto_scrolling);
    }

    #[test]
    fn tap_index_is_clamped() {
        let mut picker = open_picker(d(2000, 5, 20), d(2024, 6, 15));
        let (_, _task) = picker.update(Message::ItemTapped {
            column: ColumnKind::Month,
            index: 999,
        });
        assert_eq!(picker.selection().month, 12);
    }

    #[test]
    fn confirm_emits_date_then_dismiss_once() {
        let mut picker = open_picker(d(2024, 2, 29), d(2024, 6, 15));
        scroll_to_value(&mut picker, ColumnKind::Year, 2023);

        let (event, _task) = picker.update(Message::ConfirmPressed);
        assert_eq!(event, Event::Confirmed(d(2023, 2, 28)));
        assert!(!picker.is_open());

        let (event, _task) = picker.update(Message::CloseCompleted);
        assert_eq!(event, Event::Dismissed);

        // Dismiss is once per cycle.
        let (event, _task) = picker.update(Message::CloseCompleted);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn cancel_paths_emit_cancelled_then_dismiss() {
        for close in [
            Message::CancelPressed,
            Message::BackdropPressed,
            Message::BackPressed,
        ] {
            let mut picker = open_picker(d(2000, 5, 20), d(2024, 6, 15));
            let (event, _task) = picker.update(close);
            assert_eq!(event, Event::Cancelled);
            let (event, _task) = picker.update(Message::CloseCompleted);
            assert_eq!(event, Event::Dismissed);
        }
    }

    #[test]
    fn host_close_skips_confirm_and_cancel_but_dismisses() {
        let mut picker = open_picker(d(2000, 5, 20), d(2024, 6, 15));
        let _task = picker.close();
        assert!(!picker.is_open());
        let (event, _task) = picker.update(Message::CloseCompleted);
        assert_eq!(event, Event::Dismissed);
    }

    #[test]
    fn messages_after_close_are_inert() {
        let mut picker = open_picker(d(2000, 5, 20), d(2024, 6, 15));
        let _ = picker.update(Message::CancelPressed);
        let (event, _task) = picker.update(Message::ColumnScrolled {
            column: ColumnKind::Year,
            offset: 0.0,
        });
        assert_eq!(event, Event::None);
        let before = picker.selection();
        let (_, _task) = picker.update(Message::ItemTapped {
            column: ColumnKind::Day,
            index: 0,
        });
        assert_eq!(picker.selection(), before);
    }

    #[test]
    fn stale_align_completion_does_not_clear_flag() {
        let mut picker = open_picker(d(2000, 5, 20), d(2024, 6, 15));
        scroll_to_value(&mut picker, ColumnKind::Year, 2010);
        assert!(picker.column(ColumnKind::Month).auto_scrolling);
        let stale = picker.column(ColumnKind::Month).align.latest();
        // A second cascade supersedes the first alignment.
        scroll_to_value(&mut picker, ColumnKind::Year, 2011);
        let (_, _task) = picker.update(Message::AlignCompleted {
            column: ColumnKind::Month,
            generation: stale,
        });
        assert!(picker.column(ColumnKind::Month).auto_scrolling);
    }

    #[test]
    fn dismiss_survives_immediate_reopen() {
        let mut picker = open_picker(d(2000, 5, 20), d(2024, 6, 15));
        let (event, _task) = picker.update(Message::CancelPressed);
        assert_eq!(event, Event::Cancelled);
        // The host reopens in reaction to `Cancelled`, before the close
        // bookkeeping message of the first cycle is delivered.
        let _task = picker.open_at(d(2024, 6, 15));
        assert!(picker.is_open());
        let (event, _task) = picker.update(Message::CloseCompleted);
        assert_eq!(event, Event::Dismissed);
        // The first cycle's dismiss is spent; the new cycle owes its own.
        let (event, _task) = picker.update(Message::CloseCompleted);
        assert_eq!(event, Event::None);
        let _ = picker.update(Message::CancelPressed);
        let (event, _task) = picker.update(Message::CloseCompleted);
        assert_eq!(event, Event::Dismissed);
    }

    #[test]
    fn reopening_reseeds_from_config() {
        let mut picker = open_picker(d(2000, 5, 20), d(2024, 6, 15));
        scroll_to_value(&mut picker, ColumnKind::Day, 7);
        let _ = picker.update(Message::CancelPressed);
        let _ = picker.update(Message::CloseCompleted);

        let _task = picker.open_at(d(2024, 6, 15));
        settle_init(&mut picker);
        assert_eq!(picker.selection(), d(2000, 5, 20));
    }
}
