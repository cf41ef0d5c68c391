// SPDX-License-Identifier: MPL-2.0
//! Programmatic centering of a wheel column.
//!
//! `align_to` updates the logical column record synchronously and returns a
//! task that performs the physical scroll. The scroll itself is a widget
//! operation, which the runtime executes after the next redraw, so the list
//! contents are current before the viewport moves. A completion timer then
//! clears the auto-scroll flag; a newer align for the same column re-arms
//! that timer rather than queueing a second one.

use crate::column::{ColumnKind, ColumnState};
use crate::dialog::Message;
use crate::geometry;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Duration;

/// Completion delay for an unanimated snap.
pub const SNAP_ALIGN_DELAY: Duration = Duration::from_millis(50);

/// Completion delay for an animated move.
pub const ANIMATED_ALIGN_DELAY: Duration = Duration::from_millis(400);

/// Produces a message after a delay. Shared by the alignment completion,
/// settle debounce, and initialization timers.
pub(crate) fn delayed(delay: Duration, message: Message) -> Task<Message> {
    // The sleep must be constructed inside the future: tokio panics if a
    // timer is created outside a runtime context, and callers build these
    // tasks synchronously.
    Task::perform(
        async move { tokio::time::sleep(delay).await },
        move |()| message.clone(),
    )
}

/// Centers `index` in the given column.
///
/// Clamps the index, marks the column auto-scrolling (which also drives the
/// off-center dimming feedback through `centered_index`), and issues the
/// scroll plus its completion timer. An empty list is a transient condition
/// and aligns nowhere.
pub fn align_to(
    column: &mut ColumnState,
    kind: ColumnKind,
    index: usize,
    len: usize,
    animate: bool,
) -> Task<Message> {
    if len == 0 {
        return Task::none();
    }
    let index = index.min(len - 1);

    column.auto_scrolling = true;
    column.centered_index = index;
    let generation = column.align.arm();

    let offset = geometry::offset_for_index(index);
    let scroll = operation::scroll_to(
        Id::new(kind.scrollable_id()),
        AbsoluteOffset { x: 0.0, y: offset },
    );
    let delay = if animate {
        ANIMATED_ALIGN_DELAY
    } else {
        SNAP_ALIGN_DELAY
    };
    let completed = delayed(
        delay,
        Message::AlignCompleted {
            column: kind,
            generation,
        },
    );
    Task::batch([scroll, completed])
}
