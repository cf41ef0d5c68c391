// SPDX-License-Identifier: MPL-2.0
//! Rendering of the picker dialog.
//!
//! The view is a pure function of the picker state plus presentation inputs;
//! every interactive element reports back through [`Message`]. Wheel geometry
//! comes from the `geometry` constants so the rendered rows match the offset
//! math exactly.

use crate::column::ColumnKind;
use crate::dialog::{DateWheel, Message};
use crate::geometry::{self, LIST_PADDING, ROW_HEIGHT};
use crate::theme::{ColumnLabels, PickerTheme};
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{
    button, container, mouse_area, opaque, text, Column, Id, Row, Scrollable, Space, Stack,
};
use iced::{Alignment, Background, Border, Color, Element, Length, Theme};

/// Width of one wheel column.
const COLUMN_WIDTH: f32 = 96.0;
/// Spacing between wheel columns.
const COLUMN_SPACING: f32 = 8.0;
/// Width of the dialog content (three columns plus their spacing).
const CONTENT_WIDTH: f32 = 3.0 * COLUMN_WIDTH + 2.0 * COLUMN_SPACING;
/// Inner padding of the dialog surface.
const SURFACE_PADDING: f32 = 16.0;
/// Text size of wheel rows.
const ROW_TEXT_SIZE: f32 = 18.0;
/// Text size of the confirm/cancel captions.
const ACTION_TEXT_SIZE: f32 = 16.0;

/// Presentation inputs the host supplies each frame.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub theme: &'a PickerTheme,
    pub labels: &'a ColumnLabels,
}

/// Renders the dialog surface: three wheels plus the action row.
pub fn dialog<'a>(picker: &'a DateWheel, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let wheels = Row::new()
        .push(wheel(picker, ColumnKind::Year, ctx))
        .push(wheel(picker, ColumnKind::Month, ctx))
        .push(wheel(picker, ColumnKind::Day, ctx))
        .spacing(COLUMN_SPACING)
        .align_y(Alignment::Center);

    let actions = Row::new()
        .push(
            button(
                text(ctx.theme.cancel_text.as_str())
                    .size(ACTION_TEXT_SIZE)
                    .color(ctx.theme.dimmed_text),
            )
            .on_press(Message::CancelPressed)
            .style(flat_button)
            .width(Length::Fill),
        )
        .push(
            button(
                text(ctx.theme.confirm_text.as_str())
                    .size(ACTION_TEXT_SIZE)
                    .color(ctx.theme.accent),
            )
            .on_press(Message::ConfirmPressed)
            .style(flat_button)
            .width(Length::Fill),
        )
        .spacing(8);

    let surface_color = ctx.theme.surface;
    container(
        Column::new()
            .push(wheels)
            .push(actions)
            .spacing(12)
            .width(Length::Fixed(CONTENT_WIDTH))
            .align_x(Alignment::Center),
    )
    .padding(SURFACE_PADDING)
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface_color)),
        border: Border {
            radius: 12.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    })
    .into()
}

/// Stacks the dialog (and its backdrop) over the host content while the
/// picker is open. Taps on the backdrop cancel, like a hardware back press.
/// `wrap` lifts picker messages into the host's message type.
pub fn modal<'a, M: 'a>(
    base: Element<'a, M>,
    picker: &'a DateWheel,
    ctx: ViewContext<'a>,
    wrap: impl Fn(Message) -> M + 'a,
) -> Element<'a, M> {
    if !picker.is_open() {
        return base;
    }
    let backdrop_color = ctx.theme.backdrop;
    let layer: Element<'a, Message> = mouse_area(
        container(opaque(dialog(picker, ctx)))
            .center(Length::Fill)
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(backdrop_color)),
                ..container::Style::default()
            }),
    )
    .on_press(Message::BackdropPressed)
    .into();

    Stack::new().push(base).push(opaque(layer.map(wrap))).into()
}

/// One wheel column: a hidden-scrollbar scrollable of fixed-height rows with
/// `2H` of padding at each end so every row can reach the center line.
fn wheel<'a>(
    picker: &'a DateWheel,
    kind: ColumnKind,
    ctx: ViewContext<'a>,
) -> Element<'a, Message> {
    let values = picker.list(kind);
    let centered = picker.column(kind).centered_index;

    let mut items = Column::new()
        .width(Length::Fixed(COLUMN_WIDTH))
        .align_x(Alignment::Center);
    items = items.push(Space::new().height(Length::Fixed(LIST_PADDING)));
    for (index, value) in values.iter().enumerate() {
        let color = row_color(index, centered, ctx.theme);
        items = items.push(
            button(
                container(
                    text(ctx.labels.format(kind, *value))
                        .size(ROW_TEXT_SIZE)
                        .color(color),
                )
                .center_x(Length::Fill)
                .center_y(Length::Fixed(ROW_HEIGHT)),
            )
            .on_press(Message::ItemTapped {
                column: kind,
                index,
            })
            .padding(0)
            .width(Length::Fill)
            .height(Length::Fixed(ROW_HEIGHT))
            .style(flat_button),
        );
    }
    items = items.push(Space::new().height(Length::Fixed(LIST_PADDING)));

    Scrollable::new(items)
        .id(Id::new(kind.scrollable_id()))
        .width(Length::Fixed(COLUMN_WIDTH))
        .height(Length::Fixed(geometry::viewport_height()))
        .direction(Direction::Vertical(
            Scrollbar::new().width(0.0).scroller_width(0.0),
        ))
        .on_scroll(move |viewport: Viewport| Message::ColumnScrolled {
            column: kind,
            offset: viewport.absolute_offset().y,
        })
        .into()
}

/// Centered rows read at full strength; everything else is dimmed, fading
/// further with distance from the center line.
fn row_color(index: usize, centered: usize, theme: &PickerTheme) -> Color {
    let distance = index.abs_diff(centered);
    match distance {
        0 => theme.selected_text,
        1 => theme.dimmed_text,
        _ => Color {
            a: 0.6,
            ..theme.dimmed_text
        },
    }
}

/// Transparent button used for wheel rows and action captions; the text
/// color alone carries the state.
fn flat_button(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: Color::BLACK,
        border: Border::default(),
        ..button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_color_highlights_center_only() {
        let theme = PickerTheme::default();
        assert_eq!(row_color(5, 5, &theme), theme.selected_text);
        assert_eq!(row_color(4, 5, &theme), theme.dimmed_text);
        assert!(row_color(0, 5, &theme).a < 1.0);
    }
}
