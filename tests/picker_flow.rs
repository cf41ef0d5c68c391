// SPDX-License-Identifier: MPL-2.0
//! End-to-end flows through the public picker API: open, scroll, cascade,
//! confirm, and the dismiss handshake, driven exactly as a host would.

use iced_datewheel::column::ColumnKind;
use iced_datewheel::date::CalendarDate;
use iced_datewheel::geometry::offset_for_index;
use iced_datewheel::{DateWheel, Event, Message, PickerConfig};

fn d(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::from_ymd_unchecked(year, month, day)
}

/// Opens a fresh picker and replays the runtime callbacks that end the
/// initialization window: one alignment completion per column, then the
/// settle timer. A fresh picker's settle timer carries generation 1.
fn open_settled(config: PickerConfig, today: CalendarDate) -> DateWheel {
    let mut picker = DateWheel::new(config);
    let _ = picker.open_at(today);
    for kind in ColumnKind::ALL {
        let generation = picker.column(kind).align.latest();
        let _ = picker.update(Message::AlignCompleted {
            column: kind,
            generation,
        });
    }
    let generation = picker.init_generation();
    let _ = picker.update(Message::InitSettled { generation });
    picker
}

fn scroll_to(picker: &mut DateWheel, column: ColumnKind, value: i32) {
    let index = picker
        .list(column)
        .iter()
        .position(|v| *v == value)
        .expect("value present in column");
    let _ = picker.update(Message::ColumnScrolled {
        column,
        offset: offset_for_index(index),
    });
}

fn drain(picker: &mut DateWheel, message: Message) -> Event {
    let (event, _task) = picker.update(message);
    event
}

#[test]
fn bounds_track_the_current_date_by_default() {
    let today = d(2024, 6, 15);
    let picker = open_settled(
        PickerConfig {
            initial_date: Some(d(2030, 1, 1)),
            ..PickerConfig::default()
        },
        today,
    );
    // A configured date past today collapses onto today, and the year list
    // offers nothing beyond it.
    assert_eq!(picker.selection(), today);
    assert_eq!(*picker.list(ColumnKind::Year).last().unwrap(), 2024);
}

#[test]
fn allow_future_keeps_the_configured_maximum() {
    let picker = open_settled(
        PickerConfig {
            initial_date: Some(d(2030, 1, 1)),
            max_date: Some(d(2040, 12, 31)),
            allow_future: true,
            ..PickerConfig::default()
        },
        d(2024, 6, 15),
    );
    assert_eq!(picker.selection(), d(2030, 1, 1));
    assert_eq!(*picker.list(ColumnKind::Year).last().unwrap(), 2040);
}

#[test]
fn out_of_range_initial_date_snaps_to_the_minimum() {
    let picker = open_settled(
        PickerConfig {
            initial_date: Some(d(1944, 5, 1)),
            ..PickerConfig::default()
        },
        d(2024, 6, 15),
    );
    assert_eq!(picker.selection(), d(1945, 1, 1));
}

#[test]
fn leap_day_survives_until_the_year_changes() {
    let mut picker = open_settled(
        PickerConfig {
            initial_date: Some(d(2024, 2, 29)),
            ..PickerConfig::default()
        },
        d(2024, 6, 15),
    );
    assert_eq!(picker.selection(), d(2024, 2, 29));

    scroll_to(&mut picker, ColumnKind::Year, 2023);
    // February 2023 has no 29th; the day clamps to its nearest endpoint.
    assert_eq!(picker.selection(), d(2023, 2, 28));
    assert_eq!(picker.list(ColumnKind::Day).len(), 28);
}

#[test]
fn month_scroll_reclamps_the_day() {
    let mut picker = open_settled(
        PickerConfig {
            initial_date: Some(d(2023, 1, 31)),
            ..PickerConfig::default()
        },
        d(2024, 6, 15),
    );
    scroll_to(&mut picker, ColumnKind::Month, 4);
    assert_eq!(picker.selection(), d(2023, 4, 30));
}

#[test]
fn partial_boundary_year_shortens_dependent_lists() {
    let today = d(2024, 6, 15);
    let mut picker = open_settled(
        PickerConfig {
            initial_date: Some(d(2023, 9, 20)),
            ..PickerConfig::default()
        },
        today,
    );
    scroll_to(&mut picker, ColumnKind::Year, 2024);
    // September lies past the effective maximum of June 2024; the month
    // moves to the first legal value and the day survives in full January.
    assert_eq!(picker.selection(), d(2024, 1, 20));
    assert_eq!(*picker.list(ColumnKind::Month).last().unwrap(), 6);
    assert_eq!(picker.list(ColumnKind::Day).len(), 31);
}

#[test]
fn confirm_reports_the_cascaded_date_then_dismisses() {
    let mut picker = open_settled(
        PickerConfig {
            initial_date: Some(d(2024, 2, 29)),
            ..PickerConfig::default()
        },
        d(2024, 6, 15),
    );
    scroll_to(&mut picker, ColumnKind::Year, 2023);

    assert_eq!(
        drain(&mut picker, Message::ConfirmPressed),
        Event::Confirmed(d(2023, 2, 28))
    );
    assert!(!picker.is_open());
    assert_eq!(drain(&mut picker, Message::CloseCompleted), Event::Dismissed);
    assert_eq!(drain(&mut picker, Message::CloseCompleted), Event::None);
}

#[test]
fn backdrop_tap_cancels_and_dismisses() {
    let mut picker = open_settled(
        PickerConfig {
            initial_date: Some(d(2000, 5, 20)),
            ..PickerConfig::default()
        },
        d(2024, 6, 15),
    );
    assert_eq!(drain(&mut picker, Message::BackdropPressed), Event::Cancelled);
    assert_eq!(drain(&mut picker, Message::CloseCompleted), Event::Dismissed);
    // Whatever was picked is gone; the next open reseeds from the config.
    let _ = picker.open_at(d(2024, 6, 15));
    assert_eq!(picker.selection(), d(2000, 5, 20));
}
