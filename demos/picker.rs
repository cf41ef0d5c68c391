// SPDX-License-Identifier: MPL-2.0
//! Minimal host application showing the picker over a plain page.

use iced::widget::{button, center, column, text};
use iced::{Element, Task};
use iced_datewheel::{
    ColumnLabels, DateWheel, Event, Message as PickerMessage, PickerConfig, PickerTheme,
    ViewContext,
};

fn main() -> iced::Result {
    iced::application(Demo::new, Demo::update, Demo::view).run()
}

#[derive(Debug, Clone)]
enum Message {
    OpenPicker,
    Picker(PickerMessage),
}

struct Demo {
    picker: DateWheel,
    theme: PickerTheme,
    labels: ColumnLabels,
    last_result: String,
}

impl Demo {
    fn new() -> (Self, Task<Message>) {
        (
            Self {
                picker: DateWheel::new(PickerConfig::default()),
                theme: PickerTheme::default(),
                labels: ColumnLabels::default(),
                last_result: "nothing picked yet".to_string(),
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenPicker => self.picker.open().map(Message::Picker),
            Message::Picker(inner) => {
                let (event, task) = self.picker.update(inner);
                match event {
                    Event::Confirmed(date) => self.last_result = format!("picked {date}"),
                    Event::Cancelled => self.last_result = "cancelled".to_string(),
                    Event::Dismissed | Event::None => {}
                }
                task.map(Message::Picker)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let page: Element<'_, Message> = center(
            column![
                text(&self.last_result),
                button("Pick a date").on_press(Message::OpenPicker),
            ]
            .spacing(12),
        )
        .into();

        let ctx = ViewContext {
            theme: &self.theme,
            labels: &self.labels,
        };
        iced_datewheel::view::modal(page, &self.picker, ctx, Message::Picker)
    }
}
