// SPDX-License-Identifier: MPL-2.0
//! Presentation inputs: colors, button text, and per-column label closures.
//!
//! Nothing here feeds back into the selection state machine; the core only
//! hands integers to the label closures and reads nothing in return.

use crate::column::ColumnKind;
use iced::Color;

/// Base colors used by the default theme.
pub mod palette {
    use iced::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
}

/// Colors and button text for the dialog chrome.
#[derive(Debug, Clone)]
pub struct PickerTheme {
    /// Color of the translucent layer behind the dialog.
    pub backdrop: Color,
    /// Dialog surface color.
    pub surface: Color,
    /// Text color of the centered row.
    pub selected_text: Color,
    /// Text color of off-center rows.
    pub dimmed_text: Color,
    /// Accent color for the confirm action and the center-row guides.
    pub accent: Color,
    /// Confirm button caption.
    pub confirm_text: String,
    /// Cancel button caption.
    pub cancel_text: String,
}

impl Default for PickerTheme {
    fn default() -> Self {
        Self {
            backdrop: Color {
                a: 0.6,
                ..Color::BLACK
            },
            surface: palette::WHITE,
            selected_text: palette::GRAY_900,
            dimmed_text: palette::GRAY_400,
            accent: palette::PRIMARY_500,
            confirm_text: "OK".to_string(),
            cancel_text: "Cancel".to_string(),
        }
    }
}

/// Maps a column value to its display text.
pub type LabelFn = Box<dyn Fn(i32) -> String>;

/// One label closure per column. Defaults print plain years and zero-padded
/// months and days; hosts substitute their own for localization.
pub struct ColumnLabels {
    pub year: LabelFn,
    pub month: LabelFn,
    pub day: LabelFn,
}

impl ColumnLabels {
    /// Formats a value for the given column.
    #[must_use]
    pub fn format(&self, column: ColumnKind, value: i32) -> String {
        match column {
            ColumnKind::Year => (self.year)(value),
            ColumnKind::Month => (self.month)(value),
            ColumnKind::Day => (self.day)(value),
        }
    }
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self {
            year: Box::new(|value| value.to_string()),
            month: Box::new(|value| format!("{:02}", value)),
            day: Box::new(|value| format!("{:02}", value)),
        }
    }
}

impl std::fmt::Debug for ColumnLabels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnLabels").finish_non_exhaustive()
    }
}
