// SPDX-License-Identifier: MPL-2.0
//! `iced_datewheel` is a three-column rolling date selector dialog for the
//! Iced GUI framework.
//!
//! The crate centers on a selection-synchronization state machine: three
//! independently scrollable year/month/day wheels whose physical offsets,
//! logical centered indices, and externally visible selected date stay
//! consistent under continuous scroll input, programmatic re-centering, and
//! dynamic range narrowing. The host drives it like any other component:
//! feed it [`Message`]s, render it with [`view::modal`], and react to the
//! [`Event`]s it returns.

#![doc(html_root_url = "https://docs.rs/iced_datewheel/0.1.0")]

pub mod align;
pub mod column;
pub mod config;
pub mod coordinator;
pub mod date;
pub mod dialog;
pub mod error;
pub mod geometry;
pub mod interpret;
pub mod range;
pub mod theme;
pub mod view;

pub use column::ColumnKind;
pub use config::PickerConfig;
pub use date::CalendarDate;
pub use dialog::{DateWheel, Event, Message};
pub use error::{Error, Result};
pub use theme::{ColumnLabels, PickerTheme};
pub use view::ViewContext;
