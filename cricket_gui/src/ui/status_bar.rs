//! Status Bar (Bottom)
//!
//! Displays:
//! - Catalog file path
//! - Edit mode indicator
//! - Load/save errors
//! - Status messages

use std::path::Path;

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(
    data_file: &'a Path,
    is_editing: bool,
    error: Option<&'a str>,
    status: &'a str,
) -> Element<'a, Message> {
    let mode_indicator = if is_editing { " [editing]" } else { "" };

    let error_info = match error {
        Some(message) => format!("  {}", message),
        None => String::new(),
    };

    row![
        text(format!("{}{}", data_file.display(), mode_indicator)).size(10),
        text(error_info).size(10).color([0.8, 0.2, 0.2]),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
