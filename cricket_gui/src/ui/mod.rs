//! UI module for the cricket catalog GUI
//!
//! # Panel Structure
//! - `entry_panel` - Left: identity fields, level/size, eight attribute rows, actions, cover image
//! - `records_panel` - Right: size tabs, one row per record with inline controls
//! - `status_bar` - Bottom: file path, mode, status messages

pub mod entry_panel;
pub mod records_panel;
pub mod status_bar;

use iced::Color;

use cricket_core::display::Rgb;

/// Convert a display model color to an Iced color
pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}
