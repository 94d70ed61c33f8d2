//! Entry Panel (Left)
//!
//! Displays:
//! - Name and breed text inputs
//! - Level (1-15) and size selectors
//! - Eight attribute rows, each a category selector plus a value selector
//! - Add/Update and Show Records buttons
//! - Cover image

use iced::widget::{button, column, container, image, pick_list, row, scrollable, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use cricket_core::category::Category;
use cricket_core::form::AttributeRow;
use cricket_core::record::SizeClass;

use crate::{App, Message};

const LABEL_WIDTH: f32 = 48.0;
const FIELD_WIDTH: f32 = 160.0;

/// Render the entry panel
pub fn view_entry_panel(app: &App) -> Element<'_, Message> {
    let form = &app.form;

    let heading = if form.is_editing() { "编辑蟋蟀" } else { "新蟋蟀" };

    let level_selected = (!form.level.is_empty()).then(|| form.level.clone());

    let mut panel: Column<'_, Message> = column![
        text(heading).size(14),
        Space::new().height(8),
        labeled_input("名称", &form.name, Message::NameChanged),
        labeled_input("品种", &form.breed, Message::BreedChanged),
        labeled(
            "等级",
            pick_list(app.level_options.as_slice(), level_selected, Message::LevelSelected)
                .width(Length::Fixed(FIELD_WIDTH))
                .text_size(11)
                .into(),
        ),
        labeled(
            "体型",
            pick_list(
                &SizeClass::ALL[..],
                SizeClass::from_label(&form.size),
                Message::SizeSelected,
            )
            .width(Length::Fixed(FIELD_WIDTH))
            .text_size(11)
            .into(),
        ),
        Space::new().height(4),
    ]
    .spacing(6);

    for attribute_row in &form.attributes {
        panel = panel.push(view_attribute_row(attribute_row));
    }

    let actions = column![
        button(text("添加/更新蟋蟀").size(11))
            .on_press(Message::SaveCricket)
            .padding(Padding::from([6, 12]))
            .style(button::primary)
            .width(Length::Fill),
        button(text("展示蟋蟀信息").size(11))
            .on_press(Message::ShowRecords)
            .padding(Padding::from([6, 12]))
            .style(button::secondary)
            .width(Length::Fill),
    ]
    .spacing(5);

    panel = panel.push(Space::new().height(6)).push(actions);

    if let Some(handle) = &app.cover {
        panel = panel.push(Space::new().height(20)).push(
            image(handle.clone())
                .width(Length::Fixed(300.0))
                .height(Length::Fixed(300.0)),
        );
    }

    container(scrollable(panel.padding(8)))
        .width(Length::Fixed(360.0))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// One attribute line. The row carries its own options, so the value
/// selector never has to be located by position.
fn view_attribute_row(attribute_row: &AttributeRow) -> Element<'_, Message> {
    let attribute = attribute_row.attribute;
    let value_selected = (!attribute_row.value.is_empty()).then(|| attribute_row.value.clone());

    row![
        text(attribute.label()).size(11).width(Length::Fixed(LABEL_WIDTH)),
        pick_list(&Category::ALL[..], attribute_row.category, move |category| {
            Message::CategorySelected(attribute, category)
        })
        .width(Length::Fixed(80.0))
        .text_size(11),
        pick_list(attribute_row.options.as_slice(), value_selected, move |value| {
            Message::ValueSelected(attribute, value)
        })
        .width(Length::Fixed(100.0))
        .text_size(11),
    ]
    .spacing(4)
    .align_y(Alignment::Center)
    .into()
}

/// Helper to create a labeled text input
fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    labeled(
        label,
        text_input("", value)
            .on_input(on_change)
            .width(Length::Fixed(FIELD_WIDTH))
            .padding(4)
            .size(11)
            .into(),
    )
}

fn labeled<'a>(label: &'a str, field: Element<'a, Message>) -> Element<'a, Message> {
    row![text(label).size(11).width(Length::Fixed(LABEL_WIDTH)), field]
        .align_y(Alignment::Center)
        .into()
}
