//! Records Panel (Right Side)
//!
//! One tab per size class. Each record is a row of name, breed, level and
//! color-coded attribute labels, followed by edit, move up, move down and
//! delete buttons.

use iced::widget::{button, column, container, row, rule, scrollable, text, Column, Row, Space};
use iced::{Alignment, Element, Length, Padding};

use cricket_core::display::RecordRow;
use cricket_core::record::SizeClass;
use cricket_core::store::Direction;

use crate::{App, Message};

use super::to_color;

/// Render the tab strip and the rows of the selected tab
pub fn view_records_panel(app: &App) -> Element<'_, Message> {
    let tabs: Row<'_, Message> = SizeClass::ALL.iter().fold(row![].spacing(4), |tabs, size| {
        let style = if *size == app.selected_tab {
            button::primary
        } else {
            button::secondary
        };
        let label = format!("{} ({})", size.tab_title(), app.groups.get(*size).len());
        tabs.push(
            button(text(label).size(11))
                .on_press(Message::TabSelected(*size))
                .padding(Padding::from([4, 10]))
                .style(style),
        )
    });

    let rows = app.groups.get(app.selected_tab);
    let mut list: Column<'_, Message> = column![].spacing(5);
    for record in rows {
        list = list.push(view_record_row(record));
    }
    if rows.is_empty() {
        list = list.push(text("(none)").size(10).color([0.5, 0.5, 0.5]));
    }

    let content = column![
        tabs,
        rule::horizontal(1),
        scrollable(list.padding(5)).height(Length::Fill),
    ]
    .spacing(6);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_record_row(record: &RecordRow) -> Element<'_, Message> {
    let name = record.name().to_string();

    let mut line: Row<'_, Message> = row![
        text(record.name()).size(11).width(Length::Fixed(64.0)),
        text(&record.cricket.breed).size(11).width(Length::Fixed(80.0)),
        text(&record.level_label).size(11).width(Length::Fixed(72.0)),
    ]
    .spacing(4)
    .align_y(Alignment::Center);

    for cell in &record.attributes {
        line = line.push(
            text(&cell.text)
                .size(11)
                .color(to_color(cell.color))
                .width(Length::Fixed(80.0)),
        );
    }

    line.push(action_button("🔄", Message::EditCricket(record.cricket.clone())))
        .push(action_button("↑", Message::MoveCricket(name.clone(), Direction::Up)))
        .push(action_button("↓", Message::MoveCricket(name.clone(), Direction::Down)))
        .push(Space::new().width(Length::Fill))
        .push(action_button("✖", Message::DeleteCricket(name)))
        .padding(5)
        .into()
}

fn action_button(label: &str, message: Message) -> Element<'_, Message> {
    button(text(label).size(11))
        .on_press(message)
        .padding(Padding::from([2, 6]))
        .style(button::secondary)
        .into()
}
