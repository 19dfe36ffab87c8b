/// Bulk selection panel
///
/// A small form where the user declares "select the first N rows".
/// Validation errors surface inline and never reach the selection
/// engine; while a fill is running the panel shows its progress.

use iced::widget::{button, container, text, text_input, Column, Row};
use iced::{Element, Length};

use crate::Message;

pub fn bulk_panel<'a>(
    input: &'a str,
    error: Option<&'a str>,
    progress: Option<(usize, usize)>,
) -> Element<'a, Message> {
    let mut panel = Column::new().spacing(8).width(Length::Fixed(280.0));

    panel = panel.push(text("Select rows").size(15));
    panel = panel.push(text("Enter how many rows to select.").size(12));

    panel = panel.push(
        text_input("e.g. 25", input)
            .on_input(Message::BulkInputChanged)
            .on_submit(Message::BulkApply)
            .size(13),
    );

    if let Some(message) = error {
        panel = panel.push(text(message).size(12).style(text::danger));
    }

    panel = panel.push(
        Row::new()
            .spacing(8)
            .push(
                button(text("Apply").size(13))
                    .style(button::primary)
                    .on_press(Message::BulkApply)
                    .width(Length::Fill),
            )
            .push(
                button(text("Cancel").size(13))
                    .style(button::secondary)
                    .on_press(Message::BulkCancel)
                    .width(Length::Fill),
            ),
    );

    if let Some((selected, target)) = progress {
        panel = panel.push(text(format!("{} / {} selected", selected, target)).size(12));
    }

    container(panel)
        .style(container::bordered_box)
        .padding(12)
        .into()
}
