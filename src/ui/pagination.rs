/// Pagination bar
///
/// "Showing first to last of total" on the left, Previous / numbered
/// page buttons / Next on the right. Prev and Next disable themselves
/// at the ends, and only the pager's visible window of page numbers is
/// rendered, so an out-of-range page can never be requested from here.

use iced::widget::{button, text, Row};
use iced::{Element, Length, Theme};

use crate::state::pager::Pager;
use crate::Message;

pub fn pagination_bar<'a>(pager: &Pager) -> Element<'a, Message> {
    let mut bar = Row::new().spacing(6).align_y(iced::Alignment::Center);

    if let Some((first, last)) = pager.shown_range() {
        bar = bar.push(
            text(format!(
                "Showing {} to {} of {} entries",
                first,
                last,
                pager.total_records()
            ))
            .size(13)
            .width(Length::Fill),
        );
    }

    bar = bar.push(
        button(text("Previous").size(13))
            .on_press_maybe(pager.has_prev().then_some(Message::PrevPage)),
    );

    for page in pager.visible_window() {
        let style: fn(&Theme, button::Status) -> button::Style =
            if page == pager.current_page() {
                button::primary
            } else {
                button::secondary
            };
        bar = bar.push(
            button(text(page.to_string()).size(13))
                .style(style)
                .on_press(Message::PageRequested(page)),
        );
    }

    bar = bar.push(
        button(text("Next").size(13))
            .on_press_maybe(pager.has_next().then_some(Message::NextPage)),
    );

    bar.into()
}
