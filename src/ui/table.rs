/// The artwork table view
///
/// Builds the header row, one checkbox row per artwork, the selection
/// summary bar, and the fetch-error banner. Also owns the display
/// formatting rules: missing fields render as an em-dash, empty
/// inscriptions render as "None", and long inscriptions are truncated
/// for display only.

use iced::widget::{button, checkbox, container, text, Column, Row};
use iced::{Element, Length};

use crate::state::data::Artwork;
use crate::state::selection::SelectionEngine;
use crate::Message;

/// Inscriptions longer than this are cut for display
const INSCRIPTION_DISPLAY_LIMIT: usize = 80;

/// Placeholder for missing fields
const DASH: &str = "—";

/// Build the full table for the current page.
pub fn artwork_table<'a>(
    records: &'a [Artwork],
    selection: &SelectionEngine,
    loading: bool,
) -> Element<'a, Message> {
    let mut table = Column::new().spacing(2);
    table = table.push(header_row(records, selection));

    if records.is_empty() {
        let placeholder = if loading {
            "Loading artworks…"
        } else {
            "No artworks found."
        };
        table = table.push(
            container(text(placeholder).size(14))
                .width(Length::Fill)
                .center_x(Length::Fill)
                .padding(48),
        );
    } else {
        for artwork in records {
            table = table.push(artwork_row(artwork, selection.is_selected(artwork.id)));
        }
        if loading {
            table = table.push(text("Loading…").size(12));
        }
    }

    container(table)
        .style(container::bordered_box)
        .padding(8)
        .width(Length::Fill)
        .into()
}

/// Header: the select-all-on-page checkbox plus column titles
fn header_row<'a>(records: &[Artwork], selection: &SelectionEngine) -> Element<'a, Message> {
    let all_selected =
        !records.is_empty() && records.iter().all(|a| selection.is_selected(a.id));

    let mut header = Row::new().spacing(8).padding(4);
    header = header.push(
        container(checkbox("", all_selected).on_toggle(Message::PageToggled))
            .width(Length::Fixed(36.0)),
    );
    for (label, portion) in [
        ("Title", 4u16),
        ("Place of Origin", 2),
        ("Artist", 3),
        ("Inscriptions", 3),
        ("Start Date", 1),
        ("End Date", 1),
    ] {
        header = header.push(
            text(label).size(13).width(Length::FillPortion(portion)),
        );
    }
    header.into()
}

/// One table row: checkbox plus the formatted display fields
fn artwork_row(artwork: &Artwork, selected: bool) -> Element<'_, Message> {
    let id = artwork.id;

    let mut cells = Row::new().spacing(8).padding(4);
    cells = cells.push(
        container(
            checkbox("", selected)
                .on_toggle(move |checked| Message::RowToggled(id, checked)),
        )
        .width(Length::Fixed(36.0)),
    );
    cells = cells.push(
        text(dash_or(artwork.title.as_deref()))
            .size(13)
            .width(Length::FillPortion(4)),
    );
    cells = cells.push(
        text(dash_or(artwork.place_of_origin.as_deref()))
            .size(13)
            .width(Length::FillPortion(2)),
    );
    cells = cells.push(
        text(dash_or(artwork.artist_display.as_deref()))
            .size(12)
            .width(Length::FillPortion(3)),
    );
    cells = cells.push(
        text(inscription_display(artwork.inscriptions.as_deref()))
            .size(12)
            .width(Length::FillPortion(3)),
    );
    cells = cells.push(
        text(dash_or_year(artwork.start_date))
            .size(13)
            .width(Length::FillPortion(1)),
    );
    cells = cells.push(
        text(dash_or_year(artwork.end_date))
            .size(13)
            .width(Length::FillPortion(1)),
    );
    cells.into()
}

/// Summary bar shown while anything is selected: the count, the bulk
/// fill progress when one is running, and the "Clear all" action.
pub fn selection_summary<'a>(
    count: usize,
    progress: Option<(usize, usize)>,
) -> Element<'a, Message> {
    let plural = if count == 1 { "" } else { "s" };
    let mut label = format!("{} artwork{} selected", count, plural);
    if let Some((selected, target)) = progress {
        label.push_str(&format!(
            " (filling {}/{} — browse pages to fill remaining)",
            selected, target
        ));
    }

    let bar = Row::new()
        .spacing(16)
        .push(text(label).size(13).width(Length::Fill))
        .push(
            button(text("Clear all").size(13))
                .style(button::text)
                .on_press(Message::ClearAll),
        );

    container(bar)
        .style(container::bordered_box)
        .padding(8)
        .width(Length::Fill)
        .into()
}

/// Dismissible banner for a failed page fetch. The table and any
/// existing selection stay as they were.
pub fn error_banner(message: &str) -> Element<'_, Message> {
    let bar = Row::new()
        .spacing(16)
        .push(
            text(format!("Failed to load artworks: {}", message))
                .size(13)
                .style(text::danger)
                .width(Length::Fill),
        )
        .push(
            button(text("Dismiss").size(13))
                .style(button::text)
                .on_press(Message::ErrorDismissed),
        );

    container(bar)
        .style(container::bordered_box)
        .padding(8)
        .width(Length::Fill)
        .into()
}

/// Em-dash for missing or empty text fields
fn dash_or(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => DASH.to_string(),
    }
}

/// Em-dash for missing numeric fields
fn dash_or_year(value: Option<i32>) -> String {
    match value {
        Some(year) => year.to_string(),
        None => DASH.to_string(),
    }
}

/// Inscriptions column: "None" when absent or empty, otherwise the
/// text cut to 80 characters with an ellipsis. The stored record keeps
/// the full value; only the display is truncated.
fn inscription_display(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.is_empty() => {
            if s.chars().count() > INSCRIPTION_DISPLAY_LIMIT {
                let cut: String = s.chars().take(INSCRIPTION_DISPLAY_LIMIT).collect();
                format!("{}…", cut)
            } else {
                s.to_string()
            }
        }
        _ => "None".to_string(),
    }
}
