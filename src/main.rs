use iced::widget::{button, scrollable, text, Column, Row};
use iced::{Element, Length, Size, Task, Theme};
use std::collections::HashSet;

mod catalogue;
mod state;
mod ui;

use catalogue::client::{fetch_page, CataloguePage, FetchError};
use state::page::{LoadOutcome, PageState};
use state::pager::Pager;
use state::selection::{SelectionEngine, ValidationError};

/// Rows fetched and displayed per page
const PAGE_SIZE: usize = 12;

/// Main application state
struct ArtworkTable {
    /// Shared HTTP client for catalogue fetches
    client: reqwest::Client,
    /// Records and status of the currently displayed page
    page: PageState,
    /// Page math and navigation
    pager: Pager,
    /// Cross-page selection state
    selection: SelectionEngine,
    /// Bulk "select first N" panel form state
    bulk_open: bool,
    bulk_input: String,
    bulk_error: Option<String>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked a numbered page button
    PageRequested(u32),
    /// User clicked Previous
    PrevPage,
    /// User clicked Next
    NextPage,
    /// A page fetch completed; the generation tags which fetch
    PageLoaded {
        generation: u64,
        result: Result<CataloguePage, FetchError>,
    },
    /// A single row's checkbox changed
    RowToggled(i64, bool),
    /// The header "select all on this page" checkbox changed
    PageToggled(bool),
    /// User opened or closed the bulk selection panel
    BulkPanelToggled,
    /// Bulk panel input text changed
    BulkInputChanged(String),
    /// User submitted the bulk panel form
    BulkApply,
    /// User cancelled the bulk panel
    BulkCancel,
    /// User clicked "Clear all" in the selection summary
    ClearAll,
    /// User dismissed the fetch-error banner
    ErrorDismissed,
}

impl ArtworkTable {
    /// Create the application and kick off the first page fetch
    fn new() -> (Self, Task<Message>) {
        let client = reqwest::Client::new();
        let mut page = PageState::new();

        println!("🖼️  Artwork table initialized, loading page 1...");

        let generation = page.begin_load();
        let task = fetch_task(client.clone(), 1, PAGE_SIZE, generation);

        (
            ArtworkTable {
                client,
                page,
                pager: Pager::new(PAGE_SIZE),
                selection: SelectionEngine::new(),
                bulk_open: false,
                bulk_input: String::new(),
                bulk_error: None,
            },
            task,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PageRequested(page) => {
                if self.pager.go_to(page) {
                    return self.start_fetch();
                }
                Task::none()
            }
            Message::PrevPage => {
                if self.pager.prev() {
                    return self.start_fetch();
                }
                Task::none()
            }
            Message::NextPage => {
                if self.pager.next() {
                    return self.start_fetch();
                }
                Task::none()
            }
            Message::PageLoaded { generation, result } => {
                match self.page.apply(generation, result) {
                    LoadOutcome::Loaded => {
                        self.pager.set_total_records(self.page.total_records());
                        // Exactly once per fresh page: feed its ids to
                        // any pending bulk fill
                        let ids = self.page.record_ids();
                        self.selection.reconcile_on_page_load(&ids);
                    }
                    LoadOutcome::Failed => {
                        if let Some(err) = self.page.error() {
                            eprintln!("⚠️  Page load failed: {}", err);
                        }
                    }
                    LoadOutcome::Stale => {
                        println!("🗑️  Discarded stale page response");
                    }
                }
                Task::none()
            }
            Message::RowToggled(id, now_checked) => {
                let page_ids = self.page.record_ids();
                let mut checked = self.selection.selection_on_page(&page_ids);
                if now_checked {
                    checked.insert(id);
                } else {
                    checked.remove(&id);
                }
                self.selection.toggle_rows_on_page(&page_ids, &checked);
                Task::none()
            }
            Message::PageToggled(now_checked) => {
                let page_ids = self.page.record_ids();
                let checked: HashSet<i64> = if now_checked {
                    page_ids.iter().copied().collect()
                } else {
                    HashSet::new()
                };
                self.selection.toggle_rows_on_page(&page_ids, &checked);
                Task::none()
            }
            Message::BulkPanelToggled => {
                self.bulk_open = !self.bulk_open;
                self.bulk_error = None;
                Task::none()
            }
            Message::BulkInputChanged(value) => {
                self.bulk_input = value;
                self.bulk_error = None;
                Task::none()
            }
            Message::BulkApply => {
                // Non-numeric input gets the same message as zero; the
                // engine itself never sees invalid input
                let outcome = match self.bulk_input.trim().parse::<usize>() {
                    Ok(n) => self
                        .selection
                        .declare_bulk_target(n, self.pager.total_records()),
                    Err(_) => Err(ValidationError::NotPositive),
                };

                match outcome {
                    Ok(()) => {
                        self.bulk_input.clear();
                        self.bulk_error = None;
                        self.bulk_open = false;
                        // Start filling from the page already on screen
                        let ids = self.page.record_ids();
                        self.selection.reconcile_on_page_load(&ids);
                    }
                    Err(err) => {
                        self.bulk_error = Some(err.to_string());
                    }
                }
                Task::none()
            }
            Message::BulkCancel => {
                self.bulk_open = false;
                self.bulk_input.clear();
                self.bulk_error = None;
                Task::none()
            }
            Message::ClearAll => {
                self.selection.clear_all();
                Task::none()
            }
            Message::ErrorDismissed => {
                self.page.dismiss_error();
                Task::none()
            }
        }
    }

    /// Start a fetch for the pager's current page
    fn start_fetch(&mut self) -> Task<Message> {
        let generation = self.page.begin_load();
        println!("📖 Fetching page {}...", self.pager.current_page());
        fetch_task(
            self.client.clone(),
            self.pager.current_page(),
            self.pager.page_size(),
            generation,
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut content = Column::new().spacing(12).padding(24);

        content = content.push(text("Artworks").size(28));

        if self.selection.selected_count() > 0 {
            content = content.push(ui::table::selection_summary(
                self.selection.selected_count(),
                self.selection.bulk_progress(),
            ));
        }

        if let Some(err) = self.page.error() {
            content = content.push(ui::table::error_banner(err));
        }

        content = content.push(
            Row::new().push(
                button(text("Select rows…").size(13))
                    .on_press(Message::BulkPanelToggled),
            ),
        );

        if self.bulk_open {
            content = content.push(ui::bulk::bulk_panel(
                &self.bulk_input,
                self.bulk_error.as_deref(),
                self.selection
                    .bulk_target()
                    .map(|target| (self.selection.selected_count(), target)),
            ));
        }

        content = content.push(ui::table::artwork_table(
            self.page.records(),
            &self.selection,
            self.page.is_loading(),
        ));

        if self.pager.total_records() > 0 {
            content = content.push(ui::pagination::pagination_bar(&self.pager));
        }

        scrollable(content).width(Length::Fill).into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Spawn a background fetch for one catalogue page. The generation is
/// carried back on completion so a superseded fetch can be discarded.
fn fetch_task(
    client: reqwest::Client,
    page: u32,
    page_size: usize,
    generation: u64,
) -> Task<Message> {
    Task::perform(
        async move { fetch_page(&client, page, page_size).await },
        move |result| Message::PageLoaded { generation, result },
    )
}

fn main() -> iced::Result {
    iced::application(
        "Artworks",
        ArtworkTable::update,
        ArtworkTable::view,
    )
    .theme(ArtworkTable::theme)
    .window_size(Size::new(1180.0, 780.0))
    .centered()
    .run_with(ArtworkTable::new)
}
