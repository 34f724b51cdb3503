//! The browser application: messages, update loop and top-level view.
//!
//! All state changes go through [`ArtBrowser::update`], one message at a
//! time. The only asynchronous work is the page fetch, which comes back as
//! [`Message::PageLoaded`].

use std::collections::HashSet;
use std::num::NonZeroU32;
use std::sync::Arc;

use iced::widget::{column, container, text, text_input};
use iced::{Element, Length, Task, Theme};
use tracing::{debug, error, info};

use crate::api::{ArtworkClient, NetworkError};
use crate::state::data::{Artwork, ArtworkId, ArtworkPage};
use crate::state::filter;
use crate::state::page::{LoadOutcome, LoadTicket, PageState};
use crate::state::selection::Selection;
use crate::ui;

/// Shown when a page request fails
pub const LOAD_FAILED: &str = "Failed to load artworks. Please try again.";

/// Typed events coming out of the artwork table
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// Navigate to a 1-based page
    Page { page: u32 },
    /// Select-all checkbox report: which of the shown rows are now checked
    Selection {
        visible_ids: Vec<ArtworkId>,
        checked_ids: HashSet<ArtworkId>,
    },
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    Table(TableEvent),
    /// A single row checkbox changed
    RowToggled { id: ArtworkId, checked: bool },
    /// A page request finished
    PageLoaded {
        ticket: LoadTicket,
        result: Result<ArtworkPage, Arc<NetworkError>>,
    },
    FilterChanged(String),
    /// Remove button in the selection panel
    RemoveSelection(ArtworkId),
    ClearSelection,
    DismissNotice,
}

/// Main application state
pub struct ArtBrowser {
    client: ArtworkClient,
    pages: PageState,
    selection: Selection,
    /// Free-text filter applied to the loaded page
    query: String,
    /// Loaded page narrowed by `query`
    visible: Vec<Artwork>,
    /// Error notification, if one is showing
    notice: Option<String>,
}

impl ArtBrowser {
    /// Create the application and request the first page
    pub fn new(client: ArtworkClient, rows: u32) -> (Self, Task<Message>) {
        let mut app = Self {
            client,
            pages: PageState::new(rows),
            selection: Selection::new(),
            query: String::new(),
            visible: Vec::new(),
            notice: None,
        };
        let task = app.request_page(NonZeroU32::MIN);
        (app, task)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn pages(&self) -> &PageState {
        &self.pages
    }

    /// Rows currently displayed (the loaded page after filtering)
    pub fn visible(&self) -> &[Artwork] {
        &self.visible
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Handle application messages and update state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Table(TableEvent::Page { page }) => {
                match NonZeroU32::new(page).filter(|p| p.get() <= self.pages.total_pages()) {
                    Some(page) => return self.request_page(page),
                    None => debug!(page, "ignoring navigation to a page outside the catalog"),
                }
            }
            Message::Table(TableEvent::Selection {
                visible_ids,
                checked_ids,
            }) => self.reconcile_visible(&visible_ids, checked_ids),
            Message::RowToggled { id, checked } => self.toggle_row(id, checked),
            Message::PageLoaded { ticket, result } => self.finish_load(ticket, result),
            Message::FilterChanged(query) => {
                self.query = query;
                self.refresh_visible();
            }
            Message::RemoveSelection(id) => {
                if self.selection.deselect_one(id) {
                    debug!(id, total = self.selection.len(), "removed from selection");
                }
            }
            Message::ClearSelection => {
                debug!(cleared = self.selection.len(), "clearing selection");
                self.selection.clear_all();
            }
            Message::DismissNotice => self.notice = None,
        }

        Task::none()
    }

    /// Build the user interface
    pub fn view(&self) -> Element<'_, Message> {
        let header = column![
            text("Art Institute of Chicago").size(36),
            text("Browse and explore the museum's collection").style(text::secondary),
        ]
        .spacing(4);

        let mut content = column![header].spacing(20).padding(32);

        if let Some(notice) = &self.notice {
            content = content.push(ui::notice::view(notice));
        }
        if let Some(panel) = ui::selection_panel::view(&self.selection) {
            content = content.push(panel);
        }

        content = content
            .push(
                text_input(
                    "Filter this page by title, artist, origin or inscription",
                    &self.query,
                )
                .on_input(Message::FilterChanged)
                .padding(8),
            )
            .push(ui::table::view(&self.visible, &self.selection, &self.pages));

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    fn request_page(&mut self, page: NonZeroU32) -> Task<Message> {
        let ticket = self.pages.begin(page);
        info!(page = page.get(), request = ticket.request, "loading artworks page");

        let client = self.client.clone();
        Task::perform(
            async move { client.fetch_page(page).await.map_err(Arc::new) },
            move |result| Message::PageLoaded { ticket, result },
        )
    }

    fn finish_load(&mut self, ticket: LoadTicket, result: Result<ArtworkPage, Arc<NetworkError>>) {
        match self.pages.complete(ticket, result) {
            LoadOutcome::Loaded { count } => {
                info!(
                    page = ticket.page.get(),
                    request = ticket.request,
                    count,
                    total = self.pages.total(),
                    "artworks page loaded"
                );
                self.refresh_visible();
            }
            LoadOutcome::Failed(err) => {
                error!(page = ticket.page.get(), request = ticket.request, %err, "failed to load artworks page");
                self.notice = Some(LOAD_FAILED.to_string());
            }
            LoadOutcome::Stale => {
                debug!(page = ticket.page.get(), request = ticket.request, "discarding stale page response");
            }
        }
    }

    fn refresh_visible(&mut self) {
        self.visible = filter::visible_records(self.pages.records(), &self.query);
    }

    /// Validate a select-all report against what is on screen, then reconcile.
    fn reconcile_visible(&mut self, visible_ids: &[ArtworkId], checked_ids: HashSet<ArtworkId>) {
        if self.pages.is_loading() {
            debug!("ignoring select-all while a page is loading");
            return;
        }
        let shown = self.visible.iter().map(|a| a.id);
        if !shown.eq(visible_ids.iter().copied()) {
            debug!("dropping select-all report for rows no longer shown");
            return;
        }

        let visible: HashSet<ArtworkId> = visible_ids.iter().copied().collect();
        let checked: HashSet<ArtworkId> = checked_ids.intersection(&visible).copied().collect();
        self.selection.toggle_all(&self.visible, &checked);
        debug!(
            visible = visible.len(),
            checked = checked.len(),
            total = self.selection.len(),
            "reconciled visible selection"
        );
    }

    fn toggle_row(&mut self, id: ArtworkId, checked: bool) {
        if self.pages.is_loading() {
            debug!(id, "ignoring row toggle while a page is loading");
            return;
        }
        if !checked {
            self.selection.deselect_one(id);
            return;
        }
        match self.visible.iter().find(|a| a.id == id) {
            Some(artwork) => self.selection.select_one(artwork.clone()),
            None => debug!(id, "ignoring toggle for a row that is not shown"),
        }
    }
}
