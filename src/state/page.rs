//! Page loading bookkeeping
//!
//! Tracks the loaded page, the total record count, and which request is in
//! flight. Only the most recently issued request may update the page; older
//! completions are reported as stale and dropped.

use std::num::NonZeroU32;
use std::ops::RangeInclusive;

use super::data::{Artwork, ArtworkPage};

/// Number of numbered page links shown by the paginator
pub const PAGE_LINKS: u32 = 5;

/// Identifies one page request so its completion can be matched back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub request: u64,
    pub page: NonZeroU32,
}

/// What happened when a completion was applied
#[derive(Debug, PartialEq)]
pub enum LoadOutcome<E> {
    /// The page was replaced with `count` records
    Loaded { count: usize },
    /// The request failed; the previous page stays on screen
    Failed(E),
    /// A newer request superseded this one; nothing changed
    Stale,
}

#[derive(Debug, Clone)]
pub struct PageState {
    records: Vec<Artwork>,
    total: u64,
    current_page: u32,
    rows: u32,
    issued: u64,
    pending: Option<LoadTicket>,
}

impl PageState {
    /// Empty state showing `rows` records per page
    pub fn new(rows: u32) -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            current_page: 1,
            rows: rows.max(1),
            issued: 0,
            pending: None,
        }
    }

    /// Register a new request for `page`, superseding any request in flight.
    pub fn begin(&mut self, page: NonZeroU32) -> LoadTicket {
        self.issued += 1;
        let ticket = LoadTicket {
            request: self.issued,
            page,
        };
        self.pending = Some(ticket);
        ticket
    }

    /// Apply the result of the request identified by `ticket`.
    pub fn complete<E>(
        &mut self,
        ticket: LoadTicket,
        result: Result<ArtworkPage, E>,
    ) -> LoadOutcome<E> {
        if self.pending != Some(ticket) {
            return LoadOutcome::Stale;
        }
        self.pending = None;

        match result {
            Ok(page) => {
                let count = page.records.len();
                self.records = page.records;
                self.total = page.total;
                self.current_page = ticket.page.get();
                LoadOutcome::Loaded { count }
            }
            Err(err) => LoadOutcome::Failed(err),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// The request whose completion will be applied, if any
    pub fn pending(&self) -> Option<LoadTicket> {
        self.pending
    }

    /// Records of the loaded page, unfiltered
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Number of pages the catalog spans (at least 1)
    pub fn total_pages(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(self.rows)).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Numbered links around the current page, clamped to the catalog size.
    pub fn page_window(&self) -> RangeInclusive<u32> {
        let last_page = self.total_pages();
        let start = self.current_page.saturating_sub(PAGE_LINKS / 2).max(1);
        let end = (start + PAGE_LINKS - 1).min(last_page);
        let start = end.saturating_sub(PAGE_LINKS - 1).max(1);
        start..=end
    }

    /// "Showing {first} to {last} of {total} artworks"
    pub fn report(&self) -> String {
        let (first, last) = if self.records.is_empty() {
            (0, 0)
        } else {
            let first = u64::from(self.current_page - 1) * u64::from(self.rows) + 1;
            (first, first + self.records.len() as u64 - 1)
        };
        format!("Showing {first} to {last} of {} artworks", self.total)
    }
}
