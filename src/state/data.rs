//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the collection API and the UI layer.

use serde::Deserialize;

/// Stable identifier of a catalog record
pub type ArtworkId = u64;

/// Represents a single artwork from the collection catalog
///
/// Immutable once fetched; identity is the `id`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Artwork {
    /// Unique catalog ID
    pub id: ArtworkId,
    #[serde(default)]
    pub title: Option<String>,
    /// Artist name with nationality and life dates, as the museum formats it
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    /// Earliest year of creation (negative for BCE)
    #[serde(default)]
    pub date_start: Option<i32>,
    #[serde(default)]
    pub date_end: Option<i32>,
}

/// Placeholder shown for empty text and date cells
pub const EMPTY_CELL: &str = "—";

impl Artwork {
    /// Create a record with only an id and a title (mostly useful in tests)
    pub fn new(id: ArtworkId, title: &str) -> Self {
        Self {
            id,
            title: Some(title.to_string()),
            artist_display: None,
            place_of_origin: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    pub fn display_title(&self) -> &str {
        non_empty(&self.title).unwrap_or("Untitled")
    }

    pub fn display_artist(&self) -> &str {
        non_empty(&self.artist_display).unwrap_or("Unknown Artist")
    }

    pub fn display_origin(&self) -> &str {
        non_empty(&self.place_of_origin).unwrap_or("Unknown")
    }

    pub fn display_inscriptions(&self) -> &str {
        non_empty(&self.inscriptions).unwrap_or(EMPTY_CELL)
    }

    pub fn display_date_start(&self) -> String {
        display_year(self.date_start)
    }

    pub fn display_date_end(&self) -> String {
        display_year(self.date_end)
    }

    /// Text fields searched by the free-text filter, in column order
    pub fn searchable_fields(&self) -> [Option<&str>; 4] {
        [
            self.title.as_deref(),
            self.artist_display.as_deref(),
            self.place_of_origin.as_deref(),
            self.inscriptions.as_deref(),
        ]
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

fn display_year(year: Option<i32>) -> String {
    year.map_or_else(|| EMPTY_CELL.to_string(), |y| y.to_string())
}

/// One page of records as handed to the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkPage {
    /// 1-based page number this result belongs to
    pub page: u32,
    pub records: Vec<Artwork>,
    /// Total number of records across all pages
    pub total: u64,
}

/// Raw JSON envelope returned by the collection API
#[derive(Debug, Deserialize)]
pub struct ArtworkResponse {
    pub data: Vec<Artwork>,
    pub pagination: Pagination,
}

/// Pagination block of the API envelope
///
/// Only `total` drives the paginator; the other fields are logged when a
/// page arrives.
#[derive(Debug, Deserialize)]
pub struct Pagination {
    pub total: u64,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub current_page: Option<u32>,
}

impl ArtworkResponse {
    /// Parse from the API JSON body
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn into_page(self, page: u32) -> ArtworkPage {
        ArtworkPage {
            page,
            records: self.data,
            total: self.pagination.total,
        }
    }
}
