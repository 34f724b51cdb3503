//! HTTP client for the collection API.

use std::num::NonZeroU32;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::state::data::{ArtworkPage, ArtworkResponse};

/// Columns requested from the API; everything else is left out of the payload
pub const FIELDS: &str = "id,title,artist_display,place_of_origin,inscriptions,date_start,date_end";

/// Failure to fetch a page. Shown to the user; never retried.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("collection API returned {status}")]
    Status { status: StatusCode },
    #[error("request to collection API failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("collection API sent an unreadable response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Fetches pages of artworks. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ArtworkClient {
    client: Client,
    base_url: String,
    limit: u32,
}

impl ArtworkClient {
    /// Creates a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, NetworkError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("artic-browser/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(NetworkError::Transport)?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            limit: config.page_size,
        })
    }

    /// Fetches one page of records and the catalog total.
    ///
    /// A single round trip: no retry, no caching.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Status`] on a non-success status,
    /// [`NetworkError::Transport`] when the request cannot be completed and
    /// [`NetworkError::Decode`] when the body is not a valid page envelope.
    pub async fn fetch_page(&self, page: NonZeroU32) -> Result<ArtworkPage, NetworkError> {
        debug!(page = page.get(), url = %self.base_url, "requesting artworks page");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("page", page.get().to_string()),
                ("limit", self.limit.to_string()),
                ("fields", FIELDS.to_string()),
            ])
            .send()
            .await
            .map_err(NetworkError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!(page = page.get(), %status, "collection API rejected page request");
            return Err(NetworkError::Status { status });
        }

        let body = response.text().await.map_err(NetworkError::Transport)?;
        let body = ArtworkResponse::from_json(&body).map_err(NetworkError::Decode)?;

        let pagination = &body.pagination;
        debug!(
            page = page.get(),
            total = pagination.total,
            limit = ?pagination.limit,
            offset = ?pagination.offset,
            total_pages = ?pagination.total_pages,
            current_page = ?pagination.current_page,
            records = body.data.len(),
            "artworks page received"
        );
        if pagination.current_page.is_some_and(|current| current != page.get()) {
            warn!(
                requested = page.get(),
                served = ?pagination.current_page,
                "collection API served a different page than requested"
            );
        }

        Ok(body.into_page(page.get()))
    }
}
