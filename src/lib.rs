//! Desktop browser for the Art Institute of Chicago public collection.
//!
//! Pages through the collection API, filters the loaded page by free text
//! and keeps a selection of artworks that persists across pages and filters.

pub mod api;
pub mod app;
pub mod config;
pub mod logging;
pub mod state;
pub mod ui;

pub use api::{ArtworkClient, NetworkError};
pub use app::{ArtBrowser, Message, TableEvent};
pub use config::{Config, ConfigError};
pub use state::data::{Artwork, ArtworkId, ArtworkPage};
pub use state::selection::Selection;
