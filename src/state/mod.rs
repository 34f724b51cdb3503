/// State management module
///
/// This module holds all application state that has no I/O of its own:
/// - Catalog records and API envelopes (data.rs)
/// - Cross-page selection (selection.rs)
/// - Client-side text filtering of the loaded page (filter.rs)
/// - Page load bookkeeping and paginator arithmetic (page.rs)
pub mod data;
pub mod filter;
pub mod page;
pub mod selection;
