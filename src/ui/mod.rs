/// Rendering layer
///
/// Pure view functions; every interaction is reported as a `Message`:
/// - Artwork table, select-all header and paginator (table.rs)
/// - Cross-page selection side panel (selection_panel.rs)
/// - Error banner for failed loads (notice.rs)
pub mod notice;
pub mod selection_panel;
pub mod table;
