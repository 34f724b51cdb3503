/// Remote collection API
///
/// This module handles:
/// - Building page requests against the public artworks endpoint
/// - Mapping HTTP and transport failures to `NetworkError`
pub mod client;

pub use client::{ArtworkClient, NetworkError};
