/// Data structures and traits for TV show metadata retrieval.
///
/// This module provides the normalized show and episode records the rest of
/// the crate works with, as well as the trait implemented by metadata sources.
mod tvmaze;
mod tvmaze_types;

pub use tvmaze::TvMazeClient;

use thiserror::Error;

/// Image shown for shows the API has no artwork for.
pub const FALLBACK_IMAGE_URL: &str = "https://tinyurl.com/tv-missing";

/// Errors that can occur during metadata retrieval operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataRetrievalError {
    /// Request to the metadata provider failed
    #[error("Request failed: {0}")]
    RequestError(String),

    /// The provider answered with a non-success status code
    #[error("HTTP {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    /// Failed to parse the provider's JSON response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),
}

/// A single tv show as returned by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    /// Identifier assigned by the remote source
    pub id: u64,
    /// Display name of the show
    pub name: String,
    /// Descriptive text, may contain HTML markup
    pub summary: Option<String>,
    /// Medium resolution artwork, or [`FALLBACK_IMAGE_URL`]
    pub image_url: String,
}

/// A single episode of a show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    /// Identifier assigned by the remote source
    pub id: u64,
    /// The episode title. Untitled episodes carry no name.
    pub name: Option<String>,
    /// Season label
    pub season: String,
    /// Episode label within the season. Specials carry no number.
    pub number: Option<String>,
}

/// Trait for sources that can search shows and list their episodes.
///
/// The controller only talks to this trait, so the HTTP client can be
/// swapped for an in-memory source.
pub trait ShowSource {
    /// Searches for shows matching a free-text term.
    ///
    /// The term is passed through as-is, an empty term included.
    ///
    /// # Returns
    ///
    /// The matching shows in the order the source ranked them
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, MetadataRetrievalError>;

    /// Lists all episodes of the show with the given identifier.
    fn list_episodes(&self, show_id: u64) -> Result<Vec<Episode>, MetadataRetrievalError>;
}
