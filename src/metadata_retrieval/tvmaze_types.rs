/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format from the TVMaze API.
use serde::Deserialize;

/// One entry of the `/search/shows` response.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeSearchResult {
    /// Relevance score, unused apart from debugging
    #[allow(dead_code)]
    #[serde(default)]
    pub score: Option<f64>,
    /// The matched show
    pub show: TvMazeShow,
}

/// A show object as embedded in search results.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    pub id: u64,
    pub name: String,
    /// Show summary in HTML format (may be null)
    #[serde(default)]
    pub summary: Option<String>,
    /// Artwork links (null when the show has no artwork)
    #[serde(default)]
    pub image: Option<TvMazeImage>,
}

/// Artwork links of a show.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeImage {
    #[serde(default)]
    pub medium: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub original: Option<String>,
}

/// A single episode from the `/shows/{id}/episodes` response.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeEpisode {
    pub id: u64,
    /// Episode title (may be null for episodes without a title)
    #[serde(default)]
    pub name: Option<String>,
    pub season: TvMazeLabel,
    /// Episode number within the season (null for specials)
    #[serde(default)]
    pub number: Option<TvMazeLabel>,
}

/// Season and episode numbers arrive as integers from TVMaze, but are
/// treated as labels, so strings are accepted too.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(super) enum TvMazeLabel {
    Number(u64),
    Text(String),
}

impl TvMazeLabel {
    pub fn into_label(self) -> String {
        match self {
            TvMazeLabel::Number(n) => n.to_string(),
            TvMazeLabel::Text(s) => s,
        }
    }
}
