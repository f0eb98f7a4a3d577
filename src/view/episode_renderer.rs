//! Episode list rendering

use super::{EpisodeArea, EpisodeItem};
use crate::metadata_retrieval::Episode;

/// Formats an episode as `"{name} (season {season}, number {number})"`.
///
/// Episodes without a number (specials) show `?` in its place, untitled
/// episodes show `Untitled`.
pub fn format_episode(episode: &Episode) -> String {
    format!(
        "{} (season {}, number {})",
        episode.name.as_deref().unwrap_or("Untitled"),
        episode.season,
        episode.number.as_deref().unwrap_or("?")
    )
}

/// Replaces the episode list with one item per episode and reveals the area.
pub fn render_episodes(area: &mut EpisodeArea, episodes: &[Episode]) {
    area.items = episodes
        .iter()
        .map(|episode| EpisodeItem {
            episode_id: episode.id,
            text: format_episode(episode),
        })
        .collect();

    area.show();
}
