//! Show card rendering
//!
//! Turns search results into cards inside the results container.

use super::{ResultsContainer, ShowCard};
use crate::metadata_retrieval::{FALLBACK_IMAGE_URL, Show};
use tracing::trace;

/// Label of the per-card control that expands a show into its episodes.
pub const EPISODES_ACTION_LABEL: &str = "Episodes";

/// Replaces the contents of the results container with one card per show.
///
/// Cards keep the order of `shows`. Every card gets a fresh [`CardHandle`],
/// so handles from a previous call stop resolving.
///
/// [`CardHandle`]: super::CardHandle
pub fn render_shows(container: &mut ResultsContainer, shows: &[Show]) {
    container.clear();

    for show in shows {
        let image_url = if show.image_url.is_empty() {
            FALLBACK_IMAGE_URL.to_string()
        } else {
            show.image_url.clone()
        };

        let card = ShowCard {
            handle: container.next_handle(),
            show_id: show.id,
            image_url,
            name: show.name.clone(),
            summary: show.summary.clone(),
            action_label: EPISODES_ACTION_LABEL,
        };
        trace!(show_id = show.id, handle = %card.handle, "rendered show card");
        container.cards.push(card);
    }
}
