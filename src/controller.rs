//! Interaction controller module
//!
//! This module wires the two user events (submitting a search and clicking the
//! "Episodes" control of a card) to the show source and the renderers. Every
//! request is stamped with a generation when it starts, so a response that
//! arrives after a newer request was issued is dropped instead of repainting
//! the page.

use crate::metadata_retrieval::{Episode, MetadataRetrievalError, Show, ShowSource};
use crate::view::{CardHandle, Notice, Page, render_episodes, render_shows};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors caused by events the controller cannot act on
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    /// The handle does not belong to a card of the current results
    #[error("No show card for {0}")]
    UnknownCard(CardHandle),
}

/// Outcome of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The response was painted, `count` cards or episode items are shown
    Rendered { count: usize },
    /// The request failed, an error notice is shown instead
    Failed(MetadataRetrievalError),
    /// A newer request was issued in the meantime, the response was dropped
    Superseded,
}

/// Token for a search that has been issued but not completed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
}

/// Token for an episode listing that has been issued but not completed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeTicket {
    generation: u64,
    show_id: u64,
}

impl EpisodeTicket {
    /// The show whose episodes were requested
    pub fn show_id(&self) -> u64 {
        self.show_id
    }
}

/// Drives a [`Page`] from user events.
///
/// The synchronous entry points [`submit_search`](Self::submit_search) and
/// [`open_episodes`](Self::open_episodes) run a whole round trip. The
/// `begin_*`/`finish_*` pairs split a round trip at the network call for
/// callers that fetch elsewhere.
pub struct Controller<S: ShowSource> {
    source: S,
    page: Page,
    search_generation: u64,
    episode_generation: u64,
}

impl<S: ShowSource> Controller<S> {
    /// Creates a controller with an empty page.
    pub fn new(source: S) -> Self {
        Self {
            source,
            page: Page::new(),
            search_generation: 0,
            episode_generation: 0,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Handles a search submission for `term`.
    pub fn submit_search(&mut self, term: &str) -> Transition {
        let ticket = self.begin_search();
        info!(%term, "searching shows");
        let result = self.source.search_shows(term);
        self.finish_search(ticket, result)
    }

    /// Handles a click on the "Episodes" control of a card.
    pub fn open_episodes(&mut self, handle: CardHandle) -> Result<Transition, ControllerError> {
        let ticket = self.begin_episodes(handle)?;
        info!(show_id = ticket.show_id, "listing episodes");
        let result = self.source.list_episodes(ticket.show_id);
        Ok(self.finish_episodes(ticket, result))
    }

    /// Starts a search: hides the episode area and supersedes every request
    /// still in flight.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.search_generation += 1;
        // Episodes of the previous results must not reappear under new ones
        self.episode_generation += 1;
        self.page.episodes.hide();

        SearchTicket {
            generation: self.search_generation,
        }
    }

    /// Completes a search started with [`begin_search`](Self::begin_search).
    ///
    /// A failed search leaves the previous cards on the page. Rendering new
    /// cards supersedes episode listings started from the old ones.
    pub fn finish_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<Vec<Show>, MetadataRetrievalError>,
    ) -> Transition {
        if ticket.generation != self.search_generation {
            debug!(
                generation = ticket.generation,
                current = self.search_generation,
                "dropping superseded search response"
            );
            return Transition::Superseded;
        }

        match result {
            Ok(shows) => {
                // Clicks made while the search was in flight resolved old cards
                self.episode_generation += 1;
                self.page.episodes.hide();
                render_shows(&mut self.page.results, &shows);
                self.page.notice = None;
                info!(count = shows.len(), "rendered shows");
                Transition::Rendered { count: shows.len() }
            }
            Err(e) => {
                warn!(error = %e, "show search failed");
                self.page.notice = Some(Notice::Error(e.to_string()));
                Transition::Failed(e)
            }
        }
    }

    /// Starts listing the episodes of the show behind `handle`.
    pub fn begin_episodes(&mut self, handle: CardHandle) -> Result<EpisodeTicket, ControllerError> {
        let show_id = self
            .page
            .results
            .resolve(handle)
            .ok_or(ControllerError::UnknownCard(handle))?;

        self.episode_generation += 1;

        Ok(EpisodeTicket {
            generation: self.episode_generation,
            show_id,
        })
    }

    /// Completes an episode listing started with
    /// [`begin_episodes`](Self::begin_episodes).
    ///
    /// On failure the episode area is hidden, so it never shows the episodes
    /// of a different show than the one clicked last.
    pub fn finish_episodes(
        &mut self,
        ticket: EpisodeTicket,
        result: Result<Vec<Episode>, MetadataRetrievalError>,
    ) -> Transition {
        if ticket.generation != self.episode_generation {
            debug!(
                show_id = ticket.show_id,
                generation = ticket.generation,
                current = self.episode_generation,
                "dropping superseded episode response"
            );
            return Transition::Superseded;
        }

        match result {
            Ok(episodes) => {
                render_episodes(&mut self.page.episodes, &episodes);
                self.page.notice = None;
                info!(show_id = ticket.show_id, count = episodes.len(), "rendered episodes");
                Transition::Rendered {
                    count: episodes.len(),
                }
            }
            Err(e) => {
                warn!(show_id = ticket.show_id, error = %e, "episode listing failed");
                self.page.episodes.hide();
                self.page.notice = Some(Notice::Error(e.to_string()));
                Transition::Failed(e)
            }
        }
    }
}
