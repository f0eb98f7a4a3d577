//! Page model module
//!
//! This module holds the two regions the renderers own: the results container
//! with one card per show, and the episode area with its list. A page value is
//! passed around explicitly instead of living in global state.

mod episode_renderer;
mod show_renderer;
pub mod terminal;

pub use episode_renderer::{format_episode, render_episodes};
pub use show_renderer::{EPISODES_ACTION_LABEL, render_shows};

use std::fmt;

/// Typed reference to a rendered show card.
///
/// The handle remembers which render produced it, so a handle kept across a
/// new search no longer resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardHandle {
    render: u64,
    index: usize,
}

impl CardHandle {
    /// Position of the card inside the results container
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for CardHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card #{} of render {}", self.index, self.render)
    }
}

/// One show as displayed in the results container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowCard {
    pub handle: CardHandle,
    pub show_id: u64,
    pub image_url: String,
    pub name: String,
    pub summary: Option<String>,
    /// Label of the control that expands the show into its episodes
    pub action_label: &'static str,
}

/// The region holding the show cards of the latest search.
#[derive(Debug, Default)]
pub struct ResultsContainer {
    render: u64,
    cards: Vec<ShowCard>,
}

impl ResultsContainer {
    pub fn cards(&self) -> &[ShowCard] {
        &self.cards
    }

    /// Looks up the show a card was rendered for.
    ///
    /// Returns `None` for handles of an earlier render or out of range.
    pub fn resolve(&self, handle: CardHandle) -> Option<u64> {
        if handle.render != self.render {
            return None;
        }
        self.cards.get(handle.index).map(|card| card.show_id)
    }

    /// Empties the container and starts a new render generation.
    fn clear(&mut self) {
        self.cards.clear();
        self.render += 1;
    }

    fn next_handle(&self) -> CardHandle {
        CardHandle {
            render: self.render,
            index: self.cards.len(),
        }
    }
}

/// One line of the episode list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeItem {
    pub episode_id: u64,
    pub text: String,
}

/// The region listing the episodes of one show. Hidden until filled.
#[derive(Debug, Default)]
pub struct EpisodeArea {
    items: Vec<EpisodeItem>,
    visible: bool,
}

impl EpisodeArea {
    pub fn items(&self) -> &[EpisodeItem] {
        &self.items
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// Inline message shown above the results, e.g. when a request failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
}

/// Everything the renderers paint into.
#[derive(Debug, Default)]
pub struct Page {
    pub results: ResultsContainer,
    pub episodes: EpisodeArea,
    pub notice: Option<Notice>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }
}
