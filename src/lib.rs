//! Episode Scout - Browse tv shows and their episodes from the terminal
//!
//! This library provides a client for the TVMaze API, a page model with
//! renderers for show cards and episode lists, and a controller that turns
//! search submissions and "Episodes" clicks into repaints of that page.

mod controller;
mod metadata_retrieval;
pub mod view;

pub use controller::{Controller, ControllerError, EpisodeTicket, SearchTicket, Transition};
pub use metadata_retrieval::{
    Episode, FALLBACK_IMAGE_URL, MetadataRetrievalError, Show, ShowSource, TvMazeClient,
};

use thiserror::Error;

/// Top-level error type for Episode Scout operations
#[derive(Debug, Error)]
pub enum EpisodeScoutError {
    /// The controller could not act on an event
    #[error("Controller error: {0}")]
    Controller(#[from] ControllerError),

    /// Interactive prompt failed (terminal closed, not a tty, ...)
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Creates a controller backed by the TVMaze API.
///
/// # Arguments
///
/// * `base_url` - Optional endpoint overriding https://api.tvmaze.com
///
/// # Examples
///
/// ```no_run
/// use episode_scout::{tvmaze_controller, Transition};
///
/// let mut controller = tvmaze_controller(None);
/// if let Transition::Rendered { count } = controller.submit_search("girls") {
///     println!("Found {} show(s)", count);
/// }
/// ```
pub fn tvmaze_controller(base_url: Option<&str>) -> Controller<TvMazeClient> {
    let client = match base_url {
        Some(url) => TvMazeClient::with_base_url(url),
        None => TvMazeClient::new(),
    };
    Controller::new(client)
}
