//! Request/state synchronization for the movie browser
//!
//! - list: query state, refresh lifecycle, favorites rebuilt per page
//! - favorites: add/remove toggling applied after server confirmation
//!
//! [`MovieListController`] runs operations inline (CLI, tests). The TUI
//! instead spawns the request futures and sends [`Outcome`]s back to its
//! loop, so both paths share the same state transitions.

pub mod favorites;
pub mod list;

pub use favorites::{ToggleAction, ToggleOutcome, ToggleRequest};
pub use list::{FetchOutcome, FetchRequest, MovieListState, QueryState, ITEMS_PER_PAGE};

use crate::api::MovieClient;
use crate::models::Tab;

/// Result of a background request, delivered to the UI loop
#[derive(Debug)]
pub enum Outcome {
    Fetch(FetchOutcome),
    Toggle(ToggleOutcome),
}

/// List state bound to a catalog client
#[derive(Debug)]
pub struct MovieListController {
    client: MovieClient,
    pub state: MovieListState,
}

impl MovieListController {
    pub fn new(client: MovieClient) -> Self {
        Self::with_state(client, MovieListState::new())
    }

    pub fn with_state(client: MovieClient, state: MovieListState) -> Self {
        Self { client, state }
    }

    /// Fetch the current tab/page/search unconditionally
    pub async fn refresh(&mut self) {
        let request = self.state.begin_refresh();
        let outcome = request.execute(&self.client).await;
        self.state.finish_refresh(outcome);
    }

    /// Fetch only if a change since the last refresh calls for it
    pub async fn sync(&mut self) -> bool {
        match self.state.take_refresh() {
            Some(request) => {
                let outcome = request.execute(&self.client).await;
                self.state.finish_refresh(outcome);
                true
            }
            None => false,
        }
    }

    pub async fn set_tab(&mut self, tab: Tab) {
        self.state.set_tab(tab);
        self.sync().await;
    }

    pub async fn set_page(&mut self, page: u32) {
        self.state.set_page(page);
        self.sync().await;
    }

    pub async fn search(&mut self, text: &str) {
        self.state.set_search_query(text);
        self.state.set_debounced_search(text);
        self.sync().await;
    }

    /// Add or remove a favorite; a lookup miss is a silent no-op
    pub async fn toggle_favorite(&mut self, movie_id: &str) {
        let Some(request) = self.state.begin_toggle(movie_id) else {
            return;
        };
        let outcome = request.execute(&self.client).await;
        self.state.finish_toggle(outcome);
    }
}
