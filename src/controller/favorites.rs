//! Favorite toggle controller
//!
//! Adds or removes a favorite on the server, then applies the change to the
//! list state only once the server confirmed it. A toggle never refetches.

use crate::api::{ApiError, MovieClient};
use crate::controller::list::MovieListState;
use crate::models::{Movie, Tab};

const UPDATE_FAILED: &str = "Failed to update favorites.";

/// Which way a toggle goes
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleAction {
    /// Add, carrying the full record so the backend can store it as-is
    Add(Movie),
    Remove,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToggleRequest {
    pub movie_id: String,
    pub action: ToggleAction,
}

impl ToggleRequest {
    pub async fn execute(self, client: &MovieClient) -> ToggleOutcome {
        let result = match &self.action {
            ToggleAction::Add(movie) => client.add_favorite(movie).await,
            ToggleAction::Remove => client.remove_favorite(&self.movie_id).await,
        };
        ToggleOutcome {
            request: self,
            result,
        }
    }
}

#[derive(Debug)]
pub struct ToggleOutcome {
    pub request: ToggleRequest,
    pub result: Result<(), ApiError>,
}

impl MovieListState {
    /// Decide what toggling `movie_id` means right now
    ///
    /// Returns `None` when the movie is neither a favorite nor loaded, in
    /// which case there is nothing to send.
    pub fn begin_toggle(&self, movie_id: &str) -> Option<ToggleRequest> {
        if self.is_favorite(movie_id) {
            return Some(ToggleRequest {
                movie_id: movie_id.to_string(),
                action: ToggleAction::Remove,
            });
        }

        match self.find_movie(movie_id) {
            Some(movie) => Some(ToggleRequest {
                movie_id: movie_id.to_string(),
                action: ToggleAction::Add(movie.clone()),
            }),
            None => {
                tracing::debug!(movie_id, "toggle for unknown movie ignored");
                None
            }
        }
    }

    /// Apply a confirmed (or failed) toggle
    pub fn finish_toggle(&mut self, outcome: ToggleOutcome) {
        let ToggleOutcome { request, result } = outcome;

        if let Err(e) = result {
            tracing::warn!(movie_id = %request.movie_id, error = %e, "favorite update failed");
            self.error = Some(UPDATE_FAILED.to_string());
            self.toasts.error("Failed to update favorites!");
            return;
        }

        match request.action {
            ToggleAction::Remove => {
                self.favorites.remove(&request.movie_id);
                if self.query.active_tab == Tab::Favorites {
                    self.movies.retain(|m| m.id != request.movie_id);
                    self.total_movies = self.total_movies.saturating_sub(1);
                }
                tracing::info!(movie_id = %request.movie_id, "removed from favorites");
                self.toasts.success("Removed from favorites!");
            }
            ToggleAction::Add(_) => {
                self.favorites.insert(request.movie_id.clone());
                tracing::info!(movie_id = %request.movie_id, "added to favorites");
                self.toasts.success("Added to favorites!");
            }
        }
    }
}
