//! Catalog endpoints
//!
//! Typed calls for the four movie endpoints. Callers get the envelope's
//! `data` payload only.

use reqwest::Method;

use super::client::{ApiClient, ApiError};
use crate::models::{AddFavoriteBody, Movie, MoviePage, RemoveFavoriteBody};

const MOVIES: &str = "/movies";
const FAVORITES: &str = "/movies/favorites";

/// Movie catalog client
#[derive(Debug, Clone)]
pub struct MovieClient {
    api: ApiClient,
}

impl MovieClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiClient::new(base_url),
        }
    }

    pub fn from_api(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /movies?searchTerm=..&page=..&limit=..`
    pub async fn list_movies(
        &self,
        search_term: &str,
        page: u32,
        limit: u32,
    ) -> Result<MoviePage, ApiError> {
        let query = [
            ("searchTerm", search_term.to_string()),
            ("page", page.to_string()),
            ("limit", limit.to_string()),
        ];
        self.api
            .request::<MoviePage, ()>(Method::GET, MOVIES, &query, None)
            .await?
            .data
            .ok_or(ApiError::MissingData)
    }

    /// `GET /movies/favorites?page=..&limit=..`
    pub async fn list_favorites(&self, page: u32, limit: u32) -> Result<MoviePage, ApiError> {
        let query = [("page", page.to_string()), ("limit", limit.to_string())];
        self.api
            .request::<MoviePage, ()>(Method::GET, FAVORITES, &query, None)
            .await?
            .data
            .ok_or(ApiError::MissingData)
    }

    /// `POST /movies/favorites` with the full movie record
    pub async fn add_favorite(&self, movie: &Movie) -> Result<(), ApiError> {
        let body = AddFavoriteBody { movie };
        self.api
            .request::<serde_json::Value, _>(Method::POST, FAVORITES, &[], Some(&body))
            .await?;
        Ok(())
    }

    /// `DELETE /movies/favorites` with `{movieId}`
    pub async fn remove_favorite(&self, movie_id: &str) -> Result<(), ApiError> {
        let body = RemoveFavoriteBody { movie_id };
        self.api
            .request::<serde_json::Value, _>(Method::DELETE, FAVORITES, &[], Some(&body))
            .await?;
        Ok(())
    }
}
