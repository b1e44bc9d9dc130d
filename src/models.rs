//! Data structures for MovieFinder
//!
//! Shared models used across the application:
//! - **Catalog**: movie records as served by the catalog API
//! - **Wire**: the response envelope and paged list payload
//! - **View**: the tab discriminator for the list controller

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Placeholder the catalog uses for absent text fields
pub const NOT_AVAILABLE: &str = "N/A";

// =============================================================================
// Catalog Models
// =============================================================================

/// A single rating entry (e.g. "Rotten Tomatoes" / "91%")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(rename = "Source", default, deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(rename = "Value", default, deserialize_with = "null_as_default")]
    pub value: String,
}

/// Movie record from the catalog, keyed by its IMDb id
///
/// Everything except `is_favorite` is read-only from the client's point of
/// view. The flag is only trusted on the `/movies` listing, where it seeds
/// the local favorites set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Movie {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub year: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rated: String,
    #[serde(deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub runtime: String,
    #[serde(deserialize_with = "null_as_default")]
    pub genre: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub director: String,
    #[serde(deserialize_with = "null_as_default")]
    pub writer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub actors: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub awards: String,
    #[serde(deserialize_with = "null_as_default")]
    pub poster_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ratings: Vec<Rating>,
    #[serde(deserialize_with = "null_as_default")]
    pub metascore: String,
    #[serde(deserialize_with = "null_as_default")]
    pub imdb_rating: String,
    #[serde(deserialize_with = "null_as_default")]
    pub imdb_votes: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dvd: String,
    #[serde(deserialize_with = "null_as_default")]
    pub box_office: String,
    #[serde(deserialize_with = "null_as_default")]
    pub production: String,
    #[serde(deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(deserialize_with = "null_as_default")]
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

impl Movie {
    /// Flag as served by the listing endpoint (missing means not a favorite)
    pub fn flagged_favorite(&self) -> bool {
        self.is_favorite.unwrap_or(false)
    }

    /// Poster URL, unless the catalog marked it as unavailable
    pub fn poster(&self) -> Option<&str> {
        available(&self.poster_url)
    }

    /// IMDb rating as a number, if present
    pub fn imdb_score(&self) -> Option<f32> {
        available(&self.imdb_rating).and_then(|r| r.parse().ok())
    }

    /// "8.2/10 (1,234,567)" style rating line
    pub fn format_rating(&self) -> String {
        format!(
            "{}/10 ({})",
            available(&self.imdb_rating).unwrap_or(NOT_AVAILABLE),
            available(&self.imdb_votes).unwrap_or(NOT_AVAILABLE)
        )
    }

    /// Comma-joined genre list
    pub fn genres(&self) -> String {
        self.genre.join(", ")
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year.is_empty() {
            write!(f, "{} [{}]", self.title, self.id)
        } else {
            write!(f, "{} ({}) [{}]", self.title, self.year, self.id)
        }
    }
}

/// Decode JSON `null` as the type's default; the catalog nulls out fields
/// it has no data for
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Treat empty strings and "N/A" as missing
fn available(value: &str) -> Option<&str> {
    match value.trim() {
        "" | NOT_AVAILABLE => None,
        v => Some(v),
    }
}

// =============================================================================
// Wire Models
// =============================================================================

/// Response envelope wrapping every catalog API payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    pub data: Option<T>,
}

/// One page of movies from either list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePage {
    pub movies: Vec<Movie>,
    #[serde(default)]
    pub total_results: u64,
}

/// Body of `POST /movies/favorites`
#[derive(Debug, Serialize)]
pub struct AddFavoriteBody<'a> {
    pub movie: &'a Movie,
}

/// Body of `DELETE /movies/favorites`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFavoriteBody<'a> {
    pub movie_id: &'a str,
}

// =============================================================================
// View Models
// =============================================================================

/// Which listing the browser is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    All,
    Favorites,
}

impl Tab {
    /// The other tab
    pub fn toggled(self) -> Self {
        match self {
            Tab::All => Tab::Favorites,
            Tab::Favorites => Tab::All,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tab::All => write!(f, "All"),
            Tab::Favorites => write!(f, "Favorites"),
        }
    }
}

/// Number of pages needed for `total` items (0 items means 0 pages)
pub fn total_pages(total: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page as u64).min(u32::MAX as u64) as u32
}
