//! API clients for the movie catalog backend
//!
//! - client: HTTP wrapper with envelope decoding and failure logging
//! - movies: typed list/favorite endpoints

pub mod client;
pub mod movies;

pub use client::{ApiClient, ApiError};
pub use movies::MovieClient;
