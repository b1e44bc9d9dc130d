//! MovieFinder - terminal movie browser with favorites
//!
//! Searches a movie catalog API, pages through results and keeps a
//! favorites list on the server. Runs as an interactive TUI or as a
//! scriptable CLI.
//!
//! # Modules
//!
//! - `models` - Movie records and wire envelopes
//! - `api` - HTTP client wrapper and catalog endpoints
//! - `controller` - List state, refresh lifecycle, favorite toggling
//! - `debounce` - Quiet-period value debouncing
//! - `toast` - Transient notifications
//! - `ui` - TUI components
//! - `app` - Application state and key handling
//! - `cli` / `commands` - Scriptable command surface

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod logging;
pub mod models;
pub mod toast;
pub mod ui;

// Re-export commonly used types
pub use models::{Envelope, Movie, MoviePage, Rating, Tab};

pub use api::{ApiClient, ApiError, MovieClient};
pub use app::{App, AppState};
pub use controller::{MovieListController, MovieListState};
pub use debounce::Debouncer;
