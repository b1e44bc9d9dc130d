//! Terminal UI components
//!
//! Built with ratatui. Keyboard-first navigation throughout.

pub mod browser;
pub mod detail;
pub mod pagination;
pub mod screen;
pub mod theme;

pub use browser::BrowserView;
pub use detail::DetailView;
pub use pagination::Pagination;
pub use screen::render_ui;
pub use theme::Theme;
