//! Color theme for MovieFinder
//!
//! Dark palette with a blue accent, red hearts for favorites and gold stars
//! for ratings.

use ratatui::style::{Color, Modifier, Style};

/// Color palette and style helpers
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #000000
    pub const BACKGROUND: Color = Color::Rgb(0x00, 0x00, 0x00);

    /// Panels and the modal body: #111827 (gray-900)
    pub const SURFACE: Color = Color::Rgb(0x11, 0x18, 0x27);

    /// Accent: #60a5fa (blue-400)
    pub const PRIMARY: Color = Color::Rgb(0x60, 0xa5, 0xfa);

    /// Active tab / current page fill: #2563eb (blue-600)
    pub const PRIMARY_STRONG: Color = Color::Rgb(0x25, 0x63, 0xeb);

    /// Text: #f3f4f6 (gray-100)
    pub const TEXT: Color = Color::Rgb(0xf3, 0xf4, 0xf6);

    /// Secondary text: #9ca3af (gray-400)
    pub const MUTED: Color = Color::Rgb(0x9c, 0xa3, 0xaf);

    /// Borders and disabled controls: #4b5563 (gray-600)
    pub const BORDER: Color = Color::Rgb(0x4b, 0x55, 0x63);

    /// Favorite heart: #ef4444 (red-500)
    pub const FAVORITE: Color = Color::Rgb(0xef, 0x44, 0x44);

    /// Rating star: #facc15 (yellow-400)
    pub const STAR: Color = Color::Rgb(0xfa, 0xcc, 0x15);

    /// Success toast: #22c55e (green-500)
    pub const SUCCESS: Color = Color::Rgb(0x22, 0xc5, 0x5e);

    /// Errors: #f87171 (red-400)
    pub const ERROR: Color = Color::Rgb(0xf8, 0x71, 0x71);

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Selected row: inverted on the accent
    pub fn selected() -> Style {
        Style::default()
            .fg(Self::TEXT)
            .bg(Self::PRIMARY_STRONG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab(active: bool) -> Style {
        if active {
            Style::default()
                .fg(Self::TEXT)
                .bg(Self::PRIMARY_STRONG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Self::MUTED)
        }
    }

    pub fn heart(favorite: bool) -> Style {
        if favorite {
            Style::default().fg(Self::FAVORITE)
        } else {
            Style::default().fg(Self::MUTED)
        }
    }

    pub fn star() -> Style {
        Style::default().fg(Self::STAR)
    }

    pub fn genre() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    pub fn success() -> Style {
        Style::default()
            .fg(Self::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    pub fn loading() -> Style {
        Style::default()
            .fg(Self::MUTED)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn keybind() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::SURFACE)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::MUTED).bg(Self::SURFACE)
    }

    pub fn modal() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::SURFACE)
    }

    /// Page number in the pagination strip
    pub fn page(current: bool) -> Style {
        if current {
            Style::default()
                .fg(Self::TEXT)
                .bg(Self::PRIMARY_STRONG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Self::MUTED)
        }
    }

    /// Prev/next arrow, dimmed when there is nowhere to go
    pub fn page_arrow(enabled: bool) -> Style {
        if enabled {
            Style::default().fg(Self::TEXT)
        } else {
            Style::default().fg(Self::BORDER)
        }
    }
}
