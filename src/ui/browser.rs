//! Movie browser view
//!
//! The current page as a selectable list. Each row carries the favorite
//! heart, title, year, genres and IMDb rating.

use std::collections::HashSet;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::models::{Movie, Tab};
use crate::ui::Theme;

/// Borrowed view over what the list needs to draw
#[derive(Debug)]
pub struct BrowserView<'a> {
    pub movies: &'a [Movie],
    pub favorites: &'a HashSet<String>,
    pub selected: usize,
    pub tab: Tab,
    pub total: u64,
    pub focused: bool,
    pub empty_message: &'a str,
}

impl BrowserView<'_> {
    /// Index of the first row drawn so `selected` stays visible
    pub fn offset(&self, visible_height: usize) -> usize {
        if visible_height == 0 {
            return 0;
        }
        self.selected.saturating_sub(visible_height - 1)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Theme::border_focused()
        } else {
            Theme::border()
        };
        let title = match self.tab {
            Tab::All => format!(" MOVIES ({}) ", self.total),
            Tab::Favorites => format!(" ♥ FAVORITES ({}) ", self.total),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(title, Theme::title()));

        if self.movies.is_empty() {
            let empty = Paragraph::new(self.empty_message)
                .style(Theme::muted())
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let visible_height = area.height.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .movies
            .iter()
            .enumerate()
            .skip(self.offset(visible_height))
            .take(visible_height)
            .map(|(i, movie)| self.render_item(i, movie))
            .collect();

        frame.render_widget(List::new(items).block(block).style(Theme::text()), area);
    }

    fn render_item(&self, index: usize, movie: &Movie) -> ListItem<'static> {
        let is_selected = index == self.selected;
        let is_favorite = self.favorites.contains(&movie.id);

        let marker = if is_selected { "▸ " } else { "  " };
        let heart = if is_favorite { "♥ " } else { "♡ " };
        let year = if movie.year.is_empty() {
            String::new()
        } else {
            format!(" ({})", movie.year)
        };
        let rating = movie
            .imdb_score()
            .map(|r| format!("★ {:.1}", r))
            .unwrap_or_else(|| "★ N/A".to_string());

        let mut spans = vec![
            Span::styled(marker, Theme::title()),
            Span::styled(heart, Theme::heart(is_favorite)),
            Span::styled(
                movie.title.clone(),
                if is_selected { Theme::selected() } else { Theme::text() },
            ),
            Span::styled(year, Theme::muted()),
        ];
        if !movie.genre.is_empty() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(movie.genres(), Theme::genre()));
        }
        spans.push(Span::raw("  "));
        spans.push(Span::styled(rating, Theme::star()));

        ListItem::new(Line::from(spans))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_keeps_selection_visible() {
        let favorites = HashSet::new();
        let mut view = BrowserView {
            movies: &[],
            favorites: &favorites,
            selected: 0,
            tab: Tab::All,
            total: 0,
            focused: true,
            empty_message: "",
        };
        assert_eq!(view.offset(5), 0);
        view.selected = 7;
        assert_eq!(view.offset(5), 3);
        assert_eq!(view.offset(0), 0);
    }
}
