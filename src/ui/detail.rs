//! Movie detail modal
//!
//! Centered overlay with the full record of one movie. The heart reflects
//! the local favorites set, not the record's own flag.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::models::Movie;
use crate::ui::Theme;

/// Fraction of the screen the modal covers
const WIDTH_PERCENT: u16 = 80;
const HEIGHT_PERCENT: u16 = 80;

/// Detail modal for one movie
#[derive(Debug)]
pub struct DetailView<'a> {
    pub movie: &'a Movie,
    pub is_favorite: bool,
}

impl<'a> DetailView<'a> {
    pub fn new(movie: &'a Movie, is_favorite: bool) -> Self {
        Self { movie, is_favorite }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(WIDTH_PERCENT, HEIGHT_PERCENT, area);
        frame.render_widget(Clear, popup);

        let title = if self.movie.year.is_empty() {
            format!(" {} ", self.movie.title)
        } else {
            format!(" {} ({}) ", self.movie.title, self.movie.year)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_focused())
            .title(Span::styled(title, Theme::title()))
            .title_bottom(Line::from(vec![
                Span::styled(" f ", Theme::keybind()),
                Span::styled(" favorite  ", Theme::muted()),
                Span::styled(" Esc ", Theme::keybind()),
                Span::styled(" close ", Theme::muted()),
            ]))
            .style(Theme::modal());

        let body = Paragraph::new(self.lines())
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(body, popup);
    }

    /// Modal body, one entry per rendered line
    pub fn lines(&self) -> Vec<Line<'static>> {
        let m = self.movie;
        let mut lines = Vec::new();

        let facts: Vec<&str> = [m.release_date.as_str(), m.rated.as_str(), m.runtime.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        if !facts.is_empty() {
            lines.push(Line::styled(facts.join(" • "), Theme::muted()));
        }

        lines.push(Line::from(vec![
            Span::styled("★ ", Theme::star()),
            Span::raw(m.format_rating()),
            Span::raw("   "),
            Span::styled(
                if self.is_favorite { "♥ Favorite" } else { "♡ Not a favorite" },
                Theme::heart(self.is_favorite),
            ),
        ]));

        if !m.genre.is_empty() {
            let mut spans = Vec::new();
            for genre in &m.genre {
                spans.push(Span::styled(format!("[{}]", genre), Theme::genre()));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::raw(""));
        if !m.description.is_empty() {
            lines.push(Line::raw(m.description.clone()));
            lines.push(Line::raw(""));
        }

        for (label, value) in [
            ("Director", &m.director),
            ("Writer", &m.writer),
            ("Actors", &m.actors),
            ("Language", &m.language),
            ("Country", &m.country),
            ("Awards", &m.awards),
            ("Box office", &m.box_office),
            ("Production", &m.production),
        ] {
            if !value.is_empty() && value != crate::models::NOT_AVAILABLE {
                lines.push(Line::from(vec![
                    Span::styled(format!("{label}: "), Theme::muted()),
                    Span::raw(value.clone()),
                ]));
            }
        }

        if !m.ratings.is_empty() {
            lines.push(Line::raw(""));
            for rating in &m.ratings {
                lines.push(Line::from(vec![
                    Span::styled(format!("{}: ", rating.source), Theme::muted()),
                    Span::styled(rating.value.clone(), Theme::star()),
                ]));
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::styled(
            match m.poster() {
                Some(url) => format!("Poster: {url}"),
                None => "No poster".to_string(),
            },
            Theme::muted(),
        ));

        lines
    }
}

/// Rect covering the given percentages of `area`, centered
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
