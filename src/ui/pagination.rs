//! Pagination strip
//!
//! `‹ 1 2 [3] 4 5 ›` under the movie list. Hidden when everything fits on
//! one page; long ranges collapse around the current page.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::ui::Theme;

/// Page numbers shown on either side of the current one before eliding
const WINDOW: u32 = 2;

/// Pagination widget state
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub current: u32,
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(current: u32, total_pages: u32) -> Self {
        Self {
            current,
            total_pages,
        }
    }

    /// Single page or empty listing: nothing to render
    pub fn is_hidden(&self) -> bool {
        self.total_pages <= 1
    }

    /// Page numbers to show; `None` marks an elided gap
    pub fn visible_pages(&self) -> Vec<Option<u32>> {
        let last = self.total_pages;
        let lo = self.current.saturating_sub(WINDOW).max(1);
        let hi = (self.current + WINDOW).min(last);

        let mut pages = Vec::new();
        if lo > 1 {
            pages.push(Some(1));
            if lo > 2 {
                pages.push(None);
            }
        }
        pages.extend((lo..=hi).map(Some));
        if hi < last {
            if hi + 1 < last {
                pages.push(None);
            }
            pages.push(Some(last));
        }
        pages
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled("‹ ", Theme::page_arrow(self.current > 1))];
        for page in self.visible_pages() {
            match page {
                Some(p) => {
                    spans.push(Span::styled(format!(" {} ", p), Theme::page(p == self.current)))
                }
                None => spans.push(Span::styled(" … ", Theme::muted())),
            }
        }
        spans.push(Span::styled(" ›", Theme::page_arrow(self.current < self.total_pages)));
        Line::from(spans)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if self.is_hidden() {
            return;
        }
        frame.render_widget(Paragraph::new(self.line()).alignment(Alignment::Center), area);
    }
}
