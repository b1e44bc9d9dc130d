//! Screen composition
//!
//! Header (logo, tabs, search box), content (loading / error / list +
//! pagination), toast line and status bar, with the detail modal on top.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, AppState, InputMode};
use crate::models::Tab;
use crate::toast::ToastKind;
use crate::ui::{BrowserView, DetailView, Pagination, Theme};

/// Main render function
pub fn render_ui(frame: &mut Frame, app: &App) {
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(Theme::BACKGROUND)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Toast
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_content(frame, chunks[1], app);
    render_toast(frame, chunks[2], app);
    render_status_bar(frame, chunks[3], app);

    if app.state == AppState::Detail {
        if let Some(movie) = app.detail.as_ref() {
            DetailView::new(movie, app.catalog.is_favorite(&movie.id)).render(frame, area);
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(15), // Logo
            Constraint::Length(24), // Tabs
            Constraint::Min(1),     // Search box
        ])
        .split(area);

    let bordered = || {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border())
    };

    let logo = Paragraph::new(Line::from(vec![
        Span::styled("Movie", Style::default().fg(Theme::PRIMARY).add_modifier(Modifier::BOLD)),
        Span::styled("Finder", Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD)),
    ]))
    .alignment(Alignment::Center)
    .block(bordered());
    frame.render_widget(logo, header_chunks[0]);

    let active = app.catalog.query.active_tab;
    let tabs = Paragraph::new(Line::from(vec![
        Span::styled(" All ", Theme::tab(active == Tab::All)),
        Span::raw("  "),
        Span::styled(" Favorites ", Theme::tab(active == Tab::Favorites)),
    ]))
    .alignment(Alignment::Center)
    .block(bordered());
    frame.render_widget(tabs, header_chunks[1]);

    let editing = app.input_mode == InputMode::Editing;
    let search_text = if editing {
        let (before, after) = app.search.split_at_cursor();
        format!("⌕ {}│{}", before, after)
    } else if app.search.query.is_empty() {
        "⌕ Search movies... (/)".to_string()
    } else {
        format!("⌕ {}", app.search.query)
    };

    let search_box = Paragraph::new(search_text)
        .style(if editing { Theme::input().fg(Theme::PRIMARY) } else { Theme::input() })
        .block(
            bordered()
                .border_style(if editing { Theme::border_focused() } else { Theme::border() })
                .title(Span::styled(" SEARCH ", Theme::title())),
        );
    frame.render_widget(search_box, header_chunks[2]);
}

fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    let catalog = &app.catalog;

    if catalog.is_loading {
        let loading = Paragraph::new("⟳ Loading movies...")
            .style(Theme::loading())
            .alignment(Alignment::Center);
        frame.render_widget(loading, centered_line(area));
        return;
    }

    if let Some(error) = catalog.error.as_deref() {
        let panel = Paragraph::new(vec![
            Line::styled(error.to_string(), Theme::error()),
            Line::raw(""),
            Line::from(vec![
                Span::styled(" r ", Theme::keybind()),
                Span::styled(" Retry", Theme::muted()),
            ]),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(panel, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    BrowserView {
        movies: &catalog.movies,
        favorites: &catalog.favorites,
        selected: app.list.selected,
        tab: catalog.query.active_tab,
        total: catalog.total_movies,
        focused: app.input_mode == InputMode::Normal && app.state == AppState::Browse,
        empty_message: catalog.empty_message(),
    }
    .render(frame, chunks[0]);

    Pagination::new(catalog.query.current_page, catalog.total_pages()).render(frame, chunks[1]);
}

fn render_toast(frame: &mut Frame, area: Rect, app: &App) {
    let Some(toast) = app.catalog.toasts.current() else {
        return;
    };
    let (icon, style) = match toast.kind {
        ToastKind::Success => ("✓", Theme::success()),
        ToastKind::Error => ("✗", Theme::error()),
    };
    let line = Paragraph::new(Span::styled(format!("{} {}", icon, toast.message), style))
        .alignment(Alignment::Center);
    frame.render_widget(line, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mode = match app.input_mode {
        InputMode::Normal => Span::styled(" NORMAL ", Theme::keybind()),
        InputMode::Editing => Span::styled(
            " SEARCH ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::STAR),
        ),
    };

    let page = Span::styled(
        format!(
            " page {}/{} ",
            app.catalog.query.current_page,
            app.catalog.total_pages().max(1)
        ),
        Theme::muted(),
    );

    let help = Span::styled(
        " q:quit  /:search  tab:favorites  ←→:page  enter:details  f:favorite ",
        Theme::muted(),
    );

    let status = Paragraph::new(Line::from(vec![mode, page, Span::raw("│"), help]))
        .style(Theme::status_bar());
    frame.render_widget(status, area);
}

/// One-line strip in the vertical middle of `area`
fn centered_line(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: area.height.min(1),
    }
}
