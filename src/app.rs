//! App state and core application logic
//!
//! Wraps the movie list state with everything the terminal UI needs on top:
//! input mode, search box editing, row selection, the detail modal, and the
//! key bindings that drive them.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::controller::{MovieListState, Outcome};
use crate::debounce::{self, Debouncer};
use crate::models::{Movie, Tab};
use crate::toast::{self, Toaster};

// =============================================================================
// App State Enum
// =============================================================================

/// Which surface has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Movie list with tabs, search and pagination
    #[default]
    Browse,
    /// Detail modal over the list
    Detail,
}

// =============================================================================
// Input Mode
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text input mode (search box focused)
    Editing,
}

// =============================================================================
// Actions
// =============================================================================

/// Side effects a key press asks the event loop to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add or remove a favorite; the key press goes no further
    ToggleFavorite(String),
}

// =============================================================================
// Selection State
// =============================================================================

/// Selection state for the movie list
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Total number of items
    pub len: usize,
}

impl ListState {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    /// Jump to first item
    pub fn first(&mut self) {
        self.selected = 0;
    }

    /// Update length (e.g., when a new page comes in)
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

// =============================================================================
// Search Input
// =============================================================================

/// Search box contents with a cursor (counted in chars)
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    pub query: String,
    pub cursor: usize,
}

impl SearchInput {
    fn byte_index(&self, char_idx: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }

    fn char_len(&self) -> usize {
        self.query.chars().count()
    }

    /// Insert character at cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.query.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.query.remove(at);
        true
    }

    /// Delete character at cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.query.remove(at);
        true
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) -> bool {
        let had_text = !self.query.is_empty();
        self.query.clear();
        self.cursor = 0;
        had_text
    }

    /// Query split at the cursor, for rendering
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.query.split_at(self.byte_index(self.cursor))
    }
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub running: bool,
    pub input_mode: InputMode,
    pub search: SearchInput,
    pub list: ListState,
    /// Movie list state, favorites and toasts
    pub catalog: MovieListState,
    /// Movie shown in the detail modal
    pub detail: Option<Movie>,
    debouncer: Debouncer<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::with_timing(debounce::DEFAULT_DELAY, toast::DEFAULT_TTL)
    }
}

impl App {
    /// Create a new App instance
    pub fn new() -> Self {
        Self::default()
    }

    /// App with custom debounce delay and toast lifetime
    pub fn with_timing(debounce_delay: Duration, toast_ttl: Duration) -> Self {
        Self {
            state: AppState::Browse,
            running: true,
            input_mode: InputMode::Normal,
            search: SearchInput::default(),
            list: ListState::default(),
            catalog: MovieListState::with_toaster(Toaster::new(toast_ttl)),
            detail: None,
            debouncer: Debouncer::new(String::new(), debounce_delay),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Currently highlighted movie in the list
    pub fn selected_movie(&self) -> Option<&Movie> {
        self.catalog.movies.get(self.list.selected)
    }

    pub fn open_detail(&mut self) -> bool {
        match self.selected_movie().cloned() {
            Some(movie) => {
                self.detail = Some(movie);
                self.state = AppState::Detail;
                self.input_mode = InputMode::Normal;
                true
            }
            None => false,
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
        self.state = AppState::Browse;
    }

    /// Whether the search debounce timer is running
    pub fn search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    // -------------------------------------------------------------------------
    // Loop hooks
    // -------------------------------------------------------------------------

    /// Advance timers: debounced search, toast expiry, scroll requests
    pub fn tick(&mut self, now: Instant) {
        if let Some(text) = self.debouncer.poll(now) {
            self.catalog.set_debounced_search(text);
        }
        self.catalog.toasts.tick(now);
        self.sync_list();
    }

    /// Apply a finished background request
    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Fetch(fetch) => self.catalog.finish_refresh(fetch),
            Outcome::Toggle(toggle) => self.catalog.finish_toggle(toggle),
        }
        self.sync_list();
    }

    fn sync_list(&mut self) {
        if self.catalog.take_scroll_to_top() {
            self.list.first();
        }
        self.list.set_len(self.catalog.movies.len());
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        self.handle_key_at(key, Instant::now())
    }

    /// Handle a key press at a given instant
    pub fn handle_key_at(&mut self, key: KeyEvent, now: Instant) -> Option<Action> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return None;
        }

        if self.input_mode == InputMode::Editing {
            self.handle_editing_key(key, now);
            return None;
        }

        match self.state {
            AppState::Browse => self.handle_browse_key(key),
            AppState::Detail => self.handle_detail_key(key),
        }
    }

    /// Keys while the search box is focused
    fn handle_editing_key(&mut self, key: KeyEvent, now: Instant) {
        let changed = match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                false
            }
            KeyCode::Enter => {
                // Submit now instead of waiting out the quiet period
                self.input_mode = InputMode::Normal;
                self.debouncer.cancel();
                self.catalog.set_debounced_search(self.search.query.clone());
                false
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.clear()
            }
            KeyCode::Char(c) => {
                self.search.insert(c);
                true
            }
            KeyCode::Backspace => self.search.backspace(),
            KeyCode::Delete => self.search.delete(),
            KeyCode::Left => {
                self.search.cursor_left();
                false
            }
            KeyCode::Right => {
                self.search.cursor_right();
                false
            }
            KeyCode::Home => {
                self.search.cursor_home();
                false
            }
            KeyCode::End => {
                self.search.cursor_end();
                false
            }
            _ => false,
        };

        if changed {
            self.catalog.set_search_query(self.search.query.clone());
            self.debouncer.update(self.search.query.clone(), now);
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('/') | KeyCode::Char('s') => self.input_mode = InputMode::Editing,
            KeyCode::Tab | KeyCode::BackTab => {
                self.switch_tab(self.catalog.query.active_tab.toggled())
            }
            KeyCode::Char('1') => self.switch_tab(Tab::All),
            KeyCode::Char('2') => self.switch_tab(Tab::Favorites),
            KeyCode::Up | KeyCode::Char('k') => self.list.up(),
            KeyCode::Down | KeyCode::Char('j') => self.list.down(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => {
                self.catalog.prev_page();
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => {
                self.catalog.next_page();
            }
            KeyCode::Char('g') => {
                self.catalog.first_page();
            }
            KeyCode::Char('G') => {
                self.catalog.last_page();
            }
            KeyCode::Char('r') => self.catalog.request_refresh(),
            KeyCode::Enter => {
                self.open_detail();
            }
            KeyCode::Char('f') | KeyCode::Char(' ') => {
                return self
                    .selected_movie()
                    .map(|m| Action::ToggleFavorite(m.id.clone()));
            }
            _ => {}
        }
        None
    }

    fn handle_detail_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter => self.close_detail(),
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('f') | KeyCode::Char(' ') => {
                return self
                    .detail
                    .as_ref()
                    .map(|m| Action::ToggleFavorite(m.id.clone()));
            }
            _ => {}
        }
        None
    }

    fn switch_tab(&mut self, tab: Tab) {
        if self.catalog.set_tab(tab) {
            self.list.first();
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
