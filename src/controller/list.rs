//! Movie list state controller
//!
//! Owns the query (search text, tab, page), the fetched page, the loading and
//! error flags, and the local favorites set. Mutators record whether a
//! refresh is due; the owner turns that into a [`FetchRequest`], runs it,
//! and feeds the [`FetchOutcome`] back through [`MovieListState::finish_refresh`].
//!
//! Several changes in one event (tab switch + page reset) coalesce into a
//! single refresh.

use std::collections::HashSet;

use crate::api::{ApiError, MovieClient};
use crate::models::{total_pages, Movie, MoviePage, Tab};
use crate::toast::Toaster;

/// Fixed page size for both list endpoints
pub const ITEMS_PER_PAGE: u32 = 10;

const FETCH_MOVIES_FAILED: &str = "Failed to fetch movies. Please try again.";
const FETCH_FAVORITES_FAILED: &str = "Failed to fetch favorites. Please try again.";

// =============================================================================
// Query State
// =============================================================================

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// Raw search box contents
    pub search_query: String,
    /// Search text after the debounce quiet period
    pub debounced_search_query: String,
    pub active_tab: Tab,
    /// 1-based page number
    pub current_page: u32,
    pub items_per_page: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            debounced_search_query: String::new(),
            active_tab: Tab::All,
            current_page: 1,
            items_per_page: ITEMS_PER_PAGE,
        }
    }
}

// =============================================================================
// Fetch Request / Outcome
// =============================================================================

/// Snapshot of the query a refresh was issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Monotonic issue number, used to spot responses that land out of order
    pub seq: u64,
    pub tab: Tab,
    pub search_term: String,
    pub page: u32,
    pub limit: u32,
}

impl FetchRequest {
    /// Call the endpoint for this request's tab
    pub async fn execute(self, client: &MovieClient) -> FetchOutcome {
        let result = match self.tab {
            Tab::All => {
                client
                    .list_movies(&self.search_term, self.page, self.limit)
                    .await
            }
            Tab::Favorites => client.list_favorites(self.page, self.limit).await,
        };
        FetchOutcome {
            request: self,
            result,
        }
    }
}

/// A finished refresh
#[derive(Debug)]
pub struct FetchOutcome {
    pub request: FetchRequest,
    pub result: Result<MoviePage, ApiError>,
}

// =============================================================================
// List State
// =============================================================================

/// Movie list state: query, fetched page, favorites, notifications
#[derive(Debug)]
pub struct MovieListState {
    pub query: QueryState,
    pub movies: Vec<Movie>,
    pub total_movies: u64,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Ids of favorited movies among the loaded page
    pub favorites: HashSet<String>,
    pub toasts: Toaster,
    refresh_due: bool,
    scroll_to_top: bool,
    issued: u64,
}

impl Default for MovieListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieListState {
    /// Fresh state; the first refresh is already due
    pub fn new() -> Self {
        Self::with_toaster(Toaster::default())
    }

    pub fn with_toaster(toasts: Toaster) -> Self {
        Self {
            query: QueryState::default(),
            movies: Vec::new(),
            total_movies: 0,
            is_loading: false,
            error: None,
            favorites: HashSet::new(),
            toasts,
            refresh_due: true,
            scroll_to_top: false,
            issued: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Query mutators
    // -------------------------------------------------------------------------

    /// Store raw search box text (does not refetch by itself)
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.query.search_query = text.into();
    }

    /// Apply a debounced search value; resets to page 1 when it changed
    pub fn set_debounced_search(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.query.debounced_search_query {
            return false;
        }
        tracing::debug!(search = %text, "debounced search changed");
        self.query.debounced_search_query = text;
        self.query.current_page = 1;
        self.refresh_due = true;
        true
    }

    /// Switch tab; resets to page 1 when it changed
    pub fn set_tab(&mut self, tab: Tab) -> bool {
        if tab == self.query.active_tab {
            return false;
        }
        tracing::debug!(%tab, "tab changed");
        self.query.active_tab = tab;
        self.query.current_page = 1;
        self.refresh_due = true;
        true
    }

    /// Navigate to a page, clamped to `[1, total_pages]`
    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.clamp(1, self.total_pages().max(1));
        if page == self.query.current_page {
            return false;
        }
        tracing::debug!(page, "page changed");
        self.query.current_page = page;
        self.refresh_due = true;
        self.scroll_to_top = true;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.set_page(self.query.current_page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> bool {
        self.set_page(self.query.current_page.saturating_sub(1))
    }

    pub fn first_page(&mut self) -> bool {
        self.set_page(1)
    }

    pub fn last_page(&mut self) -> bool {
        self.set_page(self.total_pages())
    }

    /// Re-run the refresh for the current tab (manual retry)
    pub fn request_refresh(&mut self) {
        self.refresh_due = true;
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_movies, self.query.items_per_page)
    }

    // -------------------------------------------------------------------------
    // Refresh lifecycle
    // -------------------------------------------------------------------------

    pub fn refresh_due(&self) -> bool {
        self.refresh_due
    }

    /// Start a refresh if one is due
    pub fn take_refresh(&mut self) -> Option<FetchRequest> {
        self.refresh_due.then(|| self.begin_refresh())
    }

    /// Start a refresh for the current query: loading on, error cleared
    pub fn begin_refresh(&mut self) -> FetchRequest {
        self.refresh_due = false;
        self.is_loading = true;
        self.error = None;
        self.issued += 1;

        FetchRequest {
            seq: self.issued,
            tab: self.query.active_tab,
            search_term: self.query.debounced_search_query.clone(),
            page: self.query.current_page,
            limit: self.query.items_per_page,
        }
    }

    /// Apply a finished refresh
    ///
    /// Success replaces the page and rebuilds favorites from it. Failure keeps
    /// the previous page and records a tab-specific error. Whichever outcome
    /// arrives last wins.
    pub fn finish_refresh(&mut self, outcome: FetchOutcome) {
        let FetchOutcome { request, result } = outcome;
        if request.seq < self.issued {
            tracing::debug!(
                seq = request.seq,
                latest = self.issued,
                "applying out-of-date refresh response"
            );
        }

        match result {
            Ok(page) => {
                self.favorites = match request.tab {
                    Tab::All => page
                        .movies
                        .iter()
                        .filter(|m| m.flagged_favorite())
                        .map(|m| m.id.clone())
                        .collect(),
                    Tab::Favorites => page.movies.iter().map(|m| m.id.clone()).collect(),
                };
                tracing::debug!(
                    tab = %request.tab,
                    count = page.movies.len(),
                    total = page.total_results,
                    "refresh complete"
                );
                self.movies = page.movies;
                self.total_movies = page.total_results;
            }
            Err(e) => {
                tracing::warn!(tab = %request.tab, error = %e, "refresh failed");
                let (inline, toast) = match request.tab {
                    Tab::All => (FETCH_MOVIES_FAILED, "Failed to fetch movies!"),
                    Tab::Favorites => (FETCH_FAVORITES_FAILED, "Failed to fetch favorites!"),
                };
                self.error = Some(inline.to_string());
                self.toasts.error(toast);
            }
        }

        self.is_loading = false;
    }

    /// Consume the pending scroll-to-top signal raised by page navigation
    pub fn take_scroll_to_top(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_top)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn is_favorite(&self, movie_id: &str) -> bool {
        self.favorites.contains(movie_id)
    }

    pub fn find_movie(&self, movie_id: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == movie_id)
    }

    /// Message for an empty listing
    pub fn empty_message(&self) -> &'static str {
        if self.query.active_tab == Tab::Favorites && self.favorites.is_empty() {
            "You haven't added any favorites yet"
        } else {
            "No movies found matching your search"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, favorite: bool) -> Movie {
        Movie {
            id: id.into(),
            title: format!("Movie {id}"),
            is_favorite: Some(favorite),
            ..Movie::default()
        }
    }

    fn ok(request: FetchRequest, movies: Vec<Movie>, total: u64) -> FetchOutcome {
        FetchOutcome {
            request,
            result: Ok(MoviePage {
                movies,
                total_results: total,
            }),
        }
    }

    #[test]
    fn test_initial_refresh_is_due() {
        let mut state = MovieListState::new();
        let req = state.take_refresh().unwrap();
        assert_eq!(req.tab, Tab::All);
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, ITEMS_PER_PAGE);
        assert_eq!(req.search_term, "");
        assert!(state.is_loading);
        assert!(state.take_refresh().is_none());
    }

    #[test]
    fn test_tab_change_resets_page_and_refreshes_once() {
        let mut state = MovieListState::new();
        let req = state.begin_refresh();
        state.finish_refresh(ok(req, vec![], 50));
        state.set_page(3);
        state.take_refresh();

        assert!(state.set_tab(Tab::Favorites));
        assert_eq!(state.query.current_page, 1);

        let req = state.take_refresh().unwrap();
        assert_eq!(req.tab, Tab::Favorites);
        assert_eq!(req.page, 1);
        assert!(state.take_refresh().is_none());

        // Same tab again is not a change
        assert!(!state.set_tab(Tab::Favorites));
        assert!(!state.refresh_due());
    }

    #[test]
    fn test_debounced_search_resets_page() {
        let mut state = MovieListState::new();
        let req = state.begin_refresh();
        state.finish_refresh(ok(req, vec![], 30));
        state.set_page(2);
        state.take_refresh();

        assert!(state.set_debounced_search("batman"));
        assert_eq!(state.query.current_page, 1);
        let req = state.take_refresh().unwrap();
        assert_eq!(req.search_term, "batman");

        assert!(!state.set_debounced_search("batman"));
    }

    #[test]
    fn test_set_search_query_alone_does_not_refresh() {
        let mut state = MovieListState::new();
        state.take_refresh();
        state.set_search_query("bat");
        assert_eq!(state.query.search_query, "bat");
        assert!(!state.refresh_due());
    }

    #[test]
    fn test_page_clamped_and_scrolls() {
        let mut state = MovieListState::new();
        let req = state.begin_refresh();
        state.finish_refresh(ok(req, vec![], 25));
        assert_eq!(state.total_pages(), 3);

        assert!(state.set_page(99));
        assert_eq!(state.query.current_page, 3);
        assert!(state.take_scroll_to_top());
        assert!(!state.take_scroll_to_top());

        assert!(!state.next_page());
        assert!(state.prev_page());
        assert_eq!(state.query.current_page, 2);
        assert!(state.first_page());
        assert!(!state.prev_page());
        assert_eq!(state.query.current_page, 1);
    }

    #[test]
    fn test_all_tab_favorites_replaced_from_flags() {
        let mut state = MovieListState::new();
        state.favorites.insert("stale".into());

        let req = state.begin_refresh();
        state.finish_refresh(ok(
            req,
            vec![movie("tt1", true), movie("tt2", false), movie("tt3", true)],
            3,
        ));

        let expected: HashSet<String> = ["tt1", "tt3"].iter().map(|s| s.to_string()).collect();
        assert_eq!(state.favorites, expected);
        assert_eq!(state.total_movies, 3);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_favorites_tab_marks_every_movie() {
        let mut state = MovieListState::new();
        state.set_tab(Tab::Favorites);
        let req = state.take_refresh().unwrap();

        // Flags are ignored on this endpoint
        state.finish_refresh(ok(req, vec![movie("tt1", false), movie("tt2", false)], 2));

        assert!(state.is_favorite("tt1"));
        assert!(state.is_favorite("tt2"));
        assert_eq!(state.favorites.len(), 2);
    }

    #[test]
    fn test_failed_refresh_keeps_stale_page() {
        let mut state = MovieListState::new();
        let req = state.begin_refresh();
        state.finish_refresh(ok(req, vec![movie("tt1", false)], 11));

        let req = state.begin_refresh();
        assert!(state.error.is_none());
        state.finish_refresh(FetchOutcome {
            request: req,
            result: Err(ApiError::MissingData),
        });

        assert_eq!(state.movies.len(), 1);
        assert_eq!(state.total_movies, 11);
        assert_eq!(state.error.as_deref(), Some(FETCH_MOVIES_FAILED));
        assert!(!state.is_loading);
        assert_eq!(
            state.toasts.current().map(|t| t.message.as_str()),
            Some("Failed to fetch movies!")
        );
    }

    #[test]
    fn test_failed_favorites_refresh_message() {
        let mut state = MovieListState::new();
        state.set_tab(Tab::Favorites);
        let req = state.take_refresh().unwrap();
        state.finish_refresh(FetchOutcome {
            request: req,
            result: Err(ApiError::Rejected("nope".into())),
        });
        assert_eq!(state.error.as_deref(), Some(FETCH_FAVORITES_FAILED));
    }

    #[test]
    fn test_last_response_wins() {
        let mut state = MovieListState::new();
        let first = state.begin_refresh();
        state.set_debounced_search("alien");
        let second = state.take_refresh().unwrap();

        // Newer response lands first, older one overwrites it
        state.finish_refresh(ok(second, vec![movie("tt-new", false)], 1));
        state.finish_refresh(ok(first, vec![movie("tt-old", false)], 1));

        assert_eq!(state.movies[0].id, "tt-old");
    }

    #[test]
    fn test_empty_message() {
        let mut state = MovieListState::new();
        assert_eq!(state.empty_message(), "No movies found matching your search");
        state.set_tab(Tab::Favorites);
        assert_eq!(state.empty_message(), "You haven't added any favorites yet");
    }
}
