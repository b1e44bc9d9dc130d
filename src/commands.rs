//! CLI Command Handlers
//!
//! Implements the CLI commands on top of the catalog client.
//! Each handler takes CLI args and Output, returns ExitCode.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::api::MovieClient;
use crate::cli::{
    self, AddCmd, ConfigCmd, ExitCode, FavoritesCmd, Output, RemoveCmd, SearchCmd,
};
use crate::config::Config;
use crate::controller::ITEMS_PER_PAGE;
use crate::models::{total_pages, Movie, MoviePage, Tab};

/// One listing page as printed by `search` and `favorites`
#[derive(Debug, Serialize)]
pub struct PageOutput {
    pub tab: Tab,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u64,
    pub movies: Vec<Movie>,
}

impl PageOutput {
    fn new(tab: Tab, search: Option<String>, page: u32, data: MoviePage) -> Self {
        Self {
            tab,
            search,
            page,
            total_pages: total_pages(data.total_results, ITEMS_PER_PAGE),
            total_results: data.total_results,
            movies: data.movies,
        }
    }

    /// Human-readable rendering, one movie per line
    fn lines(&self) -> Vec<String> {
        if self.movies.is_empty() {
            return vec![match self.tab {
                Tab::All => "No movies found.".to_string(),
                Tab::Favorites => "No favorites yet.".to_string(),
            }];
        }

        let mut lines: Vec<String> = self
            .movies
            .iter()
            .map(|m| {
                let heart = if self.tab == Tab::Favorites || m.flagged_favorite() {
                    "♥"
                } else {
                    " "
                };
                let rating = m
                    .imdb_score()
                    .map(|r| format!("{:.1}", r))
                    .unwrap_or_else(|| "N/A".to_string());
                format!("{} {}  ★ {}", heart, m, rating)
            })
            .collect();
        lines.push(format!(
            "Page {}/{} ({} results)",
            self.page,
            self.total_pages.max(1),
            self.total_results
        ));
        lines
    }
}

/// Result of a favorites change
#[derive(Debug, Serialize)]
pub struct FavoriteChange {
    pub id: String,
    pub favorite: bool,
}

// =============================================================================
// Listing Commands
// =============================================================================

pub async fn search_cmd(cmd: SearchCmd, client: &MovieClient, output: &Output) -> ExitCode {
    if cmd.query.is_empty() {
        output.info(format!("Listing movies (page {})...", cmd.page));
    } else {
        output.info(format!("Searching for: {} (page {})", cmd.query, cmd.page));
    }

    match client.list_movies(&cmd.query, cmd.page, ITEMS_PER_PAGE).await {
        Ok(data) => {
            let search = Some(cmd.query).filter(|q| !q.is_empty());
            print_page(PageOutput::new(Tab::All, search, cmd.page, data), output)
        }
        Err(e) => output.api_error("Failed to fetch movies", &e),
    }
}

pub async fn favorites_cmd(cmd: FavoritesCmd, client: &MovieClient, output: &Output) -> ExitCode {
    output.info(format!("Fetching favorites (page {})...", cmd.page));

    match client.list_favorites(cmd.page, ITEMS_PER_PAGE).await {
        Ok(data) => print_page(PageOutput::new(Tab::Favorites, None, cmd.page, data), output),
        Err(e) => output.api_error("Failed to fetch favorites", &e),
    }
}

fn print_page(page: PageOutput, output: &Output) -> ExitCode {
    let lines = page.lines();
    if let Err(e) = output.print_or(&page, &lines) {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

// =============================================================================
// Favorite Commands
// =============================================================================

pub async fn add_cmd(cmd: AddCmd, client: &MovieClient, output: &Output) -> ExitCode {
    if let Err(e) = cli::validate_imdb_id(&cmd.imdb_id) {
        return output.error(e, ExitCode::InvalidArgs);
    }

    output.info(format!("Looking up {}...", cmd.imdb_id));
    let page = match client.list_movies(&cmd.search, cmd.page, ITEMS_PER_PAGE).await {
        Ok(page) => page,
        Err(e) => return output.api_error("Failed to fetch movies", &e),
    };

    let Some(movie) = page.movies.into_iter().find(|m| m.id == cmd.imdb_id) else {
        return output.error(
            format!(
                "{} is not on page {} of that listing (try --search/--page)",
                cmd.imdb_id, cmd.page
            ),
            ExitCode::NotFound,
        );
    };

    match client.add_favorite(&movie).await {
        Ok(()) => {
            output.info(format!("Added to favorites: {}", movie));
            print_change(cmd.imdb_id, true, output)
        }
        Err(e) => output.api_error("Failed to update favorites", &e),
    }
}

pub async fn remove_cmd(cmd: RemoveCmd, client: &MovieClient, output: &Output) -> ExitCode {
    if let Err(e) = cli::validate_imdb_id(&cmd.imdb_id) {
        return output.error(e, ExitCode::InvalidArgs);
    }

    match client.remove_favorite(&cmd.imdb_id).await {
        Ok(()) => {
            output.info(format!("Removed from favorites: {}", cmd.imdb_id));
            print_change(cmd.imdb_id, false, output)
        }
        Err(e) => output.api_error("Failed to update favorites", &e),
    }
}

fn print_change(id: String, favorite: bool, output: &Output) -> ExitCode {
    if !output.json {
        return ExitCode::Success;
    }
    if let Err(e) = output.print(FavoriteChange { id, favorite }) {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

// =============================================================================
// Config Command
// =============================================================================

/// Effective configuration as printed by `config`
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub api_url: String,
    pub debounce_ms: u128,
    pub toast_ms: u128,
}

pub fn config_cmd(
    cmd: ConfigCmd,
    config_path: Option<&Path>,
    api_url_flag: Option<&str>,
    output: &Output,
) -> ExitCode {
    let path = config_path.map(Path::to_path_buf).or_else(Config::path);
    let mut config = path.as_deref().map(Config::load_from).unwrap_or_default();

    if cmd.has_updates() {
        let Some(path) = path.as_deref() else {
            return output.error("Could not determine config path", ExitCode::Error);
        };
        if let Some(url) = cmd.set_api_url {
            config.api_url = Some(url);
        }
        if let Some(ms) = cmd.set_debounce_ms {
            config.debounce_ms = Some(ms);
        }
        if let Some(ms) = cmd.set_toast_ms {
            config.toast_ms = Some(ms);
        }
        if let Err(e) = config.save_to(path) {
            return output.error(format!("Failed to save config: {}", e), ExitCode::Error);
        }
        output.info(format!("Saved {}", path.display()));
    }

    let shown = ConfigOutput {
        path,
        api_url: config.api_url(api_url_flag),
        debounce_ms: config.debounce_delay().as_millis(),
        toast_ms: config.toast_ttl().as_millis(),
    };
    let lines = vec![
        format!(
            "config:      {}",
            shown
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string())
        ),
        format!("api_url:     {}", shown.api_url),
        format!("debounce_ms: {}", shown.debounce_ms),
        format!("toast_ms:    {}", shown.toast_ms),
    ];
    if let Err(e) = output.print_or(&shown, &lines) {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, title: &str, year: &str, rating: &str) -> Movie {
        Movie {
            id: id.into(),
            title: title.into(),
            year: year.into(),
            imdb_rating: rating.into(),
            ..Movie::default()
        }
    }

    #[test]
    fn test_page_output_counts_pages() {
        let page = PageOutput::new(
            Tab::All,
            Some("batman".into()),
            1,
            MoviePage {
                movies: vec![],
                total_results: 21,
            },
        );
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_page_lines() {
        let mut flagged = movie("tt0372784", "Batman Begins", "2005", "8.2");
        flagged.is_favorite = Some(true);
        let page = PageOutput::new(
            Tab::All,
            None,
            1,
            MoviePage {
                movies: vec![flagged, movie("tt0096895", "Batman", "1989", "N/A")],
                total_results: 2,
            },
        );

        let lines = page.lines();
        assert_eq!(lines[0], "♥ Batman Begins (2005) [tt0372784]  ★ 8.2");
        assert_eq!(lines[1], "  Batman (1989) [tt0096895]  ★ N/A");
        assert_eq!(lines[2], "Page 1/1 (2 results)");
    }

    #[test]
    fn test_empty_page_lines() {
        let page = PageOutput::new(Tab::Favorites, None, 1, MoviePage::default());
        assert_eq!(page.lines(), vec!["No favorites yet.".to_string()]);
    }

    #[test]
    fn test_config_cmd_saves_values() {
        let path = std::env::temp_dir().join(format!(
            "moviefinder-config-cmd-{}.toml",
            std::process::id()
        ));
        let output = Output {
            json: true,
            quiet: true,
        };
        let cmd = ConfigCmd {
            set_api_url: Some("http://catalog:9000".into()),
            set_debounce_ms: Some(300),
            set_toast_ms: None,
        };

        assert_eq!(config_cmd(cmd, Some(&path), None, &output), ExitCode::Success);
        let saved = Config::load_from(&path);
        assert_eq!(saved.api_url.as_deref(), Some("http://catalog:9000"));
        assert_eq!(saved.debounce_ms, Some(300));
        assert_eq!(saved.toast_ms, None);

        let _ = std::fs::remove_file(&path);
    }
}
