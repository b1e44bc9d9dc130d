//! CLI - Command Line Interface for MovieFinder
//!
//! Every catalog action the TUI performs is scriptable. Output is
//! JSON-parseable with `--json` (and by default when stdout is not a TTY).
//!
//! # Examples
//!
//! ```bash
//! # Browse the catalog
//! moviefinder search batman --page 2
//! moviefinder favorites --json
//!
//! # Manage favorites
//! moviefinder add tt0372784 --search batman
//! moviefinder remove tt0372784
//! ```

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::api::ApiError;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Network error
    NetworkError = 3,
    /// Movie not found
    NotFound = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

impl From<&ApiError> for ExitCode {
    fn from(err: &ApiError) -> ExitCode {
        if err.is_transport() {
            ExitCode::NetworkError
        } else if err.status() == Some(reqwest::StatusCode::NOT_FOUND) {
            ExitCode::NotFound
        } else {
            ExitCode::Error
        }
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// MovieFinder - browse a movie catalog and keep a favorites list
///
/// Run without arguments to launch interactive TUI.
/// Use subcommands for scriptable automation.
#[derive(Parser, Debug)]
#[command(
    name = "moviefinder",
    version,
    about = "Terminal movie browser with favorites",
    long_about = "Search a movie catalog, page through results and keep a \
                  favorites list on the catalog server.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for automation and scripting.",
    after_help = "EXAMPLES:\n\
                  moviefinder                              Launch interactive TUI\n\
                  moviefinder search batman                Search the catalog\n\
                  moviefinder favorites --json             List favorites as JSON\n\
                  moviefinder add tt0372784 -s batman      Add a favorite"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Catalog API base URL (overrides env and config)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the catalog (empty query lists everything)
    #[command(visible_alias = "s")]
    Search(SearchCmd),

    /// List favorite movies
    #[command(visible_alias = "fav")]
    Favorites(FavoritesCmd),

    /// Add a movie to favorites
    Add(AddCmd),

    /// Remove a movie from favorites
    #[command(visible_alias = "rm")]
    Remove(RemoveCmd),

    /// Show or update configuration
    Config(ConfigCmd),
}

/// Search the catalog by title
#[derive(Args, Debug)]
pub struct SearchCmd {
    /// Search term (title)
    #[arg(default_value = "")]
    pub query: String,

    /// Page number (1-based)
    #[arg(
        long,
        short = 'p',
        default_value = "1",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub page: u32,
}

/// List favorites
#[derive(Args, Debug)]
pub struct FavoritesCmd {
    /// Page number (1-based)
    #[arg(
        long,
        short = 'p',
        default_value = "1",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub page: u32,
}

/// Add a favorite
///
/// The server stores the whole record, so the movie is first looked up on
/// the listing it appears in.
#[derive(Args, Debug)]
pub struct AddCmd {
    /// IMDb ID (e.g., tt0372784)
    pub imdb_id: String,

    /// Search term of the listing that contains the movie
    #[arg(long, short = 's', default_value = "")]
    pub search: String,

    /// Page of that listing
    #[arg(
        long,
        short = 'p',
        default_value = "1",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub page: u32,
}

/// Remove a favorite
#[derive(Args, Debug)]
pub struct RemoveCmd {
    /// IMDb ID (e.g., tt0372784)
    pub imdb_id: String,
}

/// Show the effective configuration, or store new values
#[derive(Args, Debug)]
pub struct ConfigCmd {
    /// Store a catalog base URL in the config file
    #[arg(long, value_name = "URL")]
    pub set_api_url: Option<String>,

    /// Store the search debounce delay in milliseconds
    #[arg(long, value_name = "MS")]
    pub set_debounce_ms: Option<u64>,

    /// Store the toast display time in milliseconds
    #[arg(long, value_name = "MS")]
    pub set_toast_ms: Option<u64>,
}

impl ConfigCmd {
    /// Whether any setter was given
    pub fn has_updates(&self) -> bool {
        self.set_api_url.is_some() || self.set_debounce_ms.is_some() || self.set_toast_ms.is_some()
    }
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data as JSON
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Ok(())
    }

    /// Print JSON-wrapped data, or the given lines for humans
    pub fn print_or<T: Serialize>(&self, data: T, human: &[String]) -> anyhow::Result<()> {
        if self.json {
            return self.print(data);
        }
        for line in human {
            println!("{}", line);
        }
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print an API failure with the exit code it maps to
    pub fn api_error(&self, context: &str, err: &ApiError) -> ExitCode {
        self.error(format!("{}: {}", context, err), ExitCode::from(err))
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// IMDB ID Validation
// =============================================================================

/// Validate IMDB ID format (tt followed by digits)
pub fn validate_imdb_id(id: &str) -> Result<&str, &'static str> {
    if id.starts_with("tt") && id.len() >= 9 && id[2..].chars().all(|c| c.is_ascii_digit()) {
        Ok(id)
    } else {
        Err("Invalid IMDB ID format (expected tt followed by 7+ digits)")
    }
}

// =============================================================================
// Tests
// =============================================================================
