//! Configuration management for MovieFinder
//!
//! Handles config file loading/saving and catalog URL resolution.
//! Config is stored at ~/.config/moviefinder/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::debounce;
use crate::toast;

/// Environment variable overriding the catalog base URL
pub const API_URL_ENV: &str = "MOVIEFINDER_API_URL";

/// Catalog URL when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog API base URL
    pub api_url: Option<String>,
    /// Search debounce delay in milliseconds
    pub debounce_ms: Option<u64>,
    /// Toast display time in milliseconds
    pub toast_ms: Option<u64>,
}

impl Config {
    /// Get config file path (~/.config/moviefinder/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("moviefinder").join("config.toml"))
    }

    /// Load config from the default path, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .map(|p| Self::load_from(&p))
            .unwrap_or_default()
    }

    /// Load config from a specific file; unreadable or invalid files yield defaults
    pub fn load_from(path: &Path) -> Self {
        let Ok(text) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config file");
                Self::default()
            }
        }
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Resolve the catalog URL with fallback chain:
    /// 1. Explicit override (command-line flag)
    /// 2. Environment variable MOVIEFINDER_API_URL
    /// 3. Config file value
    /// 4. Built-in default
    pub fn api_url(&self, flag: Option<&str>) -> String {
        let env = std::env::var(API_URL_ENV).ok();
        resolve_api_url(flag, env.as_deref(), self.api_url.as_deref())
    }

    pub fn debounce_delay(&self) -> Duration {
        self.debounce_ms
            .map(Duration::from_millis)
            .unwrap_or(debounce::DEFAULT_DELAY)
    }

    pub fn toast_ttl(&self) -> Duration {
        self.toast_ms
            .map(Duration::from_millis)
            .unwrap_or(toast::DEFAULT_TTL)
    }
}

fn resolve_api_url(flag: Option<&str>, env: Option<&str>, file: Option<&str>) -> String {
    [flag, env, file]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}
