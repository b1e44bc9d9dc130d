//! Tracing setup
//!
//! The TUI owns the terminal, so it only logs when `MOVIEFINDER_LOG` names a
//! file. CLI mode logs to stderr at `warn` unless `RUST_LOG` says otherwise.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file
pub const LOG_FILE_ENV: &str = "MOVIEFINDER_LOG";

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Interactive terminal UI: file only, or nothing
    Tui,
    /// Scripted CLI: stderr
    Cli,
}

pub fn init_tracing(target: LogTarget) {
    let log_file = std::env::var(LOG_FILE_ENV).ok().filter(|p| !p.is_empty());

    match (log_file, target) {
        (Some(path), _) => {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"));

            let Ok(file) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
            else {
                eprintln!("Warning: Failed to open log file: {}", path);
                return;
            };

            let file_layer = fmt::layer()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_level(true);

            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .try_init();
        }
        (None, LogTarget::Cli) => {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn"));

            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
        }
        // Nothing configured: keep the alternate screen clean
        (None, LogTarget::Tui) => {}
    }
}
