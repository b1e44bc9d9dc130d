//! MovieFinder - terminal movie browser with favorites
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! moviefinder
//!
//! # CLI mode (for automation)
//! moviefinder search batman
//! moviefinder add tt0372784 --search batman
//! moviefinder favorites --json
//! ```

use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use moviefinder::api::MovieClient;
use moviefinder::app::{Action, App};
use moviefinder::cli::{Cli, Command, ExitCode, Output};
use moviefinder::commands;
use moviefinder::config::Config;
use moviefinder::controller::Outcome;
use moviefinder::logging::{self, LogTarget};
use moviefinder::ui;

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        logging::init_tracing(LogTarget::Cli);
        let exit_code = run_cli(cli, config).await;
        std::process::exit(exit_code.into());
    } else {
        // TUI mode: launch interactive interface
        logging::init_tracing(LogTarget::Tui);
        run_tui(cli, config).await
    }
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli, config: Config) -> ExitCode {
    let output = Output::new(&cli);
    let client = MovieClient::new(config.api_url(cli.api_url.as_deref()));

    match cli.command {
        Some(Command::Search(cmd)) => commands::search_cmd(cmd, &client, &output).await,

        Some(Command::Favorites(cmd)) => commands::favorites_cmd(cmd, &client, &output).await,

        Some(Command::Add(cmd)) => commands::add_cmd(cmd, &client, &output).await,

        Some(Command::Remove(cmd)) => commands::remove_cmd(cmd, &client, &output).await,

        Some(Command::Config(cmd)) => {
            commands::config_cmd(cmd, cli.config.as_deref(), cli.api_url.as_deref(), &output)
        }

        None => {
            // This shouldn't happen (handled by is_cli_mode check)
            ExitCode::Success
        }
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(cli: Cli, config: Config) -> Result<()> {
    let api_url = config.api_url(cli.api_url.as_deref());
    tracing::info!(%api_url, "starting TUI");
    let client = MovieClient::new(api_url);

    let mut terminal = init_terminal()?;
    let mut app = App::with_timing(config.debounce_delay(), config.toast_ttl());

    let result = run_event_loop(&mut terminal, &mut app, client).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, runs requests, renders UI
async fn run_event_loop(terminal: &mut Tui, app: &mut App, client: MovieClient) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    let (tx, mut rx) = mpsc::unbounded_channel::<Outcome>();

    while app.running {
        // Start the fetch any state change since the last pass asked for
        if let Some(request) = app.catalog.take_refresh() {
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let _ = tx.send(Outcome::Fetch(request.execute(&client).await));
            });
        }

        terminal.draw(|frame| ui::render_ui(frame, app))?;

        // crossterm's poll blocks, so keep it off the runtime's worker
        let key = tokio::task::block_in_place(|| -> Result<Option<event::KeyEvent>> {
            if event::poll(TICK_RATE)? {
                if let Event::Key(key) = event::read()? {
                    // Only handle key press events (ignore releases on Windows)
                    if key.kind == KeyEventKind::Press {
                        return Ok(Some(key));
                    }
                }
            }
            Ok(None)
        })?;

        if let Some(key) = key {
            if let Some(action) = app.handle_key(key) {
                dispatch(action, app, &client, &tx);
            }
        }

        drain_outcomes(app, &mut rx);
        app.tick(Instant::now());
    }

    Ok(())
}

/// Spawn the request a key press asked for
fn dispatch(action: Action, app: &App, client: &MovieClient, tx: &UnboundedSender<Outcome>) {
    match action {
        Action::ToggleFavorite(id) => {
            let Some(request) = app.catalog.begin_toggle(&id) else {
                return;
            };
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let _ = tx.send(Outcome::Toggle(request.execute(&client).await));
            });
        }
    }
}

/// Apply every request that finished since the last pass
fn drain_outcomes(app: &mut App, rx: &mut UnboundedReceiver<Outcome>) {
    while let Ok(outcome) = rx.try_recv() {
        app.apply(outcome);
    }
}
