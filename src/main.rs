//! cinetui - movie search and watchlist for the terminal
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! cinetui
//!
//! # CLI mode (for scripting)
//! cinetui search "old boy"
//! cinetui info tt0364569 --json
//! ```

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{error, info};

use cinetui::api::OmdbClient;
use cinetui::cli::{Cli, Command, ExitCode, Output};
use cinetui::commands;
use cinetui::config::Config;
use cinetui::controller::{Controller, FetchKind, FetchOutcome};
use cinetui::fetch::{self, Fetcher};
use cinetui::logging::{init_logging, LogTarget};
use cinetui::{ui, App};

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        let exit_code = run_cli(cli).await;
        std::process::exit(exit_code.into());
    } else {
        run_tui(cli).await
    }
}

/// Explicit --config must parse; the default location is best effort
fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Ok(Config::load_from(path)?),
        None => Ok(Config::load()),
    }
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli) -> ExitCode {
    let output = Output::new(&cli);

    if let Err(e) = init_logging(cli.verbose, cli.quiet, LogTarget::Stderr) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => return output.error(e.to_string(), ExitCode::ConfigError),
    };
    let api_key = cli.api_key.as_deref();

    match cli.command {
        Some(Command::Search(cmd)) => commands::search_cmd(cmd, &config, api_key, &output).await,
        Some(Command::Info(cmd)) => commands::info_cmd(cmd, &config, api_key, &output).await,
        // Handled by the is_cli_mode check
        None => ExitCode::Success,
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
async fn run_tui(cli: Cli) -> Result<()> {
    // Config and key problems are reported before the screen is taken over
    let config = load_config(&cli)?;
    let api_key = config
        .resolve_api_key(cli.api_key.as_deref())
        .context("Cannot start without an OMDb API key")?;

    if let Some(path) = config.log_file() {
        init_logging(cli.verbose, cli.quiet, LogTarget::File(path))?;
    }

    let client = OmdbClient::with_base_url(api_key, config.base_url());
    let (sender, mut outcomes) = fetch::channel();
    let mut fetcher = Fetcher::new(client, sender);
    let mut app = App::new(Controller::new(config.max_rating));

    info!(base_url = config.base_url(), "starting TUI");

    let mut terminal = init_terminal()?;
    let result = run_event_loop(&mut terminal, &mut app, &mut fetcher, &mut outcomes).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        error!(error = %e, "event loop failed");
    }
    result
}

/// Main event loop - handles input, dispatches fetches, folds results, renders
async fn run_event_loop(
    terminal: &mut Tui,
    app: &mut App,
    fetcher: &mut Fetcher,
    outcomes: &mut UnboundedReceiver<FetchOutcome>,
) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(50);

    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Let spawned fetches make progress between polls
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
            if let Some(request) = app.handle_key(key) {
                fetcher.dispatch(request);
            }
            if app.controller.selected_id().is_none() {
                fetcher.cancel(FetchKind::Detail);
            }
            if app.controller.query().is_empty() {
                fetcher.cancel(FetchKind::Search);
            }
        }

        while let Ok(outcome) = outcomes.try_recv() {
            app.apply_outcome(outcome);
        }
    }

    Ok(())
}
