//! CLI - Command Line Interface for cinetui
//!
//! Scriptable counterparts of the TUI lookups. Output is JSON when asked for
//! or when stdout is not a terminal.
//!
//! # Examples
//!
//! ```bash
//! cinetui search "old boy" --json
//! cinetui info tt0364569
//! ```

use clap::{ArgAction, Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    /// General error
    Error = 1,
    InvalidArgs = 2,
    NetworkError = 3,
    /// OMDb answered with Response "False"
    NotFound = 4,
    /// Missing API key or unreadable config
    ConfigError = 5,
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

// =============================================================================
// Main CLI Structure
// =============================================================================

/// cinetui - find movies, rate them, keep a watched list
///
/// Run without arguments to launch the interactive TUI.
#[derive(Parser, Debug)]
#[command(
    name = "cinetui",
    version,
    about = "Movie search and watchlist in your terminal",
    long_about = "Search OMDb as you type, open a title for its details, \
                  rate it and keep a running watched list.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for scripting.",
    after_help = "EXAMPLES:\n\
                  cinetui                          Launch interactive TUI\n\
                  cinetui search \"old boy\"         Search by title\n\
                  cinetui info tt0364569 --json    Full record as JSON"
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

    /// OMDb API key (overrides OMDB_API_KEY and the config file)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// More logging (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

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
    /// Search movies by title
    #[command(visible_alias = "s")]
    Search(SearchCmd),

    /// Show the full record for one IMDb id
    #[command(visible_alias = "i")]
    Info(InfoCmd),
}

/// Search movies by title
#[derive(Args, Debug)]
pub struct SearchCmd {
    /// Title or part of one
    #[arg(required = true)]
    pub query: String,

    /// Maximum number of results
    #[arg(long, short = 'l', default_value = "10")]
    pub limit: usize,
}

/// Full record for one title
#[derive(Args, Debug)]
pub struct InfoCmd {
    /// IMDb id (e.g., tt0364569)
    #[arg(required = true)]
    pub imdb_id: String,
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
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }
}

impl JsonOutput<()> {
    pub fn failure(msg: impl Into<String>, code: ExitCode) -> Self {
        Self {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

// =============================================================================
// Output Helper
// =============================================================================

#[derive(Debug, Clone, Copy)]
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

    /// Print success data: JSON envelope, or the human rendering
    pub fn print<T: Serialize>(&self, data: T, human: impl FnOnce(&T) -> String) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(&JsonOutput::success(data))?);
        } else {
            println!("{}", human(&data));
        }
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            if let Ok(json) = serde_json::to_string_pretty(&JsonOutput::failure(&msg, code)) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Validation
// =============================================================================

pub fn validate_imdb_id(id: &str) -> Result<&str, &'static str> {
    if id.starts_with("tt") && id.len() >= 9 && id[2..].chars().all(|c| c.is_ascii_digit()) {
        Ok(id)
    } else {
        Err("Invalid IMDb ID format (expected tt followed by 7+ digits)")
    }
}

// =============================================================================
// Tests
// =============================================================================
