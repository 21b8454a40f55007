//! cinetui - movie search and watchlist for the terminal
//!
//! Search OMDb as you type, open a title for its details, rate it and keep
//! a running list of what you watched.
//!
//! # Modules
//!
//! - `models` - Search hits, movie details, watched entries and summary
//! - `api` - OMDb client
//! - `controller` - Search/selection/watchlist state machine
//! - `fetch` - Runs controller requests on tokio tasks
//! - `app` - TUI state and key handling
//! - `ui` - ratatui rendering
//! - `cli` / `commands` - Scriptable subcommands
//! - `config` / `logging` - Config file and tracing setup

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod fetch;
pub mod logging;
pub mod models;
pub mod ui;

// Re-export commonly used types
pub use models::{MovieDetail, MovieSummary, WatchedMovie, WatchedSummary};

pub use api::{OmdbClient, OmdbError};
pub use app::App;
pub use config::Config;
pub use controller::{Controller, FetchOutcome, FetchRequest, LoadingState};
pub use fetch::Fetcher;
