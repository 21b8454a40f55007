//! Integration tests for cinetui
//!
//! Tests are organized by component:
//! - omdb_test: OMDb API client tests
//! - controller_test: Search/selection/watchlist state machine
//! - ui_test: Rendering via ratatui TestBackend
//! - cli_test: Argument parsing and command handlers
//! - e2e_test: End-to-end flow tests (Search -> Detail -> Rate -> Summary)

// Note: Each test file is a separate integration test crate
// Tests are run individually by cargo, not via mod.rs
