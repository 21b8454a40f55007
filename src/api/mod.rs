//! API clients for external services
//!
//! - OMDb: movie search and metadata

pub mod omdb;

pub use omdb::{OmdbClient, OmdbError};
