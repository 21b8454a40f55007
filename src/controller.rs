//! Search, selection and watchlist state machine
//!
//! Every transition is a plain method call that runs to completion. Network
//! work leaves the controller as a [`FetchRequest`] and comes back as a
//! [`FetchOutcome`]. Both carry a generation number; an outcome whose
//! generation is no longer current is dropped, so a slow reply for an old
//! query can never overwrite state set by a newer one.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::api::OmdbError;
use crate::models::{MovieDetail, MovieSummary, WatchedMovie, WatchedSummary};

/// Highest star the rating widget offers unless configured otherwise
pub const DEFAULT_MAX_RATING: u8 = 10;

// =============================================================================
// Loading State
// =============================================================================

/// Loading state for one pane. Loading and error cannot coexist.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Error(String),
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadingState::Error(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            LoadingState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

// =============================================================================
// Requests and Outcomes
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchKind {
    Search,
    Detail,
}

/// Network work the controller wants done
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Search { generation: u64, query: String },
    Detail { generation: u64, imdb_id: String },
}

impl FetchRequest {
    pub fn kind(&self) -> FetchKind {
        match self {
            FetchRequest::Search { .. } => FetchKind::Search,
            FetchRequest::Detail { .. } => FetchKind::Detail,
        }
    }

    pub fn generation(&self) -> u64 {
        match self {
            FetchRequest::Search { generation, .. } | FetchRequest::Detail { generation, .. } => {
                *generation
            }
        }
    }
}

/// Completed network work, tagged with the generation it was issued under
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Search {
        generation: u64,
        result: Result<Vec<MovieSummary>, OmdbError>,
    },
    Detail {
        generation: u64,
        result: Result<MovieDetail, OmdbError>,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateError {
    #[error("No movie loaded to rate")]
    NoMovieLoaded,

    #[error("Rating {rating} is outside 1..={max}")]
    OutOfRange { rating: u8, max: u8 },
}

// =============================================================================
// Render Modes
// =============================================================================

/// What the search pane shows. Exactly one mode at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchPane<'a> {
    Loading,
    Error(&'a str),
    Results(&'a [MovieSummary]),
}

/// What the right-hand pane shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RightPane<'a> {
    Detail(&'a str),
    Watched,
}

// =============================================================================
// Controller
// =============================================================================

#[derive(Debug)]
pub struct Controller {
    query: String,
    candidates: Vec<MovieSummary>,
    search: LoadingState,
    search_generation: u64,

    selected_id: Option<String>,
    selected_movie: Option<MovieDetail>,
    detail: LoadingState,
    detail_generation: u64,

    watched: Vec<WatchedMovie>,
    max_rating: u8,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RATING)
    }
}

impl Controller {
    pub fn new(max_rating: u8) -> Self {
        Self {
            query: String::new(),
            candidates: Vec::new(),
            search: LoadingState::Idle,
            search_generation: 0,
            selected_id: None,
            selected_movie: None,
            detail: LoadingState::Idle,
            detail_generation: 0,
            watched: Vec::new(),
            max_rating: max_rating.max(1),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn candidates(&self) -> &[MovieSummary] {
        &self.candidates
    }

    pub fn search_state(&self) -> &LoadingState {
        &self.search
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn selected_movie(&self) -> Option<&MovieDetail> {
        self.selected_movie.as_ref()
    }

    pub fn detail_state(&self) -> &LoadingState {
        &self.detail
    }

    pub fn watched(&self) -> &[WatchedMovie] {
        &self.watched
    }

    pub fn max_rating(&self) -> u8 {
        self.max_rating
    }

    /// Derived statistics, recomputed from the list on every call
    pub fn watched_summary(&self) -> WatchedSummary {
        WatchedSummary::from_list(&self.watched)
    }

    pub fn search_pane(&self) -> SearchPane<'_> {
        match &self.search {
            LoadingState::Loading => SearchPane::Loading,
            LoadingState::Error(msg) => SearchPane::Error(msg),
            LoadingState::Idle => SearchPane::Results(&self.candidates),
        }
    }

    pub fn right_pane(&self) -> RightPane<'_> {
        match &self.selected_id {
            Some(id) => RightPane::Detail(id),
            None => RightPane::Watched,
        }
    }

    pub fn is_watched(&self, imdb_id: &str) -> bool {
        self.watched.iter().any(|w| w.imdb_id() == imdb_id)
    }

    /// Most recent rating given to a title
    pub fn user_rating_for(&self, imdb_id: &str) -> Option<u8> {
        self.watched
            .iter()
            .rev()
            .find(|w| w.imdb_id() == imdb_id)
            .map(|w| w.user_rating)
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Query changed. Returns the search to issue, if any.
    pub fn set_query(&mut self, query: impl Into<String>) -> Option<FetchRequest> {
        self.query = query.into();
        // Any reply still in flight belongs to an older query now
        self.search_generation += 1;

        if self.query.is_empty() {
            debug!("query cleared");
            self.candidates.clear();
            self.search = LoadingState::Idle;
            return None;
        }

        self.search = LoadingState::Loading;
        debug!(query = %self.query, generation = self.search_generation, "search issued");
        Some(FetchRequest::Search {
            generation: self.search_generation,
            query: self.query.clone(),
        })
    }

    /// Toggle selection. Selecting the open title again closes it.
    pub fn select_movie(&mut self, imdb_id: &str) -> Option<FetchRequest> {
        if self.selected_id.as_deref() == Some(imdb_id) {
            info!(imdb_id, "deselected");
            self.close_movie();
            return None;
        }

        self.selected_id = Some(imdb_id.to_string());
        self.selected_movie = None;
        self.detail = LoadingState::Loading;
        self.detail_generation += 1;

        info!(imdb_id, generation = self.detail_generation, "selected");
        Some(FetchRequest::Detail {
            generation: self.detail_generation,
            imdb_id: imdb_id.to_string(),
        })
    }

    /// Leave the detail view. No fetch.
    pub fn close_movie(&mut self) {
        self.selected_id = None;
        self.selected_movie = None;
        self.detail = LoadingState::Idle;
        self.detail_generation += 1;
    }

    /// Append the loaded movie to the watched list with `rating`.
    /// The detail view stays open.
    pub fn rate_movie(&mut self, rating: u8) -> Result<&WatchedMovie, RateError> {
        if !(1..=self.max_rating).contains(&rating) {
            return Err(RateError::OutOfRange {
                rating,
                max: self.max_rating,
            });
        }

        let movie = self
            .selected_movie
            .as_ref()
            .ok_or(RateError::NoMovieLoaded)?
            .clone();

        info!(imdb_id = %movie.imdb_id, rating, "rated");
        self.watched.push(WatchedMovie::new(movie, rating));
        Ok(&self.watched[self.watched.len() - 1])
    }

    /// Drop every watched entry for a title. Returns how many were removed.
    pub fn remove_watched(&mut self, imdb_id: &str) -> usize {
        let before = self.watched.len();
        self.watched.retain(|w| w.imdb_id() != imdb_id);
        before - self.watched.len()
    }

    /// Fold a completed fetch into state. Returns false for stale replies.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        match outcome {
            FetchOutcome::Search { generation, result } => {
                if generation != self.search_generation {
                    warn!(generation, current = self.search_generation, "stale search reply dropped");
                    return false;
                }
                self.apply_search(result);
            }
            FetchOutcome::Detail { generation, result } => {
                if generation != self.detail_generation || self.selected_id.is_none() {
                    warn!(generation, current = self.detail_generation, "stale detail reply dropped");
                    return false;
                }
                self.apply_detail(result);
            }
        }
        true
    }

    fn apply_search(&mut self, result: Result<Vec<MovieSummary>, OmdbError>) {
        self.search = match result {
            Ok(movies) => {
                debug!(count = movies.len(), "search results");
                self.candidates = movies;
                LoadingState::Idle
            }
            // Too broad a query: keep what is on screen, show no error
            Err(OmdbError::TooManyResults) => LoadingState::Idle,
            Err(e) => {
                warn!(error = %e, "search failed");
                LoadingState::Error(e.to_string())
            }
        };
    }

    fn apply_detail(&mut self, result: Result<MovieDetail, OmdbError>) {
        self.detail = match result {
            Ok(movie) => {
                self.selected_movie = Some(movie);
                LoadingState::Idle
            }
            Err(e) => {
                warn!(error = %e, "detail fetch failed");
                LoadingState::Error(e.to_string())
            }
        };
    }
}
