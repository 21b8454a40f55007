//! Data structures and types for cinetui
//!
//! Shared models organized by domain:
//! - **Search**: OMDb search hits and full movie details
//! - **Watchlist**: rated movies and their aggregate statistics

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Search Models (OMDb)
// =============================================================================

/// Search hit from an OMDb title search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub imdb_id: String,
    pub title: String,
    /// Kept as text: series report ranges like "2008–2013"
    pub year: String,
    pub poster: String,
}

impl fmt::Display for MovieSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.year, self.imdb_id)
    }
}

/// Full movie record from an OMDb lookup by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
    /// Runtime in minutes, `None` when OMDb reports "N/A"
    pub runtime: Option<u32>,
    pub imdb_rating: Option<f32>,
    pub genre: String,
    pub plot: String,
    pub actors: String,
    pub director: String,
    pub released: String,
}

impl MovieDetail {
    /// Runtime formatted the way OMDb prints it ("148 min")
    pub fn runtime_label(&self) -> String {
        self.runtime
            .map(|m| format!("{} min", m))
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn imdb_rating_label(&self) -> String {
        self.imdb_rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "N/A".to_string())
    }
}

impl fmt::Display for MovieDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {} - ⭐ {}",
            self.title,
            self.year,
            self.runtime_label(),
            self.imdb_rating_label()
        )
    }
}

// =============================================================================
// Watchlist Models
// =============================================================================

/// A movie snapshot plus the rating the user gave it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedMovie {
    pub movie: MovieDetail,
    pub user_rating: u8,
}

impl WatchedMovie {
    pub fn new(movie: MovieDetail, user_rating: u8) -> Self {
        Self { movie, user_rating }
    }

    pub fn imdb_id(&self) -> &str {
        &self.movie.imdb_id
    }
}

impl fmt::Display for WatchedMovie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - ⭐ {} 🌟 {} ⏳ {}",
            self.movie.title,
            self.movie.imdb_rating_label(),
            self.user_rating,
            self.movie.runtime_label()
        )
    }
}

/// Aggregate statistics over the watched list
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WatchedSummary {
    pub count: usize,
    pub avg_runtime: f64,
    pub avg_imdb_rating: f64,
    pub avg_user_rating: f64,
}

impl WatchedSummary {
    /// Each mean is computed independently. Entries without a runtime or
    /// IMDb rating are left out of that field's mean only.
    pub fn from_list(watched: &[WatchedMovie]) -> Self {
        Self {
            count: watched.len(),
            avg_runtime: mean(watched.iter().filter_map(|w| w.movie.runtime).map(f64::from)),
            avg_imdb_rating: mean(
                watched
                    .iter()
                    .filter_map(|w| w.movie.imdb_rating)
                    .map(f64::from),
            ),
            avg_user_rating: mean(watched.iter().map(|w| f64::from(w.user_rating))),
        }
    }
}

impl fmt::Display for WatchedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#️⃣ {} movies  ⭐ {:.2}  🌟 {:.2}  ⏳ {:.0} min",
            self.count, self.avg_imdb_rating, self.avg_user_rating, self.avg_runtime
        )
    }
}

/// Unweighted arithmetic mean, 0 for an empty input
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
