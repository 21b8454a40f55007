//! OMDb (Open Movie Database) API client
//!
//! Title search and lookup by IMDb id.
//! API docs: https://www.omdbapi.com/

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{MovieDetail, MovieSummary};

/// Public OMDb endpoint
pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";

const SEARCH_FAILED: &str = "Something went wrong with fetching movies";
const DETAIL_FAILED: &str = "Something went wrong with fetching movie details";
const TOO_MANY_RESULTS: &str = "Too many results.";

/// OMDb API error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OmdbError {
    /// Transport failure or non-success HTTP status
    #[error("{0}")]
    Network(String),

    /// Query too broad; callers treat this as "nothing new to show"
    #[error("Too many results.")]
    TooManyResults,

    /// Upstream answered `Response: "False"` with this message
    #[error("{0}")]
    Api(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// OMDb API client
#[derive(Debug, Clone)]
pub struct OmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OmdbClient {
    /// Create a new OMDb client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search movies by title. An empty query is the caller's bug.
    pub async fn search_by_title(&self, query: &str) -> Result<Vec<MovieSummary>, OmdbError> {
        let response: SearchResponse = self.get(("s", query), SEARCH_FAILED).await?;
        check_response(&response.response, response.error)?;

        Ok(response
            .search
            .into_iter()
            .map(SearchHitRaw::into_summary)
            .collect())
    }

    /// Fetch the full record for an IMDb id
    pub async fn fetch_by_id(&self, imdb_id: &str) -> Result<MovieDetail, OmdbError> {
        let response: DetailResponse = self.get(("i", imdb_id), DETAIL_FAILED).await?;
        check_response(&response.response, response.error.clone())?;
        response.into_detail()
    }

    fn url(&self, param: (&str, &str)) -> Result<Url, OmdbError> {
        Url::parse_with_params(
            &self.base_url,
            &[("apikey", self.api_key.as_str()), param],
        )
        .map_err(|e| OmdbError::InvalidResponse(format!("Bad base URL {}: {}", self.base_url, e)))
    }

    /// GET with the api key attached; any transport or status failure
    /// collapses into `Network(failure)`
    async fn get<T: DeserializeOwned>(
        &self,
        param: (&str, &str),
        failure: &str,
    ) -> Result<T, OmdbError> {
        let url = self.url(param)?;
        debug!(param = param.0, value = param.1, "OMDb request");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OMDb request failed");
                OmdbError::Network(failure.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "OMDb returned non-success status");
            return Err(OmdbError::Network(failure.to_string()));
        }

        let body = response.text().await.map_err(|e| {
            warn!(error = %e, "OMDb body read failed");
            OmdbError::Network(failure.to_string())
        })?;

        serde_json::from_str(&body)
            .map_err(|e| OmdbError::InvalidResponse(format!("JSON parse error: {}", e)))
    }
}

/// Map OMDb's `Response`/`Error` pair onto our error types
fn check_response(response: &str, error: Option<String>) -> Result<(), OmdbError> {
    if !response.eq_ignore_ascii_case("false") {
        return Ok(());
    }

    match error {
        Some(msg) if msg == TOO_MANY_RESULTS => Err(OmdbError::TooManyResults),
        Some(msg) => Err(OmdbError::Api(msg)),
        None => Err(OmdbError::Api("Unknown error".to_string())),
    }
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "Response", default)]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "Search", default)]
    search: Vec<SearchHitRaw>,
}

#[derive(Debug, Deserialize)]
struct SearchHitRaw {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster", default)]
    poster: String,
}

impl SearchHitRaw {
    fn into_summary(self) -> MovieSummary {
        MovieSummary {
            imdb_id: self.imdb_id,
            title: self.title,
            year: self.year,
            poster: self.poster,
        }
    }
}

// Every field is optional so the `Response: "False"` shape parses too
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DetailResponse {
    #[serde(default)]
    response: String,
    error: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    title: Option<String>,
    year: Option<String>,
    poster: Option<String>,
    runtime: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    genre: Option<String>,
    plot: Option<String>,
    actors: Option<String>,
    director: Option<String>,
    released: Option<String>,
}

impl DetailResponse {
    fn into_detail(self) -> Result<MovieDetail, OmdbError> {
        let imdb_id = self
            .imdb_id
            .ok_or_else(|| OmdbError::InvalidResponse("missing imdbID".into()))?;
        let title = self
            .title
            .ok_or_else(|| OmdbError::InvalidResponse("missing Title".into()))?;

        Ok(MovieDetail {
            imdb_id,
            title,
            year: self.year.unwrap_or_default(),
            poster: self.poster.unwrap_or_default(),
            runtime: self.runtime.as_deref().and_then(parse_runtime),
            imdb_rating: self.imdb_rating.as_deref().and_then(parse_rating),
            genre: self.genre.unwrap_or_default(),
            plot: self.plot.unwrap_or_default(),
            actors: self.actors.unwrap_or_default(),
            director: self.director.unwrap_or_default(),
            released: self.released.unwrap_or_default(),
        })
    }
}

/// Minutes from a runtime string like "148 min"
fn parse_runtime(s: &str) -> Option<u32> {
    s.split_whitespace().next()?.parse().ok()
}

/// Rating from a string like "8.8"; "N/A" yields None
fn parse_rating(s: &str) -> Option<f32> {
    s.trim().parse().ok()
}
