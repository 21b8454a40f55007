//! CLI Command Handlers
//!
//! Each handler takes its parsed args, the loaded config and the Output
//! helper, and returns an ExitCode.

use tracing::debug;

use crate::api::{OmdbClient, OmdbError};
use crate::cli::{validate_imdb_id, ExitCode, InfoCmd, Output, SearchCmd};
use crate::config::Config;
use crate::models::{MovieDetail, MovieSummary};

/// Map a client error onto the documented exit codes
pub fn exit_code_for(err: &OmdbError) -> ExitCode {
    match err {
        OmdbError::Network(_) => ExitCode::NetworkError,
        OmdbError::Api(_) | OmdbError::TooManyResults => ExitCode::NotFound,
        OmdbError::InvalidResponse(_) => ExitCode::Error,
    }
}

/// Build a client from config, or report the missing key
fn client(config: &Config, api_key: Option<&str>, output: &Output) -> Result<OmdbClient, ExitCode> {
    config
        .resolve_api_key(api_key)
        .map(|key| OmdbClient::with_base_url(key, config.base_url()))
        .map_err(|e| output.error(e.to_string(), ExitCode::ConfigError))
}

// =============================================================================
// Search Command
// =============================================================================

pub async fn search_cmd(
    cmd: SearchCmd,
    config: &Config,
    api_key: Option<&str>,
    output: &Output,
) -> ExitCode {
    if cmd.query.trim().is_empty() {
        return output.error("Search query must not be empty", ExitCode::InvalidArgs);
    }

    let client = match client(config, api_key, output) {
        Ok(c) => c,
        Err(code) => return code,
    };

    output.info(format!("Searching for: {}", cmd.query));

    let mut results = match client.search_by_title(&cmd.query).await {
        Ok(results) => results,
        // Too broad to list: same as the TUI, show nothing
        Err(OmdbError::TooManyResults) => {
            output.info("Too many results, try a longer query");
            Vec::new()
        }
        Err(e) => return output.error(e.to_string(), exit_code_for(&e)),
    };
    results.truncate(cmd.limit);
    debug!(count = results.len(), "search done");

    match output.print(&results, |r| render_summaries(r)) {
        Ok(()) => ExitCode::Success,
        Err(e) => output.error(format!("Failed to serialize: {}", e), ExitCode::Error),
    }
}

fn render_summaries(results: &[MovieSummary]) -> String {
    if results.is_empty() {
        return "No movies found".to_string();
    }
    results
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Info Command
// =============================================================================

pub async fn info_cmd(
    cmd: InfoCmd,
    config: &Config,
    api_key: Option<&str>,
    output: &Output,
) -> ExitCode {
    if let Err(e) = validate_imdb_id(&cmd.imdb_id) {
        return output.error(e, ExitCode::InvalidArgs);
    }

    let client = match client(config, api_key, output) {
        Ok(c) => c,
        Err(code) => return code,
    };

    output.info(format!("Getting info for: {}", cmd.imdb_id));

    match client.fetch_by_id(&cmd.imdb_id).await {
        Ok(detail) => match output.print(&detail, |d| render_detail(d)) {
            Ok(()) => ExitCode::Success,
            Err(e) => output.error(format!("Failed to serialize: {}", e), ExitCode::Error),
        },
        Err(e) => output.error(e.to_string(), exit_code_for(&e)),
    }
}

fn render_detail(movie: &MovieDetail) -> String {
    format!(
        "{}\n{} • {} • {}\n⭐ {} IMDb rating\n\n{}\n\nStarring {}\nDirected by {}",
        movie.title,
        movie.released,
        movie.runtime_label(),
        movie.genre,
        movie.imdb_rating_label(),
        movie.plot,
        movie.actors,
        movie.director,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(
            exit_code_for(&OmdbError::Network("x".into())),
            ExitCode::NetworkError
        );
        assert_eq!(
            exit_code_for(&OmdbError::Api("Movie not found!".into())),
            ExitCode::NotFound
        );
        assert_eq!(
            exit_code_for(&OmdbError::InvalidResponse("x".into())),
            ExitCode::Error
        );
    }

    #[test]
    fn test_render_summaries() {
        assert_eq!(render_summaries(&[]), "No movies found");
        let movies = vec![MovieSummary {
            imdb_id: "tt0364569".into(),
            title: "Oldboy".into(),
            year: "2003".into(),
            poster: String::new(),
        }];
        assert_eq!(render_summaries(&movies), "Oldboy (2003) [tt0364569]");
    }

    #[test]
    fn test_info_rejects_bad_id_before_network() {
        let output = Output {
            json: false,
            quiet: true,
        };
        let cmd = InfoCmd {
            imdb_id: "oldboy".into(),
        };
        let code = tokio_test::block_on(info_cmd(cmd, &Config::default(), Some("k"), &output));
        assert_eq!(code, ExitCode::InvalidArgs);
    }

    #[tokio::test]
    async fn test_missing_key_is_config_error() {
        let output = Output {
            json: false,
            quiet: true,
        };
        let cmd = InfoCmd {
            imdb_id: "tt0364569".into(),
        };
        // No flag and no file key; the environment may still supply one
        if std::env::var(crate::config::API_KEY_ENV).is_err() {
            assert_eq!(
                info_cmd(cmd, &Config::default(), None, &output).await,
                ExitCode::ConfigError
            );
        }
    }
}
