//! End-to-end flow tests
//!
//! Controller + Fetcher against a mock OMDb: type a query, open a result,
//! rate it, close it, check the watched summary.

use std::time::Duration;

use cinetui::api::OmdbClient;
use cinetui::controller::{Controller, FetchKind, FetchOutcome, RightPane};
use cinetui::fetch::{self, Fetcher};
use mockito::{Matcher, Server, ServerGuard};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::timeout;

const SEARCH_OLD: &str = r#"{
    "Search": [
        {"Title": "Oldboy", "Year": "2003", "imdbID": "tt0364569", "Type": "movie", "Poster": "N/A"},
        {"Title": "Old", "Year": "2021", "imdbID": "tt10954652", "Type": "movie", "Poster": "N/A"}
    ],
    "totalResults": "2",
    "Response": "True"
}"#;

const DETAIL_OLD: &str = r#"{
    "Title": "Old",
    "Year": "2021",
    "Released": "23 Jul 2021",
    "Runtime": "108 min",
    "Genre": "Drama, Horror, Mystery",
    "Director": "M. Night Shyamalan",
    "Actors": "Gael García Bernal, Vicky Krieps, Rufus Sewell",
    "Plot": "A vacationing family discovers that the secluded beach where they're relaxing for a few hours is somehow causing them to age rapidly.",
    "Poster": "N/A",
    "imdbRating": "5.8",
    "imdbID": "tt10954652",
    "Response": "True"
}"#;

async fn next_outcome(outcomes: &mut UnboundedReceiver<FetchOutcome>) -> FetchOutcome {
    timeout(Duration::from_secs(5), outcomes.recv())
        .await
        .expect("timed out waiting for a fetch outcome")
        .expect("outcome channel closed")
}

async fn mock_search(server: &mut ServerGuard, query: &str, body: &str) -> mockito::Mock {
    server
        .mock("GET", "/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("apikey".into(), "test_key".into()),
            Matcher::UrlEncoded("s".into(), query.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

#[tokio::test]
async fn test_search_select_rate_close() {
    let mut server = Server::new_async().await;
    let search_mock = mock_search(&mut server, "old", SEARCH_OLD).await;
    let detail_mock = server
        .mock("GET", "/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("apikey".into(), "test_key".into()),
            Matcher::UrlEncoded("i".into(), "tt10954652".into()),
        ]))
        .with_status(200)
        .with_body(DETAIL_OLD)
        .expect(1)
        .create_async()
        .await;

    let (sender, mut outcomes) = fetch::channel();
    let mut fetcher = Fetcher::new(OmdbClient::with_base_url("test_key", server.url()), sender);
    let mut controller = Controller::default();

    fetcher.dispatch(controller.set_query("old").unwrap());
    assert!(controller.apply(next_outcome(&mut outcomes).await));
    search_mock.assert_async().await;
    assert_eq!(controller.candidates().len(), 2);

    let second = controller.candidates()[1].imdb_id.clone();
    fetcher.dispatch(controller.select_movie(&second).unwrap());
    assert!(controller.apply(next_outcome(&mut outcomes).await));
    detail_mock.assert_async().await;

    let movie = controller.selected_movie().unwrap();
    assert_eq!(movie.title, "Old");
    assert_eq!(movie.runtime, Some(108));

    controller.rate_movie(8).unwrap();
    controller.close_movie();
    assert_eq!(controller.right_pane(), RightPane::Watched);

    let summary = controller.watched_summary();
    assert_eq!(summary.count, 1);
    assert!((summary.avg_runtime - 108.0).abs() < 1e-9);
    assert!((summary.avg_imdb_rating - 5.8).abs() < 1e-6);
    assert!((summary.avg_user_rating - 8.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_superseded_search_never_lands() {
    let mut server = Server::new_async().await;
    let _mat = mock_search(
        &mut server,
        "mat",
        r#"{"Search": [{"Title": "Mat", "Year": "1999", "imdbID": "tt0000001"}], "Response": "True"}"#,
    )
    .await;
    let _matrix = mock_search(
        &mut server,
        "matrix",
        r#"{"Search": [{"Title": "The Matrix", "Year": "1999", "imdbID": "tt0133093"}], "Response": "True"}"#,
    )
    .await;

    let (sender, mut outcomes) = fetch::channel();
    let mut fetcher = Fetcher::new(OmdbClient::with_base_url("test_key", server.url()), sender);
    let mut controller = Controller::default();

    fetcher.dispatch(controller.set_query("mat").unwrap());
    fetcher.dispatch(controller.set_query("matrix").unwrap());

    // The "mat" task is usually aborted; if it won the race its reply is stale
    while controller.search_state().is_loading() {
        controller.apply(next_outcome(&mut outcomes).await);
    }

    assert_eq!(controller.candidates().len(), 1);
    assert_eq!(controller.candidates()[0].imdb_id, "tt0133093");
}

#[tokio::test]
async fn test_too_many_results_keeps_previous_candidates() {
    let mut server = Server::new_async().await;
    let _old = mock_search(&mut server, "old", SEARCH_OLD).await;
    let _o = mock_search(
        &mut server,
        "o",
        r#"{"Response": "False", "Error": "Too many results."}"#,
    )
    .await;

    let (sender, mut outcomes) = fetch::channel();
    let mut fetcher = Fetcher::new(OmdbClient::with_base_url("test_key", server.url()), sender);
    let mut controller = Controller::default();

    fetcher.dispatch(controller.set_query("old").unwrap());
    controller.apply(next_outcome(&mut outcomes).await);

    fetcher.dispatch(controller.set_query("o").unwrap());
    controller.apply(next_outcome(&mut outcomes).await);

    assert_eq!(controller.candidates().len(), 2);
    assert!(!controller.search_state().is_loading());
    assert!(!controller.search_state().is_error());
}

#[tokio::test]
async fn test_network_failure_reaches_pane() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(502)
        .create_async()
        .await;

    let (sender, mut outcomes) = fetch::channel();
    let mut fetcher = Fetcher::new(OmdbClient::with_base_url("test_key", server.url()), sender);
    let mut controller = Controller::default();

    fetcher.dispatch(controller.set_query("old").unwrap());
    controller.apply(next_outcome(&mut outcomes).await);

    assert_eq!(
        controller.search_state().message(),
        Some("Something went wrong with fetching movies")
    );
}

#[tokio::test]
async fn test_cancel_detail_on_close() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(DETAIL_OLD)
        .create_async()
        .await;

    let (sender, mut outcomes) = fetch::channel();
    let mut fetcher = Fetcher::new(OmdbClient::with_base_url("test_key", server.url()), sender);
    let mut controller = Controller::default();

    fetcher.dispatch(controller.select_movie("tt10954652").unwrap());
    controller.close_movie();
    fetcher.cancel(FetchKind::Detail);
    assert!(!fetcher.is_in_flight(FetchKind::Detail));

    // Whatever still arrives is stale
    if let Ok(Some(outcome)) = timeout(Duration::from_millis(300), outcomes.recv()).await {
        assert!(!controller.apply(outcome));
    }
    assert!(controller.selected_movie().is_none());
}
