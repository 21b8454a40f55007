//! UI rendering tests
//!
//! Renders the whole screen into a ratatui TestBackend and looks for the
//! text each state is supposed to show.

use cinetui::api::OmdbError;
use cinetui::app::{App, Focus, InputMode};
use cinetui::controller::FetchOutcome;
use cinetui::models::{MovieDetail, MovieSummary, WatchedSummary};
use cinetui::ui::{self, main_layout, rating::StarRating, Theme};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};

fn draw(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn movies() -> Vec<MovieSummary> {
    vec![
        MovieSummary {
            imdb_id: "tt0364569".into(),
            title: "Oldboy".into(),
            year: "2003".into(),
            poster: String::new(),
        },
        MovieSummary {
            imdb_id: "tt10954652".into(),
            title: "Old".into(),
            year: "2021".into(),
            poster: String::new(),
        },
    ]
}

fn oldboy() -> MovieDetail {
    MovieDetail {
        imdb_id: "tt0364569".into(),
        title: "Oldboy".into(),
        year: "2003".into(),
        poster: String::new(),
        runtime: Some(120),
        imdb_rating: Some(8.4),
        genre: "Action, Drama".into(),
        plot: "Imprisoned for fifteen years.".into(),
        actors: "Choi Min-sik".into(),
        director: "Park Chan-wook".into(),
        released: "21 Nov 2003".into(),
    }
}

fn app_with_results() -> App {
    let mut app = App::default();
    let req = app.controller.set_query("old").unwrap();
    app.apply_outcome(FetchOutcome::Search {
        generation: req.generation(),
        result: Ok(movies()),
    });
    app
}

// =============================================================================
// Layout
// =============================================================================

#[test]
fn test_main_layout_regions() {
    let (header, body, status) = main_layout(Rect::new(0, 0, 80, 24));
    assert_eq!(header.height, 3);
    assert_eq!(status.height, 1);
    assert_eq!(status.y, 23);
    assert_eq!(body.height, 20);
}

#[test]
fn test_renders_at_min_and_large_sizes() {
    for (w, h) in [(80, 24), (200, 50)] {
        let mut app = App::default();
        let screen = draw(&mut app, w, h);
        assert!(screen.contains("cinetui"));
        assert!(screen.contains("SEARCH"));
        assert!(screen.contains("WATCHED"));
    }
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = app_with_results();
    draw(&mut app, 10, 4);
}

// =============================================================================
// Search Pane
// =============================================================================

#[test]
fn test_loading_state_renders_only_loader() {
    let mut app = App::default();
    app.controller.set_query("old");
    let screen = draw(&mut app, 100, 24);
    assert!(screen.contains("Loading..."));
    assert!(!screen.contains("Oldboy"));
}

#[test]
fn test_error_state_replaces_results() {
    let mut app = app_with_results();
    let req = app.controller.set_query("oldxx").unwrap();
    app.apply_outcome(FetchOutcome::Search {
        generation: req.generation(),
        result: Err(OmdbError::Api("Movie not found!".into())),
    });

    let screen = draw(&mut app, 100, 24);
    assert!(screen.contains("Movie not found!"));
    assert!(!screen.contains("Oldboy"));
}

#[test]
fn test_results_render_titles_and_count() {
    let mut app = app_with_results();
    let screen = draw(&mut app, 100, 24);
    assert!(screen.contains("Oldboy (2003)"));
    assert!(screen.contains("Old (2021)"));
    assert!(screen.contains("Found 2 results"));
    assert!(screen.contains("RESULTS (1/2)"));
}

#[test]
fn test_search_box_shows_cursor_when_editing() {
    let mut app = App::default();
    app.focus_search();
    app.controller.set_query("old");
    app.cursor = 1;
    assert_eq!(app.input_mode, InputMode::Editing);

    let screen = draw(&mut app, 100, 24);
    assert!(screen.contains("o│ld"));
    assert!(screen.contains("INSERT"));
}

// =============================================================================
// Detail Pane
// =============================================================================

#[test]
fn test_detail_loading_then_loaded() {
    let mut app = app_with_results();
    let req = app.select_highlighted().unwrap();
    assert_eq!(app.focus, Focus::Right);

    let screen = draw(&mut app, 120, 30);
    assert!(screen.contains("DETAILS"));
    assert!(screen.contains("Loading..."));

    app.apply_outcome(FetchOutcome::Detail {
        generation: req.generation(),
        result: Ok(oldboy()),
    });
    let screen = draw(&mut app, 120, 30);
    assert!(screen.contains("21 Nov 2003 • 120 min"));
    assert!(screen.contains("8.4 IMDb rating"));
    assert!(screen.contains("Starring Choi Min-sik"));
    assert!(screen.contains("Directed by Park Chan-wook"));
    assert!(screen.contains("☆"));
}

#[test]
fn test_detail_shows_previous_rating() {
    let mut app = app_with_results();
    let req = app.select_highlighted().unwrap();
    app.apply_outcome(FetchOutcome::Detail {
        generation: req.generation(),
        result: Ok(oldboy()),
    });
    app.controller.rate_movie(9).unwrap();

    let screen = draw(&mut app, 120, 30);
    assert!(screen.contains("You rated this movie 9"));
}

// =============================================================================
// Watched Pane
// =============================================================================

#[test]
fn test_watched_summary_and_entries() {
    let mut app = app_with_results();
    let req = app.select_highlighted().unwrap();
    app.apply_outcome(FetchOutcome::Detail {
        generation: req.generation(),
        result: Ok(oldboy()),
    });
    app.controller.rate_movie(8).unwrap();
    app.controller.close_movie();

    let screen = draw(&mut app, 140, 30);
    assert!(screen.contains("MOVIES YOU WATCHED"));
    assert!(screen.contains("1 movies"));
    assert!(screen.contains("8.40"));
    assert!(screen.contains("8.00"));
    assert!(screen.contains("120 min"));
}

#[test]
fn test_summary_lines_for_empty_list() {
    let lines = cinetui::ui::watched::summary_lines(&WatchedSummary::default());
    let text: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
    assert!(text.contains("0 movies"));
    assert!(text.contains("0.00"));
    assert!(text.contains("0 min"));
}

// =============================================================================
// Widgets and Theme
// =============================================================================

#[test]
fn test_star_rating_line_styles() {
    let mut stars = StarRating::new(10);
    stars.choose(2);
    let line = stars.line();
    assert_eq!(line.spans[0].style, Theme::star());
    assert_eq!(line.spans[5].style, Theme::star_empty());
}

#[test]
fn test_status_bar_shows_notice() {
    let mut app = App::default();
    app.notice = Some("Rated Oldboy 8/10".into());
    let screen = draw(&mut app, 100, 24);
    assert!(screen.contains("Rated Oldboy 8/10"));
}
