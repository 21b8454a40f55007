//! Terminal UI components
//!
//! Header with the search box, results on the left, detail or watched list
//! on the right, status bar at the bottom. Keyboard-first throughout.

pub mod detail;
pub mod rating;
pub mod results;
pub mod theme;
pub mod watched;

pub use theme::Theme;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, InputMode};
use crate::controller::{RightPane, SearchPane};

/// Split the screen into header, body and status bar
pub fn main_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Draw one frame
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(Theme::BACKGROUND)), area);

    let (header, body, status) = main_layout(area);
    render_header(frame, header, app);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body);

    results::render(frame, panes[0], app);
    let detail_open = matches!(app.controller.right_pane(), RightPane::Detail(_));
    if detail_open {
        detail::render(frame, panes[1], app);
    } else {
        watched::render(frame, panes[1], app);
    }

    render_status_bar(frame, status, app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16), // Logo
            Constraint::Min(1),     // Search box
            Constraint::Length(22), // Result count
        ])
        .split(area);

    let rounded = || {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border())
    };

    let logo = Paragraph::new(Line::from(vec![
        Span::raw("🍿 "),
        Span::styled("cinetui", Theme::brand()),
    ]))
    .alignment(Alignment::Center)
    .block(rounded());
    frame.render_widget(logo, chunks[0]);

    let editing = app.input_mode == InputMode::Editing;
    let query = app.controller.query();
    let search_text = if editing {
        let split = query
            .char_indices()
            .nth(app.cursor)
            .map(|(i, _)| i)
            .unwrap_or(query.len());
        let (before, after) = query.split_at(split);
        format!("⌕ {}│{}", before, after)
    } else if query.is_empty() {
        "⌕ Search movies... (press /)".to_string()
    } else {
        format!("⌕ {}", query)
    };

    let search_box = Paragraph::new(search_text).style(Theme::input()).block(
        rounded()
            .border_style(if editing {
                Theme::border_focused()
            } else {
                Theme::border()
            })
            .title(Span::styled(" SEARCH ", Theme::title())),
    );
    frame.render_widget(search_box, chunks[1]);

    let count = match app.controller.search_pane() {
        SearchPane::Results(movies) => movies.len(),
        _ => 0,
    };
    let found = Paragraph::new(Line::from(vec![
        Span::styled("Found ", Theme::dimmed()),
        Span::styled(count.to_string(), Theme::stat()),
        Span::styled(" results", Theme::dimmed()),
    ]))
    .alignment(Alignment::Center)
    .block(rounded());
    frame.render_widget(found, chunks[2]);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mode = match app.input_mode {
        InputMode::Normal => Span::styled(" NORMAL ", Theme::highlighted()),
        InputMode::Editing => Span::styled(
            " INSERT ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::STAR),
        ),
    };

    let message = match &app.notice {
        Some(notice) => Span::styled(format!(" {} ", notice), Theme::stat()),
        None => Span::styled(
            " q:quit  /:search  Tab:switch  Enter:open  Esc:back  d:remove ",
            Theme::dimmed(),
        ),
    };

    let status = Paragraph::new(Line::from(vec![mode, Span::raw(" "), message]))
        .style(Theme::status_bar());
    frame.render_widget(status, area);
}
