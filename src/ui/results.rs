//! Search results pane
//!
//! Left-hand box. Shows exactly one of: a loading line, an error line, or
//! the candidate list.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::app::{App, Focus, ListState};
use crate::controller::SearchPane;
use crate::models::MovieSummary;
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.focus == Focus::Results;
    let selected_id = app.controller.selected_id().map(str::to_string);

    match app.controller.search_pane() {
        SearchPane::Loading => render_message(
            frame,
            area,
            focused,
            Span::styled("Loading...", Theme::loading()),
        ),
        SearchPane::Error(msg) => render_message(
            frame,
            area,
            focused,
            Span::styled(format!("⛔ {}", msg), Theme::error()),
        ),
        SearchPane::Results([]) => {
            let hint = if app.controller.query().is_empty() {
                "Press / to search for a movie"
            } else {
                "No movies found"
            };
            render_message(frame, area, focused, Span::styled(hint, Theme::dimmed()))
        }
        SearchPane::Results(movies) => render_list(
            frame,
            area,
            focused,
            movies,
            &mut app.results,
            selected_id.as_deref(),
        ),
    }
}

fn block(focused: bool, title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .title(Span::styled(title, Theme::title()))
}

fn render_message(frame: &mut Frame, area: Rect, focused: bool, message: Span<'static>) {
    let para = Paragraph::new(vec![Line::from(""), Line::from(message)])
        .alignment(Alignment::Center)
        .style(Theme::text())
        .block(block(focused, " RESULTS ".to_string()));
    frame.render_widget(para, area);
}

fn render_list(
    frame: &mut Frame,
    area: Rect,
    focused: bool,
    movies: &[MovieSummary],
    cursor: &mut ListState,
    open_id: Option<&str>,
) {
    let visible_height = area.height.saturating_sub(2) as usize;
    cursor.set_len(movies.len());
    cursor.scroll_into_view(visible_height);

    let items: Vec<ListItem> = movies
        .iter()
        .enumerate()
        .skip(cursor.offset)
        .take(visible_height)
        .map(|(i, movie)| {
            render_item(
                movie,
                i == cursor.selected,
                open_id == Some(movie.imdb_id.as_str()),
            )
        })
        .collect();

    let title = format!(" RESULTS ({}/{}) ", cursor.selected + 1, movies.len());
    let list = List::new(items)
        .block(block(focused, title))
        .style(Theme::text());

    frame.render_widget(list, area);
}

/// ▸ Title (Year)
fn render_item(movie: &MovieSummary, is_selected: bool, is_open: bool) -> ListItem<'static> {
    let marker = if is_selected { "▸ " } else { "  " };
    let title_style = if is_selected {
        Theme::highlighted()
    } else {
        Theme::text()
    };

    let mut spans = vec![
        Span::styled(marker, Theme::brand()),
        Span::styled(movie.title.clone(), title_style),
        Span::styled(format!(" ({})", movie.year), Theme::year()),
    ];
    if is_open {
        spans.push(Span::styled(" ●", Theme::brand()));
    }

    ListItem::new(Line::from(spans))
}
