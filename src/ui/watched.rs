//! Watched list pane with the running summary

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::app::{App, Focus};
use crate::models::{WatchedMovie, WatchedSummary};
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.focus == Focus::Right;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .title(Span::styled(" WATCHED ", Theme::title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    let summary = app.controller.watched_summary();
    frame.render_widget(
        Paragraph::new(summary_lines(&summary)).style(Theme::text()),
        chunks[0],
    );

    let watched = app.controller.watched();
    if watched.is_empty() {
        let empty = Paragraph::new("Rate a movie to add it here")
            .style(Theme::dimmed())
            .alignment(Alignment::Center);
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let cursor = &mut app.watched_list;
    let visible_height = chunks[1].height as usize;
    cursor.set_len(watched.len());
    cursor.scroll_into_view(visible_height);

    let items: Vec<ListItem> = watched
        .iter()
        .enumerate()
        .skip(cursor.offset)
        .take(visible_height)
        .map(|(i, entry)| render_item(entry, focused && i == cursor.selected))
        .collect();

    frame.render_widget(List::new(items), chunks[1]);
}

/// Header block: count and the three averages
pub fn summary_lines(summary: &WatchedSummary) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled("MOVIES YOU WATCHED", Theme::title())),
        Line::from(vec![
            Span::styled("#️⃣ ", Theme::dimmed()),
            Span::styled(format!("{} movies  ", summary.count), Theme::stat()),
            Span::styled("⭐ ", Theme::star()),
            Span::styled(format!("{:.2}  ", summary.avg_imdb_rating), Theme::stat()),
            Span::styled("🌟 ", Theme::star()),
            Span::styled(format!("{:.2}  ", summary.avg_user_rating), Theme::stat()),
            Span::styled("⏳ ", Theme::dimmed()),
            Span::styled(format!("{:.0} min", summary.avg_runtime), Theme::stat()),
        ]),
        Line::from(""),
    ]
}

fn render_item(entry: &WatchedMovie, is_selected: bool) -> ListItem<'static> {
    let movie = &entry.movie;
    let title_style = if is_selected {
        Theme::highlighted()
    } else {
        Theme::text()
    };

    ListItem::new(Line::from(vec![
        Span::styled(if is_selected { "▸ " } else { "  " }, Theme::brand()),
        Span::styled(movie.title.clone(), title_style),
        Span::styled(
            format!("  ⭐ {}", movie.imdb_rating_label()),
            Theme::star(),
        ),
        Span::styled(format!("  🌟 {}", entry.user_rating), Theme::star()),
        Span::styled(format!("  ⏳ {}", movie.runtime_label()), Theme::dimmed()),
    ]))
}
