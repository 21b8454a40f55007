//! Movie detail pane
//!
//! Right-hand box while a movie is selected. Shows the full record, the
//! rating widget, and for titles already on the watched list the rating
//! given last time.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::app::{App, Focus};
use crate::controller::LoadingState;
use crate::models::MovieDetail;
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Right;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .title(Span::styled(" DETAILS ", Theme::title()))
        .title_bottom(Line::from(vec![
            Span::styled(" Esc ", Theme::keybind()),
            Span::styled("back ", Theme::dimmed()),
        ]));

    let lines = match (app.controller.detail_state(), app.controller.selected_movie()) {
        (LoadingState::Loading, _) => vec![
            Line::from(""),
            Line::from(Span::styled("Loading...", Theme::loading())),
        ],
        (LoadingState::Error(msg), _) => vec![
            Line::from(""),
            Line::from(Span::styled(format!("⛔ {}", msg), Theme::error())),
        ],
        (LoadingState::Idle, Some(movie)) => movie_lines(app, movie),
        (LoadingState::Idle, None) => vec![Line::from(Span::styled(
            "Nothing selected",
            Theme::dimmed(),
        ))],
    };

    let para = Paragraph::new(lines)
        .style(Theme::text())
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(para, area);
}

fn movie_lines<'a>(app: &'a App, movie: &'a MovieDetail) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(movie.title.as_str(), Theme::brand())),
        Line::from(Span::styled(
            format!("{} • {}", movie.released, movie.runtime_label()),
            Theme::dimmed(),
        )),
        Line::from(Span::styled(movie.genre.as_str(), Theme::dimmed())),
        Line::from(vec![
            Span::styled("⭐ ", Theme::star()),
            Span::styled(
                format!("{} IMDb rating", movie.imdb_rating_label()),
                Theme::text(),
            ),
        ]),
        Line::from(""),
    ];

    match app.controller.user_rating_for(&movie.imdb_id) {
        Some(rating) => lines.push(Line::from(vec![
            Span::styled("You rated this movie ", Theme::text()),
            Span::styled(format!("{} ⭐", rating), Theme::star()),
        ])),
        None => {
            lines.push(app.rating.line());
            lines.push(Line::from(vec![
                Span::styled(" ←→ ", Theme::keybind()),
                Span::styled("pick  ", Theme::dimmed()),
                Span::styled(" Enter ", Theme::keybind()),
                Span::styled("add to list  ", Theme::dimmed()),
                Span::styled(" 1-9/0 ", Theme::keybind()),
                Span::styled("rate", Theme::dimmed()),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        movie.plot.as_str(),
        Theme::text().add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(format!("Starring {}", movie.actors)));
    lines.push(Line::from(format!("Directed by {}", movie.director)));
    lines
}
