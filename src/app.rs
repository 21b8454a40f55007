//! TUI application state
//!
//! Wraps the [`Controller`] with the bits only a terminal front end needs:
//! input mode, pane focus, list cursors and the rating widget. Key presses
//! are translated into controller transitions; any network work they cause
//! is handed back to the event loop as a [`FetchRequest`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::controller::{Controller, FetchOutcome, FetchRequest, RightPane, SearchPane};
use crate::ui::rating::StarRating;

// =============================================================================
// Input Mode / Focus
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Search box focused
    Editing,
}

/// Which box receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Results,
    /// Detail view or watched list, whichever the right box shows
    Right,
}

// =============================================================================
// List Cursor
// =============================================================================

/// Selection state for list views
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub selected: usize,
    /// Scroll offset for viewport
    pub offset: usize,
    pub len: usize,
}

impl ListState {
    pub fn new(len: usize) -> Self {
        Self {
            selected: 0,
            offset: 0,
            len,
        }
    }

    pub fn up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            if self.selected < self.offset {
                self.offset = self.selected;
            }
        }
    }

    pub fn down(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_sub(page_size);
        if self.selected < self.offset {
            self.offset = self.selected;
        }
    }

    pub fn page_down(&mut self, page_size: usize) {
        if self.len > 0 {
            self.selected = (self.selected + page_size).min(self.len - 1);
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    pub fn last(&mut self) {
        if self.len > 0 {
            self.selected = self.len - 1;
        }
    }

    /// Update offset to keep selected item visible
    pub fn scroll_into_view(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible_height {
            self.offset = self.selected + 1 - visible_height;
        }
    }

    /// New list contents: back to the top
    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }

    /// Shrink or grow, clamping the cursor
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
            self.offset = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

// =============================================================================
// App
// =============================================================================

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub input_mode: InputMode,
    pub focus: Focus,
    /// Cursor in the search box, in chars
    pub cursor: usize,
    pub results: ListState,
    pub watched_list: ListState,
    pub rating: StarRating,
    /// One-line feedback shown in the status bar until the next key
    pub notice: Option<String>,
    pub controller: Controller,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Controller::default())
    }
}

impl App {
    pub fn new(controller: Controller) -> Self {
        let max = controller.max_rating();
        Self {
            running: true,
            input_mode: InputMode::Normal,
            focus: Focus::Results,
            cursor: 0,
            results: ListState::default(),
            watched_list: ListState::default(),
            rating: StarRating::new(max),
            notice: None,
            controller,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn focus_search(&mut self) {
        self.input_mode = InputMode::Editing;
        self.focus = Focus::Results;
        self.cursor = self.controller.query().chars().count();
    }

    /// Feed a finished fetch back in and resync cursors
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        let is_search = matches!(outcome, FetchOutcome::Search { .. });
        if !self.controller.apply(outcome) || !is_search {
            return;
        }
        // An error hides the list; leave the cursor where it was
        if let SearchPane::Results(movies) = self.controller.search_pane() {
            self.results.reset(movies.len());
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle a key press; returns network work to dispatch, if any
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FetchRequest> {
        self.notice = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return None;
        }

        match self.input_mode {
            InputMode::Editing => self.handle_editing_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Option<FetchRequest> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Down | KeyCode::Tab => {
                self.input_mode = InputMode::Normal;
                None
            }
            KeyCode::Char(c) => {
                let mut query: Vec<char> = self.controller.query().chars().collect();
                let at = self.cursor.min(query.len());
                query.insert(at, c);
                self.cursor = at + 1;
                self.set_query(query.into_iter().collect())
            }
            KeyCode::Backspace => {
                let mut query: Vec<char> = self.controller.query().chars().collect();
                if self.cursor == 0 || self.cursor > query.len() {
                    return None;
                }
                self.cursor -= 1;
                query.remove(self.cursor);
                self.set_query(query.into_iter().collect())
            }
            KeyCode::Delete => {
                let mut query: Vec<char> = self.controller.query().chars().collect();
                if self.cursor >= query.len() {
                    return None;
                }
                query.remove(self.cursor);
                self.set_query(query.into_iter().collect())
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.controller.query().chars().count());
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = self.controller.query().chars().count();
                None
            }
            _ => None,
        }
    }

    fn set_query(&mut self, query: String) -> Option<FetchRequest> {
        let request = self.controller.set_query(query);
        if request.is_none() {
            // Cleared synchronously, nothing will arrive to reset the list
            self.results.reset(0);
        }
        request
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<FetchRequest> {
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                return None;
            }
            KeyCode::Char('/') | KeyCode::Char('s') => {
                self.focus_search();
                return None;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Results => Focus::Right,
                    Focus::Right => Focus::Results,
                };
                return None;
            }
            KeyCode::Esc => {
                if self.controller.selected_id().is_some() {
                    self.close_movie();
                }
                return None;
            }
            _ => {}
        }

        match self.focus {
            Focus::Results => self.handle_results_key(key),
            Focus::Right => {
                if matches!(self.controller.right_pane(), RightPane::Detail(_)) {
                    self.handle_detail_key(key);
                } else {
                    self.handle_watched_key(key);
                }
                None
            }
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) -> Option<FetchRequest> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.results.up(),
            KeyCode::Down | KeyCode::Char('j') => self.results.down(),
            KeyCode::PageUp => self.results.page_up(10),
            KeyCode::PageDown => self.results.page_down(10),
            KeyCode::Home => self.results.first(),
            KeyCode::End => self.results.last(),
            KeyCode::Enter => return self.select_highlighted(),
            _ => {}
        }
        None
    }

    /// Toggle the highlighted candidate in the detail view.
    /// Nothing happens while the loader or an error covers the list.
    pub fn select_highlighted(&mut self) -> Option<FetchRequest> {
        let imdb_id = match self.controller.search_pane() {
            SearchPane::Results(movies) => movies.get(self.results.selected)?.imdb_id.clone(),
            SearchPane::Loading | SearchPane::Error(_) => return None,
        };

        let request = self.controller.select_movie(&imdb_id);
        self.rating.reset();
        self.focus = if request.is_some() {
            Focus::Right
        } else {
            Focus::Results
        };
        request
    }

    fn close_movie(&mut self) {
        self.controller.close_movie();
        self.rating.reset();
        self.focus = Focus::Results;
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Backspace {
            self.close_movie();
            return;
        }

        // Rated titles show the earlier rating instead of the stars
        let already_rated = self
            .controller
            .selected_id()
            .is_some_and(|id| self.controller.is_watched(id));
        if already_rated {
            return;
        }

        let committed = match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.rating.left();
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.rating.right();
                None
            }
            KeyCode::Enter => self.rating.commit(),
            KeyCode::Char(c) => StarRating::value_for_digit(c).and_then(|v| self.rating.choose(v)),
            _ => None,
        };

        if let Some(value) = committed {
            self.rate(value);
        }
    }

    fn rate(&mut self, value: u8) {
        let notice = match self.controller.rate_movie(value) {
            Ok(entry) => format!(
                "Rated {} {}/{}",
                entry.movie.title,
                value,
                self.rating.max()
            ),
            Err(e) => {
                self.rating.reset();
                e.to_string()
            }
        };
        debug!(%notice, "rate");
        self.notice = Some(notice);
        self.watched_list.set_len(self.controller.watched().len());
    }

    fn handle_watched_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.watched_list.up(),
            KeyCode::Down | KeyCode::Char('j') => self.watched_list.down(),
            KeyCode::Char('d') | KeyCode::Delete => {
                let imdb_id = self
                    .controller
                    .watched()
                    .get(self.watched_list.selected)
                    .map(|w| w.imdb_id().to_string());
                if let Some(id) = imdb_id {
                    let removed = self.controller.remove_watched(&id);
                    self.notice = Some(format!("Removed {} from watched", id));
                    debug!(imdb_id = %id, removed, "removed watched");
                    self.watched_list.set_len(self.controller.watched().len());
                }
            }
            _ => {}
        }
    }
}
