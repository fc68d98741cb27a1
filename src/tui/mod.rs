// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Marquee-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Marquee and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! The ratatui/crossterm front end behind the board's surface traits: cards
//! write movie snapshots into shared slots the draw pass reads, and user
//! edits are dispatched as reconciliation chains on the current `LocalSet`.

use std::cell::RefCell;
use std::error::Error;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tokio::sync::mpsc;

use crate::api::{CommentDraft, LoopbackApi};
use crate::board::{
    BoardController, BoardOptions, BoardSurface, Completion, DataChange, EntryCard, EntryId,
    SectionKind, SortMode,
};
use crate::model::{Library, Movie};

mod theme;

use theme::BoardTheme;


const POLL_INTERVAL: Duration = Duration::from_millis(15);
const SETTLE_INTERVAL: Duration = Duration::from_millis(5);
const RATING_STEP: f64 = 0.1;

/// The built-in demo collection.
pub fn demo_library() -> Library {
    crate::model::fixtures::demo_library()
}

/// Runs the interactive board until the user quits.
///
/// Must run inside a `tokio::task::LocalSet`; edit reconciliations are
/// spawned locally and resolve between draw passes.
pub async fn run(
    library: Library,
    api: LoopbackApi,
    options: BoardOptions,
) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(library, api, options);
    app.render_initial();

    while !app.should_quit() {
        app.drain_completions();
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
        // Park the runtime between frames: `event::poll` blocks the thread,
        // and a bare yield keeps the scheduler busy without ever driving the
        // timer, leaving latency-bound chains pending.
        tokio::time::sleep(SETTLE_INTERVAL).await;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum CardMode {
    #[default]
    Default,
    Edit,
}

#[derive(Debug, Default)]
pub(crate) struct CardState {
    movie: Option<Movie>,
    mode: CardMode,
}

impl CardState {
    pub(crate) fn movie(&self) -> Option<&Movie> {
        self.movie.as_ref()
    }

    pub(crate) fn mode(&self) -> CardMode {
        self.mode
    }
}

struct TuiCard {
    state: Rc<RefCell<CardState>>,
}

impl EntryCard for TuiCard {
    fn render(&mut self, movie: &Movie) {
        self.state.borrow_mut().movie = Some(movie.clone());
    }

    fn set_default_view(&mut self) {
        self.state.borrow_mut().mode = CardMode::Default;
    }
}

/// Card slots per section plus the show-more control, read by the draw pass.
#[derive(Default)]
pub(crate) struct TuiBoard {
    default: Vec<Rc<RefCell<CardState>>>,
    top_rated: Vec<Rc<RefCell<CardState>>>,
    most_commented: Vec<Rc<RefCell<CardState>>>,
    show_more_visible: bool,
}

impl TuiBoard {
    fn slots(&self, section: SectionKind) -> &[Rc<RefCell<CardState>>] {
        match section {
            SectionKind::Default => &self.default,
            SectionKind::TopRated => &self.top_rated,
            SectionKind::MostCommented => &self.most_commented,
        }
    }

    fn slots_mut(&mut self, section: SectionKind) -> &mut Vec<Rc<RefCell<CardState>>> {
        match section {
            SectionKind::Default => &mut self.default,
            SectionKind::TopRated => &mut self.top_rated,
            SectionKind::MostCommented => &mut self.most_commented,
        }
    }
}

impl BoardSurface for TuiBoard {
    fn create_card(&mut self, section: SectionKind) -> Box<dyn EntryCard> {
        let state = Rc::new(RefCell::new(CardState::default()));
        self.slots_mut(section).push(Rc::clone(&state));
        Box::new(TuiCard { state })
    }

    fn clear_section(&mut self, section: SectionKind) {
        self.slots_mut(section).clear();
    }

    fn set_show_more_visible(&mut self, visible: bool) {
        self.show_more_visible = visible;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AppMode {
    Browse,
    /// Editing the card at `cursor`; the draft accumulates field edits
    /// until the user saves.
    Edit,
    /// Composing a new comment inside edit view.
    Compose,
}

pub(crate) struct App {
    controller: BoardController<LoopbackApi>,
    board: TuiBoard,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    mode: AppMode,
    cursor: usize,
    comment_cursor: usize,
    draft: Option<Movie>,
    compose: String,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(library: Library, api: LoopbackApi, options: BoardOptions) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            controller: BoardController::new(library, std::sync::Arc::new(api), options),
            board: TuiBoard::default(),
            completions_tx,
            completions_rx,
            mode: AppMode::Browse,
            cursor: 0,
            comment_cursor: 0,
            draft: None,
            compose: String::new(),
            status: None,
            should_quit: false,
        }
    }

    pub(crate) fn render_initial(&mut self) {
        self.controller.render_board(&mut self.board);
    }

    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn board(&self) -> &TuiBoard {
        &self.board
    }

    pub(crate) fn controller(&self) -> &BoardController<LoopbackApi> {
        &self.controller
    }

    /// Applies every completion that settled since the last draw. Library
    /// writes happen here, on the main thread of control, never inside the
    /// spawned chains.
    pub(crate) fn drain_completions(&mut self) {
        let mut applied = false;
        while let Ok(completion) = self.completions_rx.try_recv() {
            applied = true;
            if let Err(err) = self.controller.apply_completion(completion) {
                self.status = Some(err.to_string());
            }
        }
        if applied {
            let len = self.edited_comment_count();
            self.comment_cursor = self.comment_cursor.min(len.saturating_sub(1));
        }
    }

    #[cfg(test)]
    pub(crate) fn handle_key_code(&mut self, code: KeyCode) {
        self.handle_key(KeyEvent::new(code, crossterm::event::KeyModifiers::NONE));
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        self.status = None;
        match self.mode {
            AppMode::Browse => self.handle_browse_key(key),
            AppMode::Edit => self.handle_edit_key(key),
            AppMode::Compose => self.handle_compose_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => {
                let len = self.board.default.len();
                if len > 0 && self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            KeyCode::Char('s') => {
                let next = match self.controller.sort_mode() {
                    SortMode::Default => SortMode::Rating,
                    SortMode::Rating => SortMode::Date,
                    SortMode::Date => SortMode::Default,
                };
                self.controller.set_sort_mode(next, &mut self.board);
                self.clamp_cursor();
            }
            KeyCode::Char('m') => {
                if self.board.show_more_visible {
                    self.controller.show_more(&mut self.board);
                }
            }
            KeyCode::Char('e') => self.enter_edit(),
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.leave_edit(),
            KeyCode::Char('+') => self.nudge_rating(RATING_STEP),
            KeyCode::Char('-') => self.nudge_rating(-RATING_STEP),
            KeyCode::Char('w') => self.toggle_flag(|m| m.watchlist = !m.watchlist),
            KeyCode::Char('a') => self.toggle_flag(|m| m.watched = !m.watched),
            KeyCode::Char('f') => self.toggle_flag(|m| m.favorite = !m.favorite),
            KeyCode::Enter => self.commit_movie_update(),
            KeyCode::Char('c') => {
                self.compose.clear();
                self.mode = AppMode::Compose;
            }
            KeyCode::Char('d') => self.delete_selected_comment(),
            KeyCode::Up => self.comment_cursor = self.comment_cursor.saturating_sub(1),
            KeyCode::Down => {
                let len = self.edited_comment_count();
                if len > 0 && self.comment_cursor + 1 < len {
                    self.comment_cursor += 1;
                }
            }
            _ => {}
        }
    }

    fn handle_compose_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.mode = AppMode::Edit,
            KeyCode::Enter => self.commit_comment(),
            KeyCode::Backspace => {
                self.compose.pop();
            }
            KeyCode::Char(ch) => self.compose.push(ch),
            _ => {}
        }
    }

    fn enter_edit(&mut self) {
        let Some((_, movie_id)) = self.selected_entry() else {
            return;
        };
        let Some(movie) = self.controller.library().movie(&movie_id) else {
            return;
        };
        self.draft = Some(movie.clone());

        // At most one card edits at a time, page wide.
        self.controller.notify_view_change();
        if let Some(slot) = self.board.default.get(self.cursor) {
            slot.borrow_mut().mode = CardMode::Edit;
        }
        self.comment_cursor = 0;
        self.mode = AppMode::Edit;
    }

    fn leave_edit(&mut self) {
        self.controller.notify_view_change();
        self.draft = None;
        self.mode = AppMode::Browse;
    }

    fn nudge_rating(&mut self, delta: f64) {
        if let Some(draft) = &mut self.draft {
            draft.rating = (draft.rating + delta).clamp(0.0, 10.0);
        }
    }

    fn toggle_flag(&mut self, toggle: impl FnOnce(&mut Movie)) {
        if let Some(draft) = &mut self.draft {
            toggle(draft);
        }
    }

    fn commit_movie_update(&mut self) {
        let Some((entry_id, _)) = self.selected_entry() else {
            return;
        };
        let Some(draft) = self.draft.clone() else {
            return;
        };
        self.dispatch(entry_id, DataChange::MovieUpdated(draft));
        self.leave_edit();
    }

    fn commit_comment(&mut self) {
        let Some((entry_id, movie_id)) = self.selected_entry() else {
            return;
        };
        let content = self.compose.trim().to_owned();
        if content.is_empty() {
            self.mode = AppMode::Edit;
            return;
        }
        let draft = CommentDraft {
            author: whoami(),
            content,
            created_at_millis: now_millis(),
        };
        self.dispatch(entry_id, DataChange::CommentAdded { movie_id, draft });
        self.compose.clear();
        self.mode = AppMode::Edit;
    }

    fn delete_selected_comment(&mut self) {
        let Some((entry_id, movie_id)) = self.selected_entry() else {
            return;
        };
        let Some(movie) = self.controller.library().movie(&movie_id) else {
            return;
        };
        let Some(comment) = movie.comments.get(self.comment_cursor) else {
            return;
        };
        // The cursor stays put until the backend confirms; a rejected delete
        // leaves the comment (and the selection) exactly where it was.
        let comment_id = comment.comment_id.clone();
        self.dispatch(entry_id, DataChange::CommentDeleted { movie_id, comment_id });
    }

    fn dispatch(&mut self, entry_id: EntryId, change: DataChange) {
        let pending = self.controller.begin_data_change(entry_id, change);
        let tx = self.completions_tx.clone();
        tokio::task::spawn_local(async move {
            if let Some(completion) = pending.await {
                let _ = tx.send(completion);
            }
        });
    }

    fn selected_entry(&self) -> Option<(EntryId, crate::model::MovieId)> {
        self.controller
            .default_entries()
            .nth(self.cursor)
            .map(|(entry_id, movie_id)| (entry_id, movie_id.clone()))
    }

    fn edited_comment_count(&self) -> usize {
        self.selected_entry()
            .and_then(|(_, movie_id)| self.controller.library().movie(&movie_id))
            .map(|m| m.comments.len())
            .unwrap_or(0)
    }

    fn clamp_cursor(&mut self) {
        let len = self.board.default.len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}

fn whoami() -> String {
    std::env::var("USER").unwrap_or_else(|_| "viewer".to_owned())
}

fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_millis() as i64,
        Err(_) => 0,
    }
}

fn movie_line(movie: &Movie) -> String {
    let flags = [
        if movie.watchlist { 'W' } else { '-' },
        if movie.watched { 'A' } else { '-' },
        if movie.favorite { 'F' } else { '-' },
    ];
    let flags: String = flags.iter().collect();
    format!(
        "{:<40} {:>4.1}  [{}]  {} comments",
        movie.title,
        movie.rating,
        flags,
        movie.comment_count()
    )
}

fn section_list<'a>(
    board: &TuiBoard,
    section: SectionKind,
    selected: Option<usize>,
    theme: BoardTheme,
) -> Vec<ListItem<'a>> {
    board
        .slots(section)
        .iter()
        .enumerate()
        .map(|(idx, slot)| {
            let slot = slot.borrow();
            let line = match slot.movie() {
                Some(movie) => movie_line(movie),
                None => String::new(),
            };
            let item = ListItem::new(line);
            if selected == Some(idx) {
                item.style(theme.selection_style())
            } else if slot.mode() == CardMode::Edit {
                item.style(theme.edit_border_style())
            } else {
                item
            }
        })
        .collect()
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let theme = BoardTheme;
    let editing = app.mode != AppMode::Browse;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(if editing { 10 } else { 0 }),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let default_title = format!(
        "All movies (sort: {}){}",
        app.controller().sort_mode().label(),
        if app.board().show_more_visible { "  [m] show more" } else { "" },
    );
    let default_items =
        section_list(app.board(), SectionKind::Default, Some(app.cursor), theme);
    frame.render_widget(
        List::new(default_items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::styled(default_title, theme.section_title_style())),
        ),
        chunks[0],
    );

    let rated_items = section_list(app.board(), SectionKind::TopRated, None, theme);
    frame.render_widget(
        List::new(rated_items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::styled("Top rated", theme.section_title_style())),
        ),
        chunks[1],
    );

    let commented_items = section_list(app.board(), SectionKind::MostCommented, None, theme);
    frame.render_widget(
        List::new(commented_items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::styled("Most commented", theme.section_title_style())),
        ),
        chunks[2],
    );

    if editing {
        draw_edit_panel(frame, app, chunks[3], theme);
    }

    let footer = match (&app.mode, &app.status) {
        (_, Some(status)) => Line::styled(status.clone(), theme.status_style()),
        (AppMode::Browse, None) => Line::styled(
            "↑/↓ select  s sort  m more  e edit  q quit",
            theme.hint_style(),
        ),
        (AppMode::Edit, None) => Line::styled(
            "+/- rating  w/a/f flags  Enter save  c comment  d delete comment  Esc back",
            theme.hint_style(),
        ),
        (AppMode::Compose, None) => {
            Line::styled("type comment  Enter send  Esc cancel", theme.hint_style())
        }
    };
    frame.render_widget(Paragraph::new(footer), chunks[4]);
}

fn draw_edit_panel(frame: &mut Frame<'_>, app: &App, area: Rect, theme: BoardTheme) {
    let Some(draft) = &app.draft else {
        return;
    };

    let mut lines = vec![Line::raw(movie_line(draft))];
    let comments = app
        .selected_entry()
        .and_then(|(_, movie_id)| app.controller().library().movie(&movie_id))
        .map(|m| m.comments.clone())
        .unwrap_or_default();
    for (idx, comment) in comments.iter().enumerate() {
        let line = format!("  {}: {}", comment.author, comment.content);
        if idx == app.comment_cursor && app.mode == AppMode::Edit {
            lines.push(Line::styled(line, theme.selection_style()));
        } else {
            lines.push(Line::raw(line));
        }
    }
    if app.mode == AppMode::Compose {
        lines.push(Line::raw(format!("> {}_", app.compose)));
    }

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Edit: {}", draft.title))
                .border_style(theme.edit_border_style()),
        ),
        area,
    );
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
