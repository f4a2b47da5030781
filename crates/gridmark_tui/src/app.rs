//! Application state and key handling.

use crossterm::event::KeyCode;
use gridmark::{Board, GameSession, Marker, MoveResult, Outcome, Renderer};
use tracing::{debug, warn};

use crate::input;

/// Retained view of the game, updated through renderer notifications.
///
/// Holds exactly what gets drawn: cell contents, which turn indicator is
/// lit, and the outcome dialog when one is showing.
#[derive(Debug)]
pub struct Screen {
    board: Board,
    active_marker: Marker,
    dialog: Option<Outcome>,
}

impl Screen {
    fn new() -> Self {
        Self {
            board: Board::new(),
            active_marker: Marker::X,
            dialog: None,
        }
    }

    /// Board as of the last notification.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marker whose turn indicator is lit.
    pub fn active_marker(&self) -> Marker {
        self.active_marker
    }

    /// Outcome dialog contents, if one is showing.
    pub fn dialog(&self) -> Option<Outcome> {
        self.dialog
    }

    fn close_dialog(&mut self) {
        self.dialog = None;
    }
}

impl Renderer for Screen {
    fn board_changed(&mut self, board: &Board) {
        self.board = board.clone();
    }

    fn turn_changed(&mut self, marker: Marker) {
        self.active_marker = marker;
    }

    fn game_ended(&mut self, outcome: Outcome) {
        debug!(?outcome, "showing outcome dialog");
        self.dialog = Some(outcome);
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession<Screen>,
    cursor: usize,
    should_quit: bool,
}

impl App {
    /// Creates the application with a fresh game, cursor on the center cell.
    pub fn new() -> Self {
        Self {
            session: GameSession::new(Screen::new()),
            cursor: 4,
            should_quit: false,
        }
    }

    /// The retained screen view.
    pub fn screen(&self) -> &Screen {
        self.session.renderer()
    }

    /// Currently selected cell index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        if self.screen().dialog().is_some() {
            self.handle_dialog_key(key);
            return;
        }

        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(index) = input::digit_to_index(c) {
                    self.cursor = index;
                    self.play(index);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    // The dialog is modal. Dismissing it starts a new round, same as the
    // restart key.
    fn handle_dialog_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('r') => self.restart(),
            _ => {}
        }
    }

    fn play(&mut self, index: usize) {
        match self.session.attempt_move(index) {
            Ok(MoveResult::Rejected) => debug!(index, "move rejected"),
            Ok(result) => debug!(index, ?result, "move applied"),
            Err(e) => warn!(error = %e, "input produced an invalid index"),
        }
    }

    fn restart(&mut self) {
        debug!("starting new round");
        self.session.renderer_mut().close_dialog();
        self.session.reset();
    }
}
