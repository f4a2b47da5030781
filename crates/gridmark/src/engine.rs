//! Turn sequencing and terminal-state detection.

use crate::board::{Board, IndexError};
use crate::types::{Cell, GameStatus, Marker, MoveResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The 8 winning triples, scanned in fixed order.
const TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Marker whose turn it is.
    current_marker: Marker,
    /// Game status.
    status: GameStatus,
}

impl GameState {
    fn new() -> Self {
        Self {
            board: Board::new(),
            current_marker: Marker::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the marker whose turn it is.
    pub fn current_marker(&self) -> Marker {
        self.current_marker
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }
}

/// Tic-tac-toe game engine.
///
/// Owns the [`GameState`] exclusively; `attempt_move` and `reset` are the
/// only mutation paths, so collaborators never observe an intermediate
/// state.
#[derive(Debug, Clone)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns a read-only snapshot of the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Attempts to place the current marker at `index` (0-8).
    ///
    /// Returns [`MoveResult::Rejected`] when the game is already over or the
    /// cell is occupied; neither the board nor the turn changes. A winning
    /// placement does not switch the turn.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `index` is outside 0-8. The game state is
    /// untouched.
    #[instrument(skip(self), fields(marker = %self.state.current_marker))]
    pub fn attempt_move(&mut self, index: usize) -> Result<MoveResult, IndexError> {
        if self.state.status != GameStatus::InProgress {
            debug!(index, "move after game end ignored");
            return Ok(MoveResult::Rejected);
        }

        let marker = self.state.current_marker;
        if !self.state.board.place(index, marker)? {
            debug!(index, "cell occupied, move rejected");
            return Ok(MoveResult::Rejected);
        }

        // The winner scan must see the cell just placed, so it runs on the
        // board after the mutation, never on a snapshot taken before it.
        if let Some(winner) = check_winner(&self.state.board) {
            self.state.status = GameStatus::Won(winner);
            debug!(index, %winner, "winning line completed");
            return Ok(MoveResult::Won(winner));
        }

        if self.state.board.is_full() {
            self.state.status = GameStatus::Tied;
            debug!(index, "board full with no winner");
            return Ok(MoveResult::Tied);
        }

        self.state.current_marker = marker.opponent();
        Ok(MoveResult::Continued)
    }

    /// Restores the initial state: empty board, X to move, in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("resetting game");
        self.state = GameState::new();
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the marker occupying a full triple, if any.
///
/// Scans rows, then columns, then diagonals; the first complete triple wins.
fn check_winner(board: &Board) -> Option<Marker> {
    let cells = board.cells();
    for [a, b, c] in TRIPLES {
        if let Cell::Occupied(marker) = cells[a]
            && cells[b] == Cell::Occupied(marker)
            && cells[c] == Cell::Occupied(marker)
        {
            return Some(marker);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_triple(triple: [usize; 3], marker: Marker) -> Board {
        let mut board = Board::new();
        for index in triple {
            board.place(index, marker).unwrap();
        }
        board
    }

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn detects_every_triple() {
        for triple in TRIPLES {
            let board = board_with_triple(triple, Marker::X);
            assert_eq!(check_winner(&board), Some(Marker::X), "triple {triple:?}");
        }
    }

    #[test]
    fn detects_o_as_winner() {
        let board = board_with_triple([2, 4, 6], Marker::O);
        assert_eq!(check_winner(&board), Some(Marker::O));
    }

    #[test]
    fn mixed_triple_is_not_a_win() {
        let mut board = Board::new();
        board.place(0, Marker::X).unwrap();
        board.place(1, Marker::O).unwrap();
        board.place(2, Marker::X).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn winner_scan_ignores_unrelated_cells() {
        let mut board = board_with_triple([0, 3, 6], Marker::O);
        board.place(4, Marker::X).unwrap();
        board.place(8, Marker::X).unwrap();
        assert_eq!(check_winner(&board), Some(Marker::O));
    }
}
