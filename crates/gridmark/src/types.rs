//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Marker {
    /// The X marker (moves first).
    X,
    /// The O marker (moves second).
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a marker.
    Occupied(Marker),
}

/// Current status of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Marker),
    /// Game ended with a full board and no winner.
    Tied,
}

impl GameStatus {
    /// Returns the final outcome, if the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(marker) => Some(Outcome::Won(*marker)),
            GameStatus::Tied => Some(Outcome::Tied),
        }
    }
}

/// Final outcome of a finished game.
///
/// The terminal subset of [`GameStatus`]: a renderer receiving a game-ended
/// notice can never be handed an in-progress state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The given marker completed a winning line.
    Won(Marker),
    /// The board filled with no winning line.
    Tied,
}

/// Result of a move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The move was ignored: cell occupied or game already over.
    Rejected,
    /// The move was applied and the turn passed to the other marker.
    Continued,
    /// The move completed a winning line for the given marker.
    Won(Marker),
    /// The move filled the board with no winning line.
    Tied,
}

impl MoveResult {
    /// Returns the outcome, if this move ended the game.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            MoveResult::Won(marker) => Some(Outcome::Won(*marker)),
            MoveResult::Tied => Some(Outcome::Tied),
            MoveResult::Rejected | MoveResult::Continued => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_flips_marker() {
        assert_eq!(Marker::X.opponent(), Marker::O);
        assert_eq!(Marker::O.opponent(), Marker::X);
    }

    #[test]
    fn marker_displays_as_symbol() {
        assert_eq!(Marker::X.to_string(), "X");
        assert_eq!(Marker::O.to_string(), "O");
    }

    #[test]
    fn status_outcome_is_terminal_only() {
        assert_eq!(GameStatus::InProgress.outcome(), None);
        assert_eq!(
            GameStatus::Won(Marker::O).outcome(),
            Some(Outcome::Won(Marker::O))
        );
        assert_eq!(GameStatus::Tied.outcome(), Some(Outcome::Tied));
    }

    #[test]
    fn move_result_outcome_is_terminal_only() {
        assert_eq!(MoveResult::Rejected.outcome(), None);
        assert_eq!(MoveResult::Continued.outcome(), None);
        assert_eq!(
            MoveResult::Won(Marker::X).outcome(),
            Some(Outcome::Won(Marker::X))
        );
        assert_eq!(MoveResult::Tied.outcome(), Some(Outcome::Tied));
    }

    #[test]
    fn status_serializes_with_winner() {
        let json = serde_json::to_string(&GameStatus::Won(Marker::X)).unwrap();
        assert_eq!(json, r#"{"Won":"X"}"#);
        let status: GameStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, GameStatus::Won(Marker::X));
    }
}
