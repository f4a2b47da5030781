//! Gridmark - two-player tic-tac-toe core.
//!
//! This library holds the pure game logic: board state, move validation,
//! win/tie detection, and turn sequencing. Presentation is a collaborator,
//! not a concern of the engine.
//!
//! # Architecture
//!
//! - **Board**: the 9-cell grid with occupancy validation
//! - **GameEngine**: turn order, terminal-state detection, move results
//! - **GameSession**: pairs an engine with a [`Renderer`] and forwards each
//!   state change as an ordered notification sequence
//!
//! # Example
//!
//! ```
//! use gridmark::{GameEngine, GameStatus, Marker, MoveResult};
//!
//! # fn main() -> Result<(), gridmark::IndexError> {
//! let mut game = GameEngine::new();
//! assert_eq!(game.attempt_move(4)?, MoveResult::Continued);
//! assert_eq!(game.state().current_marker(), Marker::O);
//!
//! // Occupied cells reject the move without advancing the turn.
//! assert_eq!(game.attempt_move(4)?, MoveResult::Rejected);
//! assert_eq!(game.state().current_marker(), Marker::O);
//!
//! game.reset();
//! assert_eq!(game.state().status(), &GameStatus::InProgress);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod engine;
mod session;
mod types;

// Crate-level exports - Board
pub use board::{Board, IndexError};

// Crate-level exports - Engine
pub use engine::{GameEngine, GameState};

// Crate-level exports - Renderer wiring
pub use session::{GameSession, Renderer};

// Crate-level exports - Domain types
pub use types::{Cell, GameStatus, Marker, MoveResult, Outcome};
