//! Renderer notification wiring.
//!
//! The engine only returns result values; presentation stays decoupled from
//! state transitions. [`GameSession`] is the thin adapter in between: it
//! owns a [`GameEngine`] together with a [`Renderer`] and forwards each
//! state change as the notification sequence a frontend consumes.

use crate::board::{Board, IndexError};
use crate::engine::GameEngine;
use crate::types::{Marker, MoveResult, Outcome};
use tracing::{debug, instrument};

/// Receives state-change notifications from a [`GameSession`].
///
/// Calls arrive synchronously and in order: the board update first, then
/// either a turn update or a game-ended notice, matching the transition
/// just taken. Rejected moves produce no calls.
pub trait Renderer {
    /// The board contents changed.
    fn board_changed(&mut self, board: &Board);

    /// The turn passed to `marker`.
    fn turn_changed(&mut self, marker: Marker);

    /// The game reached a terminal state.
    fn game_ended(&mut self, outcome: Outcome);
}

/// Owns a [`GameEngine`] and a [`Renderer`], keeping the two in step.
#[derive(Debug)]
pub struct GameSession<R> {
    engine: GameEngine,
    renderer: R,
}

impl<R: Renderer> GameSession<R> {
    /// Creates a session over a fresh game and announces the initial state
    /// (board, then X to move).
    pub fn new(renderer: R) -> Self {
        let mut session = Self {
            engine: GameEngine::new(),
            renderer,
        };
        session.announce_board_and_turn();
        session
    }

    /// Attempts a move and notifies the renderer of the resulting change.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `index` is outside 0-8; no notification is
    /// sent.
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, index: usize) -> Result<MoveResult, IndexError> {
        let result = self.engine.attempt_move(index)?;

        match result {
            MoveResult::Rejected => {
                debug!(index, "rejected move, nothing to notify");
            }
            MoveResult::Continued => {
                self.renderer.board_changed(self.engine.state().board());
                self.renderer
                    .turn_changed(self.engine.state().current_marker());
            }
            MoveResult::Won(marker) => {
                self.renderer.board_changed(self.engine.state().board());
                self.renderer.game_ended(Outcome::Won(marker));
            }
            MoveResult::Tied => {
                self.renderer.board_changed(self.engine.state().board());
                self.renderer.game_ended(Outcome::Tied);
            }
        }

        Ok(result)
    }

    /// Starts a new round: empty board, X to move, announced to the renderer.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.engine.reset();
        self.announce_board_and_turn();
    }

    /// Returns the underlying engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the renderer mutably.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    fn announce_board_and_turn(&mut self) {
        self.renderer.board_changed(self.engine.state().board());
        self.renderer
            .turn_changed(self.engine.state().current_marker());
    }
}
