//! Tests for renderer notification ordering.

use gridmark::{Board, Cell, GameSession, IndexError, Marker, MoveResult, Outcome, Renderer};

/// A renderer notification, flattened for assertions.
#[derive(Debug, Clone, PartialEq)]
enum Note {
    Board(Vec<Cell>),
    Turn(Marker),
    Ended(Outcome),
}

/// Records every notification in arrival order.
#[derive(Debug, Default)]
struct Recorder {
    notes: Vec<Note>,
}

impl Recorder {
    fn drain(&mut self) -> Vec<Note> {
        std::mem::take(&mut self.notes)
    }
}

impl Renderer for Recorder {
    fn board_changed(&mut self, board: &Board) {
        self.notes.push(Note::Board(board.cells().to_vec()));
    }

    fn turn_changed(&mut self, marker: Marker) {
        self.notes.push(Note::Turn(marker));
    }

    fn game_ended(&mut self, outcome: Outcome) {
        self.notes.push(Note::Ended(outcome));
    }
}

fn empty_cells() -> Vec<Cell> {
    vec![Cell::Empty; 9]
}

#[test]
fn new_session_announces_board_then_first_turn() {
    let session = GameSession::new(Recorder::default());
    assert_eq!(
        session.renderer().notes,
        vec![Note::Board(empty_cells()), Note::Turn(Marker::X)]
    );
}

#[test]
fn continued_move_notifies_board_then_turn() {
    let mut session = GameSession::new(Recorder::default());
    session.renderer_mut().drain();

    assert_eq!(session.attempt_move(4).unwrap(), MoveResult::Continued);

    let notes = session.renderer_mut().drain();
    assert_eq!(notes.len(), 2);
    let mut expected = empty_cells();
    expected[4] = Cell::Occupied(Marker::X);
    assert_eq!(notes[0], Note::Board(expected));
    assert_eq!(notes[1], Note::Turn(Marker::O));
}

#[test]
fn winning_move_notifies_board_then_game_ended() {
    let mut session = GameSession::new(Recorder::default());
    for index in [0, 1, 3, 4] {
        session.attempt_move(index).unwrap();
    }
    session.renderer_mut().drain();

    assert_eq!(session.attempt_move(6).unwrap(), MoveResult::Won(Marker::X));

    let notes = session.renderer_mut().drain();
    assert_eq!(notes.len(), 2);
    assert!(matches!(notes[0], Note::Board(_)));
    assert_eq!(notes[1], Note::Ended(Outcome::Won(Marker::X)));
}

#[test]
fn tie_notifies_game_ended_with_tied() {
    let mut session = GameSession::new(Recorder::default());
    for index in [0, 2, 1, 4, 5, 3, 6, 7] {
        session.attempt_move(index).unwrap();
    }
    session.renderer_mut().drain();

    assert_eq!(session.attempt_move(8).unwrap(), MoveResult::Tied);

    let notes = session.renderer_mut().drain();
    assert_eq!(notes.len(), 2);
    assert!(matches!(notes[0], Note::Board(_)));
    assert_eq!(notes[1], Note::Ended(Outcome::Tied));
}

#[test]
fn rejected_move_sends_no_notifications() {
    let mut session = GameSession::new(Recorder::default());
    session.attempt_move(0).unwrap();
    session.renderer_mut().drain();

    assert_eq!(session.attempt_move(0).unwrap(), MoveResult::Rejected);
    assert!(session.renderer().notes.is_empty());
}

#[test]
fn out_of_range_index_sends_no_notifications() {
    let mut session = GameSession::new(Recorder::default());
    session.renderer_mut().drain();

    assert_eq!(session.attempt_move(42), Err(IndexError { index: 42 }));
    assert!(session.renderer().notes.is_empty());
}

#[test]
fn reset_announces_fresh_board_and_x_to_move() {
    let mut session = GameSession::new(Recorder::default());
    for index in [0, 1, 3, 4, 6] {
        session.attempt_move(index).unwrap();
    }
    session.renderer_mut().drain();

    session.reset();

    assert_eq!(
        session.renderer().notes,
        vec![Note::Board(empty_cells()), Note::Turn(Marker::X)]
    );
    // Moves are accepted again after the reset.
    assert_eq!(session.attempt_move(0).unwrap(), MoveResult::Continued);
}
