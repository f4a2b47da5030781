//! Board state and the occupancy rule.

use crate::types::{Cell, Marker};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Error for a cell index outside the 3x3 grid.
///
/// An out-of-range index is a collaborator bug rather than a player action,
/// so it surfaces as an explicit error instead of a rejected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("cell index {} out of range (expected 0-8)", index)]
pub struct IndexError {
    /// The offending index.
    pub index: usize,
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (index = row * 3 + col).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Clears every cell back to empty.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Returns the cell at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `index` is outside 0-8.
    pub fn get(&self, index: usize) -> Result<Cell, IndexError> {
        self.cells.get(index).copied().ok_or(IndexError { index })
    }

    /// Places `marker` at `index` if the cell is empty.
    ///
    /// Returns `Ok(true)` when the cell was taken, `Ok(false)` when it was
    /// already occupied and the board is left unchanged. Occupied cells are
    /// never overwritten; `reset` is the only other mutation.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `index` is outside 0-8.
    #[instrument]
    pub fn place(&mut self, index: usize, marker: Marker) -> Result<bool, IndexError> {
        if self.get(index)? != Cell::Empty {
            return Ok(false);
        }
        self.cells[index] = Cell::Occupied(marker);
        Ok(true)
    }

    /// Checks if the cell at `index` is empty. Out-of-range counts as not empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Ok(Cell::Empty))
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
