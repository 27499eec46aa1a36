//! Full-board detection for tic-tac-toe.
//!
//! A draw is a full board without a completed line; [`super::evaluate`]
//! checks the lines first.

use super::super::{Board, CellState};

/// Checks if the board is full (no empty cell remains).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != CellState::Empty)
}
