//! Game rules for tic-tac-toe.
//!
//! Pure functions that classify a board. Rules are kept apart from board
//! storage so the search, the match controller and the contracts can all
//! share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use super::{Board, Outcome};

/// Classifies a board as in progress, won, or drawn.
///
/// A completed line takes priority over a full board, so a board that is
/// both full and won reports the win.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Win(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
