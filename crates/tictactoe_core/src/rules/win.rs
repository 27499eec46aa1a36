//! Win detection logic for tic-tac-toe.

use super::super::{Board, CellState, Mark, Position};

/// Every winning line, checked in this order: rows top to bottom,
/// columns left to right, then the main and anti diagonals.
///
/// Rows come before columns on purpose: keep this order when porting
/// line checks from elsewhere, since [`check_winner`] reports the first
/// complete line it meets.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first complete line in [`LINES`] order. Boards
/// with two different complete lines cannot arise from legal play, but
/// they still get a deterministic answer.
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell != CellState::Empty && cell == board.get(b) && cell == board.get(c) {
            return cell.mark();
        }
    }

    None
}
