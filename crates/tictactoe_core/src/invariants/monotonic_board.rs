//! Monotonic board invariant: cells never change once marked.

use super::super::{Board, MatchState};
use super::Invariant;

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must never hit an
/// occupied cell and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<MatchState> for MonotonicBoardInvariant {
    fn holds(state: &MatchState) -> bool {
        let mut reconstructed = Board::new();

        for mov in state.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed = reconstructed.with_mark(mov.position, mov.mark);
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
