//! Exhaustive minimax search.
//!
//! Every candidate move is scored by playing the game out to all terminal
//! positions. Terminal scores are depth-adjusted so the search prefers the
//! fastest win and the slowest loss:
//!
//! - computer wins: `10 - depth`
//! - human wins: `depth - 10`
//! - draw: `0`
//!
//! No pruning or move ordering is applied. A 3x3 board has at most 9! leaf
//! paths, so a full search always completes inline.

use super::position::candidate_moves;
use super::rules::evaluate;
use super::{Board, Mark, Outcome, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Magnitude of a terminal win before the depth adjustment.
pub const WIN_SCORE: i32 = 10;

/// A candidate move together with its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Cell the computer would play.
    pub position: Position,
    /// Minimax value of the position after the move, from the computer's side.
    pub score: i32,
}

/// Full result of searching one position.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchReport {
    /// Selected move, `None` when the board has no empty cell.
    best: Option<ScoredMove>,
    /// Every candidate with its score, in row-major order.
    candidates: Vec<ScoredMove>,
    /// Number of positions visited.
    nodes: u64,
}

/// Search state shared across one recursive descent.
struct Minimax {
    human: Mark,
    computer: Mark,
    nodes: u64,
}

impl Minimax {
    fn new(human: Mark, computer: Mark) -> Self {
        Self {
            human,
            computer,
            nodes: 0,
        }
    }

    fn score(&mut self, board: &Board, depth: i32, maximizing: bool) -> i32 {
        self.nodes += 1;

        match evaluate(board) {
            Outcome::Win(mark) if mark == self.computer => return WIN_SCORE - depth,
            Outcome::Win(_) => return depth - WIN_SCORE,
            Outcome::Draw => return 0,
            Outcome::InProgress => {}
        }

        // Trials run on copies; `board` itself is never written.
        if maximizing {
            let mut best = i32::MIN;
            for pos in candidate_moves(board) {
                let next = board.with_mark(pos, self.computer);
                best = best.max(self.score(&next, depth + 1, false));
            }
            best
        } else {
            let mut best = i32::MAX;
            for pos in candidate_moves(board) {
                let next = board.with_mark(pos, self.human);
                best = best.min(self.score(&next, depth + 1, true));
            }
            best
        }
    }
}

/// Scores `board` by recursive minimax.
///
/// `maximizing` is true when the computer is the side to move in the
/// simulation. `depth` counts plies from the root of the search.
pub fn minimax(board: &Board, depth: i32, maximizing: bool, human: Mark, computer: Mark) -> i32 {
    Minimax::new(human, computer).score(board, depth, maximizing)
}

/// Scores every candidate move for the computer and picks the best.
///
/// Each candidate is placed on a copy of `board` and evaluated from the
/// human's reply at depth 0. The best move is the one with the strictly
/// greatest score; ties keep the earliest move in row-major order.
/// A decided board yields an empty report.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board, human: Mark, computer: Mark) -> SearchReport {
    let outcome = evaluate(board);
    if outcome.is_terminal() {
        debug!(%outcome, "Board already decided, nothing to search");
        return SearchReport {
            best: None,
            candidates: Vec::new(),
            nodes: 0,
        };
    }

    let mut search = Minimax::new(human, computer);
    let mut candidates = Vec::new();
    let mut best: Option<ScoredMove> = None;

    for position in candidate_moves(board) {
        let next = board.with_mark(position, computer);
        let score = search.score(&next, 0, false);
        debug!(
            row = position.row(),
            col = position.col(),
            score,
            board = %next,
            "Scored candidate move"
        );

        let scored = ScoredMove { position, score };
        candidates.push(scored);
        if best.is_none_or(|b| score > b.score) {
            best = Some(scored);
        }
    }

    debug!(best = ?best, nodes = search.nodes, "Search complete");

    SearchReport {
        best,
        candidates,
        nodes: search.nodes,
    }
}

/// Returns the selected move with its score, `None` on a decided board.
pub fn best_move(board: &Board, human: Mark, computer: Mark) -> Option<ScoredMove> {
    *analyze(board, human, computer).best()
}

/// Returns the move a perfect computer player makes.
///
/// `None` when the board is full or already won.
pub fn optimal_move(board: &Board, human: Mark, computer: Mark) -> Option<Position> {
    best_move(board, human, computer).map(|m| m.position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_scores_are_depth_adjusted() {
        let computer_won: Board = "XXX/OO-/---".parse().unwrap();
        assert_eq!(minimax(&computer_won, 0, false, Mark::B, Mark::A), 10);
        assert_eq!(minimax(&computer_won, 3, true, Mark::B, Mark::A), 7);
        assert_eq!(minimax(&computer_won, 2, true, Mark::A, Mark::B), -8);

        let drawn: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(minimax(&drawn, 4, true, Mark::A, Mark::B), 0);
    }

    #[test]
    fn test_empty_board_scores_as_draw() {
        let report = analyze(&Board::new(), Mark::A, Mark::B);
        assert_eq!(report.candidates().len(), 9);
        assert!(report.candidates().iter().all(|m| m.score == 0));
        // All openings tie, so the first in row-major order is kept.
        assert_eq!(
            *report.best(),
            Some(ScoredMove {
                position: Position::TopLeft,
                score: 0
            })
        );
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        let report = analyze(&board, Mark::A, Mark::B);
        assert!(report.best().is_none());
        assert!(report.candidates().is_empty());
        assert_eq!(*report.nodes(), 0);
    }

    #[test]
    fn test_won_board_has_no_move() {
        let board: Board = "XXX/OO-/---".parse().unwrap();
        let report = analyze(&board, Mark::B, Mark::A);
        assert!(report.candidates().is_empty());
        assert_eq!(best_move(&board, Mark::B, Mark::A), None);
        assert_eq!(optimal_move(&board, Mark::A, Mark::B), None);
    }

    #[test]
    fn test_prefers_faster_win() {
        // X (computer) can win now at top-right, or set up later wins elsewhere.
        let board: Board = "XX-/OO-/---".parse().unwrap();
        let best = best_move(&board, Mark::B, Mark::A).unwrap();
        assert_eq!(best.position, Position::TopRight);
        assert_eq!(best.score, WIN_SCORE);
    }
}
