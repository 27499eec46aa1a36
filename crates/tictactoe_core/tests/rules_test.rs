//! Property tests for board evaluation over every reachable position.

use std::collections::HashSet;
use tictactoe_core::rules::{LINES, check_winner};
use tictactoe_core::{Board, CellState, Mark, Outcome, Position, candidate_moves, evaluate, is_full};

/// Every board reachable from the empty board with `A` moving first.
fn reachable_boards() -> HashSet<Board> {
    fn walk(board: Board, to_move: Mark, seen: &mut HashSet<Board>) {
        if !seen.insert(board) || evaluate(&board).is_terminal() {
            return;
        }
        for pos in candidate_moves(&board) {
            walk(board.with_mark(pos, to_move), to_move.opponent(), seen);
        }
    }

    let mut seen = HashSet::new();
    walk(Board::new(), Mark::A, &mut seen);
    seen
}

/// All 3^9 fillings of the grid, reachable or not.
fn every_grid() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut n| {
        let mut cells = [CellState::Empty; 9];
        for cell in &mut cells {
            *cell = match n % 3 {
                0 => CellState::Empty,
                1 => CellState::Occupied(Mark::A),
                _ => CellState::Occupied(Mark::B),
            };
            n /= 3;
        }
        Board::from_cells(cells)
    })
}

fn has_line(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == CellState::Occupied(mark)))
}

#[test]
fn test_reachable_count() {
    // Known count of distinct legal tic-tac-toe positions.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_never_two_winners_on_reachable_boards() {
    for board in reachable_boards() {
        assert!(
            !(has_line(&board, Mark::A) && has_line(&board, Mark::B)),
            "Both marks completed a line on {}",
            board
        );
        match evaluate(&board) {
            Outcome::Win(mark) => {
                assert!(has_line(&board, mark));
                assert!(!has_line(&board, mark.opponent()));
            }
            Outcome::Draw => assert!(is_full(&board)),
            Outcome::InProgress => assert!(!is_full(&board)),
        }
    }
}

#[test]
fn test_full_iff_no_candidates() {
    for board in every_grid() {
        assert_eq!(is_full(&board), candidate_moves(&board).is_empty(), "{}", board);
    }
}

#[test]
fn test_candidates_are_row_major_empty_cells() {
    for board in every_grid().step_by(97) {
        let candidates = candidate_moves(&board);
        assert!(candidates.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(candidates.len(), 9 - board.occupied());
        assert!(candidates.iter().all(|pos| board.is_empty(*pos)));
    }
}

#[test]
fn test_win_on_last_cell_is_not_draw() {
    let board: Board = "XOX/OXO/OX-".parse().unwrap();
    let full = board.with_mark(Position::BottomRight, Mark::A);
    assert!(is_full(&full));
    assert_eq!(evaluate(&full), Outcome::Win(Mark::A));
    assert_eq!(check_winner(&full), Some(Mark::A));
}

#[test]
fn test_evaluate_is_idempotent() {
    for board in reachable_boards().into_iter().take(500) {
        assert_eq!(evaluate(&board), evaluate(&board));
    }
}
