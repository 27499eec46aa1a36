//! Computer opponent move selection.

use super::position::candidate_moves;
use super::rules::evaluate;
use super::search::optimal_move;
use super::{Board, Mark, Position};
use derive_more::Display;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How strong the computer opponent plays.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random among the empty cells.
    Easy,
    /// Perfect play via exhaustive minimax.
    #[default]
    Hard,
}

impl Difficulty {
    /// Toggles between `Easy` and `Hard`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Easy => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }
}

/// The opponent was asked to move on a decided board: full, or already
/// won with empty cells left over.
///
/// This is a bug in the caller, never a user-facing failure, so it is
/// raised as a panic message rather than returned.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Opponent policy invoked with no candidate moves on board {}", board)]
pub struct PolicyMisuse {
    /// The offending board.
    pub board: Board,
}

/// Picks a uniformly random empty cell.
///
/// `None` once the board is decided.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    if evaluate(board).is_terminal() {
        return None;
    }
    candidate_moves(board).choose(rng).copied()
}

/// Selects the computer's move for `difficulty`.
///
/// # Panics
///
/// Panics with [`PolicyMisuse`] if the board is full or already won.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    human: Mark,
    computer: Mark,
    rng: &mut R,
) -> Position {
    let chosen = match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Hard => optimal_move(board, human, computer),
    };

    let Some(position) = chosen else {
        panic!("{}", PolicyMisuse { board: *board });
    };

    debug!(%difficulty, ?position, "Opponent chose move");
    position
}

/// A computer opponent with its own random source.
///
/// The generator is only consulted on `Easy`; inject a seeded one for
/// reproducible games.
#[derive(Debug, Clone)]
pub struct OpponentPolicy<R> {
    difficulty: Difficulty,
    rng: R,
}

impl<R: Rng> OpponentPolicy<R> {
    /// Creates a policy for `difficulty` drawing randomness from `rng`.
    pub fn new(difficulty: Difficulty, rng: R) -> Self {
        Self { difficulty, rng }
    }

    /// Returns the configured difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Changes the difficulty, keeping the random source.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Selects a move for `computer` against `human`.
    ///
    /// # Panics
    ///
    /// Panics if the board is full or already won.
    pub fn choose_move(&mut self, board: &Board, human: Mark, computer: Mark) -> Position {
        choose_move(board, self.difficulty, human, computer, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("nightmare".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Easy.to_string(), "Easy");
    }

    #[test]
    fn test_easy_picks_empty_cell() {
        let board: Board = "XOX/O-X/OX-".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let pos = choose_move(&board, Difficulty::Easy, Mark::A, Mark::B, &mut rng);
            assert!(pos == Position::Center || pos == Position::BottomRight);
        }
    }

    #[test]
    fn test_easy_is_reproducible_with_seed() {
        let board = Board::new();
        let mut a = OpponentPolicy::new(Difficulty::Easy, StdRng::seed_from_u64(99));
        let mut b = OpponentPolicy::new(Difficulty::Easy, StdRng::seed_from_u64(99));
        for _ in 0..10 {
            assert_eq!(
                a.choose_move(&board, Mark::A, Mark::B),
                b.choose_move(&board, Mark::A, Mark::B)
            );
        }
    }

    #[test]
    fn test_single_candidate_is_forced() {
        let board: Board = "XOX/OOX/XX-".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for difficulty in [Difficulty::Easy, Difficulty::Hard] {
            let pos = choose_move(&board, difficulty, Mark::A, Mark::B, &mut rng);
            assert_eq!(pos, Position::BottomRight);
        }
    }

    #[test]
    #[should_panic(expected = "no candidate moves")]
    fn test_full_board_panics() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        choose_move(&board, Difficulty::Hard, Mark::A, Mark::B, &mut rng);
    }

    #[test]
    fn test_random_move_none_once_won() {
        let board: Board = "XXX/OO-/---".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_move(&board, &mut rng), None);
    }
}
