//! Tic-tac-toe game state and decision engine.
//!
//! Pure game logic with no terminal or network I/O:
//!
//! - **Board**: a `Copy` 3x3 grid of [`CellState`]s addressed by [`Position`]
//! - **Rules**: [`evaluate`] classifies a board as in progress, won or drawn
//! - **Moves**: [`candidate_moves`] lists empty cells in row-major order
//! - **Search**: exhaustive minimax with depth-adjusted scores
//! - **Policy**: random play on `Easy`, perfect play on `Hard`
//! - **Controller**: [`Match`] alternates turns between a human and the computer
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Difficulty, Phase, StartingPlayer, new_match};
//!
//! let mut game = new_match(Difficulty::Hard, StartingPlayer::Human);
//! let turn = game.apply_human_move(1, 1)?;
//! assert!(turn.computer.is_some());
//! assert_eq!(game.phase(), Phase::AwaitingHumanMove);
//! # Ok::<(), tictactoe_core::RejectedMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod controller;
mod policy;
mod position;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;
pub mod search;

// Crate-level exports - Domain types
pub use types::{Board, BoardParseError, CellState, Mark, Outcome};

// Crate-level exports - Moves
pub use action::{Move, RejectedMove};
pub use position::{Position, candidate_moves};

// Crate-level exports - Rules
pub use rules::{evaluate, is_full};

// Crate-level exports - Search
pub use search::{ScoredMove, SearchReport, best_move, minimax, optimal_move};

// Crate-level exports - Opponent
pub use policy::{Difficulty, OpponentPolicy, PolicyMisuse, choose_move, random_move};

// Crate-level exports - Configuration
pub use config::{
    ConfigError, ConfigErrorKind, MatchConfig, StartingPlayer, parse_difficulty, parse_mark,
    parse_starting_player,
};

// Crate-level exports - Match controller
pub use controller::{Match, MatchState, Phase, TurnOutcome, new_match};
