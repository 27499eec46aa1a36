//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, move)} apply {Q(before, after)}.

use super::action::{Move, RejectedMove};
use super::invariants::{InvariantSet, MatchInvariants};
use super::{MatchState, Mark};
use derive_more::Display;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), ContractViolation>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ContractViolation>;
}

/// A broken move contract.
///
/// `Rejected` is the only variant a caller can trigger; the others mean
/// the match controller itself is wrong.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ContractViolation {
    /// The move would be refused for a human.
    #[display("Move rejected: {}", _0)]
    Rejected(RejectedMove),

    /// The move carries the wrong mark for this turn.
    #[display("Expected {} to move, got {}", expected, found)]
    WrongMark {
        /// Mark due to move.
        expected: Mark,
        /// Mark on the move.
        found: Mark,
    },

    /// The move did not change exactly one empty cell.
    #[display("Move changed {} cells instead of one", _0)]
    CellCount(usize),

    /// One or more invariants failed after the move.
    #[display("Invariant violation: {}", _0)]
    Invariant(String),
}

impl std::error::Error for ContractViolation {}

impl From<RejectedMove> for ContractViolation {
    fn from(rejected: RejectedMove) -> Self {
        ContractViolation::Rejected(rejected)
    }
}

/// Precondition: The match has not finished.
pub struct MatchInProgress;

impl MatchInProgress {
    /// Fails with [`RejectedMove::MatchFinished`] once an outcome exists.
    pub fn check(state: &MatchState) -> Result<(), RejectedMove> {
        match state.phase().outcome() {
            Some(outcome) => Err(RejectedMove::MatchFinished(outcome)),
            None => Ok(()),
        }
    }
}

/// Precondition: The target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`RejectedMove::CellOccupied`] on a marked cell.
    pub fn check(mov: &Move, state: &MatchState) -> Result<(), RejectedMove> {
        if state.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(RejectedMove::CellOccupied(mov.position))
        }
    }
}

/// Precondition: The move's mark is the one due to play.
pub struct MarkToMove;

impl MarkToMove {
    /// Fails when the move carries the other side's mark.
    pub fn check(mov: &Move, state: &MatchState) -> Result<(), ContractViolation> {
        if mov.mark == state.to_move() {
            Ok(())
        } else {
            Err(ContractViolation::WrongMark {
                expected: state.to_move(),
                found: mov.mark,
            })
        }
    }
}

/// Composite precondition checked for every human move.
pub struct LegalMove;

impl LegalMove {
    /// Validates that a move can be applied.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &MatchState) -> Result<(), RejectedMove> {
        MatchInProgress::check(state)?;
        CellIsEmpty::check(mov, state)?;
        Ok(())
    }
}

/// Contract for applying a move to a match.
///
/// Preconditions:
/// - Match is not finished
/// - Cell is empty
/// - Mark is the one due to move
///
/// Postconditions:
/// - Exactly one more cell is occupied and the history grew by one
/// - All match invariants hold
pub struct MoveContract;

impl Contract<MatchState, Move> for MoveContract {
    fn pre(state: &MatchState, action: &Move) -> Result<(), ContractViolation> {
        LegalMove::check(action, state)?;
        MarkToMove::check(action, state)
    }

    fn post(before: &MatchState, after: &MatchState) -> Result<(), ContractViolation> {
        let changed = before
            .board()
            .cells()
            .iter()
            .zip(after.board().cells())
            .filter(|(b, a)| b != a)
            .count();
        let grew = after.history().len() == before.history().len() + 1;
        if changed != 1 || !grew {
            warn!(changed, grew, "Move changed the wrong number of cells");
            return Err(ContractViolation::CellCount(changed));
        }

        MatchInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            ContractViolation::Invariant(descriptions)
        })
    }
}
