//! First-class invariants for a match.
//!
//! Invariants are logical properties that must hold after every applied
//! move. They are checked as move postconditions in debug builds and can be
//! tested independently.

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;
pub mod phase_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use phase_consistent::PhaseConsistentInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// All match invariants as a composable set.
pub type MatchInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    PhaseConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellState, Mark, MatchConfig, MatchState, Move, Position};

    #[test]
    fn test_invariant_set_holds_for_new_match() {
        let state = MatchState::new(MatchConfig::default());
        assert!(MatchInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut state = MatchState::new(MatchConfig::default());
        state.apply(Move::new(Mark::A, Position::TopLeft));
        state.apply(Move::new(Mark::B, Position::Center));
        state.apply(Move::new(Mark::A, Position::TopRight));
        assert!(MatchInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut state = MatchState::new(MatchConfig::default());
        state.apply(Move::new(Mark::A, Position::Center));
        state.board.set(Position::TopLeft, CellState::Occupied(Mark::B));

        let violations = MatchInvariants::check_all(&state).unwrap_err();
        assert!(violations.len() >= 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let state = MatchState::new(MatchConfig::default());
        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&state).is_ok());
    }
}
