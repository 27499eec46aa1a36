//! Phase consistency invariant: the phase agrees with the board.

use super::super::rules::evaluate;
use super::super::{MatchState, Phase};
use super::Invariant;

/// Invariant: The phase is exactly what the board and turn imply.
///
/// A finished match carries the board's terminal outcome; a live match
/// has a non-terminal board and waits on whichever side holds the mark
/// to move.
pub struct PhaseConsistentInvariant;

impl Invariant<MatchState> for PhaseConsistentInvariant {
    fn holds(state: &MatchState) -> bool {
        let outcome = evaluate(state.board());
        let human = *state.config().human_mark();

        match state.phase() {
            Phase::Finished(recorded) => outcome.is_terminal() && recorded == outcome,
            Phase::AwaitingHumanMove => !outcome.is_terminal() && state.to_move() == human,
            Phase::AwaitingComputerMove => !outcome.is_terminal() && state.to_move() != human,
        }
    }

    fn description() -> &'static str {
        "Phase matches the board outcome and the side to move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, MatchConfig, Move, Outcome, Position};

    #[test]
    fn test_finished_match_holds() {
        let mut state = MatchState::new(MatchConfig::default());
        for (mark, pos) in [
            (Mark::A, Position::TopLeft),
            (Mark::B, Position::Center),
            (Mark::A, Position::TopCenter),
            (Mark::B, Position::BottomLeft),
            (Mark::A, Position::TopRight),
        ] {
            state.apply(Move::new(mark, pos));
        }
        assert_eq!(state.phase(), Phase::Finished(Outcome::Win(Mark::A)));
        assert!(PhaseConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_stale_phase_violates() {
        let mut state = MatchState::new(MatchConfig::default());
        state.apply(Move::new(Mark::A, Position::Center));
        state.phase = Phase::AwaitingHumanMove;
        assert!(!PhaseConsistentInvariant::holds(&state));
    }
}
