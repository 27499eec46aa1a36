//! Alternating turn invariant: marks alternate, starting with the first side.

use super::super::MatchState;
use super::Invariant;

/// Invariant: Marks alternate turns.
///
/// The first move belongs to the starting side, every later move switches
/// mark, and while the match is live the side to move is the one due next.
pub struct AlternatingTurnInvariant;

impl Invariant<MatchState> for AlternatingTurnInvariant {
    fn holds(state: &MatchState) -> bool {
        let first = state.config().first_mark();
        let history = state.history();

        if let Some(mov) = history.first()
            && mov.mark != first
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        if state.phase().is_finished() {
            return true;
        }

        let expected_next = if history.len() % 2 == 0 {
            first
        } else {
            first.opponent()
        };
        state.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Marks alternate turns, starting with the starting side"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Difficulty, Mark, MatchConfig, Move, Position, StartingPlayer};

    #[test]
    fn test_empty_match_holds() {
        let state = MatchState::new(MatchConfig::default());
        assert!(AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_computer_first_holds() {
        let config = MatchConfig::new(Difficulty::Hard, StartingPlayer::Computer);
        let mut state = MatchState::new(config);
        assert_eq!(state.to_move(), Mark::B);
        state.apply(Move::new(Mark::B, Position::TopLeft));
        assert!(AlternatingTurnInvariant::holds(&state));
        assert_eq!(state.to_move(), Mark::A);
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let mut state = MatchState::new(MatchConfig::default());
        state.apply(Move::new(Mark::A, Position::TopLeft));
        state.history.push(Move::new(Mark::A, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_first_mark_violates() {
        let mut state = MatchState::new(MatchConfig::default());
        state.history.push(Move::new(Mark::B, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
