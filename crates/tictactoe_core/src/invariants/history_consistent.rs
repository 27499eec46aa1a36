//! History consistency invariant: history length matches occupied cells.

use super::super::MatchState;
use super::Invariant;

/// Invariant: History length equals number of occupied cells.
///
/// Every move in history corresponds to exactly one occupied cell.
pub struct HistoryConsistentInvariant;

impl Invariant<MatchState> for HistoryConsistentInvariant {
    fn holds(state: &MatchState) -> bool {
        state.history().len() == state.board().occupied()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
