//! Match controller: turn order between a human and the computer.
//!
//! The controller owns the board and the phase. A human move is applied
//! and, unless it ends the match, the computer answers within the same
//! call, so callers only ever observe `AwaitingHumanMove` or `Finished`.

use super::action::{Move, RejectedMove};
use super::contracts::LegalMove;
#[cfg(debug_assertions)]
use super::contracts::{Contract, MoveContract};
use super::policy::OpponentPolicy;
use super::rules::evaluate;
use super::{Board, CellState, Difficulty, Mark, MatchConfig, Outcome, Position, StartingPlayer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Where a match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human to pick a cell.
    AwaitingHumanMove,
    /// The computer is due to move.
    AwaitingComputerMove,
    /// The match ended. Only holds `Win` or `Draw`.
    Finished(Outcome),
}

impl Phase {
    /// Returns the final outcome once the match is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Phase::Finished(outcome) => Some(*outcome),
            _ => None,
        }
    }

    /// Returns true once the match is over.
    pub fn is_finished(&self) -> bool {
        matches!(self, Phase::Finished(_))
    }
}

/// Board, turn and history of one match.
///
/// Mutated only through [`MatchState::apply`], which the controller calls
/// after validating the move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchState {
    pub(crate) config: MatchConfig,
    pub(crate) board: Board,
    pub(crate) to_move: Mark,
    pub(crate) phase: Phase,
    pub(crate) history: Vec<Move>,
}

impl MatchState {
    /// Fresh state: empty board, starting side to move.
    pub fn new(config: MatchConfig) -> Self {
        let phase = match config.starting_player() {
            StartingPlayer::Human => Phase::AwaitingHumanMove,
            StartingPlayer::Computer => Phase::AwaitingComputerMove,
        };
        Self {
            config,
            board: Board::new(),
            to_move: config.first_mark(),
            phase,
            history: Vec::new(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark due to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the move and advances the phase.
    ///
    /// Unchecked: the caller has already validated the move.
    pub(crate) fn apply(&mut self, mov: Move) {
        self.board.set(mov.position, CellState::Occupied(mov.mark));
        self.history.push(mov);

        let outcome = evaluate(&self.board);
        if outcome.is_terminal() {
            self.phase = Phase::Finished(outcome);
            return;
        }

        self.to_move = mov.mark.opponent();
        self.phase = if self.to_move == *self.config.human_mark() {
            Phase::AwaitingHumanMove
        } else {
            Phase::AwaitingComputerMove
        };
    }
}

/// Report of one accepted human move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// The human's move.
    pub human: Move,
    /// The computer's reply, absent when the human's move ended the match.
    pub computer: Option<Move>,
    /// Final outcome if the match ended during this turn.
    pub outcome: Option<Outcome>,
}

impl TurnOutcome {
    /// Returns true if the match ended during this turn.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }
}

/// One match between a human and the computer opponent.
///
/// Each match owns its board and random source; independent matches share
/// nothing.
#[derive(Debug, Clone)]
pub struct Match<R = StdRng> {
    state: MatchState,
    policy: OpponentPolicy<R>,
}

impl Match<StdRng> {
    /// Starts a match, seeding the opponent from the config or from entropy.
    ///
    /// If the computer starts, its first move has already been played when
    /// this returns.
    pub fn new(config: MatchConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

/// Starts a match with default marks (human plays mark A).
pub fn new_match(difficulty: Difficulty, starting_player: StartingPlayer) -> Match {
    Match::new(MatchConfig::new(difficulty, starting_player))
}

impl<R: Rng> Match<R> {
    /// Starts a match drawing the opponent's randomness from `rng`.
    #[instrument(skip(rng))]
    pub fn with_rng(config: MatchConfig, rng: R) -> Self {
        let mut game = Self {
            state: MatchState::new(config),
            policy: OpponentPolicy::new(*config.difficulty(), rng),
        };
        game.start();
        game
    }

    /// Plays the human's mark at `(row, col)`, then the computer's reply.
    ///
    /// A rejected move leaves the match untouched.
    #[instrument(skip(self), fields(difficulty = %self.difficulty()))]
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<TurnOutcome, RejectedMove> {
        let position =
            Position::from_row_col(row, col).ok_or(RejectedMove::OutOfBounds { row, col })?;
        self.play(position)
    }

    /// Plays the human's mark at `position`, then the computer's reply.
    #[instrument(skip(self))]
    pub fn play(&mut self, position: Position) -> Result<TurnOutcome, RejectedMove> {
        let human = Move::new(*self.state.config.human_mark(), position);
        if let Err(rejected) = LegalMove::check(&human, &self.state) {
            debug!(%rejected, "Human move rejected");
            return Err(rejected);
        }

        self.apply(human);

        let computer = if self.state.phase == Phase::AwaitingComputerMove {
            Some(self.computer_turn())
        } else {
            None
        };

        Ok(TurnOutcome {
            human,
            computer,
            outcome: self.state.phase.outcome(),
        })
    }

    /// Resets the board and replays the opening with the current config.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.start();
    }

    /// Replaces the configuration and restarts.
    ///
    /// The random source carries over.
    #[instrument(skip(self))]
    pub fn restart_with(&mut self, config: MatchConfig) {
        self.state.config = config;
        self.policy.set_difficulty(*config.difficulty());
        self.start();
    }

    fn start(&mut self) {
        self.state = MatchState::new(self.state.config);
        info!(
            difficulty = %self.difficulty(),
            starting_player = %self.state.config.starting_player(),
            human_mark = %self.human_mark(),
            "Match started"
        );

        if self.state.phase == Phase::AwaitingComputerMove {
            // An empty board cannot be terminal after a single move.
            self.computer_turn();
        }
    }

    fn computer_turn(&mut self) -> Move {
        let position = self
            .policy
            .choose_move(&self.state.board, self.human_mark(), self.computer_mark());
        let mov = Move::new(self.computer_mark(), position);
        self.apply(mov);
        mov
    }

    fn apply(&mut self, mov: Move) {
        #[cfg(debug_assertions)]
        let before = {
            if let Err(violation) = MoveContract::pre(&self.state, &mov) {
                panic!("Move precondition failed for {}: {}", mov, violation);
            }
            self.state.clone()
        };

        self.state.apply(mov);
        debug!(%mov, board = %self.state.board, "Move applied");

        #[cfg(debug_assertions)]
        if let Err(violation) = MoveContract::post(&before, &self.state) {
            panic!("Move postcondition failed for {}: {}", mov, violation);
        }

        if let Phase::Finished(outcome) = self.state.phase {
            info!(%outcome, moves = self.state.history.len(), "Match finished");
        }
    }
}

impl<R> Match<R> {
    /// Snapshot of the nine cells in row-major order, for rendering.
    pub fn current_board(&self) -> [CellState; 9] {
        *self.state.board.cells()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Returns the full match state.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Returns the phase.
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Outcome of the current board, recomputed on every call.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.state.board)
    }

    /// Returns the configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.state.config
    }

    /// Returns the difficulty.
    pub fn difficulty(&self) -> Difficulty {
        *self.state.config.difficulty()
    }

    /// Mark placed by the human.
    pub fn human_mark(&self) -> Mark {
        *self.state.config.human_mark()
    }

    /// Mark placed by the computer.
    pub fn computer_mark(&self) -> Mark {
        self.state.config.computer_mark()
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.state.history
    }

    /// Returns the most recent move, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.state.history.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(config: MatchConfig) -> Match {
        Match::with_rng(config, StdRng::seed_from_u64(3))
    }

    #[test]
    fn test_human_first_starts_empty() {
        let game = seeded(MatchConfig::default());
        assert_eq!(game.phase(), Phase::AwaitingHumanMove);
        assert!(game.history().is_empty());
        assert_eq!(game.current_board(), [CellState::Empty; 9]);
    }

    #[test]
    fn test_computer_first_moves_immediately() {
        let game = seeded(MatchConfig::new(Difficulty::Easy, StartingPlayer::Computer));
        assert_eq!(game.phase(), Phase::AwaitingHumanMove);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].mark, Mark::B);
    }

    #[test]
    fn test_rejected_move_has_no_effect() {
        let mut game = seeded(MatchConfig::new(Difficulty::Easy, StartingPlayer::Human));
        let turn = game.apply_human_move(1, 1).unwrap();
        let snapshot = game.state().clone();

        assert_eq!(
            game.apply_human_move(1, 1),
            Err(RejectedMove::CellOccupied(Position::Center))
        );
        let reply = turn.computer.unwrap().position;
        assert_eq!(
            game.play(reply),
            Err(RejectedMove::CellOccupied(reply))
        );
        assert_eq!(
            game.apply_human_move(3, 0),
            Err(RejectedMove::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(game.state(), &snapshot);
    }

    #[test]
    fn test_restart_resets_board() {
        let mut game = seeded(MatchConfig::new(Difficulty::Hard, StartingPlayer::Human));
        game.apply_human_move(0, 0).unwrap();
        assert_eq!(game.history().len(), 2);

        game.restart();
        assert_eq!(game.phase(), Phase::AwaitingHumanMove);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_restart_with_new_config() {
        let mut game = seeded(MatchConfig::new(Difficulty::Easy, StartingPlayer::Human));
        game.apply_human_move(0, 0).unwrap();

        game.restart_with(MatchConfig::new(Difficulty::Hard, StartingPlayer::Computer));
        assert_eq!(game.difficulty(), Difficulty::Hard);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0], Move::new(Mark::B, Position::TopLeft));
    }
}
