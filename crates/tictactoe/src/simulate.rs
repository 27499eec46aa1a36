//! Batch play against a random stand-in human.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tictactoe_core::{
    Difficulty, Match, MatchConfig, Outcome, Phase, StartingPlayer, random_move,
};
use tracing::{debug, info, instrument, warn};

/// Added to the configured seed to seed the stand-in human.
const STAND_IN_SEED_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;

/// Win/loss/draw tallies over a batch of matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Computer strength.
    pub difficulty: Difficulty,
    /// Side that opened each match.
    pub starting_player: StartingPlayer,
    /// Matches played.
    pub games: usize,
    /// Matches the computer won.
    pub computer_wins: usize,
    /// Matches the stand-in won.
    pub human_wins: usize,
    /// Drawn matches.
    pub draws: usize,
}

impl Summary {
    fn record(&mut self, outcome: Outcome, human_won: bool) {
        self.games += 1;
        match outcome {
            Outcome::Draw => self.draws += 1,
            Outcome::Win(_) if human_won => self.human_wins += 1,
            Outcome::Win(_) => self.computer_wins += 1,
            Outcome::InProgress => warn!("Recorded a match that never finished"),
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} games, difficulty {}, {} moves first",
            self.games, self.difficulty, self.starting_player
        )?;
        writeln!(f, "  computer wins: {}", self.computer_wins)?;
        writeln!(f, "  human wins:    {}", self.human_wins)?;
        write!(f, "  draws:         {}", self.draws)
    }
}

/// Plays `games` matches and tallies the results.
///
/// With a seed in `config`, the whole batch is reproducible.
#[instrument(skip(config), fields(difficulty = %config.difficulty()))]
pub fn simulate(config: MatchConfig, games: usize) -> Summary {
    let mut stand_in = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(STAND_IN_SEED_OFFSET)),
        None => StdRng::from_entropy(),
    };
    let mut game = Match::new(config);
    let mut summary = Summary {
        difficulty: *config.difficulty(),
        starting_player: *config.starting_player(),
        ..Summary::default()
    };

    for index in 0..games {
        if index > 0 {
            game.restart();
        }
        let outcome = play_out(&mut game, &mut stand_in);
        let human_won = outcome.winner() == Some(game.human_mark());
        debug!(index, %outcome, "Match complete");
        summary.record(outcome, human_won);
    }

    info!(
        games = summary.games,
        computer_wins = summary.computer_wins,
        human_wins = summary.human_wins,
        draws = summary.draws,
        "Simulation complete"
    );
    summary
}

/// Runs one match to completion with random human moves.
fn play_out<R: Rng>(game: &mut Match, stand_in: &mut R) -> Outcome {
    loop {
        if let Phase::Finished(outcome) = game.phase() {
            return outcome;
        }
        let Some(position) = random_move(game.board(), stand_in) else {
            return game.outcome();
        };
        if let Err(rejected) = game.play(position) {
            warn!(%rejected, "Stand-in move rejected");
            return game.outcome();
        }
    }
}

/// Runs the `simulate` command.
pub fn run(config: MatchConfig, games: usize, json: bool) -> Result<()> {
    let summary = simulate(config, games);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }
    Ok(())
}
