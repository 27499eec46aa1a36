//! Command-line interface for tictactoe.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::{
    Difficulty, Mark, MatchConfig, StartingPlayer, parse_difficulty, parse_mark,
    parse_starting_player,
};
use tracing::{debug, instrument};

/// Tic-tac-toe against a minimax computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against an unbeatable computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        #[command(flatten)]
        game: MatchArgs,
    },

    /// Play many matches against a random stand-in and report tallies
    Simulate {
        #[command(flatten)]
        game: MatchArgs,

        /// Number of matches to play
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score every move for the computer on a given board
    Analyze {
        /// Board in row-major notation, e.g. "XX-/OO-/---"
        #[arg(short, long)]
        board: String,

        /// Mark the computer plays (x/a or o/b)
        #[arg(short, long, value_parser = parse_mark)]
        computer: Mark,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Match settings shared by `play` and `simulate`.
///
/// Flags override values read from `--config`.
#[derive(Args, Debug, Clone)]
pub struct MatchArgs {
    /// Computer strength (easy or hard)
    #[arg(short, long, value_parser = parse_difficulty)]
    pub difficulty: Option<Difficulty>,

    /// Who moves first (human or computer)
    #[arg(short, long, value_parser = parse_starting_player)]
    pub first: Option<StartingPlayer>,

    /// Mark the human plays (x or o)
    #[arg(short, long, value_parser = parse_mark)]
    pub mark: Option<Mark>,

    /// Seed for the computer's random choices
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Path to a TOML match config
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl MatchArgs {
    /// Builds the match configuration: defaults, then file, then flags.
    #[instrument(skip(self))]
    pub fn resolve(&self) -> Result<MatchConfig> {
        let mut config = match &self.config {
            Some(path) => MatchConfig::from_file(path)
                .with_context(|| format!("loading match config from {}", path.display()))?,
            None => MatchConfig::default(),
        };

        if let Some(difficulty) = self.difficulty {
            config = config.with_difficulty(difficulty);
        }
        if let Some(first) = self.first {
            config = config.with_starting_player(first);
        }
        if let Some(mark) = self.mark {
            config = config.with_human_mark(mark);
        }
        if self.seed.is_some() {
            config = config.with_seed(self.seed);
        }

        debug!(?config, "Resolved match config");
        Ok(config)
    }
}
