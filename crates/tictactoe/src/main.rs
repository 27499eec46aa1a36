//! tictactoe - play against a minimax computer opponent.
//!
//! Commands:
//! - `play`: interactive terminal board
//! - `simulate`: batch matches against a random stand-in
//! - `analyze`: score every computer move on a given board

#![warn(missing_docs)]

mod analyze;
mod cli;
mod simulate;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { game } => {
            let config = game.resolve()?;
            tui::run(config)
        }
        Command::Simulate { game, games, json } => {
            init_stderr_tracing();
            let config = game.resolve()?;
            info!(games, "Starting simulation");
            simulate::run(config, games, json)
        }
        Command::Analyze {
            board,
            computer,
            json,
        } => {
            init_stderr_tracing();
            analyze::run(&board, computer, json)
        }
    }
}

/// Filter from `RUST_LOG`, falling back to info level.
pub(crate) fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tictactoe_core=info"))
}

/// Logs to stderr so stdout stays clean for reports.
fn init_stderr_tracing() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
