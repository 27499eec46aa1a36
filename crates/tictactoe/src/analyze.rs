//! The `analyze` command: score every computer move on a board.

use anyhow::{Context, Result};
use tictactoe_core::search::analyze;
use tictactoe_core::{Board, Mark, evaluate};
use tracing::{info, instrument};

/// Parses `notation`, searches it for `computer` and prints the report.
#[instrument]
pub fn run(notation: &str, computer: Mark, json: bool) -> Result<()> {
    let board: Board = notation
        .parse()
        .with_context(|| format!("parsing board {:?}", notation))?;

    let outcome = evaluate(&board);
    if outcome.is_terminal() {
        info!(%outcome, "Board is already decided");
        println!("{}\n\n{}", board.display(), outcome);
        return Ok(());
    }

    let report = analyze(&board, computer.opponent(), computer);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n", board.display());
    for candidate in report.candidates() {
        let (row, col) = candidate.position.row_col();
        println!("Move: {},{} Score: {}", row, col, candidate.score);
    }
    if let Some(best) = report.best() {
        println!(
            "\n{} plays {} (score {}, {} positions searched)",
            computer,
            best.position,
            best.score,
            report.nodes()
        );
    }
    Ok(())
}
