//! Terminal UI for playing a match.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tictactoe_core::MatchConfig;
use tracing::{error, info, instrument};

const LOG_FILE: &str = "tictactoe_tui.log";

/// Runs the interactive board until the user quits.
pub fn run(config: MatchConfig) -> Result<()> {
    // Log to a file so output never lands on the alternate screen.
    let log_file = std::fs::File::create(LOG_FILE).context("creating TUI log file")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(crate::env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?config, "Starting TUI");

    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = run_app(&mut terminal, App::new(config));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop failed");
    }
    res
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if let Event::Key(key) = event::read()? {
            // Windows reports releases as well as presses.
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }
    }
    info!("TUI closed");
    Ok(())
}
