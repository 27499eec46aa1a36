//! Application state and key handling.

use super::input::move_cursor;
use crossterm::event::KeyCode;
use tictactoe_core::{Match, MatchConfig, Phase, Position, TurnOutcome};
use tracing::{debug, info, instrument};

/// Main application state.
pub struct App {
    game: Match,
    cursor: Position,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates the app and starts the first match.
    pub fn new(config: MatchConfig) -> Self {
        let mut app = Self {
            game: Match::new(config),
            cursor: Position::Center,
            status_message: String::new(),
            should_quit: false,
        };
        app.announce_start();
        app
    }

    /// Gets the current match.
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.game.restart();
                self.announce_start();
            }
            KeyCode::Char('d') => {
                let config = *self.game.config();
                let difficulty = config.difficulty().toggle();
                self.game.restart_with(config.with_difficulty(difficulty));
                self.announce_start();
            }
            KeyCode::Char('f') => {
                let config = *self.game.config();
                let first = config.starting_player().toggle();
                self.game.restart_with(config.with_starting_player(first));
                self.announce_start();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(position) = Position::from_label_or_number(&c.to_string()) {
                    self.cursor = position;
                    self.place(position);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    fn place(&mut self, position: Position) {
        match self.game.play(position) {
            Ok(turn) => {
                debug!(?turn, "Turn applied");
                self.status_message = self.describe(&turn);
            }
            Err(rejected) => {
                debug!(%rejected, "Move rejected");
                self.status_message = match self.game.phase() {
                    Phase::Finished(outcome) => restart_prompt(&outcome.to_string()),
                    _ => format!("{}. Pick another cell.", rejected),
                };
            }
        }
    }

    fn describe(&self, turn: &TurnOutcome) -> String {
        if let Some(outcome) = turn.outcome {
            return restart_prompt(&outcome.to_string());
        }
        match turn.computer {
            Some(reply) => format!(
                "Computer played {}. Your move ({}).",
                reply.position.label(),
                self.game.human_mark()
            ),
            None => self.your_move(),
        }
    }

    fn announce_start(&mut self) {
        self.status_message = match self.game.last_move() {
            Some(opening) => format!(
                "Computer opened at {}. Your move ({}).",
                opening.position.label(),
                self.game.human_mark()
            ),
            None => self.your_move(),
        };
    }

    fn your_move(&self) -> String {
        format!("Your move ({}).", self.game.human_mark())
    }
}

fn restart_prompt(result: &str) -> String {
    format!("{} Press 'r' to restart or 'q' to quit.", result)
}
