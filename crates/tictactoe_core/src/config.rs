//! Match configuration.

use super::{Difficulty, Mark};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which side takes the first move.
///
/// Defaults to [`StartingPlayer::Human`] so the player moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum StartingPlayer {
    /// The human moves first.
    #[default]
    #[strum(to_string = "Human", serialize = "player")]
    Human,
    /// The computer moves first.
    Computer,
}

impl StartingPlayer {
    /// Toggles between `Human` and `Computer`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }
}

/// Configuration fixed for the lifetime of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct MatchConfig {
    /// Strength of the computer opponent.
    difficulty: Difficulty,

    /// Side that moves first.
    starting_player: StartingPlayer,

    /// Mark placed by the human; the computer gets the other one.
    human_mark: Mark,

    /// Seed for the opponent's random source. `None` seeds from entropy.
    seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(Difficulty::default(), StartingPlayer::default())
    }
}

/// On-disk shape of a config file. Values stay strings until validated.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMatchConfig {
    difficulty: Option<String>,
    starting_player: Option<String>,
    human_mark: Option<String>,
    seed: Option<u64>,
}

impl MatchConfig {
    /// Creates a configuration where the human plays mark A.
    pub fn new(difficulty: Difficulty, starting_player: StartingPlayer) -> Self {
        Self {
            difficulty,
            starting_player,
            human_mark: Mark::A,
            seed: None,
        }
    }

    /// Sets the human's mark.
    pub fn with_human_mark(mut self, mark: Mark) -> Self {
        self.human_mark = mark;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the starting player.
    pub fn with_starting_player(mut self, starting_player: StartingPlayer) -> Self {
        self.starting_player = starting_player;
        self
    }

    /// Mark placed by the computer.
    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    /// Mark placed on the first move of the match.
    pub fn first_mark(&self) -> Mark {
        match self.starting_player {
            StartingPlayer::Human => self.human_mark,
            StartingPlayer::Computer => self.computer_mark(),
        }
    }

    /// Parses a TOML document. Missing keys take their defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawMatchConfig = toml::from_str(content).map_err(|e| {
            ConfigError::new(ConfigErrorKind::Parse(e.to_string()))
        })?;
        debug!(?raw, "Parsed raw config");

        let mut config = Self::default().with_seed(raw.seed);
        if let Some(s) = raw.difficulty {
            config.difficulty = parse_difficulty(&s)?;
        }
        if let Some(s) = raw.starting_player {
            config.starting_player = parse_starting_player(&s)?;
        }
        if let Some(s) = raw.human_mark {
            config.human_mark = parse_mark(&s)?;
        }
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(ConfigErrorKind::Read(e.to_string()))
        })?;

        let config = Self::from_toml_str(&content)?;
        info!(
            difficulty = %config.difficulty,
            starting_player = %config.starting_player,
            human_mark = %config.human_mark,
            "Config loaded successfully"
        );
        Ok(config)
    }
}

/// Parses a difficulty name, failing on anything unsupported.
///
/// The error records the caller's location.
#[track_caller]
pub fn parse_difficulty(s: &str) -> Result<Difficulty, ConfigError> {
    match s.trim().parse() {
        Ok(difficulty) => Ok(difficulty),
        Err(_) => Err(ConfigError::new(ConfigErrorKind::InvalidDifficulty(s.to_string()))),
    }
}

/// Parses a starting player name (`human`/`player` or `computer`).
#[track_caller]
pub fn parse_starting_player(s: &str) -> Result<StartingPlayer, ConfigError> {
    match s.trim().parse() {
        Ok(player) => Ok(player),
        Err(_) => Err(ConfigError::new(ConfigErrorKind::InvalidStartingPlayer(
            s.to_string(),
        ))),
    }
}

/// Parses a mark (`x`/`a` or `o`/`b`).
#[track_caller]
pub fn parse_mark(s: &str) -> Result<Mark, ConfigError> {
    match s.trim().parse() {
        Ok(mark) => Ok(mark),
        Err(_) => Err(ConfigError::new(ConfigErrorKind::InvalidMark(s.to_string()))),
    }
}

/// What went wrong while building a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// Difficulty is not one of `easy` or `hard`.
    #[display("unsupported difficulty {:?}", _0)]
    InvalidDifficulty(String),

    /// Starting player is not one of `human` or `computer`.
    #[display("unsupported starting player {:?}", _0)]
    InvalidStartingPlayer(String),

    /// Mark is not one of `x`, `o`, `a` or `b`.
    #[display("unsupported mark {:?}", _0)]
    InvalidMark(String),

    /// Config file could not be read.
    #[display("failed to read config file: {}", _0)]
    Read(String),

    /// Config file is not valid TOML for this schema.
    #[display("failed to parse config: {}", _0)]
    Parse(String),
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// What went wrong.
    pub kind: ConfigErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
