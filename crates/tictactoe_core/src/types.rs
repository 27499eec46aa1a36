//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the two marks a side places on the board.
///
/// Marks are abstract so either side can hold either one; they render
/// as `X` (A) and `O` (B).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// First mark, rendered `X`.
    #[strum(serialize = "a", serialize = "x")]
    A,
    /// Second mark, rendered `O`.
    #[strum(serialize = "b", serialize = "o")]
    B,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::A => Mark::B,
            Mark::B => Mark::A,
        }
    }

    /// Symbol used when rendering the mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::A => 'X',
            Mark::B => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl CellState {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            CellState::Empty => None,
            CellState::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }
}

/// 3x3 tic-tac-toe board.
///
/// `Board` is `Copy`: every copy is an independent grid, which is what
/// lets the search explore hypothetical positions without touching the
/// real game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [CellState; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [CellState::Empty; 9],
        }
    }

    /// Builds a board from cells in row-major order.
    pub fn from_cells(cells: [CellState; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> CellState {
        self.cells[pos.to_index()]
    }

    /// Writes a cell in place.
    pub(crate) fn set(&mut self, pos: Position, cell: CellState) {
        self.cells[pos.to_index()] = cell;
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    ///
    /// The receiver is left untouched.
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut next = *self;
        next.set(pos, CellState::Occupied(mark));
        next
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[CellState; 9] {
        &self.cells
    }

    /// Number of cells holding a mark.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their keypad number (1-9).
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    CellState::Empty => (pos + 1).to_string(),
                    CellState::Occupied(mark) => mark.symbol().to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Compact row-major notation: `X`, `O` and `-` for empty.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in &self.cells {
            let c = match cell {
                CellState::Empty => '-',
                CellState::Occupied(mark) => mark.symbol(),
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Error parsing the compact board notation.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Unexpected character {:?} in board notation", _0)]
    UnexpectedChar(char),

    /// The notation did not describe exactly nine cells.
    #[display("Board notation must describe 9 cells, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses notation such as `"XX-/OO-/---"`.
    ///
    /// `X`/`A` and `O`/`B` are marks, `-`, `.` and `_` are empty cells;
    /// whitespace, `/` and `|` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars() {
            let cell = match c.to_ascii_uppercase() {
                'X' | 'A' => CellState::Occupied(Mark::A),
                'O' | 'B' => CellState::Occupied(Mark::B),
                '-' | '.' | '_' => CellState::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(BoardParseError::UnexpectedChar(other)),
            };
            cells.push(cell);
        }

        let cells: [CellState; 9] = cells
            .try_into()
            .map_err(|v: Vec<CellState>| BoardParseError::WrongLength(v.len()))?;
        Ok(Self { cells })
    }
}

/// Classification of a board.
///
/// Derived from the board, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and empty cells remain.
    InProgress,
    /// A mark completed a line.
    Win(Mark),
    /// Board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns true for a win or a draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winning mark if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(mark) => write!(f, "{} wins!", mark),
            Outcome::Draw => write!(f, "It's a tie!"),
        }
    }
}
