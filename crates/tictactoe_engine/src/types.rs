//! Core domain types for tic-tac-toe.

use crate::error::BoardParseError;
use crate::invariants::{BoardInvariants, InvariantSet};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// Player X (always moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked by X.
    X,
    /// Cell marked by O.
    O,
}

impl Cell {
    /// Returns the player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A move: zero-based (row, col) coordinates.
///
/// Coordinates are not range-checked on construction; `apply_move`
/// rejects anything outside `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Row index (0 = top).
    pub row: usize,
    /// Column index (0 = left).
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true if both coordinates are on the board.
    pub fn in_bounds(&self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Returns true if this move targets one of the four corners.
    pub fn is_corner(&self) -> bool {
        (self.row == 0 || self.row == SIZE - 1) && (self.col == 0 || self.col == SIZE - 1)
    }

    /// Returns true if this move targets the center cell.
    pub fn is_center(&self) -> bool {
        self.row == 1 && self.col == 1
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Game outcome derived from board contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// X owns a complete line.
    XWins,
    /// O owns a complete line.
    OWins,
    /// Board is full with no winner.
    Draw,
    /// Game is not over.
    InProgress,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::XWins => write!(f, "X wins"),
            Outcome::OWins => write!(f, "O wins"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::InProgress => write!(f, "In progress"),
        }
    }
}

/// One of the eight winning lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Line {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    CenterColumn,
    /// Column 2.
    RightColumn,
    /// (0,0) to (2,2).
    MainDiagonal,
    /// (0,2) to (2,0).
    AntiDiagonal,
}

impl Line {
    /// The three cells making up this line.
    pub fn cells(self) -> [Move; 3] {
        let m = Move::new;
        match self {
            Line::TopRow => [m(0, 0), m(0, 1), m(0, 2)],
            Line::MiddleRow => [m(1, 0), m(1, 1), m(1, 2)],
            Line::BottomRow => [m(2, 0), m(2, 1), m(2, 2)],
            Line::LeftColumn => [m(0, 0), m(1, 0), m(2, 0)],
            Line::CenterColumn => [m(0, 1), m(1, 1), m(2, 1)],
            Line::RightColumn => [m(0, 2), m(1, 2), m(2, 2)],
            Line::MainDiagonal => [m(0, 0), m(1, 1), m(2, 2)],
            Line::AntiDiagonal => [m(0, 2), m(1, 1), m(2, 0)],
        }
    }

    /// Returns the player owning all three cells of this line on `board`.
    pub fn owner(self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.cells().map(|mv| board.cell_at(mv));
        if a == b && b == c { a.owner() } else { None }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every transformation returns a new board,
/// nothing mutates one in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Builds a board from rows without validation.
    pub fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell at (row, col), or `None` when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Counts cells equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|c| **c == cell).count()
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        SIZE * SIZE - self.count(Cell::Empty)
    }

    /// Iterates over every coordinate paired with its cell, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (Move::new(row, col), *cell))
        })
    }

    /// Cell at an in-bounds move.
    pub(crate) fn cell_at(&self, mv: Move) -> Cell {
        self.cells[mv.row][mv.col]
    }

    /// Returns a copy with `mv` set to `cell`. Caller guarantees bounds.
    pub(crate) fn with(&self, mv: Move, cell: Cell) -> Self {
        let mut next = *self;
        next.cells[mv.row][mv.col] = cell;
        next
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            write!(f, "{}", line.join("|"))?;
            if r < SIZE - 1 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cell characters: `X`, `O`, and `.` or `_` for empty.
    ///
    /// Whitespace and the separators `/ | - +` are ignored. The parsed
    /// board must be reachable from the initial state.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(SIZE * SIZE);
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' | '_' => Cell::Empty,
                c if c.is_whitespace() => continue,
                '/' | '|' | '-' | '+' => continue,
                other => {
                    return Err(BoardParseError::new(format!(
                        "unexpected character {:?}",
                        other
                    )));
                }
            };
            cells.push(cell);
        }

        if cells.len() != SIZE * SIZE {
            return Err(BoardParseError::new(format!(
                "expected {} cells, found {}",
                SIZE * SIZE,
                cells.len()
            )));
        }

        let mut rows = [[Cell::Empty; SIZE]; SIZE];
        for (i, cell) in cells.into_iter().enumerate() {
            rows[i / SIZE][i % SIZE] = cell;
        }
        let board = Board::from_rows(rows);

        BoardInvariants::check_all(&board).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            BoardParseError::new(format!("unreachable board: {}", descriptions))
        })?;

        Ok(board)
    }
}
