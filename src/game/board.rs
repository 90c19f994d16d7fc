use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BoardShapeError, GameError};

pub const SIZE: usize = 5;
pub const CENTER: usize = SIZE / 2;
pub const FREE_SPACE_TEXT: &str = "Free Space";
/// Entries a player must submit before the board is ready to play.
pub const ENTRIES_TO_START: usize = SIZE * SIZE - 1;

/// A filled square: the player's entry and whether it has been marked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub text: String,
    pub selected: bool,
}

impl Square {
    pub fn new(text: impl Into<String>) -> Self {
        Square {
            text: text.into(),
            selected: false,
        }
    }

    fn free_space() -> Self {
        Square {
            text: FREE_SPACE_TEXT.to_string(),
            selected: true,
        }
    }
}

/// One grid position; `None` is an empty square.
pub type Cell = Option<Square>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    pub const fn is_free_space(self) -> bool {
        self.row == CENTER && self.col == CENTER
    }

    pub const fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// All 25 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Position { row, col }))
    }
}

/// One of the twelve five-square lines that can complete a bingo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Rows, then columns, then the two diagonals.
    pub fn all() -> impl Iterator<Item = Line> {
        (0..SIZE)
            .map(Line::Row)
            .chain((0..SIZE).map(Line::Column))
            .chain([Line::MainDiagonal, Line::AntiDiagonal])
    }

    pub fn positions(self) -> [Position; SIZE] {
        std::array::from_fn(|i| match self {
            Line::Row(row) => Position::new(row, i),
            Line::Column(col) => Position::new(i, col),
            Line::MainDiagonal => Position::new(i, i),
            Line::AntiDiagonal => Position::new(i, SIZE - 1 - i),
        })
    }

    pub fn contains(self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }

    /// Human-readable name, 1-based for rows and columns.
    pub fn name(self) -> String {
        match self {
            Line::Row(row) => format!("Row {}", row + 1),
            Line::Column(col) => format!("Column {}", col + 1),
            Line::MainDiagonal => "Diagonal \\".to_string(),
            Line::AntiDiagonal => "Diagonal /".to_string(),
        }
    }
}

/// The 5×5 bingo grid.
///
/// Serializes as a JSON array of five rows, each an array of five
/// `{"text", "selected"}` objects or `null`. Deserialization also accepts
/// short rows (missing trailing squares are empty), which is how boards
/// saved by older clients look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create a fresh board: every square empty except the free space.
    pub fn new() -> Self {
        let mut cells: [[Cell; SIZE]; SIZE] = Default::default();
        cells[CENTER][CENTER] = Some(Square::free_space());
        Board { cells }
    }

    /// Get the square at a position, `None` when empty or out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&Square> {
        self.cells.get(row)?.get(col)?.as_ref()
    }

    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }

    pub fn is_selected(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|sq| sq.selected)
    }

    /// Number of filled squares, the free space included.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Number of player entries on the board (the free space excluded).
    pub fn entry_count(&self) -> usize {
        self.filled_count().saturating_sub(1)
    }

    /// True once every square holds an entry.
    pub fn is_ready(&self) -> bool {
        self.cells.iter().flatten().all(|c| c.is_some())
    }

    pub fn empty_positions(&self) -> Vec<Position> {
        Position::all()
            .filter(|p| self.cells[p.row][p.col].is_none())
            .collect()
    }

    /// Put an entry into an empty square.
    pub fn place(&mut self, pos: Position, text: impl Into<String>) -> Result<(), GameError> {
        if !pos.in_bounds() {
            return Err(GameError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        let cell = &mut self.cells[pos.row][pos.col];
        if cell.is_some() {
            return Err(GameError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }
        *cell = Some(Square::new(text));
        Ok(())
    }

    /// Flip the selected flag of a filled square, returning the new value.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, GameError> {
        let pos = Position::new(row, col);
        if !pos.in_bounds() {
            return Err(GameError::OutOfBounds { row, col });
        }
        if pos.is_free_space() {
            return Err(GameError::FreeSpace);
        }
        let square = self.cells[row][col]
            .as_mut()
            .ok_or(GameError::EmptyCell { row, col })?;
        square.selected = !square.selected;
        Ok(square.selected)
    }

    /// Check whether any line is fully selected.
    pub fn check_win(&self) -> bool {
        Line::all().any(|line| self.is_line_complete(line))
    }

    /// Every fully selected line, in row/column/diagonal order.
    pub fn winning_lines(&self) -> Vec<Line> {
        Line::all()
            .filter(|&line| self.is_line_complete(line))
            .collect()
    }

    /// Empty squares never count as selected.
    fn is_line_complete(&self, line: Line) -> bool {
        line.positions()
            .iter()
            .all(|p| self.is_selected(p.row, p.col))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; SIZE]> {
        self.cells.iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = BoardShapeError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        if rows.len() > SIZE {
            return Err(BoardShapeError::TooManyRows(rows.len()));
        }
        let mut cells: [[Cell; SIZE]; SIZE] = Default::default();
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() > SIZE {
                return Err(BoardShapeError::TooManyColumns {
                    row: r,
                    len: row.len(),
                });
            }
            for (c, cell) in row.into_iter().enumerate() {
                cells[r][c] = cell;
            }
        }
        if cells[CENTER][CENTER] != Some(Square::free_space()) {
            return Err(BoardShapeError::MissingFreeSpace);
        }
        Ok(Board { cells })
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board.cells.into_iter().map(Vec::from).collect()
    }
}

impl fmt::Display for Board {
    /// Plain-text grid: `[x]` marks selected squares, `.` marks empty ones.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const WIDTH: usize = 14;
        for row in self.rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(sq) => {
                        let mark = if sq.selected { "[x]" } else { "[ ]" };
                        let text: String = sq.text.chars().take(WIDTH - 4).collect();
                        format!("{mark} {text:<width$}", width = WIDTH - 4)
                    }
                    None => format!("{:<width$}", ".", width = WIDTH),
                })
                .collect();
            writeln!(f, "{}", cells.join(" | ").trim_end())?;
        }
        Ok(())
    }
}
