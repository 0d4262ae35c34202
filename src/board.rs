//! The 5x5 board value type.
//!
//! A [`Board`] is a plain fixed-size array, so it is `Copy`: every
//! hypothetical move in the rules engine and the search works on its own
//! copy and nothing is ever shared between search branches.
//!
//! The text form is the one used by the referee: one row per line, each cell
//! a digit (`0` empty, `1` Black, `2` White).

use std::fmt;
use std::str::FromStr;

use crate::constants::N;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other color.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Numeric form used on the wire (1 = Black, 2 = White).
    pub fn index(self) -> u8 {
        match self {
            Color::Black => 1,
            Color::White => 2,
        }
    }

    pub fn from_index(index: u8) -> Option<Color> {
        match index {
            1 => Some(Color::Black),
            2 => Some(Color::White),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// A (row, column) pair.
pub type Point = (usize, usize);

/// Whether a point lies inside the board.
#[inline]
pub fn on_board((row, col): Point) -> bool {
    row < N && col < N
}

/// The on-board orthogonal neighbors of a point (up, down, left, right).
pub fn neighbors((row, col): Point) -> impl Iterator<Item = Point> {
    let mut v = Vec::with_capacity(4);
    if row > 0 {
        v.push((row - 1, col));
    }
    if row + 1 < N {
        v.push((row + 1, col));
    }
    if col > 0 {
        v.push((row, col - 1));
    }
    if col + 1 < N {
        v.push((row, col + 1));
    }
    v.into_iter()
}

/// All board points in row-major order.
pub fn points() -> impl Iterator<Item = Point> {
    (0..N).flat_map(|row| (0..N).map(move |col| (row, col)))
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Color>; N]; N],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stone at `pt`, or `None` for an empty or off-board point.
    pub fn get(&self, pt: Point) -> Option<Color> {
        if !on_board(pt) {
            return None;
        }
        self.cells[pt.0][pt.1]
    }

    /// Sets a cell. Off-board points are ignored.
    pub fn set(&mut self, pt: Point, stone: Option<Color>) {
        if on_board(pt) {
            self.cells[pt.0][pt.1] = stone;
        }
    }

    /// Whether a point is on the board and empty.
    pub fn is_vacant(&self, pt: Point) -> bool {
        on_board(pt) && self.cells[pt.0][pt.1].is_none()
    }

    /// Whether the whole board is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_none)
    }

    pub fn count(&self, color: Color) -> usize {
        self.stones(color).count()
    }

    /// Points holding a stone of `color`, in row-major order.
    pub fn stones(&self, color: Color) -> impl Iterator<Item = Point> + '_ {
        points().filter(move |&pt| self.get(pt) == Some(color))
    }
}

/// Error returned when parsing the text form of a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    /// Wrong number of rows.
    RowCount(usize),
    /// A row with the wrong number of cells.
    RowLength { row: usize, len: usize },
    /// A cell that is not `0`, `1` or `2`.
    BadCell { row: usize, col: usize, found: char },
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardParseError::RowCount(n) => write!(f, "expected {N} rows, got {n}"),
            BoardParseError::RowLength { row, len } => {
                write!(f, "row {row}: expected {N} cells, got {len}")
            }
            BoardParseError::BadCell { row, col, found } => {
                write!(f, "row {row}, col {col}: invalid cell '{found}'")
            }
        }
    }
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if lines.len() != N {
            return Err(BoardParseError::RowCount(lines.len()));
        }

        let mut board = Board::new();
        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != N {
                return Err(BoardParseError::RowLength { row, len });
            }
            for (col, ch) in line.chars().enumerate() {
                board.cells[row][col] = match ch {
                    '0' => None,
                    '1' => Some(Color::Black),
                    '2' => Some(Color::White),
                    found => return Err(BoardParseError::BadCell { row, col, found }),
                };
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let ch = match cell {
                    Some(Color::Black) => '1',
                    Some(Color::White) => '2',
                    None => '0',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
