//! Code for working with [`Position`]s and [`Direction`]s on the Reversi board.

use crate::EDGE_LENGTH;
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};

const COLUMN_LETTERS: &str = "abcdefgh";
const ROW_DIGITS: &str = "12345678";

/// A square on the board: `x` is the column (a..h), `y` is the row (1..8).
/// Both are always in `0..8`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Position {
    x: u8,
    y: u8,
}

/// One of the eight compass offsets a ray can follow.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

impl Direction {
    /// All eight directions, in the order rays are scanned and flips are applied.
    pub const ALL: [Direction; 8] = [
        Direction { dx: -1, dy: 0 },
        Direction { dx: -1, dy: 1 },
        Direction { dx: 0, dy: 1 },
        Direction { dx: 1, dy: 1 },
        Direction { dx: 1, dy: 0 },
        Direction { dx: 1, dy: -1 },
        Direction { dx: 0, dy: -1 },
        Direction { dx: -1, dy: -1 },
    ];
}

impl Position {
    /// Construct from column and row. Returns None off the board.
    pub fn new(x: usize, y: usize) -> Option<Self> {
        if x < EDGE_LENGTH && y < EDGE_LENGTH {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Construct from possibly-negative coordinates, as produced by screen math.
    pub fn from_coords(x: i32, y: i32) -> Option<Self> {
        if x < 0 || y < 0 {
            return None;
        }
        Self::new(x as usize, y as usize)
    }

    /// Convert from a row-major square index.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::new(index % EDGE_LENGTH, index / EDGE_LENGTH)
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> usize {
        self.y as usize * EDGE_LENGTH + self.x as usize
    }

    #[inline]
    pub fn x(self) -> usize {
        self.x as usize
    }

    #[inline]
    pub fn y(self) -> usize {
        self.y as usize
    }

    /// The neighbouring square in `direction`, if it is on the board.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Self> {
        Self::from_coords(
            self.x as i32 + direction.dx as i32,
            self.y as i32 + direction.dy as i32,
        )
    }

    /// The squares from one step away out to the board edge in `direction`.
    pub fn ray(self, direction: Direction) -> Ray {
        Ray {
            next: self.step(direction),
            direction,
        }
    }

    /// Every square, row by row.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..EDGE_LENGTH * EDGE_LENGTH).filter_map(Self::from_index)
    }

    /// Parse a column letter and a row digit ("c", "4"). Only lowercase letters
    /// are notation; callers that accept user input should lowercase first.
    pub fn from_chars(column: char, row: char) -> Result<Self, ParsePositionError> {
        let x = COLUMN_LETTERS
            .find(column)
            .ok_or(ParsePositionError::InvalidColumn { found: column })?;
        let digit = row
            .to_digit(10)
            .ok_or(ParsePositionError::InvalidRow { found: row })?;
        if digit == 0 || digit as usize > EDGE_LENGTH {
            return Err(ParsePositionError::RowOutOfRange { row: digit });
        }

        Self::new(x, digit as usize - 1).ok_or(ParsePositionError::RowOutOfRange { row: digit })
    }
}

/// Iterator over the squares of a ray, nearest first.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    next: Option<Position>,
    direction: Direction,
}

impl Iterator for Ray {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let current = self.next?;
        self.next = current.step(self.direction);
        Some(current)
    }
}

/// Convert this [`Position`] into notation ("c4").
impl fmt::Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = COLUMN_LETTERS.chars().nth(self.x()).ok_or(fmt::Error)?;
        let row_str = ROW_DIGITS.chars().nth(self.y()).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParsePositionError {
    #[display(fmt = "invalid column letter {:?}", found)]
    InvalidColumn { found: char },
    #[display(fmt = "invalid row character {:?}", found)]
    InvalidRow { found: char },
    #[display(fmt = "row {} is off the board", row)]
    RowOutOfRange { row: u32 },
    #[display(fmt = "a position is one column letter and one row digit")]
    WrongLength,
}

/// Build a [`Position`] from its notation ("c4"). Case-insensitive.
impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let column = chars
            .next()
            .ok_or(ParsePositionError::WrongLength)?
            .to_ascii_lowercase();
        let row = chars.next().ok_or(ParsePositionError::WrongLength)?;

        if chars.next().is_some() {
            return Err(ParsePositionError::WrongLength);
        }

        Self::from_chars(column, row)
    }
}
