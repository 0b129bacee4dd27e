//! The raw 8×8 array of cells.

use crate::{utils, Color, Position, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter};

/// Cell contents for every square, `None` for an empty one.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Grid {
    cells: [Option<Color>; NUM_SPACES],
}

impl Grid {
    /// A grid with no pieces on it.
    pub const fn empty() -> Self {
        Self {
            cells: [None; NUM_SPACES],
        }
    }

    /// The standard starting layout: First on d5 and e4, Second on d4 and e5.
    pub fn starting() -> Self {
        let mut grid = Self::empty();
        for &(x, y, color) in &[
            (4, 3, Color::First),
            (3, 4, Color::First),
            (3, 3, Color::Second),
            (4, 4, Color::Second),
        ] {
            if let Some(pos) = Position::new(x, y) {
                grid.set(pos, Some(color));
            }
        }
        grid
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Option<Color> {
        self.cells[pos.to_index()]
    }

    #[inline]
    pub fn set(&mut self, pos: Position, cell: Option<Color>) {
        self.cells[pos.to_index()] = cell;
    }

    /// Count the pieces of one color by scanning every cell.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(color)).count()
    }

    /// Count the empty cells by scanning every cell.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Option<Color>> + '_ {
        self.cells.iter().copied()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::starting()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.cells().map(|cell| match cell {
                None => '.',
                Some(color) => color.symbol(),
            }),
            f,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    #[display(fmt = "expected 64 cells, found {}", found)]
    WrongLength { found: usize },
    #[display(fmt = "unrecognized cell symbol {:?}", found)]
    InvalidSymbol { found: char },
}

/// Parse 64 cell symbols in row-major order, ignoring whitespace:
/// `.` or `-` is empty, `#`, `X` or `*` is [`Color::First`], `O` is [`Color::Second`].
impl std::str::FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::empty();
        let mut found = 0;

        for symbol in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match symbol {
                '.' | '-' => None,
                '#' | 'X' | 'x' | '*' => Some(Color::First),
                'O' | 'o' => Some(Color::Second),
                _ => return Err(ParseGridError::InvalidSymbol { found: symbol }),
            };
            if let Some(pos) = Position::from_index(found) {
                grid.set(pos, cell);
            }
            found += 1;
        }

        if found != NUM_SPACES {
            return Err(ParseGridError::WrongLength { found });
        }
        Ok(grid)
    }
}
