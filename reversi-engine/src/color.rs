//! The two sides of a Reversi game.

use std::fmt;

/// One of the two players, and the color of their pieces.
/// `First` moves first and is traditionally called Black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    First,
    Second,
}

impl Color {
    /// Both colors, in turn order.
    pub const ALL: [Color; 2] = [Color::First, Color::Second];

    /// Gets the other color.
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Color::First => Color::Second,
            Color::Second => Color::First,
        }
    }

    /// Index into per-color tables.
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Color::First => 0,
            Color::Second => 1,
        }
    }

    /// The character used to draw this color's pieces.
    pub fn symbol(self) -> char {
        match self {
            Color::First => '#',
            Color::Second => 'O',
        }
    }
}

impl Default for Color {
    /// Gets the starting color.
    fn default() -> Self {
        Self::First
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the other color.
    fn not(self) -> Self {
        self.opponent()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::First => f.write_str("Black"),
            Color::Second => f.write_str("White"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        for color in Color::ALL {
            assert_ne!(!color, color);
            assert_eq!(!!color, color);
            assert_eq!(color.opponent(), !color);
        }
    }

    #[test]
    fn first_color_moves_first() {
        assert_eq!(Color::default(), Color::First);
        assert_eq!(Color::First.to_string(), "Black");
    }
}
