//! Move records and the history stack used for undo.

use crate::{Color, Position};
use std::fmt;

/// One entry in the move history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveRecord {
    /// A piece was placed and captured at least one opposing run.
    Placement {
        color: Color,
        position: Position,
        /// Captured squares in the order they were flipped:
        /// direction by direction, nearest first within a direction.
        flipped: Vec<Position>,
    },
    /// The side to move had no legal placement.
    Pass,
}

impl MoveRecord {
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, MoveRecord::Pass)
    }

    /// The placed square, or None for a pass.
    pub fn position(&self) -> Option<Position> {
        match self {
            MoveRecord::Placement { position, .. } => Some(*position),
            MoveRecord::Pass => None,
        }
    }

    /// The flipped squares; empty for a pass.
    pub fn flipped(&self) -> &[Position] {
        match self {
            MoveRecord::Placement { flipped, .. } => flipped,
            MoveRecord::Pass => &[],
        }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRecord::Placement {
                color,
                position,
                flipped,
            } => write!(f, "{} {} (flips {})", color, position, flipped.len()),
            MoveRecord::Pass => f.write_str("pass"),
        }
    }
}

/// Stack of [`MoveRecord`]s, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    records: Vec<MoveRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    #[inline]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoveRecord> {
        self.records.iter()
    }

    /// The placed squares in play order, passes skipped.
    pub fn placements(&self) -> impl Iterator<Item = Position> + '_ {
        self.records.iter().filter_map(MoveRecord::position)
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a MoveRecord;
    type IntoIter = std::slice::Iter<'a, MoveRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(x: usize, y: usize) -> MoveRecord {
        MoveRecord::Placement {
            color: Color::First,
            position: Position::new(x, y).unwrap(),
            flipped: vec![Position::new(3, 3).unwrap()],
        }
    }

    #[test]
    fn push_pop_is_lifo() {
        let mut history = History::new();
        history.push(placement(2, 3));
        history.push(MoveRecord::Pass);

        assert_eq!(history.len(), 2);
        assert_eq!(history.last(), Some(&MoveRecord::Pass));
        assert_eq!(history.pop(), Some(MoveRecord::Pass));
        assert_eq!(history.pop(), Some(placement(2, 3)));
        assert_eq!(history.pop(), None);
        assert!(history.is_empty());
    }

    #[test]
    fn placements_skip_passes() {
        let mut history = History::new();
        history.push(placement(2, 3));
        history.push(MoveRecord::Pass);
        history.push(placement(5, 4));

        let placed: Vec<String> = history.placements().map(|p| p.to_string()).collect();
        assert_eq!(placed, vec!["c4", "f5"]);
    }

    #[test]
    fn pass_has_no_position_or_flips() {
        assert!(MoveRecord::Pass.is_pass());
        assert_eq!(MoveRecord::Pass.position(), None);
        assert!(MoveRecord::Pass.flipped().is_empty());
        assert_eq!(placement(2, 3).flipped().len(), 1);
    }
}
