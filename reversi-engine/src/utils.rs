//! Miscellaneous project utilities.

use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Format 64 characters into a labelled grid, row 1 at the top.
/// `piece_iter` must yield exactly 64 items in row-major order.
pub fn format_grid<T: Iterator<Item = char>>(mut piece_iter: T, f: &mut Formatter) -> fmt::Result {
    write!(f, "  a b c d e f g h")?;

    for row in 0..EDGE_LENGTH {
        write!(f, "\n{} ", row + 1)?;
        for col in 0..EDGE_LENGTH {
            let piece = piece_iter.next().ok_or(fmt::Error)?;
            if col + 1 == EDGE_LENGTH {
                write!(f, "{}", piece)?;
            } else {
                write!(f, "{} ", piece)?;
            }
        }
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
