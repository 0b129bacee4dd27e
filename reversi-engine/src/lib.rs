//! `reversi-engine` is a Reversi/Othello rules engine for UIs and analysis tools.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`Board`] is the raw state machine: legality queries, placement with capture,
//!    passes and exact undo. Its commands are unchecked and trust the caller to
//!    have asked [`Board::is_legal`] / [`Board::is_legal_all`] first.
//!  - [`Game`] is a high-level, safe interface over a [`Board`]. It reports
//!    illegal commands as [`GameError`]s and handles forced passes and game end.
//!
//! Games are stored as move lists in the [`notation`] format (`c4f5...`), which
//! can be replayed step by step with an [`Analysis`] cursor.

pub mod notation;
pub mod test_utils;

mod analysis;
mod board;
mod color;
mod game;
mod grid;
mod history;
mod location;
mod utils;

pub use analysis::*;
pub use board::*;
pub use color::*;
pub use game::*;
pub use grid::*;
pub use history::*;
pub use location::*;

/// The number of spaces on one edge of a Reversi board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on a Reversi board.
pub const NUM_SPACES: usize = 64;
