//! Implements game-level Reversi logic.
//!
//! For correctness, this checked interface is preferred; [`Board`] trusts its
//! caller and is meant for code that already validated its moves.

use crate::{Board, Color, MoveRecord, Position};
use derive_more::{Display, Error};
use std::fmt;
use tracing::debug;

/// A command that the current position does not allow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum GameError {
    #[display(fmt = "{} cannot place at {}", color, position)]
    IllegalMove { color: Color, position: Position },
    #[display(fmt = "{} has a legal placement and cannot pass", color)]
    PassNotAllowed { color: Color },
    #[display(fmt = "there is no move to undo")]
    EmptyHistory,
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Color),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(color) => write!(f, "{} wins", color),
            Outcome::Draw => f.write_str("Draw"),
        }
    }
}

/// A [`Board`] behind checked commands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Game {
    board: Board,
}

impl From<Board> for Game {
    fn from(board: Board) -> Self {
        Self { board }
    }
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Discard everything and return to the starting position.
    pub fn reset(&mut self) {
        self.board.reset();
    }

    /// Place for the side to move, if the placement is legal.
    pub fn try_put(&mut self, position: Position) -> Result<(), GameError> {
        if !self.board.is_legal(position) {
            return Err(GameError::IllegalMove {
                color: self.board.turn(),
                position,
            });
        }
        self.board.put(position);
        Ok(())
    }

    /// Pass for the side to move, if it has no legal placement.
    pub fn try_pass(&mut self) -> Result<(), GameError> {
        if self.board.is_legal_all() {
            return Err(GameError::PassNotAllowed {
                color: self.board.turn(),
            });
        }
        self.board.pass();
        Ok(())
    }

    /// Take back the most recent record, whether placement or pass.
    pub fn try_undo(&mut self) -> Result<MoveRecord, GameError> {
        self.board.undo().ok_or(GameError::EmptyHistory)
    }

    /// Make a placement the way live play does: place, then pass for the next
    /// side automatically if it has nothing to play.
    /// Returns true if a pass was inserted.
    pub fn play(&mut self, position: Position) -> Result<bool, GameError> {
        self.try_put(position)?;

        if self.board.is_legal_all() {
            return Ok(false);
        }
        debug!(color = %self.board.turn(), "no legal placement, passing");
        self.board.pass();
        if !self.board.is_legal_all() {
            debug!(outcome = ?self.outcome(), "neither side can move");
        }
        Ok(true)
    }

    /// Take back the most recent placement along with a pass that followed it.
    /// Inverse of [`Game::play`].
    pub fn undo_move(&mut self) -> Result<MoveRecord, GameError> {
        let mut record = self.try_undo()?;
        if record.is_pass() {
            record = self.try_undo()?;
        }
        Ok(record)
    }

    /// True when neither side can place.
    pub fn is_finished(&self) -> bool {
        if self.board.is_legal_all() {
            return false;
        }
        let mut passed = self.board.clone();
        passed.pass();
        !passed.is_legal_all()
    }

    /// Piece difference from First's point of view.
    pub fn score(&self) -> i32 {
        let (first, second) = self.board.counts();
        first as i32 - second as i32
    }

    /// The result, once the game is finished.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_finished() {
            return None;
        }
        Some(match self.score() {
            s if s > 0 => Outcome::Winner(Color::First),
            s if s < 0 => Outcome::Winner(Color::Second),
            _ => Outcome::Draw,
        })
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        if let Some(MoveRecord::Pass) = self.board.last_record() {
            f.write_str("\n(Last move was a pass)")?;
        }
        if let Some(outcome) = self.outcome() {
            write!(f, "\nGame over: {}", outcome)?;
        }
        Ok(())
    }
}
