//! Stepping back and forth through a recorded game, with one side line.

use crate::{Game, GameError, Position};
use tracing::debug;

/// A cursor over a recorded list of placements.
///
/// Stepping forward replays the next recorded placement; stepping back takes
/// one placement back (along with any forced pass after it). Playing a
/// placement of your own leaves the record and starts a side line, during
/// which only stepping back and further side-line placements are possible.
/// Stepping back to where the side line started returns to the record.
#[derive(Clone, Debug)]
pub struct Analysis {
    moves: Vec<Position>,
    game: Game,
    cursor: usize,
    branch_point: Option<usize>,
}

impl Analysis {
    /// Start at the initial position, before the first recorded placement.
    pub fn new(moves: Vec<Position>) -> Self {
        Self {
            moves,
            game: Game::new(),
            cursor: 0,
            branch_point: None,
        }
    }

    /// Analyse the placements of a game that was already played.
    pub fn from_game(game: &Game) -> Self {
        Self::new(game.board().history().placements().collect())
    }

    #[inline]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[inline]
    pub fn moves(&self) -> &[Position] {
        &self.moves
    }

    /// How many placements are currently on the board.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn is_branched(&self) -> bool {
        self.branch_point.is_some()
    }

    /// The recorded placement [`Analysis::step_forward`] would play.
    pub fn next_move(&self) -> Option<Position> {
        if self.is_branched() {
            return None;
        }
        self.moves.get(self.cursor).copied()
    }

    /// Play the next recorded placement. Returns false at the end of the
    /// record or inside a side line. A recorded placement that is not legal
    /// here is an error and the cursor stays put.
    pub fn step_forward(&mut self) -> Result<bool, GameError> {
        let position = match self.next_move() {
            Some(position) => position,
            None => return Ok(false),
        };
        self.game.play(position)?;
        self.cursor += 1;
        Ok(true)
    }

    /// Take back one placement. Returns false at the initial position.
    pub fn step_back(&mut self) -> bool {
        if self.cursor == 0 || self.game.undo_move().is_err() {
            return false;
        }
        self.cursor -= 1;
        if self.branch_point == Some(self.cursor) {
            debug!(cursor = self.cursor, "back on the recorded line");
            self.branch_point = None;
        }
        true
    }

    /// Play a placement of our own, starting a side line if not already in one.
    pub fn branch(&mut self, position: Position) -> Result<(), GameError> {
        self.game.play(position)?;
        if self.branch_point.is_none() {
            debug!(cursor = self.cursor, %position, "leaving the recorded line");
            self.branch_point = Some(self.cursor);
        }
        self.cursor += 1;
        Ok(())
    }
}
