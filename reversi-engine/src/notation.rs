//! Game records as move lists: one `[a-h][1-8]` token per placement, no
//! separators, passes left out (`c4c3d3c5...`).
//!
//! Passes are recovered on import by replaying the placements the way live play
//! does: whenever the next side has no legal placement, it passes.

use crate::{Game, History, ParsePositionError, Position};
use derive_more::{Display, Error, From};
use std::io::{self, BufRead, Write};
use tracing::{debug, trace};

/// A game record that does not describe a playable game.
/// `token` counts placements from 1 across the whole record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum NotationError {
    #[display(fmt = "move {}: invalid column letter {:?}", token, found)]
    InvalidColumn { token: usize, found: char },
    #[display(fmt = "move {}: invalid row character {:?}", token, found)]
    InvalidRow { token: usize, found: char },
    #[display(fmt = "move {}: row {} is off the board", token, row)]
    RowOutOfRange { token: usize, row: u32 },
    #[display(fmt = "move {}: column {:?} has no row", token, found)]
    IncompleteToken { token: usize, found: char },
    #[display(fmt = "move {}: {} is not a legal placement", token, position)]
    IllegalMove { token: usize, position: Position },
}

impl NotationError {
    fn from_position_error(token: usize, error: ParsePositionError) -> Self {
        match error {
            ParsePositionError::InvalidColumn { found } => Self::InvalidColumn { token, found },
            ParsePositionError::InvalidRow { found } => Self::InvalidRow { token, found },
            ParsePositionError::RowOutOfRange { row } => Self::RowOutOfRange { token, row },
            ParsePositionError::WrongLength => {
                unreachable!("tokens are always read two characters at a time")
            }
        }
    }
}

/// Failure to load a game record.
#[derive(Debug, Display, Error, From)]
pub enum ImportError {
    #[display(fmt = "cannot read game record: {}", _0)]
    Io(io::Error),
    #[display(fmt = "invalid game record: {}", _0)]
    Notation(NotationError),
}

/// Encode the placements of `history` in play order.
pub fn encode(history: &History) -> String {
    history.placements().map(|pos| pos.to_string()).collect()
}

/// Decode a move list. Each line is read two characters at a time; leading and
/// trailing whitespace on a line is ignored.
pub fn decode(text: &str) -> Result<Vec<Position>, NotationError> {
    let mut positions = Vec::new();
    for line in text.lines() {
        decode_line(line, &mut positions)?;
    }
    Ok(positions)
}

fn decode_line(line: &str, positions: &mut Vec<Position>) -> Result<(), NotationError> {
    let mut chars = line.trim().chars();

    while let Some(column) = chars.next() {
        let token = positions.len() + 1;
        let row = match chars.next() {
            Some(row) => row,
            None if ('a'..='h').contains(&column) => {
                return Err(NotationError::IncompleteToken {
                    token,
                    found: column,
                })
            }
            None => {
                return Err(NotationError::InvalidColumn {
                    token,
                    found: column,
                })
            }
        };

        let position = Position::from_chars(column, row)
            .map_err(|error| NotationError::from_position_error(token, error))?;
        positions.push(position);
    }
    Ok(())
}

/// Play `positions` onto `game` in order, passing automatically whenever the
/// side to move has no placement.
///
/// Stops at the first illegal placement. Moves replayed before it stay applied.
pub fn replay(game: &mut Game, positions: &[Position]) -> Result<(), NotationError> {
    for (index, &position) in positions.iter().enumerate() {
        let passed = game
            .play(position)
            .map_err(|_| NotationError::IllegalMove {
                token: index + 1,
                position,
            })?;
        trace!(%position, passed, "replayed move");
    }
    Ok(())
}

/// Read a game record and replay it from the starting position.
pub fn import<R: BufRead>(reader: R) -> Result<Game, ImportError> {
    let mut game = Game::new();
    import_into(&mut game, reader)?;
    Ok(game)
}

/// Read a game record, reset `game` and replay the record onto it.
///
/// Read and format errors are reported before `game` is touched. An illegal
/// placement leaves `game` at the last position that could be reached.
pub fn import_into<R: BufRead>(game: &mut Game, reader: R) -> Result<(), ImportError> {
    let mut positions = Vec::new();
    for line in reader.lines() {
        decode_line(&line?, &mut positions)?;
    }
    debug!(moves = positions.len(), "decoded game record");

    game.reset();
    replay(game, &positions)?;
    Ok(())
}

/// Write the placements of `history` as one line.
pub fn export<W: Write>(history: &History, mut writer: W) -> io::Result<()> {
    let record = encode(history);
    debug!(moves = history.placements().count(), "exporting game record");
    writeln!(writer, "{}", record)
}
