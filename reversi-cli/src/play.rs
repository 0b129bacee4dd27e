use crate::analyze::analyze_interactive;
use anyhow::Result;
use itertools::Itertools;
use reversi_engine::{Analysis, Color, Game, Position};
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "Commands: a move such as c4, undo, pass, hint, quit";

/// Play an interactive two-player game, reading one command per line.
/// Stops when the game is finished, on `quit`, or at end of input.
/// A finished game can then be stepped through in analyze mode.
pub fn play_interactive<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "GAME START!\n{}", HELP)?;
    writeln!(output, "\n{}\n", game)?;

    while !game.is_finished() {
        write!(output, "{} to move: ", game.board().turn())?;
        output.flush()?;

        let line = match read_command(&mut input)? {
            Some(line) => line,
            None => break,
        };
        let command = line.trim();
        debug!(command, "read command");

        match command {
            "" => continue,
            "quit" => break,
            "hint" => {
                writeln!(output, "Legal moves: {}", legal_moves(game))?;
                continue;
            }
            "undo" => {
                if let Err(err) = game.undo_move() {
                    writeln!(output, "{}", err)?;
                    continue;
                }
            }
            "pass" => {
                if let Err(err) = game.try_pass() {
                    writeln!(output, "{}. Legal moves: {}", err, legal_moves(game))?;
                    continue;
                }
            }
            token => match token.parse::<Position>() {
                Ok(position) => match game.play(position) {
                    Ok(true) => writeln!(output, "{} must pass.", game.board().turn())?,
                    Ok(false) => {}
                    Err(err) => {
                        writeln!(output, "{}. Legal moves: {}", err, legal_moves(game))?;
                        continue;
                    }
                },
                Err(err) => {
                    writeln!(output, "Cannot parse move: {}. {}", err, HELP)?;
                    continue;
                }
            },
        }

        writeln!(output, "\n{}\n", game)?;
    }

    if let Some(outcome) = game.outcome() {
        let (first, second) = game.board().counts();
        writeln!(
            output,
            "{} {}-{} {}",
            Color::First,
            first,
            second,
            Color::Second
        )?;
        writeln!(output, "**{}**", outcome.to_string().to_uppercase())?;

        writeln!(output, "Enter a to analyze the game, anything else to exit.")?;
        if let Some(line) = read_command(&mut input)? {
            if line.trim() == "a" {
                let mut analysis = Analysis::from_game(game);
                analyze_interactive(&mut analysis, input, &mut output)?;
            }
        }
    }
    Ok(())
}

/// One line of input, or `None` at end of input.
fn read_command<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn legal_moves(game: &Game) -> String {
    format!("[{}]", game.board().legal_positions().iter().join(", "))
}
