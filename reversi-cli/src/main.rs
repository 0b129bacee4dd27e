//! Terminal shell over `reversi-engine`.

mod analyze;
mod cli;
mod play;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use reversi_engine::{notation, Analysis, Game};
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::Path;
use tracing::{error, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { export } => run_play(export.as_deref()),
        Command::Replay { path } => run_replay(&path),
        Command::Analyze { path } => run_analyze(&path),
    }
}

/// Play an interactive game, exporting the record once it is finished.
#[instrument]
fn run_play(export: Option<&Path>) -> Result<()> {
    let mut game = Game::new();
    let stdin = io::stdin();
    play::play_interactive(&mut game, stdin.lock(), io::stdout())?;

    if let Some(path) = export {
        export_record(&game, path, io::stdout())?;
    }
    Ok(())
}

/// Write the record of a finished game to `path`. An unfinished game is not
/// exported; the user is told so instead. Returns whether a file was written.
fn export_record<W: Write>(game: &Game, path: &Path, mut output: W) -> Result<bool> {
    if !game.is_finished() {
        warn!(path = %path.display(), "game not finished, record not exported");
        writeln!(
            output,
            "Game not finished: record not exported to {}",
            path.display()
        )?;
        return Ok(false);
    }

    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    notation::export(game.board().history(), file)
        .with_context(|| format!("cannot write {}", path.display()))?;
    info!(path = %path.display(), "exported game record");
    writeln!(output, "Exported: {}", path.display())?;
    Ok(true)
}

/// Import a record and show where it ends.
#[instrument]
fn run_replay(path: &Path) -> Result<()> {
    let mut game = Game::new();
    let result = open(path).and_then(|reader| {
        notation::import_into(&mut game, reader)
            .with_context(|| format!("cannot import {}", path.display()))
    });

    println!("{}", game);
    if let Err(err) = &result {
        error!(error = %err, moves = game.board().history().placements().count(), "import stopped");
    }
    result
}

/// Import a record and step through it interactively.
#[instrument]
fn run_analyze(path: &Path) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let moves = notation::decode(&text)
        .with_context(|| format!("cannot import {}", path.display()))?;
    info!(path = %path.display(), moves = moves.len(), "imported game record");

    let mut analysis = Analysis::new(moves);
    let stdin = io::stdin();
    analyze::analyze_interactive(&mut analysis, stdin.lock(), io::stdout())
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    Ok(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("reversi-{}-{}", std::process::id(), name))
    }

    #[test]
    fn unfinished_game_is_not_exported() {
        let path = scratch_path("unfinished.txt");
        let game = notation::import("c4c3".as_bytes()).unwrap();
        let mut output = Vec::new();

        assert!(!export_record(&game, &path, &mut output).unwrap());
        assert!(!path.exists());
        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Game not finished: record not exported to "));
    }

    #[test]
    fn finished_game_is_exported() {
        let path = scratch_path("finished.txt");
        let game = notation::import("d3c3b3d2e1d6d7e3f4".as_bytes()).unwrap();
        let mut output = Vec::new();

        assert!(export_record(&game, &path, &mut output).unwrap());
        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(written, "d3c3b3d2e1d6d7e3f4\n");
        assert!(String::from_utf8(output).unwrap().starts_with("Exported: "));
    }
}
