//! Command-line interface for the reversi shell.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Play and review Reversi games in the terminal
#[derive(Parser, Debug)]
#[command(name = "reversi")]
#[command(about = "Play and review Reversi games in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a two-player game on stdin/stdout
    Play {
        /// Write the finished game's move list to this file
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Replay a move-list file and print the final position
    Replay {
        /// Move-list file (`c4c3d3...`)
        path: PathBuf,
    },

    /// Step through a move-list file, optionally trying side lines
    Analyze {
        /// Move-list file (`c4c3d3...`)
        path: PathBuf,
    },
}
