//! Command-line interface for rewindable tic-tac-toe.

use clap::{Parser, Subcommand};

/// Rewindable tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "rewind_tui")]
#[command(about = "Tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Log file path (logs go to a file so they never tear the screen)
        #[arg(long, default_value = "rewind_tui.log")]
        log_file: std::path::PathBuf,
    },

    /// Replay a move sequence and print the final position
    Replay {
        /// Cell numbers 1-9 in play order, e.g. "15926"
        moves: String,
    },
}
