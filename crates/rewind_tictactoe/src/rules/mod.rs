//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot
//! according to tic-tac-toe rules. Rules never store derived results;
//! consumers recompute them on every read.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WinLine, winning_line};

use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Status of a board snapshot, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game continues; the named player moves next.
    InProgress(Player),
    /// A player completed a line.
    Won(WinLine),
    /// Board full with no winner.
    Draw,
}

impl GameStatus {
    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }

    /// Winning line when the game has been won.
    pub fn win_line(&self) -> Option<&WinLine> {
        match self {
            GameStatus::Won(win) => Some(win),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress(player) => write!(f, "Next player: {player}"),
            GameStatus::Won(win) => write!(f, "Winner: {}", win.winner()),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Derives the status of a board for the given player to move.
///
/// A completed line wins regardless of remaining empty squares; a full
/// board with no line is a draw; anything else is in progress.
pub fn status(board: &Board, to_move: Player) -> GameStatus {
    if let Some(win) = winning_line(board) {
        GameStatus::Won(win)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress(to_move)
    }
}
