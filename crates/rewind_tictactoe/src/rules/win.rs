//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A completed line: the winning player and the three squares forming it.
///
/// Derived from a board on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct WinLine {
    /// The player holding all three squares.
    winner: Player,
    /// The squares forming the line, in line-definition order.
    line: [Position; 3],
}

/// The 8 possible lines: 3 rows, 3 columns, 2 diagonals.
///
/// Evaluation order is fixed; the first complete line in this order is
/// the reported one.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a completed line on the board.
///
/// Returns the winner and the line when a player holds three in a row,
/// `None` otherwise. Pure function of the board.
#[instrument]
pub fn winning_line(board: &Board) -> Option<WinLine> {
    for line in LINES {
        let [a, b, c] = line;
        if let Square::Occupied(winner) = board.get(a)
            && board.get(b) == Square::Occupied(winner)
            && board.get(c) == Square::Occupied(winner)
        {
            return Some(WinLine { winner, line });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(winning_line(&board).is_none());
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));

        let win = winning_line(&board).expect("top row is complete");
        assert_eq!(*win.winner(), Player::X);
        assert_eq!(
            *win.line(),
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));

        let win = winning_line(&board).expect("diagonal is complete");
        assert_eq!(*win.winner(), Player::O);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert!(winning_line(&board).is_none());
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Top row and left column are both complete; the row is
        // enumerated first and must be the reported line.
        let mut board = Board::new();
        for position in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.set(position, Square::Occupied(Player::X));
        }

        let win = winning_line(&board).expect("two lines are complete");
        assert_eq!(
            *win.line(),
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_deterministic_across_calls() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::Center, Square::Occupied(Player::X));
        board.set(Position::BottomRight, Square::Occupied(Player::X));

        assert_eq!(winning_line(&board), winning_line(&board));
    }
}
