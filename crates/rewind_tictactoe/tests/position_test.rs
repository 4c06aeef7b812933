//! Tests for the board position enum.

use rewind_tictactoe::{Board, Player, Position, Square};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_index_round_trip() {
    for position in Position::ALL {
        assert_eq!(Position::from_index(position.to_index()), Some(position));
    }
}

#[test]
fn test_row_col_mapping() {
    // Index i maps to row i / 3, column i % 3.
    assert_eq!((Position::TopLeft.row(), Position::TopLeft.col()), (0, 0));
    assert_eq!((Position::Center.row(), Position::Center.col()), (1, 1));
    assert_eq!(
        (Position::BottomCenter.row(), Position::BottomCenter.col()),
        (2, 1)
    );

    for position in Position::ALL {
        assert_eq!(
            Position::from_row_col(position.row(), position.col()),
            Some(position)
        );
    }
    assert_eq!(Position::from_row_col(3, 0), None);
    assert_eq!(Position::from_row_col(0, 3), None);
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 9);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Player::X));
    board.set(Position::Center, Square::Occupied(Player::O));

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_position_serde_uses_variant_names() {
    let json = serde_json::to_string(&Position::TopLeft).expect("serializes");
    assert_eq!(json, "\"TopLeft\"");
}
