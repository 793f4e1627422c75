//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the game is a draw: board full with no winner.
///
/// A full board that contains a completed line is a win, not a draw.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Player;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::O));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        board.set(Position::MiddleLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::X));
        board.set(Position::MiddleRight, Square::Occupied(Player::X));
        board.set(Position::BottomLeft, Square::Occupied(Player::O));
        board.set(Position::BottomCenter, Square::Occupied(Player::X));
        board.set(Position::BottomRight, Square::Occupied(Player::O));

        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        // X wins top row
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        board.set(Position::MiddleLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));

        assert!(!is_draw(&board));
    }
}
