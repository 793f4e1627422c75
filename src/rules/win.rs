//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The eight winning lines: rows, then columns, then diagonals.
///
/// Scanned front to back; under alternating play at most one line can
/// be complete, so the first match is the only match and the reported
/// line is deterministic.
pub const LINES: [[Position; 3]; 8] = [
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

/// A completed winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win {
    /// The player holding the line.
    pub player: Player,
    /// The three positions forming the line.
    pub line: [Position; 3],
}

/// Checks the board for a completed line.
///
/// Returns the winner together with the line that won, `None` if no
/// line is complete.
#[instrument]
pub fn check_win(board: &Board) -> Option<Win> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some(Win { player, line });
            }
        }
    }

    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    check_win(board).map(|win| win.player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_win_reports_line() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::MiddleLeft, Square::Occupied(Player::X));
        board.set(Position::BottomLeft, Square::Occupied(Player::X));

        let win = check_win(&board).unwrap();
        assert_eq!(win.player, Player::X);
        assert_eq!(
            win.line,
            [
                Position::TopLeft,
                Position::MiddleLeft,
                Position::BottomLeft
            ]
        );
    }

    #[test]
    fn test_winner_symmetric_under_relabeling() {
        let mut board = Board::new();
        board.set(Position::TopRight, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomLeft, Square::Occupied(Player::O));
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), Some(Player::O));

        // Swap every mark and re-run
        let mut swapped = Board::new();
        for pos in Position::ALL {
            let sq = match board.get(pos) {
                Square::Occupied(p) => Square::Occupied(p.opponent()),
                Square::Empty => Square::Empty,
            };
            swapped.set(pos, sq);
        }
        assert_eq!(check_winner(&swapped), Some(Player::X));
    }

    #[test]
    fn test_lines_match_index_triples() {
        // Rows, columns, diagonals in canonical order
        let expected: [[usize; 3]; 8] = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];
        for (line, indices) in LINES.iter().zip(expected) {
            assert_eq!(line.map(Position::to_index), indices);
        }
    }
}
