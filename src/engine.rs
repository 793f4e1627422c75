//! The game engine: owned state plus the move/reset/query surface.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Why a move was not applied.
///
/// Never surfaced to callers: rejected moves are expected interaction
/// in a board-game UI, not reportable failures. The engine logs the
/// reason at debug level and leaves its state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
enum MoveError {
    /// Index outside 0-8.
    #[display("position index out of bounds")]
    OutOfBounds,
    /// The targeted square already holds a mark.
    #[display("square is already occupied")]
    SquareOccupied,
    /// The game has ended; only reset accepts input now.
    #[display("game is already over")]
    GameOver,
}

/// Tic-tac-toe game engine.
///
/// Owns the board and the turn indicator. Everything else - status,
/// winner, winning line - is derived from the board on demand, so
/// stored and derived state can never diverge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
        }
    }

    /// Applies the current player's mark at the given board index (0-8).
    ///
    /// On success the turn passes to the other player. If the index is
    /// out of range, the square is occupied, or the game has ended,
    /// nothing changes - the no-op mirrors a click that has no effect.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) {
        match self.try_apply(index) {
            Ok(pos) => debug!(%pos, board = %self.board.display(), "mark placed"),
            Err(reason) => debug!(index, %reason, "move rejected"),
        }
    }

    fn try_apply(&mut self, index: usize) -> Result<Position, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds)?;

        if self.status() != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied);
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.to_move = self.to_move.opponent();
        Ok(pos)
    }

    /// Resets to the initial state: empty board, X to move.
    ///
    /// Always succeeds, whatever the current status.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("game reset");
        *self = Self::new();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Returns the game status, derived from the board.
    pub fn status(&self) -> GameStatus {
        if let Some(win) = rules::check_win(&self.board) {
            GameStatus::Won(win.player)
        } else if rules::is_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns the winner, if the game has been won.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(&self.board)
    }

    /// Returns the completed line, if the game has been won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::check_win(&self.board).map(|win| win.line)
    }

    /// Returns the winning line as board indices: three on a win,
    /// empty otherwise.
    pub fn winning_line_indices(&self) -> Vec<usize> {
        self.winning_line()
            .map(|line| line.map(Position::to_index).to_vec())
            .unwrap_or_default()
    }

    /// Returns true if the game has ended in a win or draw.
    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
