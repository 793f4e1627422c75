//! Application state and logic.

use super::input;
use crossterm::event::KeyCode;
use tracing::debug;
use trigrid::{Game, GameStatus, Position};

/// Main application state: the engine plus a keyboard cursor.
pub struct App {
    game: Game,
    cursor: Position,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Status line derived from the engine each frame.
    pub fn status_line(&self) -> String {
        match self.game.status() {
            GameStatus::InProgress => {
                format!("Next player: {:?}", self.game.current_player())
            }
            GameStatus::Won(player) => format!("Winner: {:?}", player),
            GameStatus::Draw => "Draw!".to_string(),
        }
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(self.cursor, key);
    }

    /// Places the current player's mark at the cursor.
    pub fn place_at_cursor(&mut self) {
        self.place_at(self.cursor.to_index());
    }

    /// Places the current player's mark at the given board index.
    ///
    /// Invalid placements are absorbed by the engine; the UI simply
    /// shows no change, like clicking a dead square.
    pub fn place_at(&mut self, index: usize) {
        debug!(index, "placing mark");
        self.game.apply_move(index);
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.game.reset();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
