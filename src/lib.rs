//! Trigrid - tic-tac-toe with a presentation-agnostic engine
//!
//! The library is the game engine: board state, move validation with
//! turn alternation, and win/draw detection. The terminal frontend in
//! the binary consumes it through the same handful of calls any other
//! presentation layer would use.
//!
//! # Example
//!
//! ```
//! use trigrid::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! game.apply_move(0); // X
//! game.apply_move(4); // O
//! game.apply_move(4); // occupied: silent no-op
//!
//! assert_eq!(game.current_player(), Player::X);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod engine;
mod position;
mod types;

pub mod rules;

// Crate-level exports - Game engine
pub use engine::Game;

// Crate-level exports - Domain types
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
