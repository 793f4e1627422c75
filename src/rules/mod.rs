//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the engine and any frontend derive status from the
//! same source of truth.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Win, check_win, check_winner};
