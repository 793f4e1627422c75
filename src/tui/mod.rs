//! Terminal frontend: renders the board and feeds input to the engine.

mod app;
mod input;
mod ui;

pub use app::App;
pub use ui::draw;
