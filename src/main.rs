//! Terminal tic-tac-toe.
//!
//! Two players share the keyboard; the engine in the library crate
//! owns all game state and the loop here only draws and forwards
//! input. One synchronous thread is all a local hot-seat game needs.

#![warn(missing_docs)]

mod tui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tui::App;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    info!("Starting trigrid TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new();
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| tui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('r') => app.restart(),
                    KeyCode::Enter | KeyCode::Char(' ') => app.place_at_cursor(),
                    KeyCode::Char(c @ '1'..='9') => {
                        app.place_at(c as usize - '1' as usize);
                    }
                    code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                        app.move_cursor(code);
                    }
                    _ => {}
                }
            }
        }
    }
}
