//! UI rendering using ratatui.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use trigrid::{Board, Player, Position, Square};

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_board(f, chunks[1], app);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows: move | Enter/1-9: place | R: Reset | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

/// Renders the 3x3 board with winning-line and cursor highlights.
fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 12);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], app, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], app, 3);
    render_separator(f, rows[3]);
    render_row(f, rows[4], app, 6);
}

fn render_row(f: &mut Frame, area: Rect, app: &App, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_square(f, cols[0], app, start);
    render_vertical_sep(f, cols[1]);
    render_square(f, cols[2], app, start + 1);
    render_vertical_sep(f, cols[3]);
    render_square(f, cols[4], app, start + 2);
}

fn render_square(f: &mut Frame, area: Rect, app: &App, index: usize) {
    let pos = Position::from_index(index).unwrap();
    let (text, mut style) = square_style(app.game().board(), pos);

    let winning = app
        .game()
        .winning_line()
        .is_some_and(|line| line.contains(&pos));
    if winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if pos == app.cursor() && !app.game().is_over() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn square_style(board: &Board, pos: Position) -> (String, Style) {
    match board.get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    }
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
