//! Frame rendering: board grid, turn indicator, outcome dialog.

use gridmark::{Board, Cell, Marker, Outcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;

/// Draws the full frame.
pub fn draw(f: &mut Frame, app: &App) {
    let screen = app.screen();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(11),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new("Gridmark")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    render_turn_indicator(f, chunks[1], screen.active_marker());
    render_board(f, chunks[2], screen.board(), app.cursor());

    let help =
        Paragraph::new("Arrows to move, Enter to place, 1-9 to jump, 'r' to restart, 'q' to quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
    f.render_widget(help, chunks[3]);

    if let Some(outcome) = screen.dialog() {
        render_dialog(f, outcome);
    }
}

fn marker_color(marker: Marker) -> Color {
    match marker {
        Marker::X => Color::Blue,
        Marker::O => Color::Red,
    }
}

// Both marker symbols stay on screen; only the one to move is lit.
fn render_turn_indicator(f: &mut Frame, area: Rect, active: Marker) {
    let style_for = |marker: Marker| {
        if marker == active {
            Style::default()
                .fg(marker_color(marker))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };
    let line = Line::from(vec![
        Span::styled("X", style_for(Marker::X)),
        Span::raw("   "),
        Span::styled("O", style_for(Marker::O)),
    ]);
    let indicator = Paragraph::new(line).alignment(Alignment::Center);
    f.render_widget(indicator, area);
}

/// Renders the 3x3 grid with the cursor cell highlighted.
fn render_board(f: &mut Frame, area: Rect, board: &Board, cursor: usize) {
    let board_area = center_rect(area, 40, 11);
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

    render_row(f, rows[0], board, 0, cursor);
    render_separator(f, rows[1]);
    render_row(f, rows[2], board, 3, cursor);
    render_separator(f, rows[3]);
    render_row(f, rows[4], board, 6, cursor);
}

fn render_row(f: &mut Frame, area: Rect, board: &Board, start: usize, cursor: usize) {
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

    render_cell(f, cols[0], board, start, cursor);
    render_vertical_sep(f, cols[1]);
    render_cell(f, cols[2], board, start + 1, cursor);
    render_vertical_sep(f, cols[3]);
    render_cell(f, cols[4], board, start + 2, cursor);
}

fn render_cell(f: &mut Frame, area: Rect, board: &Board, index: usize, cursor: usize) {
    let (text, mut style) = match board.cells()[index] {
        Cell::Empty => (
            (index + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(marker) => (
            marker.to_string(),
            Style::default()
                .fg(marker_color(marker))
                .add_modifier(Modifier::BOLD),
        ),
    };
    if index == cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    let cell = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(cell, area);
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

/// Centered modal announcing the outcome, drawn over the board.
fn render_dialog(f: &mut Frame, outcome: Outcome) {
    let message = match outcome {
        Outcome::Won(marker) => format!("{marker} wins!"),
        Outcome::Tied => "It's a tie!".to_string(),
    };
    let area = center_rect(f.area(), 38, 5);
    f.render_widget(Clear, area);
    let dialog = Paragraph::new(format!("{message}\n\nEnter for a new round, 'q' to quit"))
        .alignment(Alignment::Center)
        .block(Block::default().title("Game over").borders(Borders::ALL));
    f.render_widget(dialog, area);
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
