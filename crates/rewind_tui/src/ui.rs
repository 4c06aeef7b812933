//! Stateless UI rendering for rewindable tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{Player, Position, Square, Timeline, WinLine};

use crate::app::App;

/// Renders the whole screen: title, board, move list, status, key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title
            Constraint::Min(11),    // Board + move list
            Constraint::Length(3),  // Status
            Constraint::Length(1),  // Help
        ])
        .split(area);

    let title = Paragraph::new("Rewindable Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(26)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_move_list(frame, body[1], app.timeline());

    let status = Paragraph::new(app.timeline().status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help =
        Paragraph::new("arrows: move | enter/1-9: place | [ ]: rewind | s: sort | r: restart | q: quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 23, 11);

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

    let win = app.timeline().status().win_line().copied();

    draw_row(frame, rows[0], app, win.as_ref(), 0);
    draw_separator(frame, rows[1]);
    draw_row(frame, rows[2], app, win.as_ref(), 1);
    draw_separator(frame, rows[3]);
    draw_row(frame, rows[4], app, win.as_ref(), 2);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, win: Option<&WinLine>, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    for col in 0..3 {
        let position = Position::ALL[row * 3 + col];
        draw_cell(frame, cols[col * 2], app, win, position);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, win: Option<&WinLine>, position: Position) {
    let square = app.timeline().current().get(position);

    let base_style = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    // Squares on the winning line get the winner treatment.
    let style = if win.is_some_and(|w| w.line().contains(&position)) {
        base_style.fg(Color::Green)
    } else {
        base_style
    };
    let style = if position == app.cursor() {
        style.bg(Color::White).fg(Color::Black)
    } else {
        style
    };

    let glyph = format!(" {:1} ", square.glyph());
    let paragraph =
        Paragraph::new(Line::from(Span::styled(glyph, style))).alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_move_list(frame: &mut Frame, area: Rect, timeline: &Timeline) {
    let current = timeline.current_move();

    let lines: Vec<Line> = timeline
        .entries()
        .iter()
        .map(|entry| {
            let style = if entry.is_latest() {
                // Plain status text, not a jump target.
                Style::default().fg(Color::DarkGray)
            } else if entry.index() == current {
                Style::default().fg(Color::Black).bg(Color::White)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(entry.label(), style))
        })
        .collect();

    let list = Paragraph::new(lines).block(Block::default().title("Moves").borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("───────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
