//! Stateless UI rendering for the puzzle.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app::App;
use super::input::KEY_HELP;
use intersections_core::{CardState, Corner, GameSession, Position, ResultKind};

/// Renders the clues, board, card pool and status line.
pub fn draw(frame: &mut Frame, session: &GameSession, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board
            Constraint::Length(4), // Cards
            Constraint::Length(3), // Status
            Constraint::Length(1), // Keys
        ])
        .split(area);

    let title = match session.number() {
        Some(n) => format!("Intersections #{}", n),
        None => "Intersections (practice puzzle)".to_string(),
    };
    let title = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], session);
    draw_pool(frame, chunks[2], session, app);
    draw_status(frame, chunks[3], session, app);

    let keys = Paragraph::new(KEY_HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(keys, chunks[4]);
}

/// The diamond: positions on the edges, clues in the corners they share.
fn draw_board(frame: &mut Frame, area: Rect, session: &GameSession) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(center_rect(area, 72, 9));

    let thirds = |row: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(row)
    };
    let top = thirds(rows[0]);
    let middle = thirds(rows[1]);
    let bottom = thirds(rows[2]);

    draw_clue(frame, top[0], session, Corner::TopLeft);
    draw_slot(frame, top[1], session, Position::Top);
    draw_clue(frame, top[2], session, Corner::TopRight);

    draw_slot(frame, middle[0], session, Position::Left);
    draw_attempts(frame, middle[1], session);
    draw_slot(frame, middle[2], session, Position::Right);

    draw_clue(frame, bottom[0], session, Corner::BottomLeft);
    draw_slot(frame, bottom[1], session, Position::Bottom);
    draw_clue(frame, bottom[2], session, Corner::BottomRight);
}

fn draw_clue(frame: &mut Frame, area: Rect, session: &GameSession, corner: Corner) {
    let clue = Paragraph::new(session.puzzle().clue(corner))
        .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::ITALIC))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(clue, area);
}

fn draw_slot(frame: &mut Frame, area: Rect, session: &GameSession, pos: Position) {
    let board = session.board();

    let (text, style) = match session.word_at(pos) {
        None => ("·".to_string(), Style::default().fg(Color::DarkGray)),
        Some(word) if board.is_locked(pos) => (
            word.to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Some(word) if board.is_flagged(pos) => (
            format!("!{}!", word),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Some(word) => (word.to_string(), Style::default().fg(Color::White)),
    };

    let border = if board.is_locked(pos) {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let slot = Paragraph::new(Line::from(Span::styled(text, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(pos.label())
                .borders(Borders::ALL)
                .border_style(border),
        );
    frame.render_widget(slot, area);
}

fn draw_attempts(frame: &mut Frame, area: Rect, session: &GameSession) {
    let text = if session.submit_enabled() {
        format!("Attempts: {}  [Enter]", session.attempts_remaining())
    } else {
        format!("Attempts: {}", session.attempts_remaining())
    };
    let attempts = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(attempts, centered_line(area));
}

fn draw_pool(frame: &mut Frame, area: Rect, session: &GameSession, app: &App) {
    let mut spans = Vec::new();
    for (i, card) in session.pool().available().enumerate() {
        let mut style = match card.state() {
            CardState::Selected => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            _ => Style::default(),
        };
        if i == app.cursor() {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let text = match card.state() {
            CardState::Selected => format!("<{}>", card.word()),
            _ => format!(" {} ", card.word()),
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }

    let pool = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(Block::default().title("Cards").borders(Borders::ALL));
    frame.render_widget(pool, area);
}

fn draw_status(frame: &mut Frame, area: Rect, session: &GameSession, app: &App) {
    let color = match app.result() {
        Some(ResultKind::Success) => Color::Green,
        Some(ResultKind::Failure) => Color::Red,
        Some(ResultKind::Partial) if !session.game_complete() => Color::Yellow,
        _ => Color::White,
    };
    let status = Paragraph::new(app.status())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

/// The middle line of a three-line cell.
fn centered_line(area: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(1) / 2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area)[1]
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
