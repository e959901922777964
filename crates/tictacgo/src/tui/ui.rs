//! Stateless rendering of the board, score and status.

use super::app::App;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictacgo_core::{GameMode, GameSession, Mark, Position, Square};

const HELP: &str = "arrows/1-9 move  enter play  r new game  m mode  d difficulty  q quit";

/// Draws the whole screen.
pub fn draw<R: Rng>(frame: &mut Frame, app: &App<R>) {
    let session = app.controller().session();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Score
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(2), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(title_line(session))
        .style(bold(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    frame.render_widget(score_line(session), chunks[1]);

    draw_board(frame, chunks[2], session, app.cursor());

    let muted = Style::default().fg(Color::Gray);
    let status = Paragraph::new(vec![
        Line::from(Span::styled(app.status_line(), bold(Color::Yellow))),
        Line::from(Span::styled(app.notice(), muted)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn title_line(session: &GameSession) -> String {
    match session.mode() {
        GameMode::HumanVsComputer => {
            format!("TicTacGo - Playing vs Computer ({})", session.difficulty())
        }
        GameMode::HumanVsHuman => "TicTacGo - Two Player Game".to_string(),
    }
}

fn score_line(session: &GameSession) -> Paragraph<'static> {
    let score = session.score();
    let x_wins = format!("X wins {}", score.wins(Mark::X));
    let draws = format!("Draws {}", score.draws());
    let o_wins = format!("O wins {}", score.wins(Mark::O));

    Paragraph::new(Line::from(vec![
        Span::styled(x_wins, mark_style(Mark::X)),
        Span::raw("    "),
        Span::styled(draws, Style::default().fg(Color::Gray)),
        Span::raw("    "),
        Span::styled(o_wins, mark_style(Mark::O)),
    ]))
    .alignment(Alignment::Center)
}

fn draw_board(frame: &mut Frame, area: Rect, session: &GameSession, cursor: Position) {
    let board_area = center_rect(area, 29, 11);

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

    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(9),
                Constraint::Length(1),
                Constraint::Length(9),
                Constraint::Length(1),
                Constraint::Length(9),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            let cell = row * 3 + col;
            draw_cell(frame, cols[col * 2], session, cursor, cell);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, session: &GameSession, cursor: Position, cell: usize) {
    let winning = session
        .status()
        .line()
        .is_some_and(|line| line.contains(cell));
    let last = session.last_move() == Some(cell);

    let (text, mut style) = match session.board().get(cell) {
        Some(Square::Occupied(mark)) => (mark.to_string(), mark_style(mark)),
        _ => ((cell + 1).to_string(), Style::default().fg(Color::DarkGray)),
    };

    if winning {
        style = style.bg(Color::Green).add_modifier(Modifier::BOLD);
    } else if last {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    let border = if cursor.to_index() == cell {
        bold(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    let widget = Paragraph::new(Span::styled(text, style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(widget, area);
}

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::X => bold(Color::Blue),
        Mark::O => bold(Color::Magenta),
    }
}

fn bold(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
