use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::{GameSession, GameStatus, Seat};

use super::board_widget::{self, BoardGeometry, Highlight};
use super::setup::{parse_color, Player, SetupForm};

fn screen_chunks(frame: &Frame, body: u16, footer: u16) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Header
            Constraint::Min(body),      // Board / form
            Constraint::Length(3),      // Message
            Constraint::Length(footer), // Controls
        ])
        .split(frame.area())
}

/// Render the play screen. Returns where the board was drawn.
pub fn render(
    frame: &mut Frame,
    session: &GameSession<Player>,
    hover: usize,
    highlight: Option<&Highlight>,
    message: Option<&str>,
) -> BoardGeometry {
    let chunks = screen_chunks(frame, 10, 3);

    render_header(frame, session, chunks[0]);

    let board = session.board();
    let geometry = BoardGeometry::centered(chunks[1], board.height(), board.width());
    board_widget::render_board(frame, session, hover, highlight, &geometry);

    render_message(frame, message, chunks[2]);
    render_controls(
        frame,
        "←/→ or mouse: Move  |  Enter/click: Drop  |  N: New game  |  Q: Quit",
        chunks[3],
    );

    geometry
}

fn render_header(frame: &mut Frame, session: &GameSession<Player>, area: Rect) {
    let line = match session.status() {
        GameStatus::InProgress => {
            let player = session.current_player();
            Line::from(vec![
                Span::raw("Current Player: "),
                Span::styled(
                    player.label.clone(),
                    Style::default().fg(player.color).add_modifier(Modifier::BOLD),
                ),
            ])
        }
        GameStatus::Won(_) | GameStatus::Tie => Line::from(Span::styled(
            "Game Over",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    };

    let header = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, text: &str, area: Rect) {
    let controls = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

/// Render the new-game form
pub fn render_setup(frame: &mut Frame, form: &SetupForm) {
    let chunks = screen_chunks(frame, 6, 3);

    let header = Paragraph::new("Pick a color for each player")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );
    frame.render_widget(header, chunks[0]);

    let lines: Vec<Line> = [Seat::First, Seat::Second]
        .into_iter()
        .map(|seat| field_line(form, seat))
        .collect();
    let fields = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("New Game"));
    frame.render_widget(fields, chunks[1]);

    let error = form.error().map(|e| e.to_string());
    render_message(frame, error.as_deref(), chunks[2]);
    render_controls(frame, "Tab: Switch field  |  Enter: Start  |  Esc: Quit", chunks[3]);
}

fn field_line(form: &SetupForm, seat: Seat) -> Line<'_> {
    let focused = form.focus() == seat;
    let text = form.field(seat);

    // Preview swatch once the text names a real color
    let swatch = match parse_color(text) {
        Ok(player) => Span::styled(" ● ", Style::default().fg(player.color)),
        Err(_) => Span::raw("   "),
    };
    let marker = if focused { "▶ " } else { "  " };
    let value_style = if focused {
        Style::default().add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::raw(format!("{marker}{} player: ", seat.name())),
        Span::styled(format!("{text:<12}"), value_style),
        swatch,
    ])
}
