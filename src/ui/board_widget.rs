use std::time::Duration;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::game::{Coord, GameSession, WinningLine};

use super::setup::Player;

const CELL_WIDTH: u16 = 3;
/// Border plus padding on each side of the cells
const MARGIN: u16 = 2;
/// Preview row, top border and bottom border
const CHROME_ROWS: u16 = 3;

const SPIN_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];
const SPIN_FRAME_TIME: Duration = Duration::from_millis(120);

/// Where the board text sits on screen, used to map mouse positions back to
/// columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    pub area: Rect,
    pub columns: usize,
}

impl BoardGeometry {
    /// Center a `rows` x `columns` board inside `outer`
    pub fn centered(outer: Rect, rows: usize, columns: usize) -> Self {
        let width = (columns as u16 * CELL_WIDTH + 2 * MARGIN).min(outer.width);
        let height = (rows as u16 + CHROME_ROWS).min(outer.height);
        let x = outer.x + (outer.width - width) / 2;
        let y = outer.y + (outer.height - height) / 2;
        BoardGeometry {
            area: Rect::new(x, y, width, height),
            columns,
        }
    }

    /// Column under a screen position, anywhere from the preview row down
    pub fn column_at(&self, x: u16, y: u16) -> Option<usize> {
        let area = self.area;
        if y < area.y || y >= area.y + area.height || x < area.x + MARGIN {
            return None;
        }
        let col = ((x - area.x - MARGIN) / CELL_WIDTH) as usize;
        (col < self.columns).then_some(col)
    }
}

/// Spinning winning pieces: the line and how long it has been spinning
#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub line: WinningLine,
    pub elapsed: Duration,
}

impl Highlight {
    fn glyph(&self, at: Coord) -> Option<char> {
        if !self.line.contains(&at) {
            return None;
        }
        let frame = (self.elapsed.as_millis() / SPIN_FRAME_TIME.as_millis()) as usize;
        Some(SPIN_FRAMES[frame % SPIN_FRAMES.len()])
    }
}

fn piece(glyph: char, color: Color) -> Span<'static> {
    Span::styled(format!(" {glyph} "), Style::default().fg(color))
}

/// Render the board with a preview piece over the hovered column
pub fn render_board(
    frame: &mut Frame,
    session: &GameSession<Player>,
    hover: usize,
    highlight: Option<&Highlight>,
    geometry: &BoardGeometry,
) {
    let board = session.board();
    let inner = board.width() * CELL_WIDTH as usize;
    let mut lines = Vec::with_capacity(board.height() + CHROME_ROWS as usize);

    let mut preview = vec![Span::raw("  ")];
    for col in 0..board.width() {
        if col == hover && !session.is_over() {
            preview.push(piece('●', session.current_player().color));
        } else {
            preview.push(Span::raw("   "));
        }
    }
    preview.push(Span::raw("  "));
    lines.push(Line::from(preview));

    lines.push(Line::from(format!(" ╔{}╗ ", "═".repeat(inner))));

    for row in 0..board.height() {
        let mut spans = vec![Span::raw(" ║")];
        for col in 0..board.width() {
            let span = match session.occupant_at(row, col) {
                None => piece('·', Color::DarkGray),
                Some(player) => {
                    match highlight.and_then(|h| h.glyph(Coord::new(row, col))) {
                        Some(glyph) => Span::styled(
                            format!(" {glyph} "),
                            Style::default()
                                .fg(player.color)
                                .add_modifier(Modifier::BOLD),
                        ),
                        None => piece('●', player.color),
                    }
                }
            };
            spans.push(span);
        }
        spans.push(Span::raw("║ "));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(format!(" ╚{}╝ ", "═".repeat(inner))));

    frame.render_widget(Paragraph::new(lines), geometry.area);
}
