use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::Backend, Terminal};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{GameSession, Outcome, Seat, WinningLine};

use super::board_widget::{BoardGeometry, Highlight};
use super::effects::{Effect, EffectQueue};
use super::game_view;
use super::setup::{Player, SetupForm};

const TICK: Duration = Duration::from_millis(50);

/// A game in progress plus the UI state that belongs to it
struct Match {
    session: GameSession<Player>,
    hover: usize,
    effects: EffectQueue,
    highlight: Option<(WinningLine, Instant)>,
    announcement: Option<String>,
}

enum Screen {
    Setup(SetupForm),
    Playing(Match),
}

pub struct App {
    config: AppConfig,
    screen: Screen,
    should_quit: bool,
    message: Option<String>,
    board_geometry: Option<BoardGeometry>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let form = SetupForm::new(config.players.first.clone(), config.players.second.clone());
        App {
            config,
            screen: Screen::Setup(form),
            should_quit: false,
            message: None,
            board_geometry: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.tick(Instant::now());
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle terminal events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key(key, Instant::now())
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse, Instant::now()),
                _ => {}
            }
        }
        Ok(())
    }

    /// Fire effects whose delay has passed
    fn tick(&mut self, now: Instant) {
        let Screen::Playing(game) = &mut self.screen else {
            return;
        };
        for effect in game.effects.take_due(now) {
            match effect {
                Effect::Highlight(line) => game.highlight = Some((line, now)),
                Effect::Announce(text) => game.announcement = Some(text),
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match &mut self.screen {
            Screen::Setup(form) => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                    form.toggle_focus()
                }
                KeyCode::Backspace => form.backspace(),
                KeyCode::Enter => self.start_game(),
                KeyCode::Char(c) => form.push(c),
                _ => {}
            },
            Screen::Playing(game) => {
                // Clear message on any key press
                self.message = None;

                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                    KeyCode::Left => game.hover = game.hover.saturating_sub(1),
                    KeyCode::Right => {
                        game.hover = (game.hover + 1).min(game.session.board().width() - 1)
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        let column = game.hover;
                        self.drop_piece(column, now);
                    }
                    KeyCode::Char('n') => self.new_game(),
                    _ => {}
                }
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let Screen::Playing(game) = &mut self.screen else {
            return;
        };
        let Some(column) = self
            .board_geometry
            .and_then(|g| g.column_at(mouse.column, mouse.row))
        else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Moved => game.hover = column,
            MouseEventKind::Down(MouseButton::Left) => {
                game.hover = column;
                self.message = None;
                self.drop_piece(column, now);
            }
            _ => {}
        }
    }

    /// Leave the setup form if both colors are valid
    fn start_game(&mut self) {
        let Screen::Setup(form) = &mut self.screen else {
            return;
        };
        let Ok([first, second]) = form.submit() else {
            return;
        };

        let board = &self.config.board;
        match GameSession::with_size(first, second, board.height, board.width) {
            Ok(session) => {
                info!(
                    first = %session.player(Seat::First).label,
                    second = %session.player(Seat::Second).label,
                    "game started"
                );
                self.screen = Screen::Playing(Match {
                    hover: session.board().width() / 2,
                    session,
                    effects: EffectQueue::new(),
                    highlight: None,
                    announcement: None,
                });
                self.message = None;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Back to the setup form, keeping the current colors
    fn new_game(&mut self) {
        if let Screen::Playing(game) = &self.screen {
            let [first, second] = game.session.players();
            self.screen = Screen::Setup(SetupForm::new(first.label.clone(), second.label.clone()));
            self.board_geometry = None;
        }
    }

    /// Drop the current player's piece in a column
    fn drop_piece(&mut self, column: usize, now: Instant) {
        let Screen::Playing(game) = &mut self.screen else {
            return;
        };

        match game.session.play_move(column) {
            Ok(report) => match report.outcome {
                Outcome::Continue { .. } => {}
                Outcome::Win { winner, line } => {
                    let effects = &self.config.effects;
                    game.effects
                        .schedule(now, effects.highlight_delay(), Effect::Highlight(line));
                    game.effects.schedule(
                        now,
                        effects.announce_delay(),
                        Effect::Announce(format!("{} player won!", game.session.player(winner).label)),
                    );
                }
                Outcome::Tie => {
                    game.effects.schedule(
                        now,
                        self.config.effects.announce_delay(),
                        Effect::Announce("Tie!".to_string()),
                    );
                }
            },
            Err(MoveError::ColumnFull { .. }) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::GameAlreadyOver) => {
                self.message = Some("Game over! Press 'n' for a new game.".to_string());
            }
            Err(err @ MoveError::InvalidColumn { .. }) => {
                warn!(%err, "move rejected");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        match &self.screen {
            Screen::Setup(form) => game_view::render_setup(frame, form),
            Screen::Playing(game) => {
                let now = Instant::now();
                let highlight = game.highlight.map(|(line, since)| Highlight {
                    line,
                    elapsed: now.saturating_duration_since(since),
                });
                let message = self.message.as_deref().or(game.announcement.as_deref());
                let geometry =
                    game_view::render(frame, &game.session, game.hover, highlight.as_ref(), message);
                self.board_geometry = Some(geometry);
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
