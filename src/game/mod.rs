//! Core Connect Four game logic: board representation, seats, win detection,
//! and the turn state machine.

mod board;
mod player;
pub mod rules;
mod session;

pub use board::{Board, Cell, Coord, DEFAULT_COLS, DEFAULT_ROWS, MIN_DIMENSION};
pub use player::Seat;
pub use rules::WinningLine;
pub use session::{GameSession, GameStatus, MoveReport, Outcome};

pub use crate::error::{BoardError, MoveError};
