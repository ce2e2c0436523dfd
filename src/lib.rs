//! # Connect Four
//!
//! Two-player Connect Four. The game engine is a plain library; a terminal
//! front end built with Ratatui drives it from keyboard and mouse input.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, seats, win detection, session state machine
//! - [`ui`]: Terminal UI: setup form, board view, end-of-game effects
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
