//! Terminal front end: new-game form, board view with column hover, and the
//! delayed end-of-game effects.

mod app;
pub mod board_widget;
pub mod effects;
mod game_view;
pub mod setup;

pub use app::App;
pub use setup::{parse_color, Player, SetupForm};
