use std::str::FromStr;

use ratatui::style::Color;

use crate::error::SetupError;
use crate::game::Seat;

/// How the terminal front end describes a player: the color text as typed,
/// and the terminal color it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub label: String,
    pub color: Color,
}

/// Resolve a color name, `#rrggbb` value or palette index.
pub fn parse_color(input: &str) -> Result<Player, SetupError> {
    let label = input.trim();
    if label.is_empty() {
        return Err(SetupError::UnsupportedColor(String::new()));
    }

    let color = Color::from_str(label)
        .map_err(|_| SetupError::UnsupportedColor(label.to_string()))?;
    Ok(Player {
        label: label.to_string(),
        color,
    })
}

/// The new-game form: one color field per seat.
#[derive(Debug, Clone)]
pub struct SetupForm {
    fields: [String; 2],
    focus: Seat,
    error: Option<SetupError>,
}

impl SetupForm {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        SetupForm {
            fields: [first.into(), second.into()],
            focus: Seat::First,
            error: None,
        }
    }

    pub fn field(&self, seat: Seat) -> &str {
        &self.fields[seat.index()]
    }

    pub fn focus(&self) -> Seat {
        self.focus
    }

    pub fn error(&self) -> Option<&SetupError> {
        self.error.as_ref()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.other();
    }

    pub fn push(&mut self, c: char) {
        self.error = None;
        self.fields[self.focus.index()].push(c);
    }

    pub fn backspace(&mut self) {
        self.error = None;
        self.fields[self.focus.index()].pop();
    }

    /// Validate both fields. On failure the error is kept for display and
    /// focus moves to the offending field.
    pub fn submit(&mut self) -> Result<[Player; 2], SetupError> {
        let result = self.validate();
        if let Err(err) = &result {
            self.error = Some(err.clone());
        }
        result
    }

    fn validate(&mut self) -> Result<[Player; 2], SetupError> {
        let first = parse_color(&self.fields[0]).inspect_err(|_| self.focus = Seat::First)?;
        let second = parse_color(&self.fields[1]).inspect_err(|_| self.focus = Seat::Second)?;

        if first.label.eq_ignore_ascii_case(&second.label) || first.color == second.color {
            self.focus = Seat::Second;
            return Err(SetupError::SameColor(second.label));
        }
        Ok([first, second])
    }
}
