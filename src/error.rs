use std::path::PathBuf;

/// Errors returned when a move is rejected.
///
/// Every variant is raised before the board is touched, so a rejected move
/// never leaves a partially-applied state behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of bounds (board has {width} columns)")]
    InvalidColumn { column: usize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is already over")]
    GameAlreadyOver,
}

/// Errors that can occur when creating a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board of {height}x{width} is too small, both dimensions must be at least 4")]
    TooSmall { height: usize, width: usize },
}

/// Errors raised by the new-game form before a session is created.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("{0} is not a supported color!")]
    UnsupportedColor(String),

    #[error("both players picked {0}, choose two different colors")]
    SameColor(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::InvalidColumn {
            column: 9,
            width: 7,
        };
        assert_eq!(
            err.to_string(),
            "column 9 is out of bounds (board has 7 columns)"
        );
        assert_eq!(
            MoveError::ColumnFull { column: 2 }.to_string(),
            "column 2 is full"
        );
        assert_eq!(
            MoveError::GameAlreadyOver.to_string(),
            "the game is already over"
        );
    }

    #[test]
    fn test_board_error_display() {
        let err = BoardError::TooSmall {
            height: 3,
            width: 7,
        };
        assert_eq!(
            err.to_string(),
            "board of 3x7 is too small, both dimensions must be at least 4"
        );
    }

    #[test]
    fn test_setup_error_display() {
        assert_eq!(
            SetupError::UnsupportedColor("blurple".to_string()).to_string(),
            "blurple is not a supported color!"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.height must be >= 4".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.height must be >= 4"
        );
    }
}
