use std::path::PathBuf;

use crate::WIDTH;

/// Errors from applying a move to a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column {0} out of range, columns must be between 0 and {}", WIDTH - 1)]
    ColumnOutOfRange(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Errors from driving a game session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("the game is over, start a new game or restart")]
    GameOver,

    #[error("it is not the {0} turn")]
    WrongTurn(&'static str),

    #[error("search found no playable column")]
    NoMove,

    #[error(transparent)]
    Board(#[from] BoardError),
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
    fn test_board_error_display() {
        assert_eq!(
            BoardError::ColumnOutOfRange(9).to_string(),
            "column 9 out of range, columns must be between 0 and 6"
        );
        assert_eq!(BoardError::ColumnFull(2).to_string(), "column 2 is full");
    }

    #[test]
    fn test_session_error_wraps_board_error() {
        let err: SessionError = BoardError::ColumnFull(4).into();
        assert_eq!(err, SessionError::Board(BoardError::ColumnFull(4)));
        assert_eq!(err.to_string(), "column 4 is full");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("engine.depth must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: engine.depth must be >= 1"
        );
    }
}
