//! Error types for placement and configuration

use std::path::PathBuf;

use crate::board::Pos;

/// Reasons a placement is rejected.
///
/// All of them are recoverable: the match state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("cell {0} is already occupied")]
    CellOccupied(Pos),

    #[error("cell {pos} is outside the {rows}x{cols} grid")]
    CoordinateOutOfBounds { pos: Pos, rows: i32, cols: i32 },

    #[error("the match has already ended")]
    MatchAlreadyEnded,
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
    fn test_placement_error_display() {
        let err = PlacementError::CellOccupied(Pos::new(3, 4));
        assert_eq!(err.to_string(), "cell (3, 4) is already occupied");

        let err = PlacementError::CoordinateOutOfBounds {
            pos: Pos::new(30, 0),
            rows: 30,
            cols: 30,
        };
        assert_eq!(err.to_string(), "cell (30, 0) is outside the 30x30 grid");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("rows must be >= 1".to_string());
        assert_eq!(err.to_string(), "config validation error: rows must be >= 1");
    }
}
