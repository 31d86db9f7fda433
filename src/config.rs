//! Match configuration: grid extent, run length and player roster

use std::path::Path;

use rustc_hash::FxHashSet;
use tracing::warn;

use crate::board::Pos;
use crate::error::ConfigError;
use crate::rules::WIN_LENGTH;

/// Largest accepted row or column count
pub const MAX_EXTENT: i32 = 1000;

/// Grid extent and winning run length
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
    pub win_length: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            rows: 30,
            cols: 30,
            win_length: WIN_LENGTH,
        }
    }
}

impl GridConfig {
    /// Whether `pos` lies inside the grid
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (0..self.rows).contains(&pos.row) && (0..self.cols).contains(&pos.col)
    }
}

/// Player names, in turn order
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub names: Vec<String>,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            names: vec!["gamer1".to_string(), "gamer2".to_string()],
        }
    }
}

/// Match configuration, loadable from TOML.
///
/// ```toml
/// [grid]
/// rows = 30
/// cols = 30
/// win_length = 5
///
/// [players]
/// names = ["gamer1", "gamer2"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub grid: GridConfig,
    pub players: PlayersConfig,
}

impl MatchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_EXTENT).contains(&self.grid.rows) {
            return Err(ConfigError::Validation(format!(
                "grid.rows must be in 1..={MAX_EXTENT}"
            )));
        }
        if !(1..=MAX_EXTENT).contains(&self.grid.cols) {
            return Err(ConfigError::Validation(format!(
                "grid.cols must be in 1..={MAX_EXTENT}"
            )));
        }
        if self.grid.win_length < 2 {
            return Err(ConfigError::Validation("grid.win_length must be >= 2".into()));
        }
        let names = &self.players.names;
        if names.len() < 2 {
            return Err(ConfigError::Validation(
                "players.names needs at least two players".into(),
            ));
        }
        if names.len() > u8::MAX as usize {
            return Err(ConfigError::Validation(format!(
                "players.names supports at most {} players",
                u8::MAX
            )));
        }
        if names.iter().any(|n| n.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "players.names must not contain empty names".into(),
            ));
        }
        let unique: FxHashSet<&str> = names.iter().map(String::as_str).collect();
        if unique.len() != names.len() {
            return Err(ConfigError::Validation(
                "players.names must be distinct".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = MatchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid.rows, 30);
        assert_eq!(config.grid.cols, 30);
        assert_eq!(config.grid.win_length, 5);
        assert_eq!(config.players.names, vec!["gamer1", "gamer2"]);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = MatchConfig::from_toml("[grid]\nrows = 15\n").unwrap();
        assert_eq!(config.grid.rows, 15);
        assert_eq!(config.grid.cols, 30);
        assert_eq!(config.players, PlayersConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let toml = r#"
            [grid]
            rows = 19
            cols = 19
            win_length = 4

            [players]
            names = ["red", "blue", "green"]
        "#;
        let config = MatchConfig::from_toml(toml).unwrap();
        assert_eq!(config.grid.win_length, 4);
        assert_eq!(config.players.names.len(), 3);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            MatchConfig::from_toml("[grid]\nrows = 0\n"),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            MatchConfig::from_toml("[grid]\nwin_length = 1\n"),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            MatchConfig::from_toml("[players]\nnames = [\"solo\"]\n"),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            MatchConfig::from_toml("[players]\nnames = [\"a\", \"a\"]\n"),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            MatchConfig::from_toml("[players]\nnames = [\"a\", \" \"]\n"),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let mut config = MatchConfig::default();
        config.grid.rows = 2_000_000_000;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        config.grid.rows = MAX_EXTENT;
        config.grid.cols = MAX_EXTENT + 1;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        config.grid.cols = MAX_EXTENT;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            MatchConfig::from_toml("[grid\nrows = 3"),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("definitely/not/here/match.toml");
        let config = MatchConfig::load_or_default(path).unwrap();
        assert_eq!(config, MatchConfig::default());
        assert!(matches!(
            MatchConfig::load(path),
            Err(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn test_grid_contains() {
        let grid = GridConfig::default();
        assert!(grid.contains(Pos::new(0, 0)));
        assert!(grid.contains(Pos::new(29, 29)));
        assert!(!grid.contains(Pos::new(30, 0)));
        assert!(!grid.contains(Pos::new(0, -1)));
    }
}
