//! Configuration file loading for the terminal front end.
//!
//! Settings come from `xiangqi.toml` in the current directory (or a path given
//! with `--config`). Every field is optional; command-line flags override
//! whatever the file says.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use xiangqi_core::Color;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {path:?}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A configured search depth is zero.
    #[error("Search depth for {0:?} must be at least 1")]
    InvalidDepth(Difficulty),
}

/// Engine strength, mapped to a search depth by [`DepthTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// The side a human plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Red,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::Red => Color::Red,
            Side::Black => Color::Black,
        }
    }
}

/// Search depth in plies for each difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DepthTable {
    #[serde(default = "default_easy")]
    pub easy: u32,
    #[serde(default = "default_medium")]
    pub medium: u32,
    #[serde(default = "default_hard")]
    pub hard: u32,
}

fn default_easy() -> u32 {
    2
}

fn default_medium() -> u32 {
    3
}

fn default_hard() -> u32 {
    4
}

impl Default for DepthTable {
    fn default() -> Self {
        DepthTable {
            easy: default_easy(),
            medium: default_medium(),
            hard: default_hard(),
        }
    }
}

impl DepthTable {
    /// Returns the depth configured for `difficulty`.
    pub fn depth(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

/// Front end configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Default engine strength. Defaults to medium.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// The side the human plays in `play`. Defaults to red.
    #[serde(default)]
    pub human_side: Side,
    /// Depth for each difficulty.
    #[serde(default)]
    pub depths: DepthTable,
}

impl Config {
    /// Loads the configuration.
    ///
    /// With `path` set the file must exist. Without it, `xiangqi.toml` in the
    /// current directory is read if present and defaults are used otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read,
    /// [`ConfigError::ParseError`] if it contains invalid TOML, or
    /// [`ConfigError::InvalidDepth`] if a depth is zero.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };
        if !required && !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses and validates configuration text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the default configuration file path.
    pub fn config_path() -> PathBuf {
        PathBuf::from("xiangqi.toml")
    }

    /// Resolves the search depth: an explicit depth wins, then an explicit
    /// difficulty, then the configured difficulty.
    pub fn resolve_depth(&self, depth: Option<u32>, difficulty: Option<Difficulty>) -> u32 {
        depth
            .unwrap_or_else(|| self.depths.depth(difficulty.unwrap_or(self.difficulty)))
            .max(1)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            if self.depths.depth(difficulty) == 0 {
                return Err(ConfigError::InvalidDepth(difficulty));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
difficulty = "hard"
human_side = "black"

[depths]
easy = 1
medium = 2
hard = 5
"#;

        let config = Config::parse(toml_content).unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.human_side, Side::Black);
        assert_eq!(config.depths.depth(Difficulty::Easy), 1);
        assert_eq!(config.depths.depth(Difficulty::Hard), 5);
        assert_eq!(config.resolve_depth(None, None), 5);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.human_side, Side::Red);
        assert_eq!(config.depths, DepthTable { easy: 2, medium: 3, hard: 4 });
    }

    #[test]
    fn test_partial_depth_table() {
        let config = Config::parse("[depths]\nhard = 6\n").unwrap();
        assert_eq!(config.depths.easy, 2);
        assert_eq!(config.depths.medium, 3);
        assert_eq!(config.depths.hard, 6);
    }

    #[test]
    fn test_resolve_depth_precedence() {
        let config = Config::default();
        assert_eq!(config.resolve_depth(None, None), 3);
        assert_eq!(config.resolve_depth(None, Some(Difficulty::Easy)), 2);
        assert_eq!(config.resolve_depth(Some(7), Some(Difficulty::Easy)), 7);
        assert_eq!(config.resolve_depth(Some(0), None), 1);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            Config::parse("difficulty = \"impossible\""),
            Err(ConfigError::ParseError(_))
        ));
        assert!(matches!(
            Config::parse("[depths]\nmedium = 0\n"),
            Err(ConfigError::InvalidDepth(Difficulty::Medium))
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/xiangqi.toml")));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    #[test]
    fn test_side_to_color() {
        assert_eq!(Color::from(Side::Red), Color::Red);
        assert_eq!(Color::from(Side::Black), Color::Black);
    }
}
