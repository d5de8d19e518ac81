use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{GameError, Result};

/// Configuration for the game, fixed at session construction.
///
/// Board extents are in pixel-equivalent units; cells are `cell_size`
/// units square and every cell coordinate is a multiple of `cell_size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the board in units
    pub board_width: i32,
    /// Height of the board in units
    pub board_height: i32,
    /// Side length of one cell; also the distance the head moves per tick
    pub cell_size: i32,
    /// Period of the simulation timer (lower means faster)
    pub tick_interval_ms: u64,
    /// Length of the snake after a reset
    pub initial_snake_length: usize,
    /// Joints up to this index never count for self-collision
    pub self_collision_tolerance: usize,
    /// Per-axis distance within which the head eats the food
    pub eat_proximity: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 1000,
            board_height: 680,
            cell_size: 10,
            tick_interval_ms: 60,
            initial_snake_length: 3,
            self_collision_tolerance: 5,
            eat_proximity: 1,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size
    pub fn new(board_width: i32, board_height: i32) -> Self {
        Self {
            board_width,
            board_height,
            ..Default::default()
        }
    }

    /// A board small enough to render in an ordinary terminal
    pub fn terminal() -> Self {
        Self::new(400, 200)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cell_size <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        for (name, extent) in [
            ("board_width", self.board_width),
            ("board_height", self.board_height),
        ] {
            if extent <= 0 || extent % self.cell_size != 0 {
                return Err(GameError::InvalidConfig(format!(
                    "{name} must be a positive multiple of cell_size {}, got {extent}",
                    self.cell_size
                )));
            }
        }
        if self.initial_snake_length == 0 {
            return Err(GameError::InvalidConfig(
                "initial_snake_length must be at least 1".to_string(),
            ));
        }
        if self.initial_snake_length > self.self_collision_tolerance + 1 {
            // the starting joints are stacked on one cell
            return Err(GameError::InvalidConfig(format!(
                "initial_snake_length {} would collide with itself on the first tick",
                self.initial_snake_length
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(GameError::InvalidConfig(
                "tick_interval_ms must be at least 1".to_string(),
            ));
        }
        if self.eat_proximity < 0 {
            return Err(GameError::InvalidConfig(format!(
                "eat_proximity must not be negative, got {}",
                self.eat_proximity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_width, 1000);
        assert_eq!(config.board_height, 680);
        assert_eq!(config.cell_size, 10);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.self_collision_tolerance, 5);
        assert_eq!(config.tick_interval(), Duration::from_millis(60));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(200, 150);
        assert_eq!(config.board_width, 200);
        assert_eq!(config.board_height, 150);
        assert_eq!(config.cell_size, 10);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config =
            GameConfig::from_toml_str("board_width = 300\ntick_interval_ms = 100\n").unwrap();
        assert_eq!(config.board_width, 300);
        assert_eq!(config.tick_interval_ms, 100);
        assert_eq!(config.board_height, 680);
        assert_eq!(config.eat_proximity, 1);
    }

    #[test]
    fn test_rejects_unaligned_board() {
        let err = GameConfig::new(1005, 680).validate().unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_zero_cell_size() {
        let config = GameConfig {
            cell_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_self_colliding_start() {
        let config = GameConfig {
            initial_snake_length: 7,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_toml() {
        let err = GameConfig::from_toml_str("board_width = \"wide\"").unwrap_err();
        assert!(matches!(err, GameError::ConfigParse(_)));
    }
}
