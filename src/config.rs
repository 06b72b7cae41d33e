//! Settings file for the terminal game
//!
//! The file is JSON; every field is optional and falls back to its default:
//!
//! ```json
//! {
//!   "game": { "grid_width": 4, "grid_height": 4, "tick_interval_ms": 200 },
//!   "palette": { "food": "#FA7070" },
//!   "frame_interval_ms": 16
//! }
//! ```

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::game::GameConfig;
use crate::render::Palette;

/// Everything the binary can be configured with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub palette: Palette,
    /// Milliseconds between two drawn frames (input is polled continuously)
    pub frame_interval_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            palette: Palette::default(),
            frame_interval_ms: 1000 / 60,
        }
    }
}

impl AppConfig {
    /// Read and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: AppConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {:?}", path))?;

        config
            .validate()
            .map_err(|e| anyhow!(e))
            .with_context(|| format!("Invalid config {:?}", path))?;

        Ok(config)
    }

    /// Write the config as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        self.game.validate()?;

        if self.frame_interval_ms == 0 {
            return Err("frame_interval_ms must be at least 1".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Rgb;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.frame_interval_ms, 16);
        assert_eq!(config.game, GameConfig::classic());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("snake.json");

        let mut config = AppConfig::default();
        config.game = GameConfig::small();
        config.palette.food = Rgb::from_hex(0x123456);
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snake.json");
        std::fs::write(&path, r#"{"game": {"grid_width": 3, "grid_height": 3}}"#).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.game, GameConfig::tiny());
        assert_eq!(loaded.palette, Palette::default());
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snake.json");
        std::fs::write(&path, r#"{"game": {"grid_width": 0}}"#).unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("grid_width"));

        std::fs::write(&path, "not json").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(AppConfig::load(&dir.path().join("absent.json")).is_err());
    }
}
