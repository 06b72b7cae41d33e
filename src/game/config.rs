use serde::{Deserialize, Serialize};

use super::grid::{Grid, MAX_GRID_DIM};

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: i32,
    /// Height of the game grid
    pub grid_height: i32,
    /// Milliseconds between two snake moves
    pub tick_interval_ms: u64,
    /// Points awarded per food eaten
    pub score_per_food: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            tick_interval_ms: 200,
            score_per_food: 10,
        }
    }

    /// 3x3 board, filled after eight meals
    pub fn tiny() -> Self {
        Self::new(3, 3)
    }

    /// 4x4 board
    pub fn small() -> Self {
        Self::new(4, 4)
    }

    /// 10x10 board
    pub fn classic() -> Self {
        Self::new(10, 10)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }

    /// Check that the board and timing are usable
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=MAX_GRID_DIM).contains(&self.grid_width) {
            return Err(format!(
                "grid_width must be in [1, {}], got {}",
                MAX_GRID_DIM, self.grid_width
            ));
        }

        if !(1..=MAX_GRID_DIM).contains(&self.grid_height) {
            return Err(format!(
                "grid_height must be in [1, {}], got {}",
                MAX_GRID_DIM, self.grid_height
            ));
        }

        if self.tick_interval_ms == 0 {
            return Err("tick_interval_ms must be at least 1".to_string());
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
        assert_eq!(config.grid_width, 10);
        assert_eq!(config.grid_height, 10);
        assert_eq!(config.tick_interval_ms, 200);
        assert_eq!(config.score_per_food, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(GameConfig::tiny().grid().total_cells(), 9);
        assert_eq!(GameConfig::small().grid().total_cells(), 16);
        assert_eq!(GameConfig::classic().grid().total_cells(), 100);
    }

    #[test]
    fn test_validation() {
        assert!(GameConfig::new(0, 5).validate().is_err());
        assert!(GameConfig::new(5, MAX_GRID_DIM + 1).validate().is_err());
        assert!(GameConfig::new(1, 1).validate().is_ok());

        let config = GameConfig {
            tick_interval_ms: 0,
            ..GameConfig::tiny()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"grid_width": 4}"#).unwrap();
        assert_eq!(config.grid_width, 4);
        assert_eq!(config.grid_height, 10);
        assert_eq!(config.tick_interval_ms, 200);
    }
}
