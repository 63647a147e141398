//! Game configuration
//!
//! Loaded from an optional JSON file; any field left out keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Map ===
    /// Grid height in cells
    pub rows: usize,
    /// Grid width in cells
    pub cols: usize,
    /// Probability that an interior cell is a crate
    pub crate_chance: f64,

    // === Enemies ===
    /// Enemies placed at map generation
    pub enemy_count: usize,
    /// Per-tick chance an enemy re-rolls its heading
    pub enemy_turn_chance: f64,
    /// Random samples allowed while placing enemies
    pub spawn_attempts: u32,

    // === Timing ===
    /// Bomb fuse in ticks
    pub bomb_fuse_ticks: u32,
    /// Explosion lifetime in ticks
    pub explosion_ticks: u32,
    /// Frames (and therefore ticks) per second
    pub frame_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            crate_chance: CRATE_CHANCE,

            enemy_count: ENEMY_COUNT,
            enemy_turn_chance: ENEMY_TURN_CHANCE,
            spawn_attempts: SPAWN_ATTEMPTS,

            bomb_fuse_ticks: BOMB_FUSE_TICKS,
            explosion_ticks: EXPLOSION_TICKS,
            frame_rate: FRAME_RATE,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load a config file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using default config");
                Self::default()
            }
        }
    }

    /// Check value ranges
    ///
    /// The grid must be at least 4x4 so the start pocket stays inside the border,
    /// and at most `MAX_CELLS` cells in total.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 4 || self.cols < 4 {
            return Err(ConfigError::Invalid(format!(
                "grid must be at least 4x4, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.rows.checked_mul(self.cols).is_none_or(|cells| cells > MAX_CELLS) {
            return Err(ConfigError::Invalid(format!(
                "grid {}x{} exceeds {} cells",
                self.rows, self.cols, MAX_CELLS
            )));
        }
        for (name, p) in [
            ("crate_chance", self.crate_chance),
            ("enemy_turn_chance", self.enemy_turn_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::Invalid(format!("{name} must be in [0, 1], got {p}")));
            }
        }
        if self.bomb_fuse_ticks == 0 || self.explosion_ticks == 0 {
            return Err(ConfigError::Invalid("tick counts must be at least 1".to_string()));
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::Invalid("frame_rate must be at least 1".to_string()));
        }
        Ok(())
    }
}
