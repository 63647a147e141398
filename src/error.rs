//! Error types
//!
//! Simulation ticks never fail; errors only come out of building a game
//! (map generation) and loading configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while generating the starting map
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapGenerationError {
    /// Not enough empty cells were found to place every enemy
    #[error("could only place {spawned} of {requested} enemies")]
    InsufficientSpawnCells { requested: usize, spawned: usize },
}

/// Failure while loading or validating a [`crate::GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level error for building a game
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Map(#[from] MapGenerationError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
