//! Bomb Grid - A tile-based bomb arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (map, entities, bombs, enemy AI, outcome)
//! - `scheduler`: Frame driver that ticks the simulation and hands frames to a renderer
//! - `render`: Renderer seam and a text renderer for the native driver
//! - `settings`: Data-driven game configuration
//! - `error`: Typed errors for map generation and configuration

pub mod error;
pub mod render;
pub mod scheduler;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, GameError, MapGenerationError};
pub use render::{Renderer, Snapshot, TextRenderer};
pub use scheduler::FrameScheduler;
pub use settings::GameConfig;

/// Game configuration constants
pub mod consts {
    use glam::IVec2;

    /// Default grid dimensions
    pub const ROWS: usize = 12;
    pub const COLS: usize = 12;
    /// Largest grid a config may ask for, in cells
    pub const MAX_CELLS: usize = 1 << 20;

    /// Probability that an interior cell starts as a crate
    pub const CRATE_CHANCE: f64 = 0.22;

    /// Enemies spawned at map generation
    pub const ENEMY_COUNT: usize = 4;

    /// Ticks between placing a bomb and its detonation
    pub const BOMB_FUSE_TICKS: u32 = 60;
    /// Ticks an explosion cell stays lethal
    pub const EXPLOSION_TICKS: u32 = 20;

    /// Per-tick chance that an enemy picks a new heading
    pub const ENEMY_TURN_CHANCE: f64 = 0.03;

    /// Upper bound on random samples while placing enemies
    pub const SPAWN_ATTEMPTS: u32 = 10_000;

    /// Display refresh the scheduler paces itself to
    pub const FRAME_RATE: u32 = 60;

    /// Player start cell
    pub const PLAYER_START: IVec2 = IVec2::new(1, 1);

    /// Cells forced empty so the player can always take a step and place a bomb
    pub const START_POCKET: [IVec2; 3] = [IVec2::new(1, 1), IVec2::new(2, 1), IVec2::new(1, 2)];
}
