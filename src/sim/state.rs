//! Game state and core simulation types
//!
//! `GameState` owns the grid, every entity collection and the run's RNG.
//! Other simulation modules borrow it and mutate it through their operations.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bombs;
use super::enemy;
use super::grid::{self, Grid};
use crate::consts::PLAYER_START;
use crate::error::GameError;
use crate::settings::GameConfig;

/// Orthogonal heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All headings, in the order enemy AI samples from
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step in grid coordinates (`y` grows downward)
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }
}

/// Outcome of the run, derived each tick from the player and enemy list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    PlayerDied,
    PlayerWon,
}

impl GameStatus {
    /// Text shown by the status display
    pub fn message(self) -> &'static str {
        match self {
            GameStatus::Playing => "",
            GameStatus::PlayerDied => "You Died!",
            GameStatus::PlayerWon => "You Win!",
        }
    }

    pub fn is_over(self) -> bool {
        self != GameStatus::Playing
    }
}

/// The player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: IVec2,
    pub alive: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: PLAYER_START,
            alive: true,
        }
    }
}

/// A wandering enemy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: IVec2,
    /// Committed heading; `None` until the first re-roll
    pub heading: Option<Direction>,
}

/// A ticking bomb
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bomb {
    pub pos: IVec2,
    /// Ticks until detonation
    pub timer: u32,
}

/// One lethal explosion cell
///
/// Positions are not clipped to the grid; entries past the border are inert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explosion {
    pub pos: IVec2,
    /// Ticks until the cell stops being lethal
    pub timer: u32,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    BombPlaced { pos: IVec2 },
    BombDetonated { pos: IVec2 },
    CrateDestroyed { pos: IVec2 },
    EnemyKilled { id: u32, pos: IVec2 },
    PlayerDied { pos: IVec2 },
    PlayerWon,
}

/// Complete game state (deterministic for a given config and seed)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Run RNG, shared by generation, spawning and enemy AI
    pub rng: Pcg32,
    /// Parameters the run was built with
    pub config: GameConfig,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub grid: Grid,
    pub player: Player,
    /// Live enemies, sorted by id
    pub enemies: Vec<Enemy>,
    /// Live bombs, in placement order
    pub bombs: Vec<Bomb>,
    pub explosions: Vec<Explosion>,
    /// Events since the last `drain_events`
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Generate a new game: map first, then enemies, all from one seeded RNG
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let grid = grid::generate(config.rows, config.cols, config.crate_chance, &mut rng);
        let mut state = Self::from_parts(config, seed, rng, grid);

        let positions = enemy::spawn(
            &state.grid,
            state.config.enemy_count,
            PLAYER_START,
            &mut state.rng,
            state.config.spawn_attempts,
        )?;
        for pos in positions {
            state.add_enemy(pos);
        }

        log::info!(
            "New game: seed={} grid={}x{} enemies={}",
            seed,
            state.grid.cols(),
            state.grid.rows(),
            state.enemies.len()
        );
        Ok(state)
    }

    /// Build a game around a prepared grid, with no enemies
    ///
    /// Used to stage scenarios; the RNG is still seeded from `seed`.
    pub fn with_grid(config: GameConfig, seed: u64, grid: Grid) -> Self {
        Self::from_parts(config, seed, Pcg32::seed_from_u64(seed), grid)
    }

    fn from_parts(config: GameConfig, seed: u64, rng: Pcg32, grid: Grid) -> Self {
        Self {
            seed,
            rng,
            config,
            time_ticks: 0,
            grid,
            player: Player::default(),
            enemies: Vec::new(),
            bombs: Vec::new(),
            explosions: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an enemy at `pos` with no heading, returning its id
    pub fn add_enemy(&mut self, pos: IVec2) -> u32 {
        let id = self.next_entity_id();
        self.enemies.push(Enemy {
            id,
            pos,
            heading: None,
        });
        id
    }

    /// Current outcome
    ///
    /// Death wins over victory: a dead player with no enemies left has died.
    pub fn status(&self) -> GameStatus {
        if !self.player.alive {
            GameStatus::PlayerDied
        } else if self.enemies.is_empty() {
            GameStatus::PlayerWon
        } else {
            GameStatus::Playing
        }
    }

    /// Step the player one cell if the target is passable. Ignored once dead.
    pub fn try_move(&mut self, direction: Direction) -> bool {
        if !self.player.alive {
            return false;
        }
        let target = self.player.pos + direction.delta();
        if grid::can_move(&self.grid, target) {
            self.player.pos = target;
            true
        } else {
            false
        }
    }

    /// Drop a bomb on the player's cell. Ignored once dead.
    pub fn place_bomb(&mut self) -> bool {
        if !self.player.alive {
            return false;
        }
        let pos = self.player.pos;
        bombs::place_bomb(self, pos)
    }

    /// Take every event recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
