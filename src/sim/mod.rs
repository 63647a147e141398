//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One simulation step per frame
//! - Seeded RNG only
//! - Stable iteration order (by entity ID / placement order)
//! - No rendering or platform dependencies

pub mod bombs;
pub mod collision;
pub mod enemy;
pub mod grid;
pub mod state;
pub mod tick;

pub use bombs::{advance_bombs, advance_explosions, detonate, place_bomb};
pub use collision::evaluate;
pub use enemy::{spawn, step};
pub use grid::{Cell, Grid, can_move, generate};
pub use state::{Bomb, Direction, Enemy, Explosion, GameEvent, GameState, GameStatus, Player};
pub use tick::{Intent, TickInput, tick};
