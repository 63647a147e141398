//! Enemy spawning and wandering AI

use glam::IVec2;
use rand::Rng;

use super::grid::{Cell, Grid, can_move};
use super::state::{Direction, GameState};
use crate::error::MapGenerationError;

/// Pick `count` spawn cells by rejection sampling
///
/// Samples uniformly over the whole grid and accepts any empty cell other
/// than `excluded`. Cells may be picked more than once. Gives up after
/// `max_attempts` samples.
pub fn spawn<R: Rng>(
    grid: &Grid,
    count: usize,
    excluded: IVec2,
    rng: &mut R,
    max_attempts: u32,
) -> Result<Vec<IVec2>, MapGenerationError> {
    let mut spawned = Vec::with_capacity(count);
    if count == 0 {
        return Ok(spawned);
    }

    let eligible = grid
        .iter()
        .any(|(pos, cell)| cell == Cell::Empty && pos != excluded);
    if !eligible {
        return Err(MapGenerationError::InsufficientSpawnCells {
            requested: count,
            spawned: 0,
        });
    }

    for _ in 0..max_attempts {
        let x = rng.random_range(0..grid.cols()) as i32;
        let y = rng.random_range(0..grid.rows()) as i32;
        let pos = IVec2::new(x, y);

        if grid.get(pos) == Some(Cell::Empty) && pos != excluded {
            spawned.push(pos);
            if spawned.len() == count {
                return Ok(spawned);
            }
        }
    }

    log::warn!(
        "Enemy spawning gave up after {} attempts ({}/{})",
        max_attempts,
        spawned.len(),
        count
    );
    Err(MapGenerationError::InsufficientSpawnCells {
        requested: count,
        spawned: spawned.len(),
    })
}

/// Advance every enemy by one tick
///
/// Each enemy may re-roll its heading, then pushes one cell along it. A
/// blocked enemy stays put but keeps its heading.
pub fn step(state: &mut GameState) {
    let turn_chance = state.config.enemy_turn_chance;

    for enemy in &mut state.enemies {
        if state.rng.random::<f64>() < turn_chance {
            let i = state.rng.random_range(0..Direction::ALL.len());
            enemy.heading = Some(Direction::ALL[i]);
        }

        let Some(heading) = enemy.heading else {
            continue;
        };
        let target = enemy.pos + heading.delta();
        if can_move(&state.grid, target) {
            enemy.pos = target;
        }
    }
}
