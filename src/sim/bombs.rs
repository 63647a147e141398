//! Bomb fuses, detonation and explosion lifetime

use glam::IVec2;

use super::grid::{Cell, Grid};
use super::state::{Bomb, Explosion, GameEvent, GameState};

/// Offsets hit by a detonation: the bomb cell, then right, left, down, up
pub const CROSS: [IVec2; 5] = [IVec2::ZERO, IVec2::X, IVec2::NEG_X, IVec2::Y, IVec2::NEG_Y];

/// Result of a single detonation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blast {
    /// One explosion per cross offset, in `CROSS` order
    pub explosions: Vec<Explosion>,
    /// Cells that held a crate and are now empty
    pub destroyed: Vec<IVec2>,
}

/// Place a bomb at `pos` unless one is already there
///
/// Returns whether a bomb was added.
pub fn place_bomb(state: &mut GameState, pos: IVec2) -> bool {
    if state.bombs.iter().any(|b| b.pos == pos) {
        return false;
    }
    state.bombs.push(Bomb {
        pos,
        timer: state.config.bomb_fuse_ticks,
    });
    state.events.push(GameEvent::BombPlaced { pos });
    log::debug!("Bomb placed at ({}, {})", pos.x, pos.y);
    true
}

/// Detonate a bomb in a cross pattern
///
/// Always yields five explosions, even past the border or over walls. Crates
/// under any of them are cleared; walls are left alone.
pub fn detonate(bomb: &Bomb, grid: &mut Grid, explosion_ticks: u32) -> Blast {
    let mut blast = Blast {
        explosions: Vec::with_capacity(CROSS.len()),
        destroyed: Vec::new(),
    };

    for offset in CROSS {
        let pos = bomb.pos + offset;
        if grid.get(pos) == Some(Cell::Crate) {
            grid.set(pos, Cell::Empty);
            blast.destroyed.push(pos);
        }
        blast.explosions.push(Explosion {
            pos,
            timer: explosion_ticks,
        });
    }

    blast
}

/// Count down every bomb and detonate the ones whose fuse ran out
///
/// Expired bombs are split off before any detonation runs, so removal never
/// disturbs iteration.
pub fn advance_bombs(state: &mut GameState) {
    for bomb in &mut state.bombs {
        bomb.timer = bomb.timer.saturating_sub(1);
    }

    let (expired, live): (Vec<Bomb>, Vec<Bomb>) =
        state.bombs.drain(..).partition(|b| b.timer == 0);
    state.bombs = live;

    for bomb in expired {
        let blast = detonate(&bomb, &mut state.grid, state.config.explosion_ticks);
        log::debug!(
            "Bomb at ({}, {}) detonated, {} crates destroyed",
            bomb.pos.x,
            bomb.pos.y,
            blast.destroyed.len()
        );

        state.events.push(GameEvent::BombDetonated { pos: bomb.pos });
        state
            .events
            .extend(blast.destroyed.into_iter().map(|pos| GameEvent::CrateDestroyed { pos }));
        state.explosions.extend(blast.explosions);
    }
}

/// Count down every explosion and drop the expired ones
pub fn advance_explosions(state: &mut GameState) {
    state.explosions.retain_mut(|e| {
        e.timer = e.timer.saturating_sub(1);
        e.timer > 0
    });
}
