//! Presentation seam
//!
//! The simulation hands a read-only [`Snapshot`] to a [`Renderer`] once per
//! frame. Pixel output lives outside this crate; [`TextRenderer`] draws frames
//! as characters for the native driver.

use serde::Serialize;

use crate::sim::{Bomb, Cell, Enemy, Explosion, GameState, GameStatus, Grid, Player};

/// Everything a renderer may look at for one frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub tick: u64,
    pub status: GameStatus,
    pub message: &'static str,
    pub grid: &'a Grid,
    pub player: &'a Player,
    pub enemies: &'a [Enemy],
    pub bombs: &'a [Bomb],
    pub explosions: &'a [Explosion],
}

impl<'a> Snapshot<'a> {
    pub fn of(state: &'a GameState) -> Self {
        let status = state.status();
        Self {
            tick: state.time_ticks,
            status,
            message: status.message(),
            grid: &state.grid,
            player: &state.player,
            enemies: &state.enemies,
            bombs: &state.bombs,
            explosions: &state.explosions,
        }
    }

    /// Serialize for an out-of-process presentation layer
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Consumer of per-frame snapshots
pub trait Renderer {
    fn draw(&mut self, snapshot: &Snapshot<'_>);
}

/// Character glyphs, painted in this order so later layers win
pub mod glyph {
    pub const EMPTY: char = '.';
    pub const WALL: char = '#';
    pub const CRATE: char = '+';
    pub const BOMB: char = 'o';
    pub const EXPLOSION: char = '*';
    pub const ENEMY: char = 'E';
    pub const PLAYER: char = '@';
}

/// Draws each frame as rows of characters
#[derive(Debug, Default)]
pub struct TextRenderer {
    /// Most recent frame
    pub frame: String,
    /// Frames drawn so far
    pub frames: u64,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint a snapshot into text, one line per grid row plus a status line
    pub fn paint(snapshot: &Snapshot<'_>) -> String {
        let grid = snapshot.grid;
        let cols = grid.cols();
        let mut canvas: Vec<Vec<char>> = vec![vec![glyph::EMPTY; cols]; grid.rows()];

        let mut put = |pos: glam::IVec2, c: char| {
            if grid.in_bounds(pos) {
                canvas[pos.y as usize][pos.x as usize] = c;
            }
        };

        for (pos, cell) in grid.iter() {
            match cell {
                Cell::Empty => {}
                Cell::Wall => put(pos, glyph::WALL),
                Cell::Crate => put(pos, glyph::CRATE),
            }
        }
        for bomb in snapshot.bombs {
            put(bomb.pos, glyph::BOMB);
        }
        for explosion in snapshot.explosions {
            put(explosion.pos, glyph::EXPLOSION);
        }
        for enemy in snapshot.enemies {
            put(enemy.pos, glyph::ENEMY);
        }
        if snapshot.player.alive {
            put(snapshot.player.pos, glyph::PLAYER);
        }

        let mut out = String::with_capacity((cols + 1) * (grid.rows() + 1));
        for row in canvas {
            out.extend(row);
            out.push('\n');
        }
        out.push_str(&format!("tick {} {}", snapshot.tick, snapshot.message));
        out
    }
}

impl Renderer for TextRenderer {
    fn draw(&mut self, snapshot: &Snapshot<'_>) {
        self.frame = Self::paint(snapshot);
        self.frames += 1;
    }
}
