//! Tile grid, map generation and passability
//!
//! Positions are `(x, y)` with `x` the column and `y` the row. Any query for a
//! cell outside the grid fails closed: it reads as `None` and is never passable.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::START_POCKET;

/// Kind of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    /// Indestructible, only ever on the border
    Wall,
    /// Destructible, becomes `Empty` when caught in an explosion
    Crate,
}

/// Fixed-size map of cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid filled with `Empty`
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Index into `cells`, `None` when out of bounds
    fn index(&self, pos: IVec2) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        (x < self.cols && y < self.rows).then(|| y * self.cols + x)
    }

    pub fn in_bounds(&self, pos: IVec2) -> bool {
        self.index(pos).is_some()
    }

    /// Cell at `pos`, or `None` outside the grid
    pub fn get(&self, pos: IVec2) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `pos`. Returns false (and does nothing) out of bounds.
    pub fn set(&mut self, pos: IVec2, cell: Cell) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// True for cells on the outer ring
    pub fn is_border(&self, pos: IVec2) -> bool {
        self.in_bounds(pos)
            && (pos.x == 0
                || pos.y == 0
                || pos.x as usize == self.cols - 1
                || pos.y as usize == self.rows - 1)
    }

    /// Iterate every cell with its position, row by row
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(i, &cell)| {
            let pos = IVec2::new((i % self.cols) as i32, (i / self.cols) as i32);
            (pos, cell)
        })
    }

    /// Number of cells of the given kind
    pub fn count(&self, kind: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }
}

/// Generate a fresh map
///
/// Border cells are walls. Interior cells are crates with probability
/// `crate_chance`, drawn in row-major order. The start pocket is cleared
/// afterwards.
///
/// `rows` and `cols` must both be at least 4, otherwise the start pocket
/// overlaps the border. [`crate::GameConfig::validate`] enforces this.
pub fn generate<R: Rng>(rows: usize, cols: usize, crate_chance: f64, rng: &mut R) -> Grid {
    debug_assert!(
        rows >= 4 && cols >= 4,
        "grid must be at least 4x4, got {cols}x{rows}"
    );
    let mut grid = Grid::new(rows, cols);

    for y in 0..rows {
        for x in 0..cols {
            let pos = IVec2::new(x as i32, y as i32);
            let cell = if grid.is_border(pos) {
                Cell::Wall
            } else if rng.random::<f64>() < crate_chance {
                Cell::Crate
            } else {
                Cell::Empty
            };
            grid.set(pos, cell);
        }
    }

    for pos in START_POCKET {
        grid.set(pos, Cell::Empty);
    }

    log::debug!(
        "Generated {}x{} map with {} crates",
        rows,
        cols,
        grid.count(Cell::Crate)
    );
    grid
}

/// Passability shared by the player and enemies
///
/// Only `Empty` cells inside the grid can be entered. Bombs, explosions and
/// other actors never block.
pub fn can_move(grid: &Grid, pos: IVec2) -> bool {
    grid.get(pos) == Some(Cell::Empty)
}
