//! Seeding, the two ways the initial generation gets its live cells.
//!
//! Random seeding turns exactly `count` dead cells live by rejection
//! sampling. Manual seeding drives a wrapping cursor and marks cells one
//! at a time.

use crate::error::{OutOfBounds, SeedExhaustion};
use crate::grid::{CellState, Grid};
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Marks a single cell live.
///
/// Placing on an already-live cell is a no-op, the caller does not need to
/// check first.
pub fn place(grid: &mut Grid, row: usize, col: usize) -> Result<(), OutOfBounds> {
    grid.set(row, col, CellState::Live)
}

/// Randomly seeds `count` distinct cells using a thread-local RNG.
pub fn random_seed(grid: &mut Grid, count: usize) -> Result<(), SeedExhaustion> {
    let mut rng = rand::rng();
    random_seed_with_rng(grid, count, &mut rng)
}

/// Randomly seeds `count` distinct cells with the supplied RNG.
///
/// Draws uniform coordinates, retrying collisions with already-live cells,
/// until `count` previously dead cells are live. The request is checked
/// against the number of dead cells up front, so the retry loop always
/// terminates and a failed request leaves the grid untouched.
pub fn random_seed_with_rng<R: Rng>(
    grid: &mut Grid,
    count: usize,
    rng: &mut R,
) -> Result<(), SeedExhaustion> {
    let available = grid.height() * grid.width() - grid.population();
    if count > available {
        return Err(SeedExhaustion {
            requested: count,
            available,
        });
    }
    let mut placed = 0;
    while placed < count {
        let row = rng.random_range(0..grid.height());
        let col = rng.random_range(0..grid.width());
        if !grid.at(row, col).is_live() {
            grid.put(row, col, CellState::Live);
            placed += 1;
        }
    }
    Ok(())
}

/// Direction of a manual-seeding cursor move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Position of the manual-seeding cursor.
///
/// Movement wraps at all four grid edges. Wrapping is a convenience of the
/// placement UI only and has no bearing on neighbor counting, which stops
/// at the edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cursor {
    /// Current row.
    pub row: usize,
    /// Current column.
    pub col: usize,
}

impl Cursor {
    /// Moves one cell in `dir`, wrapping at the edges of a
    /// `height x width` grid.
    pub fn shift(&mut self, dir: Direction, height: usize, width: usize) {
        match dir {
            Direction::Up => {
                self.row = if self.row == 0 {
                    height.saturating_sub(1)
                } else {
                    self.row - 1
                };
            }
            Direction::Down => {
                self.row = if self.row + 1 >= height { 0 } else { self.row + 1 };
            }
            Direction::Left => {
                self.col = if self.col == 0 {
                    width.saturating_sub(1)
                } else {
                    self.col - 1
                };
            }
            Direction::Right => {
                self.col = if self.col + 1 >= width { 0 } else { self.col + 1 };
            }
        }
    }
}
