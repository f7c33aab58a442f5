//! The bounded cell matrix.

use crate::error::OutOfBounds;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Logical state of a single cell.
///
/// Display characters are a separate concern ([`SymbolConfig`]); the
/// simulation itself never looks at symbols.
///
/// [`SymbolConfig`]: crate::symbol::SymbolConfig
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellState {
    /// The cell is alive.
    Live,
    /// The cell is dead.
    #[default]
    Dead,
}

impl CellState {
    /// True for [`CellState::Live`].
    pub fn is_live(self) -> bool {
        matches!(self, CellState::Live)
    }
}

/// A fixed `height x width` matrix of cell states.
///
/// Grids start all-dead and are never resized. Coordinates are
/// `(row, col)` with row 0 at the top; anything outside
/// `[0, height) x [0, width)` is an [`OutOfBounds`] error, never clamped
/// or wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates an all-dead grid.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![CellState::Dead; height * width],
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, OutOfBounds> {
        if row < self.height && col < self.width {
            Ok(row * self.width + col)
        } else {
            Err(OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            })
        }
    }

    /// Reads the state of a cell.
    pub fn get(&self, row: usize, col: usize) -> Result<CellState, OutOfBounds> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Writes the state of a cell.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<(), OutOfBounds> {
        let i = self.index(row, col)?;
        self.cells[i] = state;
        Ok(())
    }

    /// Counts live cells by scanning the whole grid.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_live()).count()
    }

    /// Iterates over rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        // chunk size 0 would panic; a zero-width grid has no cells to chunk
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Unchecked read, for loops that already know the coordinate is valid.
    pub(crate) fn at(&self, row: usize, col: usize) -> CellState {
        debug_assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col]
    }

    /// Unchecked write, counterpart of [`Grid::at`].
    pub(crate) fn put(&mut self, row: usize, col: usize, state: CellState) {
        debug_assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col] = state;
    }
}
