//! Canonical seed patterns.
//!
//! Patterns are plain text, one line per row. `'O'` or `'#'` marks a live
//! cell, any other character leaves the target cell untouched.

use crate::error::OutOfBounds;
use crate::grid::{CellState, Grid};

/// 2x2 block, the smallest still life.
pub const BLOCK: &str = "OO\nOO";

/// Period-2 blinker, written in its horizontal phase.
pub const BLINKER: &str = "OOO";

/// Glider, drifts one cell diagonally every four generations.
pub const GLIDER: &str = ".O.\n..O\nOOO";

/// Tub, a four-cell still life.
pub const TUB: &str = ".O.\nO.O\n.O.";

/// Stamps `pattern` onto the grid with its top-left cell at `(row, col)`.
///
/// Live pattern cells overwrite the target cell, everything else leaves it
/// as it was. Fails without modifying the grid if any live cell would land
/// outside the bounds.
pub fn stamp(grid: &mut Grid, pattern: &str, row: usize, col: usize) -> Result<(), OutOfBounds> {
    // validate every live cell before writing the first one
    for (r, c) in live_cells(pattern, row, col) {
        grid.get(r, c)?;
    }
    for (r, c) in live_cells(pattern, row, col) {
        grid.put(r, c, CellState::Live);
    }
    Ok(())
}

/// Grid coordinates of the pattern's live cells, offset by `(row, col)`.
///
/// Offsets saturate instead of overflowing; a saturated coordinate is out
/// of bounds for any grid that fits in memory.
fn live_cells(pattern: &str, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
    pattern.lines().enumerate().flat_map(move |(dr, line)| {
        line.chars()
            .enumerate()
            .filter(|&(_, ch)| matches!(ch, 'O' | '#'))
            .map(move |(dc, _)| (row.saturating_add(dr), col.saturating_add(dc)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::step;

    #[test]
    fn test_stamp_block() {
        let mut grid = Grid::new(4, 4);
        stamp(&mut grid, BLOCK, 1, 1).unwrap();
        assert_eq!(grid.population(), 4);
        for (row, col) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            assert_eq!(grid.get(row, col), Ok(CellState::Live));
        }
    }

    #[test]
    fn test_stamp_accepts_hash_marks() {
        let mut grid = Grid::new(1, 3);
        stamp(&mut grid, "#.#", 0, 0).unwrap();
        assert_eq!(grid.population(), 2);
        assert_eq!(grid.get(0, 1), Ok(CellState::Dead));
    }

    #[test]
    fn test_stamp_leaves_dead_pattern_cells_alone() {
        let mut grid = Grid::new(5, 5);
        grid.set(0, 0, CellState::Live).unwrap();
        stamp(&mut grid, GLIDER, 0, 0).unwrap();
        // the glider's corner is dead but must not erase what was there
        assert_eq!(grid.get(0, 0), Ok(CellState::Live));
        assert_eq!(grid.population(), 6);
    }

    #[test]
    fn test_stamp_out_of_bounds_changes_nothing() {
        let mut grid = Grid::new(4, 4);
        assert!(stamp(&mut grid, BLOCK, 3, 3).is_err());
        assert_eq!(grid.population(), 0);
        assert!(stamp(&mut grid, BLINKER, 0, 2).is_err());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_stamped_tub_is_still() {
        let mut grid = Grid::new(5, 5);
        stamp(&mut grid, TUB, 1, 1).unwrap();
        let (next, live) = step(&grid);
        assert_eq!(live, 4);
        assert_eq!(next, grid);
    }

    #[test]
    fn test_stamped_glider_travels() {
        let mut grid = Grid::new(10, 10);
        stamp(&mut grid, GLIDER, 0, 0).unwrap();
        let mut current = grid;
        for _ in 0..4 {
            let (next, live) = step(&current);
            assert_eq!(live, 5);
            current = next;
        }
        // four generations later the same shape sits one cell down-right
        let mut expected = Grid::new(10, 10);
        stamp(&mut expected, GLIDER, 1, 1).unwrap();
        assert_eq!(current, expected);
    }
}
