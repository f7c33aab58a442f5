//! Neighbor counting and generation stepping.

use crate::error::OutOfBounds;
use crate::grid::{CellState, Grid};

/// Counts live cells in the 3x3 block around `(row, col)`, clamped to the
/// grid edges and excluding the center.
///
/// The universe is a bounded plane, not a torus: an edge cell sees at most
/// 5 neighbors and a corner cell at most 3. The count is always in
/// `[0, 8]`.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> Result<u8, OutOfBounds> {
    grid.get(row, col)?;
    Ok(neighbors_clamped(grid, row, col))
}

/// Counting core, callers guarantee `(row, col)` is in bounds.
fn neighbors_clamped(grid: &Grid, row: usize, col: usize) -> u8 {
    let row_min = row.saturating_sub(1);
    let row_max = (row + 1).min(grid.height() - 1);
    let col_min = col.saturating_sub(1);
    let col_max = (col + 1).min(grid.width() - 1);

    let mut count = 0;
    for r in row_min..=row_max {
        for c in col_min..=col_max {
            if (r, c) != (row, col) && grid.at(r, c).is_live() {
                count += 1;
            }
        }
    }
    count
}

/// Applies the B3/S23 rule to one cell given its live-neighbor count.
///
/// A live cell survives with 2 or 3 neighbors, a dead cell is born with
/// exactly 3, everything else is dead next generation.
pub fn next_state(current: CellState, live_neighbors: u8) -> CellState {
    match (current, live_neighbors) {
        (CellState::Live, 2) | (CellState::Live, 3) => CellState::Live,
        (CellState::Dead, 3) => CellState::Live,
        _ => CellState::Dead,
    }
}

/// Advances one generation, returning the successor grid and its live
/// count.
///
/// Every next-state is computed against the read-only input snapshot and
/// written into a fresh grid, so no cell ever observes an already-updated
/// neighbor within the same generation. The input grid is left untouched.
pub fn step(grid: &Grid) -> (Grid, usize) {
    let mut next = Grid::new(grid.height(), grid.width());
    let mut live = 0usize;
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let n = neighbors_clamped(grid, row, col);
            let state = next_state(grid.at(row, col), n);
            if state.is_live() {
                live += 1;
            }
            next.put(row, col, state);
        }
    }
    (next, live)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(height: usize, width: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(height, width);
        for &(row, col) in live {
            grid.set(row, col, CellState::Live).unwrap();
        }
        grid
    }

    #[test]
    fn test_interior_neighbor_count() {
        let grid = grid_with(5, 5, &[(1, 2), (3, 2), (2, 1), (2, 3)]);
        assert_eq!(live_neighbors(&grid, 2, 2), Ok(4));
        assert_eq!(live_neighbors(&grid, 0, 0), Ok(0));
    }

    #[test]
    fn test_interior_cell_can_see_eight() {
        let mut grid = Grid::new(3, 3);
        for row in 0..3 {
            for col in 0..3 {
                grid.set(row, col, CellState::Live).unwrap();
            }
        }
        assert_eq!(live_neighbors(&grid, 1, 1), Ok(8));
    }

    #[test]
    fn test_corner_sees_at_most_three() {
        let mut grid = Grid::new(4, 4);
        for row in 0..4 {
            for col in 0..4 {
                grid.set(row, col, CellState::Live).unwrap();
            }
        }
        assert_eq!(live_neighbors(&grid, 0, 0), Ok(3));
        assert_eq!(live_neighbors(&grid, 3, 3), Ok(3));
        // non-corner edge cell sees at most five
        assert_eq!(live_neighbors(&grid, 0, 1), Ok(5));
    }

    #[test]
    fn test_no_wraparound_across_edges() {
        // opposite edges would be adjacent on a torus
        let grid = grid_with(3, 5, &[(0, 0), (0, 4)]);
        assert_eq!(live_neighbors(&grid, 0, 0), Ok(0));
        assert_eq!(live_neighbors(&grid, 0, 4), Ok(0));

        let grid = grid_with(3, 5, &[(0, 2), (2, 2)]);
        assert_eq!(live_neighbors(&grid, 0, 2), Ok(0));
        assert_eq!(live_neighbors(&grid, 2, 2), Ok(0));
    }

    #[test]
    fn test_count_rejects_out_of_bounds_center() {
        let grid = Grid::new(3, 5);
        assert!(live_neighbors(&grid, 3, 0).is_err());
        assert!(live_neighbors(&grid, 0, 5).is_err());
    }

    #[test]
    fn test_next_state_rule_table() {
        for n in 0..=8u8 {
            let live_next = next_state(CellState::Live, n);
            let dead_next = next_state(CellState::Dead, n);
            match n {
                2 => {
                    assert_eq!(live_next, CellState::Live);
                    assert_eq!(dead_next, CellState::Dead);
                }
                3 => {
                    assert_eq!(live_next, CellState::Live);
                    assert_eq!(dead_next, CellState::Live);
                }
                _ => {
                    assert_eq!(live_next, CellState::Dead);
                    assert_eq!(dead_next, CellState::Dead);
                }
            }
        }
    }

    #[test]
    fn test_block_is_a_still_life() {
        let block = grid_with(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let (next, live) = step(&block);
        assert_eq!(live, 4);
        assert_eq!(next, block);
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let horizontal = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let (vertical, live) = step(&horizontal);
        assert_eq!(live, 3);
        assert_eq!(vertical, grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]));
        let (back, _) = step(&vertical);
        assert_eq!(back, horizontal);
    }

    #[test]
    fn test_full_width_row_collapses_to_vertical_blinker() {
        // on a torus the full-width row would be a ring and every cell
        // would survive; clamped edges kill both ends instead
        let grid = grid_with(5, 3, &[(2, 0), (2, 1), (2, 2)]);
        let (next, live) = step(&grid);
        assert_eq!(live, 3);
        assert_eq!(next, grid_with(5, 3, &[(1, 1), (2, 1), (3, 1)]));
    }

    #[test]
    fn test_lone_cell_dies_with_zero_count() {
        let grid = grid_with(5, 5, &[(2, 2)]);
        let (next, live) = step(&grid);
        assert_eq!(live, 0);
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn test_step_is_deterministic_and_non_destructive() {
        let grid = grid_with(4, 6, &[(0, 0), (1, 1), (1, 2), (2, 4), (3, 5)]);
        let snapshot = grid.clone();
        let (a, live_a) = step(&grid);
        let (b, live_b) = step(&grid);
        assert_eq!(a, b);
        assert_eq!(live_a, live_b);
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_reported_count_matches_new_grid() {
        let grid = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let (next, live) = step(&grid);
        assert_eq!(live, next.population());
    }
}
