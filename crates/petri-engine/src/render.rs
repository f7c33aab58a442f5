//! Turning a grid into printable text.

use crate::grid::Grid;
use crate::symbol::SymbolConfig;

/// Renders the grid as one string per row, top to bottom.
///
/// This is the full character matrix a display surface draws each
/// generation; prompts and status lines are the frontend's own.
pub fn render_rows(grid: &Grid, symbols: &SymbolConfig) -> Vec<String> {
    grid.rows()
        .map(|row| row.iter().map(|&cell| symbols.symbol(cell)).collect())
        .collect()
}
