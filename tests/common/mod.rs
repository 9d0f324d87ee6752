//! Shared builders and helpers for grid integration tests.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use sheetgrid::{Cell, CellRange, CellWriteMode, Grid, GridConfig, SheetPatch};

/// A grid over the default configuration (100 rows, 26 columns, 25px rows,
/// 100px columns, 25px/60px headers).
pub fn grid() -> Grid {
    Grid::new(GridConfig::default())
}

/// A grid with explicit row/column counts, default sizing.
pub fn grid_sized(rows: u32, cols: u32) -> Grid {
    let config = GridConfig {
        row_count: rows,
        col_count: cols,
        ..GridConfig::default()
    };
    Grid::new(config)
}

/// Write a plain text cell through the facade (records history).
pub fn put(grid: &mut Grid, row: u32, col: u32, text: &str) {
    grid.set_cell(row, col, &Cell::with_text(text), CellWriteMode::All);
}

/// The text stored at `(row, col)`, or `None` when the cell is absent.
pub fn text_at(grid: &Grid, row: u32, col: u32) -> Option<String> {
    grid.cell(row, col).map(|c| c.text.clone())
}

/// Shorthand for a normalized [`CellRange`].
pub fn range(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> CellRange {
    CellRange::new(start_row, start_col, end_row, end_col)
}

/// Parse a JSON document patch for [`Grid::load`].
pub fn patch(json: &str) -> SheetPatch {
    serde_json::from_str(json).expect("valid patch JSON")
}
