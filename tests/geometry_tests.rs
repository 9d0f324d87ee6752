//! Hit testing and pixel geometry over the default grid layout.
//!
//! The default configuration puts a 60px row-header band on the left and a
//! 25px column-header band on top; content cells are 100x25 with 100 rows
//! and 26 columns. Hit testing speaks viewport coordinates (headers
//! included, scroll compensated), while `cell_rect` and `cell_position`
//! speak the content frame.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{grid, range};
use sheetgrid::{HitTarget, Rect};
use test_case::test_case;

// ============================================================================
// HIT TARGET RESOLUTION
// ============================================================================

/// Hit targets across the header bands and the first cells.
///
/// x below 60 is the row header band, y below 25 the column header band,
/// both at once is the corner. A boundary pixel belongs to the band or
/// cell before it.
#[test_case(70.0, 30.0, HitTarget::Cell(0, 0) ; "first cell")]
#[test_case(60.5, 25.5, HitTarget::Cell(0, 0) ; "just inside first cell")]
#[test_case(60.0, 25.0, HitTarget::CornerHeader ; "boundary belongs to headers")]
#[test_case(0.0, 0.0, HitTarget::CornerHeader ; "origin")]
#[test_case(30.0, 100.0, HitTarget::RowHeader(2) ; "row header band")]
#[test_case(170.0, 10.0, HitTarget::ColumnHeader(1) ; "column header band")]
#[test_case(160.0, 30.0, HitTarget::Cell(0, 0) ; "column boundary stays left")]
#[test_case(160.5, 30.0, HitTarget::Cell(0, 1) ; "past column boundary")]
#[test_case(70.0, 50.0, HitTarget::Cell(0, 0) ; "row boundary stays up")]
#[test_case(70.0, 50.5, HitTarget::Cell(1, 0) ; "past row boundary")]
fn test_hit_targets(x: f32, y: f32, expected: HitTarget) {
    let grid = grid();
    assert_eq!(grid.hit_test(x, y).target, expected);
}

/// A plain cell hit reports the viewport rectangle of that cell.
#[test]
fn test_cell_hit_rect() {
    let grid = grid();
    let hit = grid.hit_test(70.0, 30.0);
    assert_eq!(hit.rect, Rect::new(60.0, 25.0, 100.0, 25.0));
}

/// Header hits span the whole grid on the other axis.
#[test]
fn test_header_hit_rects() {
    let grid = grid();
    let row = grid.hit_test(30.0, 100.0);
    assert_eq!(row.rect, Rect::new(0.0, 75.0, 2600.0, 25.0));
    let col = grid.hit_test(170.0, 10.0);
    assert_eq!(col.rect, Rect::new(160.0, 0.0, 100.0, 2500.0));
    let corner = grid.hit_test(10.0, 10.0);
    assert_eq!(corner.rect, Rect::new(0.0, 0.0, 2600.0, 2500.0));
}

/// Row and column size overrides move the boundaries hit testing sees.
#[test]
fn test_hit_respects_size_overrides() {
    let mut grid = grid();
    grid.set_col_width(0, 40.0);
    grid.set_row_height(0, 10.0);
    // col 0 now covers x 60..100, row 0 covers y 25..35
    assert_eq!(grid.hit_test(99.0, 30.0).target, HitTarget::Cell(0, 0));
    assert_eq!(grid.hit_test(101.0, 30.0).target, HitTarget::Cell(0, 1));
    assert_eq!(grid.hit_test(70.0, 36.0).target, HitTarget::Cell(1, 0));
    let hit = grid.hit_test(101.0, 36.0);
    assert_eq!(hit.target, HitTarget::Cell(1, 1));
    assert_eq!(hit.rect, Rect::new(100.0, 35.0, 100.0, 25.0));
}

/// Points far past the content saturate at the last row and column.
#[test]
fn test_hit_saturates_at_grid_edge() {
    let grid = grid();
    let hit = grid.hit_test(1e9, 1e9);
    assert_eq!(hit.target, HitTarget::Cell(99, 25));
    assert_eq!(hit.rect, Rect::new(2560.0, 2500.0, 100.0, 25.0));
}

// ============================================================================
// MERGED REGION HITS
// ============================================================================

/// Any covered cell of a merge resolves to its anchor with the full
/// region rectangle.
#[test]
fn test_merge_hit_resolves_to_anchor() {
    let mut grid = grid();
    grid.merge(range(0, 0, 1, 1)).unwrap();
    // bottom-right quarter of the region, well away from the anchor
    let hit = grid.hit_test(170.0, 55.0);
    assert_eq!(hit.target, HitTarget::Cell(0, 0));
    assert_eq!(hit.rect, Rect::new(60.0, 25.0, 200.0, 50.0));
}

/// The anchor cell itself reports the merged rectangle too.
#[test]
fn test_merge_hit_on_anchor() {
    let mut grid = grid();
    grid.merge(range(2, 1, 3, 2)).unwrap();
    let hit = grid.hit_test(170.0, 80.0);
    assert_eq!(hit.target, HitTarget::Cell(2, 1));
    assert_eq!(hit.rect, Rect::new(160.0, 75.0, 200.0, 50.0));
}

// ============================================================================
// CELL RECTANGLES AND TOTALS
// ============================================================================

/// `cell_position` and `cell_rect` are content-frame: no header offsets.
#[test]
fn test_cell_position_and_rect() {
    let grid = grid();
    assert_eq!(grid.cell_position(0, 0), (0.0, 0.0));
    assert_eq!(grid.cell_position(2, 3), (300.0, 50.0));
    assert_eq!(grid.cell_rect(2, 3), Rect::new(300.0, 50.0, 100.0, 25.0));
}

/// `cell_rect` extends over the merge span on the anchor cell.
#[test]
fn test_cell_rect_merge_extension() {
    let mut grid = grid();
    grid.merge(range(1, 1, 2, 3)).unwrap();
    assert_eq!(grid.cell_rect(1, 1), Rect::new(100.0, 25.0, 300.0, 50.0));
}

/// Content totals and partial sums, with and without overrides.
#[test]
fn test_totals_and_sums() {
    let mut grid = grid();
    assert_eq!(grid.total_width(), 2600.0);
    assert_eq!(grid.total_height(), 2500.0);
    assert_eq!(grid.col_sum_width(2, 5), 300.0);
    assert_eq!(grid.row_sum_height(10, 10), 0.0);
    grid.set_col_width(0, 250.0);
    assert_eq!(grid.total_width(), 2750.0);
}

/// Projecting a cell to pixels and hitting just inside its top-left
/// corner resolves back to the same cell.
#[test]
fn test_coordinate_round_trip() {
    let mut grid = grid();
    grid.set_col_width(1, 40.0);
    grid.set_row_height(2, 70.0);
    for (row, col) in [(0, 0), (2, 1), (3, 2), (99, 25)] {
        let (x, y) = grid.cell_position(row, col);
        let hit = grid.hit_test(x + 60.0 + 0.5, y + 25.0 + 0.5);
        assert_eq!(hit.target, HitTarget::Cell(row, col), "({row}, {col})");
    }
}

/// `for_each_row` / `for_each_col` visit index, leading offset and size
/// in order.
#[test]
fn test_for_each_visits_offsets() {
    let mut grid = grid();
    grid.set_row_height(1, 40.0);
    let mut rows = Vec::new();
    grid.for_each_row(2, |row, offset, height| rows.push((row, offset, height)));
    assert_eq!(rows, vec![(0, 0.0, 25.0), (1, 25.0, 40.0), (2, 65.0, 25.0)]);

    let mut cols = Vec::new();
    grid.for_each_col(1, |col, offset, width| cols.push((col, offset, width)));
    assert_eq!(cols, vec![(0, 0.0, 100.0), (1, 100.0, 100.0)]);
}

// ============================================================================
// FREEZE PANES AND SCROLLED HITS
// ============================================================================

/// After a vertical scroll, hits land on the scrolled-to rows while the
/// header band keeps resolving to headers.
#[test]
fn test_hit_after_vertical_scroll() {
    let mut grid = grid();
    assert_eq!(grid.scroll_y(100.0), Some(100.0));
    // four rows scrolled out; the first row under the header is row 4
    let hit = grid.hit_test(70.0, 30.0);
    assert_eq!(hit.target, HitTarget::Cell(4, 0));
    assert_eq!(hit.rect, Rect::new(60.0, 25.0, 100.0, 25.0));
    assert_eq!(grid.hit_test(70.0, 10.0).target, HitTarget::ColumnHeader(0));
}

/// Frozen rows resolve at their unscrolled positions; the band right
/// after them holds the first scrolled-to row.
#[test]
fn test_frozen_rows_ignore_scroll() {
    let mut grid = grid();
    grid.set_freeze(2, 0);
    assert_eq!(grid.scroll_y(100.0), Some(100.0));
    // inside the frozen band: rows 0 and 1 at their home positions
    assert_eq!(grid.hit_test(70.0, 30.0).target, HitTarget::Cell(0, 0));
    assert_eq!(grid.hit_test(70.0, 60.0).target, HitTarget::Cell(1, 0));
    // just past the band: rows 2..=5 are scrolled out, row 6 is next
    let hit = grid.hit_test(70.0, 80.0);
    assert_eq!(hit.target, HitTarget::Cell(6, 0));
    assert_eq!(hit.rect, Rect::new(60.0, 75.0, 100.0, 25.0));
}

/// Frozen columns behave the same way on the horizontal axis.
#[test]
fn test_frozen_cols_ignore_scroll() {
    let mut grid = grid();
    grid.set_freeze(0, 1);
    assert_eq!(grid.scroll_x(150.0), Some(200.0));
    assert_eq!(grid.hit_test(100.0, 30.0).target, HitTarget::Cell(0, 0));
    // columns 1 and 2 scrolled out behind the frozen band
    assert_eq!(grid.hit_test(170.0, 30.0).target, HitTarget::Cell(0, 3));
}
