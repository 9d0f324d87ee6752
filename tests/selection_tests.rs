//! Selection state, hit-driven selection and the selection rectangle.
//!
//! Selections are cell ranges; the selection rectangle is reported in the
//! content frame (no header offset), scroll compensated except inside
//! frozen bands.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{grid, put, range};
use sheetgrid::{HitTarget, Rect};

// ============================================================================
// SELECTING
// ============================================================================

/// Corner order does not matter; the stored range is normalized.
#[test]
fn test_select_range_normalizes_corners() {
    let mut grid = grid();
    let selected = grid.select_range((4, 3), (1, 6));
    assert_eq!(selected, range(1, 3, 4, 6));
    assert_eq!(grid.selection(), Some(range(1, 3, 4, 6)));
}

/// Selecting from hit targets: cells select themselves, headers select
/// their full row/column, the corner selects everything.
#[test]
fn test_select_hit_variants() {
    let mut grid = grid();
    assert_eq!(grid.select_hit(HitTarget::Cell(2, 3)), range(2, 3, 2, 3));
    assert_eq!(grid.select_hit(HitTarget::RowHeader(3)), range(3, 0, 3, 25));
    assert_eq!(
        grid.select_hit(HitTarget::ColumnHeader(2)),
        range(0, 2, 99, 2)
    );
    assert_eq!(
        grid.select_hit(HitTarget::CornerHeader),
        range(0, 0, 99, 25)
    );
}

/// A cell hit inside a merge region selects the whole region.
#[test]
fn test_select_hit_expands_merges() {
    let mut grid = grid();
    grid.merge(range(1, 1, 2, 2)).unwrap();
    assert_eq!(grid.select_hit(HitTarget::Cell(2, 2)), range(1, 1, 2, 2));
}

/// Hit test feeding straight into selection, the click path embedders
/// take.
#[test]
fn test_click_path_hit_to_selection() {
    let mut grid = grid();
    grid.merge(range(0, 0, 1, 1)).unwrap();
    let hit = grid.hit_test(170.0, 55.0);
    let selected = grid.select_hit(hit.target);
    assert_eq!(selected, range(0, 0, 1, 1));
}

#[test]
fn test_clear_selection() {
    let mut grid = grid();
    grid.select_range((0, 0), (1, 1));
    grid.clear_selection();
    assert_eq!(grid.selection(), None);
    assert_eq!(grid.selected_rect(), None);
}

// ============================================================================
// SELECTION RECTANGLE
// ============================================================================

/// The rectangle is content-frame and covers the full selected spans.
#[test]
fn test_selected_rect_content_frame() {
    let mut grid = grid();
    grid.select_range((1, 1), (2, 2));
    assert_eq!(grid.selected_rect(), Some(Rect::new(100.0, 25.0, 200.0, 50.0)));
}

/// Size overrides change both the offset and the extent.
#[test]
fn test_selected_rect_with_size_overrides() {
    let mut grid = grid();
    grid.set_row_height(1, 40.0);
    grid.select_range((1, 1), (2, 2));
    assert_eq!(grid.selected_rect(), Some(Rect::new(100.0, 25.0, 200.0, 65.0)));
}

/// Scrolling shifts the rectangle; a selection scrolled out goes
/// negative.
#[test]
fn test_selected_rect_scroll_compensation() {
    let mut grid = grid();
    grid.scroll_y(100.0);
    grid.select_range((4, 0), (4, 0));
    assert_eq!(grid.selected_rect(), Some(Rect::new(0.0, 0.0, 100.0, 25.0)));
    grid.select_range((1, 1), (1, 1));
    assert_eq!(grid.selected_rect(), Some(Rect::new(100.0, -75.0, 100.0, 25.0)));
}

/// Selections inside a frozen band stay pinned while the rest scrolls.
#[test]
fn test_selected_rect_frozen_band_pinned() {
    let mut grid = grid();
    grid.set_freeze(0, 2);
    grid.scroll_x(100.0);
    grid.select_range((0, 0), (0, 0));
    assert_eq!(grid.selected_rect(), Some(Rect::new(0.0, 0.0, 100.0, 25.0)));
    // first non-frozen column: scroll applies again
    grid.select_range((0, 2), (0, 2));
    assert_eq!(grid.selected_rect(), Some(Rect::new(100.0, 0.0, 100.0, 25.0)));
}

/// Viewport points test strictly inside the rectangle; borders and
/// headers are out.
#[test]
fn test_xy_in_selected_rect() {
    let mut grid = grid();
    assert!(!grid.xy_in_selected_rect(100.0, 100.0));
    grid.select_range((1, 1), (2, 2));
    assert!(grid.xy_in_selected_rect(200.0, 60.0));
    // the rectangle's own border does not count
    assert!(!grid.xy_in_selected_rect(160.0, 50.0));
    assert!(!grid.xy_in_selected_rect(60.0, 25.0));
}

// ============================================================================
// CLEARING SELECTED CELLS
// ============================================================================

/// Clearing removes every cell in the selection and nothing outside it.
#[test]
fn test_clear_selected_cells() {
    let mut grid = grid();
    put(&mut grid, 0, 0, "keep");
    put(&mut grid, 1, 1, "a");
    put(&mut grid, 2, 2, "b");
    grid.select_range((1, 1), (2, 2));
    grid.clear_selected_cells();
    assert!(grid.cell(1, 1).is_none());
    assert!(grid.cell(2, 2).is_none());
    assert_eq!(grid.cell(0, 0).unwrap().text, "keep");
    // the selection itself survives the clear
    assert_eq!(grid.selection(), Some(range(1, 1, 2, 2)));
}

/// A merge whose anchor is selected goes with its cells.
#[test]
fn test_clear_selected_cells_drops_covered_merges() {
    let mut grid = grid();
    put(&mut grid, 1, 1, "m");
    grid.merge(range(1, 1, 2, 2)).unwrap();
    grid.select_range((0, 0), (3, 3));
    grid.clear_selected_cells();
    assert!(grid.data().merges.is_empty());
    assert!(grid.cell(1, 1).is_none());
}

/// A merge whose anchor lies outside the selection survives.
#[test]
fn test_clear_selected_cells_keeps_outside_anchor() {
    let mut grid = grid();
    put(&mut grid, 0, 0, "m");
    grid.merge(range(0, 0, 1, 1)).unwrap();
    grid.select_range((1, 0), (2, 2));
    grid.clear_selected_cells();
    assert_eq!(grid.data().merges, vec![range(0, 0, 1, 1)]);
    assert_eq!(grid.cell(0, 0).unwrap().text, "m");
}

/// Without a selection the clear is a no-op and records nothing.
#[test]
fn test_clear_selected_cells_without_selection() {
    let mut grid = grid();
    put(&mut grid, 0, 0, "x");
    grid.undo();
    assert!(!grid.can_undo());
    grid.clear_selected_cells();
    assert!(!grid.can_undo());
}

/// Clearing is undoable like any other mutation.
#[test]
fn test_clear_selected_cells_undo() {
    let mut grid = grid();
    put(&mut grid, 1, 1, "a");
    grid.select_range((1, 1), (1, 1));
    grid.clear_selected_cells();
    assert!(grid.cell(1, 1).is_none());
    grid.undo();
    assert_eq!(grid.cell(1, 1).unwrap().text, "a");
}
