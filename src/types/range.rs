//! Rectangular cell ranges.
//!
//! One range type serves both selection and merge regions, so containment
//! and intersection logic exists exactly once.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Structural axis for row/column-symmetric operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Operate on rows.
    Row,
    /// Operate on columns.
    Col,
}

/// An inclusive rectangle of cell indices.
///
/// Constructors normalize the corners so `start_row <= end_row` and
/// `start_col <= end_col` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRange {
    pub start_row: u32,
    pub start_col: u32,
    pub end_row: u32,
    pub end_col: u32,
}

impl CellRange {
    /// Range covering both corners, normalized.
    pub fn new(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Self {
        Self {
            start_row: start_row.min(end_row),
            start_col: start_col.min(end_col),
            end_row: start_row.max(end_row),
            end_col: start_col.max(end_col),
        }
    }

    /// Range covering exactly one cell.
    pub fn cell(row: u32, col: u32) -> Self {
        Self::new(row, col, row, col)
    }

    /// Smallest range covering two `(row, col)` corner points.
    pub fn from_corners(a: (u32, u32), b: (u32, u32)) -> Self {
        Self::new(a.0, a.1, b.0, b.1)
    }

    /// Whether `(row, col)` lies inside the range.
    pub fn contains(&self, row: u32, col: u32) -> bool {
        self.start_row <= row && row <= self.end_row && self.start_col <= col && col <= self.end_col
    }

    /// Whether the two ranges share at least one cell.
    pub fn intersects(&self, other: &CellRange) -> bool {
        self.start_row <= other.end_row
            && other.start_row <= self.end_row
            && self.start_col <= other.end_col
            && other.start_col <= self.end_col
    }

    /// Whether `other` lies entirely inside this range.
    pub fn contains_range(&self, other: &CellRange) -> bool {
        self.start_row <= other.start_row
            && other.end_row <= self.end_row
            && self.start_col <= other.start_col
            && other.end_col <= self.end_col
    }

    /// Extra rows covered beyond the anchor row (`end - start`).
    pub fn row_span(&self) -> u32 {
        self.end_row - self.start_row
    }

    /// Extra columns covered beyond the anchor column.
    pub fn col_span(&self) -> u32 {
        self.end_col - self.start_col
    }

    /// Number of rows covered.
    pub fn rows(&self) -> u32 {
        self.row_span() + 1
    }

    /// Number of columns covered.
    pub fn cols(&self) -> u32 {
        self.col_span() + 1
    }

    /// Whether the range covers exactly one cell.
    pub fn is_single_cell(&self) -> bool {
        self.start_row == self.end_row && self.start_col == self.end_col
    }

    /// Start index on the given axis.
    pub fn start_on(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Row => self.start_row,
            Axis::Col => self.start_col,
        }
    }

    /// End index on the given axis.
    pub fn end_on(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Row => self.end_row,
            Axis::Col => self.end_col,
        }
    }

    pub(crate) fn start_on_mut(&mut self, axis: Axis) -> &mut u32 {
        match axis {
            Axis::Row => &mut self.start_row,
            Axis::Col => &mut self.start_col,
        }
    }

    pub(crate) fn end_on_mut(&mut self, axis: Axis) -> &mut u32 {
        match axis {
            Axis::Row => &mut self.end_row,
            Axis::Col => &mut self.end_col,
        }
    }

    /// The range moved so its anchor sits at `(row, col)`, same shape.
    pub fn anchored_at(&self, row: u32, col: u32) -> Self {
        Self {
            start_row: row,
            start_col: col,
            end_row: row.saturating_add(self.row_span()),
            end_col: col.saturating_add(self.col_span()),
        }
    }
}

/// Convert a 0-based column index to spreadsheet letters (A, B, ..., Z, AA, ...).
fn col_letter(col: u32) -> String {
    let mut out = String::new();
    let mut n = col + 1;
    while n > 0 {
        n -= 1;
        if let Some(c) = char::from_u32(u32::from(b'A') + n % 26) {
            out.insert(0, c);
        }
        n /= 26;
    }
    out
}

impl fmt::Display for CellRange {
    /// Formats as `A1` / `A1:B2` for readable error messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", col_letter(self.start_col), self.start_row + 1)?;
        if !self.is_single_cell() {
            write!(f, ":{}{}", col_letter(self.end_col), self.end_row + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_corners() {
        let range = CellRange::new(5, 7, 2, 3);
        assert_eq!(range, CellRange::new(2, 3, 5, 7));
        assert_eq!(range.start_row, 2);
        assert_eq!(range.end_col, 7);
    }

    #[test]
    fn test_from_corners_matches_new() {
        assert_eq!(CellRange::from_corners((4, 1), (1, 6)), CellRange::new(1, 1, 4, 6));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = CellRange::new(1, 1, 3, 3);
        assert!(range.contains(1, 1));
        assert!(range.contains(3, 3));
        assert!(range.contains(2, 3));
        assert!(!range.contains(0, 2));
        assert!(!range.contains(2, 4));
    }

    #[test]
    fn test_intersects_detects_overlap_and_touch() {
        let a = CellRange::new(0, 0, 2, 2);
        assert!(a.intersects(&CellRange::new(2, 2, 4, 4)));
        assert!(a.intersects(&CellRange::new(1, 1, 1, 1)));
        assert!(!a.intersects(&CellRange::new(3, 0, 4, 2)));
        assert!(!a.intersects(&CellRange::new(0, 3, 2, 4)));
    }

    #[test]
    fn test_contains_range() {
        let outer = CellRange::new(0, 0, 4, 4);
        assert!(outer.contains_range(&CellRange::new(1, 1, 3, 3)));
        assert!(outer.contains_range(&outer));
        assert!(!outer.contains_range(&CellRange::new(1, 1, 5, 3)));
    }

    #[test]
    fn test_spans_and_counts() {
        let range = CellRange::new(1, 2, 3, 2);
        assert_eq!(range.row_span(), 2);
        assert_eq!(range.col_span(), 0);
        assert_eq!(range.rows(), 3);
        assert_eq!(range.cols(), 1);
        assert!(!range.is_single_cell());
        assert!(CellRange::cell(7, 7).is_single_cell());
    }

    #[test]
    fn test_anchored_at_preserves_shape() {
        let region = CellRange::new(1, 1, 3, 2);
        let moved = region.anchored_at(10, 5);
        assert_eq!(moved, CellRange::new(10, 5, 12, 6));
    }

    #[test]
    fn test_display_a1_notation() {
        assert_eq!(CellRange::cell(0, 0).to_string(), "A1");
        assert_eq!(CellRange::new(0, 0, 1, 1).to_string(), "A1:B2");
        assert_eq!(CellRange::new(2, 26, 4, 28).to_string(), "AA3:AC5");
    }

    #[test]
    fn test_serde_uses_camel_case_fields() {
        let range = CellRange::new(0, 1, 2, 3);
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(
            json,
            r#"{"startRow":0,"startCol":1,"endRow":2,"endCol":3}"#
        );
    }
}
