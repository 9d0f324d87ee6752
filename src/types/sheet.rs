//! The grid's document state: sparse cells, sizing overrides, merges, freeze.
//!
//! `SheetData` is the unit of history snapshots and of (de)serialization.
//! It holds no pixel geometry and no session state; those live on the
//! [`Grid`](crate::Grid) facade.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Cell, CellRange, CellWriteMode};

fn is_origin(freeze: &(u32, u32)) -> bool {
    *freeze == (0, 0)
}

/// Document state owned by a [`Grid`](crate::Grid).
///
/// Cells are keyed `row -> col -> Cell`; rows with no cells are absent, so
/// two documents with the same content compare equal regardless of edit
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetData {
    /// `(row, col)` of the first non-frozen row and column.
    #[serde(default, skip_serializing_if = "is_origin")]
    pub freeze: (u32, u32),

    /// Merge regions in creation order. Point lookup is first match wins.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub merges: Vec<CellRange>,

    /// Per-row height overrides, in pixels.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub row_heights: BTreeMap<u32, f32>,

    /// Per-column width overrides, in pixels.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub col_widths: BTreeMap<u32, f32>,

    /// Explicit row count; `None` falls back to the configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_len: Option<u32>,

    /// Explicit column count; `None` falls back to the configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_len: Option<u32>,

    /// Sparse cell store.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub cells: BTreeMap<u32, BTreeMap<u32, Cell>>,
}

impl SheetData {
    /// The cell at `(row, col)`, if present.
    pub fn get_cell(&self, row: u32, col: u32) -> Option<&Cell> {
        self.cells.get(&row).and_then(|cols| cols.get(&col))
    }

    /// The cell at `(row, col)`, created empty if absent.
    pub fn cell_or_new(&mut self, row: u32, col: u32) -> &mut Cell {
        self.cells.entry(row).or_default().entry(col).or_default()
    }

    /// Write `cell` at `(row, col)` according to `mode`.
    ///
    /// Non-[`All`](CellWriteMode::All) modes create an empty target first,
    /// then overwrite only the selected field.
    pub fn set_cell(&mut self, row: u32, col: u32, cell: &Cell, mode: CellWriteMode) {
        match mode {
            CellWriteMode::All => {
                self.cells.entry(row).or_default().insert(col, cell.clone());
            }
            CellWriteMode::Text => {
                self.cell_or_new(row, col).text = cell.text.clone();
            }
            CellWriteMode::Format => {
                self.cell_or_new(row, col).style_index = cell.style_index;
            }
        }
    }

    /// Remove and return the cell at `(row, col)`, pruning its row entry
    /// when it empties.
    pub fn remove_cell(&mut self, row: u32, col: u32) -> Option<Cell> {
        let cols = self.cells.get_mut(&row)?;
        let removed = cols.remove(&col);
        if cols.is_empty() {
            self.cells.remove(&row);
        }
        removed
    }

    /// Remove every stored cell inside `range`.
    pub fn remove_cells_in(&mut self, range: &CellRange) {
        let rows: Vec<u32> = self
            .cells
            .range(range.start_row..=range.end_row)
            .map(|(row, _)| *row)
            .collect();
        for row in rows {
            if let Some(cols) = self.cells.get_mut(&row) {
                let hit: Vec<u32> = cols
                    .range(range.start_col..=range.end_col)
                    .map(|(col, _)| *col)
                    .collect();
                for col in hit {
                    cols.remove(&col);
                }
                if cols.is_empty() {
                    self.cells.remove(&row);
                }
            }
        }
    }

    /// The first merge region containing `(row, col)`, if any.
    pub fn find_merge(&self, row: u32, col: u32) -> Option<CellRange> {
        self.merges.iter().find(|m| m.contains(row, col)).copied()
    }

    /// Write `region`'s span onto its anchor cell, creating it if needed.
    pub(crate) fn stamp_anchor(&mut self, region: &CellRange) {
        let span = (region.row_span(), region.col_span());
        self.cell_or_new(region.start_row, region.start_col).merge = Some(span);
    }
}

/// Partial document state accepted by [`Grid::load`](crate::Grid::load).
///
/// Every field is optional; unset fields keep the freshly reset defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SheetPatch {
    pub freeze: Option<(u32, u32)>,
    pub merges: Option<Vec<CellRange>>,
    pub row_heights: Option<BTreeMap<u32, f32>>,
    pub col_widths: Option<BTreeMap<u32, f32>>,
    pub row_len: Option<u32>,
    pub col_len: Option<u32>,
    pub cells: Option<BTreeMap<u32, BTreeMap<u32, Cell>>>,
}

impl SheetPatch {
    /// Apply every set field onto `data`, leaving unset fields untouched.
    pub fn apply(self, data: &mut SheetData) {
        if let Some(freeze) = self.freeze {
            data.freeze = freeze;
        }
        if let Some(merges) = self.merges {
            data.merges = merges;
        }
        if let Some(row_heights) = self.row_heights {
            data.row_heights = row_heights;
        }
        if let Some(col_widths) = self.col_widths {
            data.col_widths = col_widths;
        }
        if let Some(row_len) = self.row_len {
            data.row_len = Some(row_len);
        }
        if let Some(col_len) = self.col_len {
            data.col_len = Some(col_len);
        }
        if let Some(cells) = self.cells {
            data.cells = cells;
        }
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
    fn test_set_cell_all_replaces_whole_cell() {
        let mut data = SheetData::default();
        let old = Cell {
            style_index: Some(2),
            ..Cell::with_text("old")
        };
        data.set_cell(0, 0, &old, CellWriteMode::All);
        data.set_cell(0, 0, &Cell::with_text("new"), CellWriteMode::All);
        let cell = data.get_cell(0, 0).unwrap();
        assert_eq!(cell.text, "new");
        assert_eq!(cell.style_index, None);
    }

    #[test]
    fn test_set_cell_text_keeps_other_fields() {
        let mut data = SheetData::default();
        let cell = Cell {
            style_index: Some(7),
            ..Cell::with_text("v")
        };
        data.set_cell(1, 1, &cell, CellWriteMode::All);
        data.set_cell(1, 1, &Cell::with_text("w"), CellWriteMode::Text);
        let got = data.get_cell(1, 1).unwrap();
        assert_eq!(got.text, "w");
        assert_eq!(got.style_index, Some(7));
    }

    #[test]
    fn test_set_cell_format_creates_empty_target() {
        let mut data = SheetData::default();
        let styled = Cell {
            style_index: Some(3),
            ..Cell::default()
        };
        data.set_cell(2, 2, &styled, CellWriteMode::Format);
        let got = data.get_cell(2, 2).unwrap();
        assert_eq!(got.style_index, Some(3));
        assert_eq!(got.text, "");
    }

    #[test]
    fn test_remove_cell_prunes_empty_rows() {
        let mut data = SheetData::default();
        data.set_cell(4, 0, &Cell::with_text("x"), CellWriteMode::All);
        assert!(data.remove_cell(4, 0).is_some());
        assert!(data.cells.is_empty());
        assert_eq!(data, SheetData::default());
    }

    #[test]
    fn test_remove_cells_in_range_only() {
        let mut data = SheetData::default();
        data.set_cell(0, 0, &Cell::with_text("keep"), CellWriteMode::All);
        data.set_cell(1, 1, &Cell::with_text("a"), CellWriteMode::All);
        data.set_cell(2, 2, &Cell::with_text("b"), CellWriteMode::All);
        data.remove_cells_in(&CellRange::new(1, 1, 2, 2));
        assert!(data.get_cell(0, 0).is_some());
        assert!(data.get_cell(1, 1).is_none());
        assert!(data.get_cell(2, 2).is_none());
    }

    #[test]
    fn test_find_merge_is_first_match() {
        let mut data = SheetData::default();
        data.merges.push(CellRange::new(0, 0, 1, 1));
        data.merges.push(CellRange::new(3, 3, 4, 4));
        assert_eq!(data.find_merge(1, 0), Some(CellRange::new(0, 0, 1, 1)));
        assert_eq!(data.find_merge(4, 4), Some(CellRange::new(3, 3, 4, 4)));
        assert_eq!(data.find_merge(2, 2), None);
    }

    #[test]
    fn test_patch_applies_only_set_fields() {
        let mut data = SheetData::default();
        data.row_len = Some(50);
        let patch = SheetPatch {
            freeze: Some((2, 1)),
            ..SheetPatch::default()
        };
        patch.apply(&mut data);
        assert_eq!(data.freeze, (2, 1));
        assert_eq!(data.row_len, Some(50));
    }

    #[test]
    fn test_default_data_serializes_empty() {
        let json = serde_json::to_string(&SheetData::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_patch_parses_partial_json() {
        let patch: SheetPatch = serde_json::from_str(
            r#"{"freeze":[1,0],"cells":{"0":{"0":{"text":"hi"}}}}"#,
        )
        .unwrap();
        assert_eq!(patch.freeze, Some((1, 0)));
        let cells = patch.cells.unwrap();
        assert_eq!(cells[&0][&0].text, "hi");
    }
}
