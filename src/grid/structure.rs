//! Structural edits: inserting and deleting rows and columns.
//!
//! Edits rebuild the sparse key maps into fresh maps rather than shifting
//! keys in place, and move merge regions, size overrides and the freeze
//! anchor by the same rule so the document stays consistent. Rows and
//! columns share one implementation parameterized by [`Axis`].

use std::collections::BTreeMap;

use crate::types::{Axis, CellRange, SheetData};

use super::Grid;

impl Grid {
    /// Insert `n` empty rows before row `at`. Cells, merge regions, height
    /// overrides and the freeze anchor shift down together. Records
    /// history; no-op when `n` is 0.
    pub fn insert_rows(&mut self, at: u32, n: u32) {
        if n == 0 {
            return;
        }
        self.history.record(&self.data);
        let len = self.row_count();
        shift_keys_insert(&mut self.data.cells, at, n);
        shift_keys_insert(&mut self.data.row_heights, at, n);
        if at < self.data.freeze.0 {
            self.data.freeze.0 = self.data.freeze.0.saturating_add(n);
        }
        self.data.row_len = Some(len.saturating_add(n));
        shift_merges_insert(&mut self.data, Axis::Row, at, n);
    }

    /// Delete `count` rows starting at row `at`, dropping their cells.
    /// Records history; no-op when `count` is 0.
    pub fn delete_rows(&mut self, at: u32, count: u32) {
        if count == 0 {
            return;
        }
        self.history.record(&self.data);
        let len = self.row_count();
        shift_keys_delete(&mut self.data.cells, at, count);
        shift_keys_delete(&mut self.data.row_heights, at, count);
        let band_end = at.saturating_add(count);
        if at < self.data.freeze.0 {
            self.data.freeze.0 -= band_end.min(self.data.freeze.0) - at;
        }
        self.data.row_len = Some(len.saturating_sub(count));
        shift_merges_delete(&mut self.data, Axis::Row, at, count);
    }

    /// Insert `n` empty columns before column `at`.
    pub fn insert_cols(&mut self, at: u32, n: u32) {
        if n == 0 {
            return;
        }
        self.history.record(&self.data);
        let len = self.col_count();
        for cols in self.data.cells.values_mut() {
            shift_keys_insert(cols, at, n);
        }
        shift_keys_insert(&mut self.data.col_widths, at, n);
        if at < self.data.freeze.1 {
            self.data.freeze.1 = self.data.freeze.1.saturating_add(n);
        }
        self.data.col_len = Some(len.saturating_add(n));
        shift_merges_insert(&mut self.data, Axis::Col, at, n);
    }

    /// Delete `count` columns starting at column `at`.
    pub fn delete_cols(&mut self, at: u32, count: u32) {
        if count == 0 {
            return;
        }
        self.history.record(&self.data);
        let len = self.col_count();
        for cols in self.data.cells.values_mut() {
            shift_keys_delete(cols, at, count);
        }
        self.data.cells.retain(|_, cols| !cols.is_empty());
        shift_keys_delete(&mut self.data.col_widths, at, count);
        let band_end = at.saturating_add(count);
        if at < self.data.freeze.1 {
            self.data.freeze.1 -= band_end.min(self.data.freeze.1) - at;
        }
        self.data.col_len = Some(len.saturating_sub(count));
        shift_merges_delete(&mut self.data, Axis::Col, at, count);
    }
}

/// Rebuild `map` with every key at or past `at` shifted up by `n`.
fn shift_keys_insert<V>(map: &mut BTreeMap<u32, V>, at: u32, n: u32) {
    let old = std::mem::take(map);
    for (key, value) in old {
        let shifted = if key >= at { key.saturating_add(n) } else { key };
        map.insert(shifted, value);
    }
}

/// Rebuild `map` with keys in `[at, at + count)` dropped and later keys
/// shifted down by `count`.
fn shift_keys_delete<V>(map: &mut BTreeMap<u32, V>, at: u32, count: u32) {
    let band_end = at.saturating_add(count);
    let old = std::mem::take(map);
    for (key, value) in old {
        if key < at {
            map.insert(key, value);
        } else if key >= band_end {
            map.insert(key - count, value);
        }
    }
}

/// Shift merge regions for an insertion of `n` indices before `at`.
///
/// Regions starting at or past `at` move whole; regions that `at` falls
/// strictly inside grow at the end, and their anchor cell's span is
/// updated to match.
fn shift_merges_insert(data: &mut SheetData, axis: Axis, at: u32, n: u32) {
    let mut grown: Vec<CellRange> = Vec::new();
    for region in &mut data.merges {
        let start = region.start_on(axis);
        let end = region.end_on(axis);
        if start >= at {
            *region.start_on_mut(axis) = start.saturating_add(n);
            *region.end_on_mut(axis) = end.saturating_add(n);
        } else if at > start && at <= end {
            *region.end_on_mut(axis) = end.saturating_add(n);
            grown.push(*region);
        }
    }
    for region in grown {
        data.stamp_anchor(&region);
    }
}

/// Shift merge regions for a deletion of `count` indices starting at `at`.
///
/// Regions past the deleted band move whole; a region whose anchor index
/// falls inside the band is dropped (its cells went with the band); a
/// region the band cuts into from inside shrinks, dissolving entirely if
/// only its anchor cell remains.
fn shift_merges_delete(data: &mut SheetData, axis: Axis, at: u32, count: u32) {
    let band_end = at.saturating_add(count);
    let mut kept: Vec<CellRange> = Vec::with_capacity(data.merges.len());
    let mut shrunk: Vec<CellRange> = Vec::new();
    let mut dissolved: Vec<(u32, u32)> = Vec::new();
    for mut region in std::mem::take(&mut data.merges) {
        let start = region.start_on(axis);
        let end = region.end_on(axis);
        if end < at {
            kept.push(region);
        } else if start >= band_end {
            *region.start_on_mut(axis) = start - count;
            *region.end_on_mut(axis) = end - count;
            kept.push(region);
        } else if start >= at {
            // anchor index deleted: the region goes with the band
        } else {
            let removed = end.min(band_end - 1) - at + 1;
            *region.end_on_mut(axis) = end - removed;
            if region.is_single_cell() {
                dissolved.push((region.start_row, region.start_col));
            } else {
                shrunk.push(region);
                kept.push(region);
            }
        }
    }
    data.merges = kept;
    for region in shrunk {
        data.stamp_anchor(&region);
    }
    for (row, col) in dissolved {
        if let Some(cell) = data.cells.get_mut(&row).and_then(|cols| cols.get_mut(&col)) {
            cell.merge = None;
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
    use crate::types::{Cell, CellWriteMode};

    fn map_of(keys: &[u32]) -> BTreeMap<u32, f32> {
        keys.iter().map(|&k| (k, f32::from(u16::try_from(k).unwrap()))).collect()
    }

    #[test]
    fn test_shift_keys_insert_moves_at_and_later() {
        let mut map = map_of(&[0, 2, 5]);
        shift_keys_insert(&mut map, 2, 3);
        let keys: Vec<u32> = map.keys().copied().collect();
        assert_eq!(keys, [0, 5, 8]);
    }

    #[test]
    fn test_shift_keys_delete_drops_band() {
        let mut map = map_of(&[0, 2, 3, 7]);
        shift_keys_delete(&mut map, 2, 2);
        let keys: Vec<u32> = map.keys().copied().collect();
        assert_eq!(keys, [0, 5]);
    }

    #[test]
    fn test_merge_whole_shift_on_insert_before() {
        let mut data = SheetData::default();
        data.merges.push(CellRange::new(3, 0, 5, 1));
        data.stamp_anchor(&CellRange::new(3, 0, 5, 1));
        shift_keys_insert(&mut data.cells, 1, 2);
        shift_merges_insert(&mut data, Axis::Row, 1, 2);
        assert_eq!(data.merges, vec![CellRange::new(5, 0, 7, 1)]);
        // the anchor moved with its cells, span unchanged
        assert_eq!(data.get_cell(5, 0).unwrap().merge, Some((2, 1)));
    }

    #[test]
    fn test_merge_grows_when_insert_lands_inside() {
        let mut data = SheetData::default();
        let region = CellRange::new(1, 1, 3, 1);
        data.merges.push(region);
        data.stamp_anchor(&region);
        shift_merges_insert(&mut data, Axis::Row, 2, 1);
        assert_eq!(data.merges, vec![CellRange::new(1, 1, 4, 1)]);
        assert_eq!(data.get_cell(1, 1).unwrap().merge, Some((3, 0)));
    }

    #[test]
    fn test_merge_insert_at_start_shifts_not_grows() {
        let mut data = SheetData::default();
        let region = CellRange::new(2, 0, 4, 0);
        data.merges.push(region);
        data.stamp_anchor(&region);
        shift_keys_insert(&mut data.cells, 2, 1);
        shift_merges_insert(&mut data, Axis::Row, 2, 1);
        assert_eq!(data.merges, vec![CellRange::new(3, 0, 5, 0)]);
        assert_eq!(data.get_cell(3, 0).unwrap().merge, Some((2, 0)));
    }

    #[test]
    fn test_merge_dropped_when_anchor_deleted() {
        let mut data = SheetData::default();
        let region = CellRange::new(2, 2, 4, 3);
        data.merges.push(region);
        data.stamp_anchor(&region);
        shift_keys_delete(&mut data.cells, 1, 3);
        shift_merges_delete(&mut data, Axis::Row, 1, 3);
        assert!(data.merges.is_empty());
    }

    #[test]
    fn test_merge_shrinks_when_band_cuts_inside() {
        let mut data = SheetData::default();
        let region = CellRange::new(1, 0, 5, 0);
        data.merges.push(region);
        data.stamp_anchor(&region);
        shift_merges_delete(&mut data, Axis::Row, 3, 10);
        assert_eq!(data.merges, vec![CellRange::new(1, 0, 2, 0)]);
        assert_eq!(data.get_cell(1, 0).unwrap().merge, Some((1, 0)));
    }

    #[test]
    fn test_merge_dissolves_to_single_cell() {
        let mut data = SheetData::default();
        let region = CellRange::new(1, 0, 2, 0);
        data.set_cell(1, 0, &Cell::with_text("anchor"), CellWriteMode::All);
        data.merges.push(region);
        data.stamp_anchor(&region);
        shift_merges_delete(&mut data, Axis::Row, 2, 1);
        assert!(data.merges.is_empty());
        let anchor = data.get_cell(1, 0).unwrap();
        assert_eq!(anchor.merge, None);
        assert_eq!(anchor.text, "anchor");
    }

    #[test]
    fn test_merge_after_band_shifts_back() {
        let mut data = SheetData::default();
        let region = CellRange::new(6, 0, 7, 2);
        data.merges.push(region);
        data.stamp_anchor(&region);
        shift_keys_delete(&mut data.cells, 1, 2);
        shift_merges_delete(&mut data, Axis::Row, 1, 2);
        assert_eq!(data.merges, vec![CellRange::new(4, 0, 5, 2)]);
        assert_eq!(data.get_cell(4, 0).unwrap().merge, Some((1, 2)));
    }
}
