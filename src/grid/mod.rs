//! The `Grid` facade - the primary entry point for embedders.
//!
//! A `Grid` owns one document ([`SheetData`]) plus the session state around
//! it, and exposes every operation an interactive grid needs:
//! - Reading and writing cells, row/column sizing, freeze panes
//! - Merge region management and structural edits (insert/delete)
//! - Pixel geometry: hit testing, selection rectangles, scroll snapping
//! - Selection, clipboard (copy/cut/paste) and undo/redo
//!
//! Rendering, input capture and formula evaluation live outside; the grid
//! hands them geometry, state snapshots and a [`CellLookup`] seam.

mod geometry;
mod scroll;
mod structure;

use std::collections::BTreeMap;

use crate::clipboard::{Clipboard, ClipboardMode};
use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::formula::{CellLookup, FormulaResolver, FormulaSet};
use crate::history::History;
use crate::types::{Cell, CellRange, CellWriteMode, SheetData, SheetPatch, Style, StyleTable};

pub use geometry::{CellHit, HitTarget, Rect};
pub use scroll::Scroll;

/// An in-memory spreadsheet grid: document state, session state and the
/// viewport geometry over them.
#[derive(Debug)]
pub struct Grid {
    config: GridConfig,
    data: SheetData,
    formulas: FormulaSet,
    history: History,
    clipboard: Clipboard,
    selection: Option<CellRange>,
    scroll: Scroll,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl Grid {
    /// An empty grid over `config`.
    pub fn new(config: GridConfig) -> Self {
        let formulas = FormulaSet::new(config.formulas.clone());
        Self {
            config,
            data: SheetData::default(),
            formulas,
            history: History::new(),
            clipboard: Clipboard::new(),
            selection: None,
            scroll: Scroll::default(),
        }
    }

    /// Replace the document with `patch` applied over a fresh default.
    ///
    /// Merge anchors are re-stamped from the region list, and all session
    /// state (history, clipboard, selection, scroll) is reset.
    pub fn load(&mut self, patch: SheetPatch) {
        let mut data = SheetData::default();
        patch.apply(&mut data);
        let regions = data.merges.clone();
        for region in &regions {
            data.stamp_anchor(region);
        }
        self.data = data;
        self.history.clear();
        self.clipboard.clear();
        self.selection = None;
        self.scroll = Scroll::default();
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The live document state, e.g. for serialization.
    pub fn data(&self) -> &SheetData {
        &self.data
    }

    pub fn formulas(&self) -> &FormulaSet {
        &self.formulas
    }

    // ---- counts and sizes ----

    /// Number of rows (document override or configured default).
    pub fn row_count(&self) -> u32 {
        self.data.row_len.unwrap_or(self.config.row_count)
    }

    /// Number of columns (document override or configured default).
    pub fn col_count(&self) -> u32 {
        self.data.col_len.unwrap_or(self.config.col_count)
    }

    /// Height of `row` in pixels.
    pub fn row_height(&self, row: u32) -> f32 {
        self.data
            .row_heights
            .get(&row)
            .copied()
            .unwrap_or(self.config.row_height)
    }

    /// Width of `col` in pixels.
    pub fn col_width(&self, col: u32) -> f32 {
        self.data
            .col_widths
            .get(&col)
            .copied()
            .unwrap_or(self.config.col_width)
    }

    /// Override the height of `row`. Records history.
    pub fn set_row_height(&mut self, row: u32, height: f32) {
        self.history.record(&self.data);
        self.data.row_heights.insert(row, height);
    }

    /// Override the width of `col`. Records history.
    pub fn set_col_width(&mut self, col: u32, width: f32) {
        self.history.record(&self.data);
        self.data.col_widths.insert(col, width);
    }

    /// `(row, col)` of the first non-frozen row and column.
    pub fn freeze(&self) -> (u32, u32) {
        self.data.freeze
    }

    /// Freeze every row before `row` and every column before `col`.
    /// Records history.
    pub fn set_freeze(&mut self, row: u32, col: u32) {
        self.history.record(&self.data);
        self.data.freeze = (row, col);
    }

    // ---- cells ----

    /// The cell at `(row, col)`, if present.
    pub fn cell(&self, row: u32, col: u32) -> Option<&Cell> {
        self.data.get_cell(row, col)
    }

    /// Write `cell` at `(row, col)` according to `mode`. Records history.
    pub fn set_cell(&mut self, row: u32, col: u32, cell: &Cell, mode: CellWriteMode) {
        self.history.record(&self.data);
        self.data.set_cell(row, col, cell, mode);
    }

    /// Set only the text of the cell at `(row, col)`, creating it if
    /// absent. Records history.
    pub fn set_cell_text(&mut self, row: u32, col: u32, text: &str) {
        self.history.record(&self.data);
        self.data.cell_or_new(row, col).text = text.to_string();
    }

    /// The effective style of `(row, col)`: the configured default with the
    /// cell's indexed record (if any) applied over it.
    pub fn cell_style(&self, row: u32, col: u32, styles: &StyleTable) -> Style {
        let base = self.config.default_style.clone();
        let Some(index) = self.data.get_cell(row, col).and_then(|c| c.style_index) else {
            return base;
        };
        match styles.get(index) {
            Some(record) => base.merged_with(record),
            None => base,
        }
    }

    /// The display text of `(row, col)`, with formula text (leading `=`)
    /// resolved through `resolver`. `None` when no cell is stored there.
    pub fn resolve_cell(
        &self,
        row: u32,
        col: u32,
        resolver: &dyn FormulaResolver,
    ) -> Option<String> {
        let text = self.data.get_cell(row, col)?.text.as_str();
        match text.strip_prefix('=') {
            Some(body) => Some(resolver.resolve(body, self)),
            None => Some(text.to_string()),
        }
    }

    // ---- selection ----

    /// The current selection, if any.
    pub fn selection(&self) -> Option<CellRange> {
        self.selection
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Select the rectangle spanned by two `(row, col)` corners.
    pub fn select_range(&mut self, a: (u32, u32), b: (u32, u32)) -> CellRange {
        let range = CellRange::from_corners(a, b);
        self.selection = Some(range);
        range
    }

    /// Select from a hit-test target: a cell hit selects the cell (or its
    /// whole merge region), a header hit selects the full row/column, the
    /// corner selects everything.
    pub fn select_hit(&mut self, target: HitTarget) -> CellRange {
        let range = self.range_from_hit(target);
        self.selection = Some(range);
        range
    }

    fn range_from_hit(&self, target: HitTarget) -> CellRange {
        let last_row = self.row_count().saturating_sub(1);
        let last_col = self.col_count().saturating_sub(1);
        match target {
            HitTarget::Cell(row, col) => self
                .data
                .find_merge(row, col)
                .unwrap_or_else(|| CellRange::cell(row, col)),
            HitTarget::RowHeader(row) => CellRange::new(row, 0, row, last_col),
            HitTarget::ColumnHeader(col) => CellRange::new(0, col, last_row, col),
            HitTarget::CornerHeader => CellRange::new(0, 0, last_row, last_col),
        }
    }

    /// Remove every cell in the current selection. Merge regions whose
    /// anchor lies in the selection are dropped with their cells. Records
    /// history; no-op without a selection.
    pub fn clear_selected_cells(&mut self) {
        let Some(range) = self.selection else { return };
        self.history.record(&self.data);
        self.data.remove_cells_in(&range);
        self.data
            .merges
            .retain(|m| !range.contains(m.start_row, m.start_col));
    }

    // ---- merging ----

    /// Merge `range` into one region anchored at its top-left cell.
    ///
    /// The anchor keeps its content and gains the region's span; all other
    /// cells in the range are deleted. A single-cell range is a no-op.
    /// Records history on success.
    ///
    /// # Errors
    /// [`GridError::MergeOverlap`] if `range` intersects an existing
    /// region; the document is left untouched.
    pub fn merge(&mut self, range: CellRange) -> Result<()> {
        if range.is_single_cell() {
            return Ok(());
        }
        if let Some(existing) = self.data.merges.iter().find(|m| m.intersects(&range)) {
            return Err(GridError::MergeOverlap {
                requested: range,
                existing: *existing,
            });
        }
        self.history.record(&self.data);
        let saved = self.data.remove_cell(range.start_row, range.start_col);
        self.data.remove_cells_in(&range);
        let anchor = self.data.cell_or_new(range.start_row, range.start_col);
        if let Some(saved) = saved {
            *anchor = saved;
        }
        anchor.merge = Some((range.row_span(), range.col_span()));
        self.data.merges.push(range);
        Ok(())
    }

    // ---- clipboard ----

    /// Capture `range` for copying. Pasting duplicates the cells and the
    /// capture stays armed for repeated pastes.
    pub fn copy(&mut self, range: CellRange) {
        self.clipboard.copy(range);
    }

    /// Capture `range` for moving. Pasting relocates the cells and disarms
    /// the capture.
    ///
    /// # Errors
    /// [`GridError::CutSplitsMerge`] if `range` covers part of a merge
    /// region but not all of it.
    pub fn cut(&mut self, range: CellRange) -> Result<()> {
        for region in &self.data.merges {
            if range.intersects(region) && !range.contains_range(region) {
                return Err(GridError::CutSplitsMerge {
                    range,
                    region: *region,
                });
            }
        }
        self.clipboard.cut(range);
        Ok(())
    }

    pub fn clear_clipboard(&mut self) {
        self.clipboard.clear();
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    /// Paste the captured range with its top-left at `target`.
    ///
    /// Copy pastes write each stored source cell through `mode`; merge
    /// spans are not carried over. Cut pastes move the cells and any merge
    /// regions fully inside the source, with relocated cells winning key
    /// collisions. A paste with nothing captured is a no-op.
    ///
    /// # Errors
    /// [`GridError::MergeOverlap`] if a cut would land a moved region on an
    /// existing one; the document is left untouched.
    pub fn paste(&mut self, target: (u32, u32), mode: CellWriteMode) -> Result<()> {
        let Some((source, clip_mode)) = self.clipboard.get() else {
            return Ok(());
        };
        match clip_mode {
            ClipboardMode::Copy => {
                self.history.record(&self.data);
                self.paste_copy(&source, target, mode);
            }
            ClipboardMode::Cut => {
                self.check_cut_destination(&source, target)?;
                self.history.record(&self.data);
                self.paste_cut(&source, target);
                self.clipboard.clear();
            }
        }
        Ok(())
    }

    fn paste_copy(&mut self, source: &CellRange, target: (u32, u32), mode: CellWriteMode) {
        let mut captured: Vec<(u32, u32, Cell)> = Vec::new();
        for (row, cols) in self.data.cells.range(source.start_row..=source.end_row) {
            for (col, cell) in cols.range(source.start_col..=source.end_col) {
                captured.push((*row, *col, cell.clone()));
            }
        }
        for (row, col, cell) in captured {
            let dest_row = target.0.saturating_add(row - source.start_row);
            let dest_col = target.1.saturating_add(col - source.start_col);
            let mut copy = cell;
            copy.merge = None;
            self.data.set_cell(dest_row, dest_col, &copy, mode);
        }
    }

    fn check_cut_destination(&self, source: &CellRange, target: (u32, u32)) -> Result<()> {
        for region in &self.data.merges {
            if !source.contains_range(region) {
                continue;
            }
            let moved = translated(region, source, target);
            for other in &self.data.merges {
                // regions moving together keep their relative layout
                if source.contains_range(other) {
                    continue;
                }
                if moved.intersects(other) {
                    return Err(GridError::MergeOverlap {
                        requested: moved,
                        existing: *other,
                    });
                }
            }
        }
        Ok(())
    }

    fn paste_cut(&mut self, source: &CellRange, target: (u32, u32)) {
        let old = std::mem::take(&mut self.data.cells);
        let mut fresh: BTreeMap<u32, BTreeMap<u32, Cell>> = BTreeMap::new();
        let mut moved: Vec<(u32, u32, Cell)> = Vec::new();
        for (row, cols) in old {
            for (col, cell) in cols {
                if source.contains(row, col) {
                    moved.push((
                        target.0.saturating_add(row - source.start_row),
                        target.1.saturating_add(col - source.start_col),
                        cell,
                    ));
                } else {
                    fresh.entry(row).or_default().insert(col, cell);
                }
            }
        }
        // relocated cells win key collisions with stationary ones
        for (row, col, cell) in moved {
            fresh.entry(row).or_default().insert(col, cell);
        }
        self.data.cells = fresh;
        for region in &mut self.data.merges {
            if source.contains_range(region) {
                *region = translated(region, source, target);
            }
        }
    }

    // ---- history ----

    /// Restore the document to the state before the last mutation.
    pub fn undo(&mut self) {
        if let Some(snapshot) = self.history.undo(&self.data) {
            self.data = snapshot;
        }
    }

    /// Re-apply the most recently undone mutation.
    pub fn redo(&mut self) {
        if let Some(snapshot) = self.history.redo(&self.data) {
            self.data = snapshot;
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl CellLookup for Grid {
    fn cell_text(&self, row: u32, col: u32) -> Option<&str> {
        self.data.get_cell(row, col).map(|c| c.text.as_str())
    }
}

/// `region` moved rigidly by the `source`-to-`target` paste translation.
fn translated(region: &CellRange, source: &CellRange, target: (u32, u32)) -> CellRange {
    region.anchored_at(
        target.0.saturating_add(region.start_row - source.start_row),
        target.1.saturating_add(region.start_col - source.start_col),
    )
}
