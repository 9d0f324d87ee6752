//! Linear undo/redo history of full document snapshots.
//!
//! Every mutating grid operation snapshots the document before applying
//! itself. Undo and redo swap the live document against the stacks; the
//! redo stack is invalidated by any new edit.

use crate::types::SheetData;

/// Undo/redo stacks of [`SheetData`] snapshots. Unbounded.
#[derive(Debug, Default)]
pub struct History {
    undo_stack: Vec<SheetData>,
    redo_stack: Vec<SheetData>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot `data` as the state to return to on undo.
    ///
    /// Recording forks the timeline, so any redo entries are dropped.
    pub fn record(&mut self, data: &SheetData) {
        self.undo_stack.push(data.clone());
        self.redo_stack.clear();
    }

    /// Pop the most recent snapshot, parking `current` for redo.
    ///
    /// Returns the snapshot for the caller to install, or `None` when
    /// there is nothing to undo.
    #[must_use]
    pub fn undo(&mut self, current: &SheetData) -> Option<SheetData> {
        let snapshot = self.undo_stack.pop()?;
        self.redo_stack.push(current.clone());
        Some(snapshot)
    }

    /// Pop the most recently undone snapshot, parking `current` for undo.
    #[must_use]
    pub fn redo(&mut self, current: &SheetData) -> Option<SheetData> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push(current.clone());
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Drop both stacks.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
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

    fn doc(text: &str) -> SheetData {
        let mut data = SheetData::default();
        data.set_cell(0, 0, &Cell::with_text(text), CellWriteMode::All);
        data
    }

    #[test]
    fn test_empty_history_has_nothing_to_do() {
        let mut history = History::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.undo(&SheetData::default()).is_none());
        assert!(history.redo(&SheetData::default()).is_none());
    }

    #[test]
    fn test_undo_returns_recorded_snapshot() {
        let mut history = History::new();
        let before = doc("a");
        history.record(&before);
        let after = doc("b");
        let restored = history.undo(&after).unwrap();
        assert_eq!(restored, before);
        assert!(history.can_redo());
    }

    #[test]
    fn test_redo_restores_undone_state() {
        let mut history = History::new();
        let v1 = doc("a");
        history.record(&v1);
        let v2 = doc("b");
        let back = history.undo(&v2).unwrap();
        assert_eq!(back, v1);
        let forward = history.redo(&back).unwrap();
        assert_eq!(forward, v2);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new();
        history.record(&doc("a"));
        let _ = history.undo(&doc("b")).unwrap();
        assert!(history.can_redo());
        history.record(&doc("c"));
        assert!(!history.can_redo());
        assert!(history.can_undo());
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut history = History::new();
        history.record(&doc("a"));
        let _ = history.undo(&doc("b")).unwrap();
        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_snapshots_are_independent_copies() {
        let mut history = History::new();
        let mut live = doc("a");
        history.record(&live);
        live.set_cell(0, 0, &Cell::with_text("mutated"), CellWriteMode::All);
        let restored = history.undo(&live).unwrap();
        assert_eq!(restored.get_cell(0, 0).unwrap().text, "a");
    }
}
