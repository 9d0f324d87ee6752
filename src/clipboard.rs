//! Copy/cut capture state.
//!
//! The clipboard stores only a captured range and a mode; cell content is
//! read from the document at paste time, so edits between copy and paste
//! are visible to the paste.

use crate::types::CellRange;

/// How a captured range behaves on paste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardMode {
    /// Paste duplicates the source cells; the capture stays armed.
    Copy,
    /// Paste moves the source cells; the capture is consumed.
    Cut,
}

/// A captured range plus its mode. Unarmed when nothing was captured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clipboard {
    state: Option<(CellRange, ClipboardMode)>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture `range` for copying.
    pub fn copy(&mut self, range: CellRange) {
        self.state = Some((range, ClipboardMode::Copy));
    }

    /// Capture `range` for moving.
    pub fn cut(&mut self, range: CellRange) {
        self.state = Some((range, ClipboardMode::Cut));
    }

    /// Disarm the clipboard.
    pub fn clear(&mut self) {
        self.state = None;
    }

    /// Whether nothing is captured.
    pub fn is_clear(&self) -> bool {
        self.state.is_none()
    }

    /// The captured range and mode, if armed.
    pub fn get(&self) -> Option<(CellRange, ClipboardMode)> {
        self.state
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
    fn test_starts_clear() {
        let clipboard = Clipboard::new();
        assert!(clipboard.is_clear());
        assert!(clipboard.get().is_none());
    }

    #[test]
    fn test_copy_then_cut_replaces_capture() {
        let mut clipboard = Clipboard::new();
        clipboard.copy(CellRange::cell(0, 0));
        assert_eq!(
            clipboard.get(),
            Some((CellRange::cell(0, 0), ClipboardMode::Copy))
        );
        clipboard.cut(CellRange::new(1, 1, 2, 2));
        assert_eq!(
            clipboard.get(),
            Some((CellRange::new(1, 1, 2, 2), ClipboardMode::Cut))
        );
    }

    #[test]
    fn test_clear_disarms() {
        let mut clipboard = Clipboard::new();
        clipboard.copy(CellRange::cell(3, 3));
        clipboard.clear();
        assert!(clipboard.is_clear());
    }
}
