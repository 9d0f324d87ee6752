//! Scroll state and boundary snapping.
//!
//! Scroll offsets are pixel distances past the freeze boundary, always
//! snapped so the first visible non-frozen row/column starts exactly at
//! that boundary. Frozen rows and columns never scroll.

use crate::range::range_reduce;

use super::Grid;

/// Scroll offsets plus the first visible non-frozen indices.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Scroll {
    /// Horizontal offset in pixels, snapped to a column boundary.
    pub x: f32,
    /// Vertical offset in pixels, snapped to a row boundary.
    pub y: f32,
    /// First visible non-frozen row (absolute index).
    pub first_row: u32,
    /// First visible non-frozen column (absolute index).
    pub first_col: u32,
}

impl Grid {
    /// Current scroll state.
    pub fn scroll(&self) -> Scroll {
        self.scroll
    }

    /// Snap `x` forward to a column boundary past the frozen columns and
    /// store it.
    ///
    /// Returns `Some(snapped)` when the stored offset changed, `None` when
    /// it landed where it already was. Targets past the content saturate
    /// at the last column; targets at or below zero reset to the freeze
    /// boundary.
    pub fn scroll_x(&mut self, x: f32) -> Option<f32> {
        let first_scrollable = self.data.freeze.1;
        let (index, left, width) = range_reduce(
            first_scrollable,
            self.col_count(),
            0.0,
            0.0,
            x,
            |i| self.col_width(i),
        );
        let snapped = if x > 0.0 { left + width } else { left };
        if (self.scroll.x - snapped).abs() <= f32::EPSILON {
            return None;
        }
        self.scroll.x = snapped;
        self.scroll.first_col = if x > 0.0 { index } else { first_scrollable };
        Some(snapped)
    }

    /// Snap `y` forward to a row boundary past the frozen rows and store
    /// it. See [`scroll_x`](Grid::scroll_x).
    pub fn scroll_y(&mut self, y: f32) -> Option<f32> {
        let first_scrollable = self.data.freeze.0;
        let (index, top, height) = range_reduce(
            first_scrollable,
            self.row_count(),
            0.0,
            0.0,
            y,
            |i| self.row_height(i),
        );
        let snapped = if y > 0.0 { top + height } else { top };
        if (self.scroll.y - snapped).abs() <= f32::EPSILON {
            return None;
        }
        self.scroll.y = snapped;
        self.scroll.first_row = if y > 0.0 { index } else { first_scrollable };
        Some(snapped)
    }

    /// Inclusive range of non-frozen rows visible in a viewport
    /// `view_height` pixels tall, starting at the scroll position. The
    /// header band and frozen rows are subtracted from the available
    /// height.
    pub fn visible_rows(&self, view_height: f32) -> (u32, u32) {
        let last = self.row_count().saturating_sub(1);
        // an unscrolled grid starts right past the frozen rows
        let start = self.scroll.first_row.max(self.data.freeze.0).min(last);
        let avail =
            (view_height - self.config.header_height - self.frozen_rows_height()).max(0.0);
        let (index, _, _) =
            range_reduce(start, self.row_count(), 0.0, 0.0, avail, |i| self.row_height(i));
        let end = index.saturating_sub(1).clamp(start, last);
        (start, end)
    }

    /// Inclusive range of non-frozen columns visible in a viewport
    /// `view_width` pixels wide. See [`visible_rows`](Grid::visible_rows).
    pub fn visible_cols(&self, view_width: f32) -> (u32, u32) {
        let last = self.col_count().saturating_sub(1);
        let start = self.scroll.first_col.max(self.data.freeze.1).min(last);
        let avail = (view_width - self.config.header_width - self.frozen_cols_width()).max(0.0);
        let (index, _, _) =
            range_reduce(start, self.col_count(), 0.0, 0.0, avail, |i| self.col_width(i));
        let end = index.saturating_sub(1).clamp(start, last);
        (start, end)
    }
}
