//! Pixel geometry over the grid: totals, cell rectangles and hit testing.
//!
//! Two pixel frames are in play. Hit testing speaks the viewport frame:
//! header bands included, scroll compensated everywhere except inside
//! frozen bands. The selection rectangle is reported in the content frame
//! (no header offset) with the same freeze rule, matching what an overlay
//! positioned inside the content area needs.

use crate::range::{range_reduce, range_sum};

use super::Grid;

/// A pixel-space rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether `(x, y)` lies strictly inside the rectangle.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x > self.x && x < self.x + self.width && y > self.y && y < self.y + self.height
    }
}

/// What a viewport point resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A cell, or the anchor of the merge region covering the point.
    Cell(u32, u32),
    /// The row header band, level with the given row.
    RowHeader(u32),
    /// The column header band, above the given column.
    ColumnHeader(u32),
    /// The corner where the two header bands meet.
    CornerHeader,
}

/// A hit-test result: the target plus its viewport-frame rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellHit {
    pub target: HitTarget,
    pub rect: Rect,
}

impl Grid {
    /// Width of the row header band.
    pub fn header_width(&self) -> f32 {
        self.config.header_width
    }

    /// Height of the column header band.
    pub fn header_height(&self) -> f32 {
        self.config.header_height
    }

    /// Sum of column widths over `[from, to)`.
    pub fn col_sum_width(&self, from: u32, to: u32) -> f32 {
        range_sum(from, to, |i| self.col_width(i))
    }

    /// Sum of row heights over `[from, to)`.
    pub fn row_sum_height(&self, from: u32, to: u32) -> f32 {
        range_sum(from, to, |i| self.row_height(i))
    }

    /// Total content width (every column, headers excluded).
    pub fn total_width(&self) -> f32 {
        self.col_sum_width(0, self.col_count())
    }

    /// Total content height (every row, headers excluded).
    pub fn total_height(&self) -> f32 {
        self.row_sum_height(0, self.row_count())
    }

    /// Combined width of the frozen columns.
    pub fn frozen_cols_width(&self) -> f32 {
        self.col_sum_width(0, self.data.freeze.1)
    }

    /// Combined height of the frozen rows.
    pub fn frozen_rows_height(&self) -> f32 {
        self.row_sum_height(0, self.data.freeze.0)
    }

    /// Content-frame position of the top-left corner of `(row, col)`.
    pub fn cell_position(&self, row: u32, col: u32) -> (f32, f32) {
        (self.col_sum_width(0, col), self.row_sum_height(0, row))
    }

    /// Content-frame rectangle of `(row, col)`, extended over the cell's
    /// merge span when it is a region anchor.
    pub fn cell_rect(&self, row: u32, col: u32) -> Rect {
        let (x, y) = self.cell_position(row, col);
        let mut width = self.col_width(col);
        let mut height = self.row_height(row);
        if let Some((row_span, col_span)) = self.data.get_cell(row, col).and_then(|c| c.merge) {
            if row_span > 0 {
                height = self.row_sum_height(row, row.saturating_add(row_span).saturating_add(1));
            }
            if col_span > 0 {
                width = self.col_sum_width(col, col.saturating_add(col_span).saturating_add(1));
            }
        }
        Rect::new(x, y, width, height)
    }

    /// Resolve a viewport point to what it hits, with the target's
    /// viewport-frame rectangle. Points over a merge region resolve to the
    /// region's anchor and the full region rectangle; header rectangles
    /// span the whole grid on the other axis.
    pub fn hit_test(&self, x: f32, y: f32) -> CellHit {
        match (self.row_at_y(y), self.col_at_x(x)) {
            (None, None) => CellHit {
                target: HitTarget::CornerHeader,
                rect: Rect::new(0.0, 0.0, self.total_width(), self.total_height()),
            },
            (None, Some((col, left, width))) => CellHit {
                target: HitTarget::ColumnHeader(col),
                rect: Rect::new(left, 0.0, width, self.total_height()),
            },
            (Some((row, top, height)), None) => CellHit {
                target: HitTarget::RowHeader(row),
                rect: Rect::new(0.0, top, self.total_width(), height),
            },
            (Some((row, top, height)), Some((col, left, width))) => {
                if let Some(region) = self.data.find_merge(row, col) {
                    let content = self.cell_rect(region.start_row, region.start_col);
                    CellHit {
                        target: HitTarget::Cell(region.start_row, region.start_col),
                        rect: self.to_viewport(content),
                    }
                } else {
                    CellHit {
                        target: HitTarget::Cell(row, col),
                        rect: Rect::new(left, top, width, height),
                    }
                }
            }
        }
    }

    /// The selection projected to the content frame, or `None` without a
    /// selection. Width and height cover the full selected spans.
    pub fn selected_rect(&self) -> Option<Rect> {
        let range = self.selection?;
        let (left, top) = self.cell_position(range.start_row, range.start_col);
        let width = self.col_sum_width(range.start_col, range.end_col.saturating_add(1));
        let height = self.row_sum_height(range.start_row, range.end_row.saturating_add(1));
        let (x, y) = self.freeze_compensated(left, top);
        Some(Rect::new(x, y, width, height))
    }

    /// Whether a viewport point falls strictly inside the selection
    /// rectangle. Points on the border do not count.
    pub fn xy_in_selected_rect(&self, x: f32, y: f32) -> bool {
        self.selected_rect().is_some_and(|rect| {
            rect.contains(x - self.config.header_width, y - self.config.header_height)
        })
    }

    /// Visit `(index, leading_offset, size)` for each row `0..=upto`.
    pub fn for_each_row<F>(&self, upto: u32, mut f: F)
    where
        F: FnMut(u32, f32, f32),
    {
        let mut offset = 0.0;
        for row in 0..=upto {
            let height = self.row_height(row);
            f(row, offset, height);
            offset += height;
        }
    }

    /// Visit `(index, leading_offset, size)` for each column `0..=upto`.
    pub fn for_each_col<F>(&self, upto: u32, mut f: F)
    where
        F: FnMut(u32, f32, f32),
    {
        let mut offset = 0.0;
        for col in 0..=upto {
            let width = self.col_width(col);
            f(col, offset, width);
            offset += width;
        }
    }

    /// Resolve a viewport `y` to a row: `Some((row, top, height))` in the
    /// viewport frame, or `None` inside the column header band.
    ///
    /// Scroll applies only past the frozen rows, so frozen rows resolve at
    /// their unscrolled positions.
    fn row_at_y(&self, y: f32) -> Option<(u32, f32, f32)> {
        let header_h = self.config.header_height;
        let mut init = header_h;
        if self.frozen_rows_height() + header_h < y {
            init -= self.scroll.y;
        }
        let (index, top, height) =
            range_reduce(0, self.row_count(), init, header_h, y, |i| self.row_height(i));
        if top <= 0.0 {
            None
        } else {
            Some((index.saturating_sub(1), top, height))
        }
    }

    /// Resolve a viewport `x` to a column; `None` inside the row header
    /// band.
    fn col_at_x(&self, x: f32) -> Option<(u32, f32, f32)> {
        let header_w = self.config.header_width;
        let mut init = header_w;
        if self.frozen_cols_width() + header_w < x {
            init -= self.scroll.x;
        }
        let (index, left, width) =
            range_reduce(0, self.col_count(), init, header_w, x, |i| self.col_width(i));
        if left <= 0.0 {
            None
        } else {
            Some((index.saturating_sub(1), left, width))
        }
    }

    /// Scroll-compensate a content-frame position, except inside frozen
    /// bands which never scroll.
    fn freeze_compensated(&self, left: f32, top: f32) -> (f32, f32) {
        let frozen_w = self.frozen_cols_width();
        let frozen_h = self.frozen_rows_height();
        let x = if frozen_w > 0.0 && frozen_w > left {
            left
        } else {
            left - self.scroll.x
        };
        let y = if frozen_h > 0.0 && frozen_h > top {
            top
        } else {
            top - self.scroll.y
        };
        (x, y)
    }

    /// Lift a content-frame rect into the viewport frame.
    fn to_viewport(&self, content: Rect) -> Rect {
        let (x, y) = self.freeze_compensated(content.x, content.y);
        Rect::new(
            x + self.config.header_width,
            y + self.config.header_height,
            content.width,
            content.height,
        )
    }
}
