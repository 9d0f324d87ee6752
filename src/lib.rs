//! sheetgrid - in-memory model and viewport geometry for spreadsheet grids
//!
//! The engine an interactive grid UI sits on, with no rendering or DOM
//! attached:
//! - Sparse cell store with merge regions, freeze panes and sizing overrides
//! - Pixel/index geometry: hit testing, selection rectangles, scroll snapping
//! - Selection, clipboard (copy/cut/paste) and snapshot-based undo/redo
//! - Pluggable formula resolution behind a [`CellLookup`] seam
//!
//! Rendering, input capture and persistence stay outside; the grid hands
//! them geometry and serializable state.
//!
//! # Usage
//!
//! ```
//! use sheetgrid::{Grid, HitTarget};
//!
//! let mut grid = Grid::default();
//! grid.set_cell_text(0, 0, "hello");
//! grid.set_cell_text(1, 0, "=SUM(A1:A3)");
//!
//! // Viewport points resolve through the header bands and scroll state.
//! let hit = grid.hit_test(70.0, 30.0);
//! assert_eq!(hit.target, HitTarget::Cell(0, 0));
//!
//! grid.undo();
//! assert!(grid.cell(1, 0).is_none());
//! assert_eq!(grid.cell(0, 0).map(|c| c.text.as_str()), Some("hello"));
//! ```

// Model modules
pub mod clipboard;
pub mod config;
pub mod error;
pub mod formula;
pub mod history;
pub mod range;
pub mod types;

// The facade and its geometry
pub mod grid;

// Re-export the main grid struct
pub use grid::{CellHit, Grid, HitTarget, Rect, Scroll};

pub use clipboard::{Clipboard, ClipboardMode};
pub use config::GridConfig;
pub use error::{GridError, Result};
pub use formula::{CellLookup, FormulaResolver, FormulaSet, NamedFormula};
pub use types::*;

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
