//! Structured error types for sheetgrid.
//!
//! Only merge-consistency violations are surfaced as errors; everything else
//! in the grid API is total over its inputs.

use crate::types::CellRange;

/// All errors that can occur while mutating a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A requested merge region overlaps an already merged region.
    #[error("merge {requested} overlaps existing region {existing}")]
    MergeOverlap {
        /// The region the caller asked for.
        requested: CellRange,
        /// The first existing region it collides with.
        existing: CellRange,
    },

    /// A cut range covers part of a merge region but not all of it.
    #[error("cut range {range} splits merge region {region}")]
    CutSplitsMerge {
        /// The range captured by the cut.
        range: CellRange,
        /// The region that would be torn apart.
        region: CellRange,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;
