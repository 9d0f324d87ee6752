//! Cell content and write modes.

use serde::{Deserialize, Serialize};

/// A single cell's content.
///
/// Cells are stored sparsely; an absent cell renders as empty. All fields
/// are optional in the serialized form so sparse documents stay small.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// Display text. Text beginning with `=` is a formula and is resolved
    /// through the [`FormulaResolver`](crate::formula::FormulaResolver) seam.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,

    /// Number/date format code, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Index into the externally owned [`StyleTable`](crate::types::StyleTable).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_index: Option<u32>,

    /// `(extra rows, extra cols)` covered by this cell. Present only on the
    /// anchor (top-left) cell of a merge region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge: Option<(u32, u32)>,
}

impl Cell {
    /// A plain text cell.
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }
}

/// Which fields of a target cell a write replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellWriteMode {
    /// Replace the whole cell.
    #[default]
    All,
    /// Replace only the text.
    Text,
    /// Replace only the style index.
    Format,
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
    fn test_default_cell_serializes_empty() {
        let json = serde_json::to_string(&Cell::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_merge_span_round_trips_as_array() {
        let cell = Cell {
            merge: Some((1, 2)),
            ..Cell::with_text("anchor")
        };
        let json = serde_json::to_string(&cell).unwrap();
        assert_eq!(json, r#"{"text":"anchor","merge":[1,2]}"#);
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cell);
    }

    #[test]
    fn test_style_index_uses_camel_case() {
        let cell = Cell {
            style_index: Some(3),
            ..Cell::default()
        };
        let json = serde_json::to_string(&cell).unwrap();
        assert_eq!(json, r#"{"styleIndex":3}"#);
    }
}
