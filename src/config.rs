//! Grid construction configuration.

use crate::formula::{builtin_formulas, NamedFormula};
use crate::types::{HAlign, Style, VAlign};

/// Sizing defaults and construction-time options for a [`Grid`](crate::Grid).
///
/// Per-index sizes in the document override `row_height`/`col_width`;
/// `row_len`/`col_len` on the document override the counts.
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Default number of rows.
    pub row_count: u32,
    /// Default number of columns.
    pub col_count: u32,
    /// Default row height in pixels.
    pub row_height: f32,
    /// Default column width in pixels.
    pub col_width: f32,
    /// Height of the column header band at the top of the viewport.
    pub header_height: f32,
    /// Width of the row header band at the left of the viewport.
    pub header_width: f32,
    /// Base style every cell inherits from.
    pub default_style: Style,
    /// Named formulas exposed to resolvers and formula pickers.
    pub formulas: Vec<NamedFormula>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_count: 100,
            col_count: 26,
            row_height: 25.0,
            col_width: 100.0,
            header_height: 25.0,
            header_width: 60.0,
            default_style: Style {
                font_family: Some("Helvetica".to_string()),
                font_size: Some(10.0),
                font_color: Some("#0a0a0a".to_string()),
                bold: Some(false),
                italic: Some(false),
                strikethrough: Some(false),
                bg_color: Some("#ffffff".to_string()),
                align_h: Some(HAlign::Left),
                align_v: Some(VAlign::Middle),
                wrap: Some(false),
            },
            formulas: builtin_formulas(),
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
    fn test_default_dimensions() {
        let config = GridConfig::default();
        assert_eq!(config.row_count, 100);
        assert_eq!(config.col_count, 26);
        assert_eq!(config.row_height, 25.0);
        assert_eq!(config.col_width, 100.0);
        assert_eq!(config.header_height, 25.0);
        assert_eq!(config.header_width, 60.0);
    }

    #[test]
    fn test_default_style_is_fully_specified() {
        let style = GridConfig::default().default_style;
        assert!(style.font_family.is_some());
        assert!(style.bg_color.is_some());
        assert_eq!(style.align_h, Some(HAlign::Left));
        assert_eq!(style.align_v, Some(VAlign::Middle));
    }
}
