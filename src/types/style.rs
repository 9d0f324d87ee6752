//! Cell styles and the style table cells index into.
//!
//! Styles are owned outside the document state; cells reference them by
//! index. Unset fields inherit from the configured default style at
//! resolution time.

use serde::{Deserialize, Serialize};

/// A cell style record. Every field is optional; `None` means "inherit".
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    // Font
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,

    // Fill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,

    // Alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_h: Option<HAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_v: Option<VAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
}

macro_rules! pick {
    ($over:expr, $base:expr, $field:ident) => {
        $over.$field.clone().or_else(|| $base.$field.clone())
    };
}

impl Style {
    /// This style with `overrides`' set fields applied on top.
    #[must_use]
    pub fn merged_with(&self, overrides: &Style) -> Style {
        Style {
            font_family: pick!(overrides, self, font_family),
            font_size: pick!(overrides, self, font_size),
            font_color: pick!(overrides, self, font_color),
            bold: pick!(overrides, self, bold),
            italic: pick!(overrides, self, italic),
            strikethrough: pick!(overrides, self, strikethrough),
            bg_color: pick!(overrides, self, bg_color),
            align_h: pick!(overrides, self, align_h),
            align_v: pick!(overrides, self, align_v),
            wrap: pick!(overrides, self, wrap),
        }
    }
}

/// Horizontal alignment.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical alignment.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// Ordered style records referenced by [`Cell::style_index`](crate::types::Cell::style_index).
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
#[serde(transparent)]
pub struct StyleTable {
    styles: Vec<Style>,
}

impl StyleTable {
    /// Table over the given records, indexed in order.
    pub fn new(styles: Vec<Style>) -> Self {
        Self { styles }
    }

    /// The record at `index`, if present.
    pub fn get(&self, index: u32) -> Option<&Style> {
        self.styles.get(index as usize)
    }

    /// Append a record, returning its index.
    pub fn push(&mut self, style: Style) -> u32 {
        let index = u32::try_from(self.styles.len()).unwrap_or(u32::MAX);
        self.styles.push(style);
        index
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
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
    fn test_merged_with_prefers_overrides() {
        let base = Style {
            font_color: Some("#0a0a0a".to_string()),
            bold: Some(false),
            ..Style::default()
        };
        let over = Style {
            bold: Some(true),
            ..Style::default()
        };
        let merged = base.merged_with(&over);
        assert_eq!(merged.bold, Some(true));
        assert_eq!(merged.font_color, Some("#0a0a0a".to_string()));
    }

    #[test]
    fn test_merged_with_keeps_base_when_override_unset() {
        let base = Style {
            align_h: Some(HAlign::Right),
            wrap: Some(true),
            ..Style::default()
        };
        let merged = base.merged_with(&Style::default());
        assert_eq!(merged.align_h, Some(HAlign::Right));
        assert_eq!(merged.wrap, Some(true));
    }

    #[test]
    fn test_table_lookup_out_of_range() {
        let table = StyleTable::new(vec![Style::default()]);
        assert!(table.get(0).is_some());
        assert!(table.get(1).is_none());
    }

    #[test]
    fn test_table_serializes_as_plain_array() {
        let table = StyleTable::new(vec![Style::default()]);
        assert_eq!(serde_json::to_string(&table).unwrap(), "[{}]");
    }

    #[test]
    fn test_align_enums_serialize_lowercase() {
        let style = Style {
            align_h: Some(HAlign::Center),
            align_v: Some(VAlign::Middle),
            ..Style::default()
        };
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"alignH":"center","alignV":"middle"}"#);
    }
}
