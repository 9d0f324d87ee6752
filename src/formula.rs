//! The formula resolution boundary.
//!
//! The grid never evaluates formulas itself. Cell text that begins with `=`
//! is handed to a caller-supplied [`FormulaResolver`] together with a
//! read-only [`CellLookup`] over the grid, so evaluation strategies stay
//! pluggable. The grid only carries the set of named formulas a resolver
//! (or a formula picker UI) may consult.

use serde::{Deserialize, Serialize};

/// Read-only cell text access handed to a resolver during evaluation.
///
/// Implemented by [`Grid`](crate::Grid); lookups outside the stored cells
/// return `None`.
pub trait CellLookup {
    /// The display text at `(row, col)`, if a cell is stored there.
    fn cell_text(&self, row: u32, col: u32) -> Option<&str>;
}

/// Resolves a formula body to display text.
///
/// `body` is the cell text with the leading `=` stripped.
pub trait FormulaResolver {
    fn resolve(&self, body: &str, cells: &dyn CellLookup) -> String;
}

/// A formula name known to the grid, e.g. `SUM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedFormula {
    /// Name as written in formula text.
    pub key: String,
    /// Human-readable label for pickers.
    pub title: String,
}

impl NamedFormula {
    pub fn new(key: &str, title: &str) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
        }
    }
}

/// The built-in formula names shipped with the default configuration.
pub fn builtin_formulas() -> Vec<NamedFormula> {
    vec![
        NamedFormula::new("SUM", "Sum"),
        NamedFormula::new("AVERAGE", "Average"),
        NamedFormula::new("MAX", "Max"),
        NamedFormula::new("MIN", "Min"),
        NamedFormula::new("CONCAT", "Concat"),
    ]
}

/// Ordered set of named formulas, queried by key.
///
/// Order is preserved so pickers can list formulas as configured.
#[derive(Debug, Clone, Default)]
pub struct FormulaSet {
    formulas: Vec<NamedFormula>,
}

impl FormulaSet {
    pub fn new(formulas: Vec<NamedFormula>) -> Self {
        Self { formulas }
    }

    /// The formula registered under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&NamedFormula> {
        self.formulas.iter().find(|f| f.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedFormula> {
        self.formulas.iter()
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
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
    fn test_builtin_set_lookup() {
        let set = FormulaSet::new(builtin_formulas());
        assert!(set.contains("SUM"));
        assert!(set.contains("CONCAT"));
        assert!(!set.contains("sum"));
        assert_eq!(set.get("AVERAGE").unwrap().title, "Average");
    }

    #[test]
    fn test_set_preserves_configuration_order() {
        let set = FormulaSet::new(vec![
            NamedFormula::new("B", "b"),
            NamedFormula::new("A", "a"),
        ]);
        let keys: Vec<&str> = set.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["B", "A"]);
    }

    #[test]
    fn test_empty_set() {
        let set = FormulaSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.get("SUM").is_none());
    }
}
