//! Table configuration: active columns, the mergeable column set, and the
//! optional selection column.
//!
//! Validation happens once, when the table is configured. A [`MergeSet`] can
//! only be obtained non-empty, and [`GridConfig::new`] checks every
//! mergeable id and the selection column against the active column
//! definitions, so renders never have to second-guess the configuration.

use crate::error::ConfigError;

/// A single column definition for the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Stable column identifier, used for value lookup on rows.
    pub id: String,
    /// Column title displayed in the header.
    pub title: String,
    /// Width of the column in characters.
    pub width: usize,
}

impl Column {
    /// Creates a new column with the given id, title, and width.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, width: usize) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            width,
        }
    }
}

/// Ordered, non-empty set of mergeable column ids.
///
/// Rows that agree on every column in this set, while adjacent in the
/// current order, form one visual group. Configuration order is preserved;
/// duplicates are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSet {
    ids: Vec<String>,
}

impl MergeSet {
    /// Creates a merge set from the given column ids.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyMergeSet`] if no ids are supplied. An
    /// empty set is a configuration defect, not "everything is one group".
    pub fn new<I, S>(ids: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into();
            if !out.contains(&id) {
                out.push(id);
            }
        }
        if out.is_empty() {
            return Err(ConfigError::EmptyMergeSet);
        }
        Ok(Self { ids: out })
    }

    /// Returns whether the given column id is mergeable.
    #[must_use]
    pub fn contains(&self, column: &str) -> bool {
        self.ids.iter().any(|id| id == column)
    }

    /// Iterates the column ids in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Returns the number of mergeable columns (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Always false; kept for API symmetry with collection types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Validated table configuration, supplied once at table-definition time.
#[derive(Debug, Clone)]
pub struct GridConfig {
    columns: Vec<Column>,
    merge: MergeSet,
    selection_column: Option<String>,
}

impl GridConfig {
    /// Builds and validates a configuration.
    ///
    /// # Errors
    ///
    /// Fails fast, before any render, when the mergeable set is empty, when
    /// a mergeable id names no active column, or when the selection column
    /// names no active column. None of these are downgraded to "render
    /// ungrouped".
    pub fn new<I, S>(
        columns: Vec<Column>,
        mergeable: I,
        selection_column: Option<&str>,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let merge = MergeSet::new(mergeable)?;

        for id in merge.iter() {
            if !columns.iter().any(|c| c.id == id) {
                return Err(ConfigError::UnknownMergeColumn(id.to_string()));
            }
        }

        if let Some(sel) = selection_column {
            if !columns.iter().any(|c| c.id == sel) {
                return Err(ConfigError::UnknownSelectionColumn(sel.to_string()));
            }
        }

        tracing::debug!(
            columns = columns.len(),
            mergeable = merge.len(),
            selection = selection_column.is_some(),
            "grid configuration validated"
        );

        Ok(Self {
            columns,
            merge,
            selection_column: selection_column.map(String::from),
        })
    }

    /// Returns the active column definitions.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the mergeable column set.
    #[must_use]
    pub fn merge(&self) -> &MergeSet {
        &self.merge
    }

    /// Returns the selection column id, if one is configured.
    #[must_use]
    pub fn selection_column(&self) -> Option<&str> {
        self.selection_column.as_deref()
    }

    /// Returns whether the given column hosts selection checkboxes.
    #[must_use]
    pub fn is_selection_column(&self, column: &str) -> bool {
        self.selection_column.as_deref() == Some(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column> {
        vec![
            Column::new("select", "", 4),
            Column::new("boxCount", "Boxes", 8),
            Column::new("shippingMethod", "Shipping", 12),
            Column::new("productName", "Product", 20),
        ]
    }

    #[test]
    fn test_merge_set_rejects_empty() {
        let ids: Vec<String> = Vec::new();
        assert_eq!(MergeSet::new(ids), Err(ConfigError::EmptyMergeSet));
    }

    #[test]
    fn test_merge_set_preserves_order_and_dedupes() {
        let merge = MergeSet::new(["b", "a", "b"]).unwrap();
        let ids: Vec<&str> = merge.iter().collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(merge.len(), 2);
        assert!(merge.contains("a"));
        assert!(!merge.contains("c"));
    }

    #[test]
    fn test_config_valid() {
        let config = GridConfig::new(
            columns(),
            ["boxCount", "shippingMethod"],
            Some("select"),
        )
        .unwrap();

        assert_eq!(config.columns().len(), 4);
        assert_eq!(config.merge().len(), 2);
        assert!(config.is_selection_column("select"));
        assert!(!config.is_selection_column("boxCount"));
    }

    #[test]
    fn test_config_rejects_unknown_merge_column() {
        let err = GridConfig::new(columns(), ["boxCount", "weight"], None).unwrap_err();
        assert_eq!(err, ConfigError::UnknownMergeColumn("weight".into()));
    }

    #[test]
    fn test_config_rejects_unknown_selection_column() {
        let err = GridConfig::new(columns(), ["boxCount"], Some("check")).unwrap_err();
        assert_eq!(err, ConfigError::UnknownSelectionColumn("check".into()));
    }

    #[test]
    fn test_config_rejects_empty_merge_set() {
        let none: [&str; 0] = [];
        let err = GridConfig::new(columns(), none, None).unwrap_err();
        assert_eq!(err, ConfigError::EmptyMergeSet);
    }

    #[test]
    fn test_config_without_selection_column() {
        let config = GridConfig::new(columns(), ["boxCount"], None).unwrap();
        assert_eq!(config.selection_column(), None);
        assert!(!config.is_selection_column("select"));
    }
}
