//! Group selection coordination.
//!
//! The selection map is owned by the hosting view; the engine reads and
//! writes entries through it but never keeps its own copy. Group-level
//! operations are the only path by which a single user action writes
//! multiple entries, and they complete synchronously, so a render pass never
//! observes a half-applied group toggle.

use crate::row::RowAccess;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-row selection state, keyed by row identifier.
///
/// A row with no entry is unselected. Entries are never removed wholesale;
/// rows that leave the dataset simply stop being consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionMap {
    entries: BTreeMap<String, bool>,
}

impl SelectionMap {
    /// Creates an empty selection map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the given row is selected. Absent entries are
    /// unselected.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.entries.get(id).copied().unwrap_or(false)
    }

    /// Sets the selection flag for one row.
    pub fn set(&mut self, id: impl Into<String>, selected: bool) {
        self.entries.insert(id.into(), selected);
    }

    /// Flips the selection flag for one row, returning the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        let next = !self.is_selected(id);
        self.entries.insert(id.to_string(), next);
        next
    }

    /// Returns the number of selected rows.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.entries.values().filter(|v| **v).count()
    }

    /// Iterates the ids of selected rows, in id order.
    pub fn selected_ids(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, v)| **v)
            .map(|(id, _)| id.as_str())
    }

    /// Clears every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Applies `checked` to every member of `group`.
///
/// This is the group checkbox's change handler: one user action, every
/// member written before control returns, so subsequent reads in the same
/// or a later render pass observe the update as a whole. Individual row
/// toggles go through [`SelectionMap::toggle`] directly and bypass this.
pub fn apply_group_selection<R: RowAccess>(
    group: &[R],
    checked: bool,
    selection: &mut SelectionMap,
) {
    debug_assert!(!group.is_empty(), "group selection applied to empty group");
    tracing::debug!(members = group.len(), checked, "applying group selection");
    for row in group {
        selection.set(row.id(), checked);
    }
}

/// Returns the group checkbox's own checked state: true iff every member is
/// selected.
///
/// The checkbox is binary; a partially selected group reads as unchecked,
/// with no tri-state representation.
#[must_use]
pub fn group_checked_state<R: RowAccess>(group: &[R], selection: &SelectionMap) -> bool {
    debug_assert!(!group.is_empty(), "checked state read for empty group");
    group.iter().all(|row| selection.is_selected(row.id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Record;

    fn group() -> Vec<Record> {
        vec![Record::new("a"), Record::new("b"), Record::new("c")]
    }

    #[test]
    fn test_absent_entries_are_unselected() {
        let selection = SelectionMap::new();
        assert!(!selection.is_selected("a"));
        assert_eq!(selection.selected_count(), 0);
    }

    #[test]
    fn test_apply_group_selection_scenario() {
        // Empty map: unchecked; select the group: all true and checked;
        // deselect one member directly: unchecked again.
        let rows = group();
        let mut selection = SelectionMap::new();

        assert!(!group_checked_state(&rows, &selection));

        apply_group_selection(&rows, true, &mut selection);
        assert!(selection.is_selected("a"));
        assert!(selection.is_selected("b"));
        assert!(selection.is_selected("c"));
        assert!(group_checked_state(&rows, &selection));

        selection.set("b", false);
        assert!(!group_checked_state(&rows, &selection));
        assert!(selection.is_selected("a"));
        assert!(selection.is_selected("c"));
    }

    #[test]
    fn test_apply_group_selection_idempotent() {
        let rows = group();
        let mut selection = SelectionMap::new();

        apply_group_selection(&rows, true, &mut selection);
        apply_group_selection(&rows, true, &mut selection);
        assert!(group_checked_state(&rows, &selection));
        assert_eq!(selection.selected_count(), 3);

        apply_group_selection(&rows, false, &mut selection);
        assert!(!group_checked_state(&rows, &selection));
        assert_eq!(selection.selected_count(), 0);
    }

    #[test]
    fn test_toggle_returns_new_state() {
        let mut selection = SelectionMap::new();
        assert!(selection.toggle("a"));
        assert!(!selection.toggle("a"));
        assert!(!selection.is_selected("a"));
    }

    #[test]
    fn test_selected_ids() {
        let mut selection = SelectionMap::new();
        selection.set("b", true);
        selection.set("a", true);
        selection.set("c", false);

        let ids: Vec<&str> = selection.selected_ids().collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_clear() {
        let mut selection = SelectionMap::new();
        selection.set("a", true);
        selection.clear();
        assert_eq!(selection.selected_count(), 0);
        assert!(!selection.is_selected("a"));
    }

    #[test]
    fn test_partial_selection_reads_unchecked() {
        let rows = group();
        let mut selection = SelectionMap::new();
        selection.set("a", true);
        selection.set("b", true);

        // Two of three selected: the binary group checkbox reads false.
        assert!(!group_checked_state(&rows, &selection));
    }
}
