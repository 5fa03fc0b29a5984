//! Merge render policy.
//!
//! Pure per-cell decisions for a render pass: does a row open a new visual
//! group, and should a cell's value be hidden because it repeats the group
//! established directly above it.
//!
//! Suppression is a full-tuple check. A cell is hidden only when the row
//! agrees with its predecessor on *every* mergeable column, never just the
//! column being rendered. A column whose own value is unchanged still
//! renders when a different mergeable column changed, because that change
//! started a new group.

use crate::config::{GridConfig, MergeSet};
use crate::group::rows_agree;
use crate::row::RowAccess;

/// How a single materialized cell should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellPresentation {
    /// Render the cell's value normally.
    Value,
    /// Hide the value; it repeats the group established above. The value
    /// stays structurally present on the row.
    Suppressed,
    /// Selection column at a group start: render the group checkbox.
    GroupCheckbox {
        /// Whether every member of the group is currently selected.
        checked: bool,
    },
    /// Selection column inside a group: render nothing, the checkbox above
    /// already represents the whole group.
    Blank,
}

/// Returns whether `row` begins a new visual group.
///
/// True when there is no predecessor in render order, or when any mergeable
/// column differs from the predecessor.
#[must_use]
pub fn is_group_start<R: RowAccess>(row: &R, previous: Option<&R>, merge: &MergeSet) -> bool {
    previous.is_none_or(|prev| !rows_agree(row, prev, merge))
}

/// Returns whether the cell at (`row`, `column`) should hide its value.
///
/// False when `column` is not mergeable or the row has no predecessor.
/// Otherwise true iff the row agrees with its predecessor on every
/// mergeable column.
#[must_use]
pub fn should_suppress_cell<R: RowAccess>(
    row: &R,
    previous: Option<&R>,
    column: &str,
    merge: &MergeSet,
) -> bool {
    if !merge.contains(column) {
        return false;
    }
    previous.is_some_and(|prev| rows_agree(row, prev, merge))
}

/// Folds the selection-column rule into one presentation decision.
///
/// The selection column is never value-suppressed: at a group start it
/// renders the group checkbox (with the caller-supplied AND-reduced
/// `group_checked` state), anywhere else in a group it renders blank. All
/// other columns suppress or render per [`should_suppress_cell`].
#[must_use]
pub fn cell_presentation<R: RowAccess>(
    row: &R,
    previous: Option<&R>,
    column: &str,
    config: &GridConfig,
    group_checked: bool,
) -> CellPresentation {
    if config.is_selection_column(column) {
        if is_group_start(row, previous, config.merge()) {
            CellPresentation::GroupCheckbox {
                checked: group_checked,
            }
        } else {
            CellPresentation::Blank
        }
    } else if should_suppress_cell(row, previous, column, config.merge()) {
        CellPresentation::Suppressed
    } else {
        CellPresentation::Value
    }
}
