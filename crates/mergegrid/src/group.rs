//! Group detection.
//!
//! A group is the maximal contiguous run of rows, in the current order, that
//! agree on every mergeable column. Groups are derived on demand from the
//! row slice and returned as borrowed subslices; nothing is cached, so a
//! sort, filter, or data replace invalidates nothing.
//!
//! # Example
//!
//! ```rust
//! use mergegrid::config::MergeSet;
//! use mergegrid::group::detect_group;
//! use mergegrid::row::Record;
//!
//! let merge = MergeSet::new(["boxCount"]).unwrap();
//! let rows = vec![
//!     Record::new("a").with("boxCount", 3),
//!     Record::new("b").with("boxCount", 3),
//!     Record::new("c").with("boxCount", 5),
//! ];
//!
//! assert_eq!(detect_group(&rows, 0, &merge).unwrap().len(), 2);
//! assert_eq!(detect_group(&rows, 2, &merge).unwrap().len(), 1);
//! ```

use crate::config::MergeSet;
use crate::error::RangeError;
use crate::row::RowAccess;

/// Returns whether two rows agree on every mergeable column.
///
/// Comparison is strict value equality on the raw cell values; a column
/// absent from both rows counts as agreeing.
#[must_use]
pub fn rows_agree<R: RowAccess>(a: &R, b: &R, merge: &MergeSet) -> bool {
    merge.iter().all(|col| a.value(col) == b.value(col))
}

/// Detects the maximal group starting at `start`.
///
/// Scans forward from `start + 1` while the candidate row agrees with the
/// row at `start` on every mergeable column, and returns the run as a
/// subslice of `rows`. The last row yields a group of size 1. Cost is
/// O(group size × mergeable columns), so callers driving a virtualized
/// viewport should invoke this once per materialized row, not per dataset
/// row.
///
/// # Errors
///
/// Returns [`RangeError`] when `start` is out of bounds. That indicates a
/// defect in the caller's window computation; it is not recoverable state.
pub fn detect_group<'r, R: RowAccess>(
    rows: &'r [R],
    start: usize,
    merge: &MergeSet,
) -> Result<&'r [R], RangeError> {
    let anchor = rows.get(start).ok_or(RangeError {
        index: start,
        len: rows.len(),
    })?;

    let mut end = start + 1;
    while end < rows.len() && rows_agree(anchor, &rows[end], merge) {
        end += 1;
    }

    Ok(&rows[start..end])
}

/// Iterates the partition of `rows` into successive maximal groups.
///
/// Every row appears in exactly one yielded group, in order.
#[must_use]
pub fn group_runs<'r, R: RowAccess>(rows: &'r [R], merge: &'r MergeSet) -> GroupRuns<'r, R> {
    GroupRuns {
        rows,
        merge,
        next: 0,
    }
}

/// Iterator over the group partition of a row sequence.
#[derive(Debug, Clone)]
pub struct GroupRuns<'r, R> {
    rows: &'r [R],
    merge: &'r MergeSet,
    next: usize,
}

impl<'r, R: RowAccess> Iterator for GroupRuns<'r, R> {
    type Item = &'r [R];

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.rows.len() {
            return None;
        }
        // In-bounds by the check above.
        let group = detect_group(self.rows, self.next, self.merge).ok()?;
        self.next += group.len();
        Some(group)
    }
}
