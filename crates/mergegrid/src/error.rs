//! Error taxonomy.
//!
//! Two classes exist. [`ConfigError`] is fatal and surfaces at table-setup
//! time, before any render. [`RangeError`] marks a defect in the caller's
//! windowing logic and is propagated, never masked. Everything else in the
//! engine is a total function over well-typed inputs.

use thiserror::Error;

/// Configuration rejected at table setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The mergeable column set was empty.
    #[error("mergeable column set must not be empty")]
    EmptyMergeSet,

    /// A mergeable column id does not match any active column definition.
    #[error("mergeable column `{0}` is not among the active column definitions")]
    UnknownMergeColumn(String),

    /// The selection column id does not match any active column definition.
    #[error("selection column `{0}` is not among the active column definitions")]
    UnknownSelectionColumn(String),
}

/// A row index outside the current row sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("row index {index} is out of range for {len} rows")]
pub struct RangeError {
    /// The offending index.
    pub index: usize,
    /// Length of the row sequence at the time of the call.
    pub len: usize,
}
