#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Mergegrid
//!
//! A grouped-row engine for tabular views: detects contiguous runs of rows
//! that agree on a configured set of "mergeable" columns, decides which cells
//! should be visually suppressed because they repeat the group above them,
//! and keeps group-level checkboxes in sync with per-row selection.
//!
//! Mergegrid is headless. It owns no row data, no scroll state, and no
//! widgets: a hosting view supplies the current sorted/filtered row sequence
//! (anything implementing [`row::RowAccess`]), the materialized window it
//! wants drawn, and a shared [`selection::SelectionMap`]. Every decision is
//! recomputed from that state on demand, so there is no cache to invalidate
//! when rows are re-sorted, re-filtered, or replaced.
//!
//! ## Example
//!
//! ```rust
//! use mergegrid::config::{Column, GridConfig};
//! use mergegrid::group::detect_group;
//! use mergegrid::row::Record;
//! use mergegrid::selection::{apply_group_selection, group_checked_state, SelectionMap};
//!
//! let config = GridConfig::new(
//!     vec![
//!         Column::new("select", "", 4),
//!         Column::new("boxCount", "Boxes", 8),
//!         Column::new("shippingMethod", "Shipping", 12),
//!     ],
//!     ["boxCount", "shippingMethod"],
//!     Some("select"),
//! )
//! .unwrap();
//!
//! let rows = vec![
//!     Record::new("a").with("boxCount", 3).with("shippingMethod", "parcel"),
//!     Record::new("b").with("boxCount", 3).with("shippingMethod", "parcel"),
//!     Record::new("c").with("boxCount", 5).with("shippingMethod", "courier"),
//! ];
//!
//! let group = detect_group(&rows, 0, config.merge()).unwrap();
//! assert_eq!(group.len(), 2);
//!
//! let mut selection = SelectionMap::new();
//! apply_group_selection(group, true, &mut selection);
//! assert!(group_checked_state(group, &selection));
//! ```

pub mod config;
pub mod error;
pub mod group;
pub mod policy;
pub mod row;
pub mod selection;
pub mod value;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{Column, GridConfig, MergeSet};
    pub use crate::error::{ConfigError, RangeError};
    pub use crate::group::{detect_group, group_runs, rows_agree, GroupRuns};
    pub use crate::policy::{
        cell_presentation, is_group_start, should_suppress_cell, CellPresentation,
    };
    pub use crate::row::{Record, RowAccess};
    pub use crate::selection::{apply_group_selection, group_checked_state, SelectionMap};
    pub use crate::value::CellValue;
}
