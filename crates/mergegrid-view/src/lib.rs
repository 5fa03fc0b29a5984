#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Mergegrid View
//!
//! The hosting side of a mergegrid table: a [`GridView`] that owns the
//! sorted/filtered row sequence, the validated grid configuration, and the
//! shared selection map, and renders whichever window of rows a virtualizer
//! has materialized.
//!
//! The virtualizer itself stays external. This crate defines the interface
//! the view consumes ([`window::Virtualizer`] producing a
//! [`window::VisibleWindow`]) and ships [`window::WindowPlanner`], a simple
//! estimate-plus-measurement implementation used by the tests and the demo.
//!
//! ## Example
//!
//! ```rust
//! use mergegrid::config::{Column, GridConfig};
//! use mergegrid::row::Record;
//! use mergegrid_view::table::GridView;
//! use mergegrid_view::window::{Virtualizer, WindowPlanner};
//!
//! let config = GridConfig::new(
//!     vec![
//!         Column::new("select", "", 4),
//!         Column::new("boxCount", "Boxes", 8),
//!     ],
//!     ["boxCount"],
//!     Some("select"),
//! )
//! .unwrap();
//!
//! let rows = vec![
//!     Record::new("a").with("boxCount", 3),
//!     Record::new("b").with("boxCount", 3),
//! ];
//!
//! let view = GridView::new(config, rows);
//! let planner = WindowPlanner::new(view.rows().len(), 200);
//! let pass = view.render_pass(&planner.window()).unwrap();
//! assert_eq!(pass.len(), 2);
//! ```

pub mod table;
pub mod window;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::table::{GridView, RenderedCell, RenderedRow};
    pub use crate::window::{VisibleWindow, Virtualizer, WindowItem, WindowPlanner};
}

pub use table::GridView;
pub use window::{VisibleWindow, Virtualizer, WindowPlanner};
