//! Grid view: the hosting table over a materialized window.
//!
//! The view owns the ordered (already sorted/filtered) rows, the validated
//! [`GridConfig`], and the [`SelectionMap`], and turns a [`VisibleWindow`]
//! into per-cell render decisions. Group membership is derived fresh on
//! every pass from the row slice, so replacing or re-ordering the rows needs
//! no cache invalidation.
//!
//! # Example
//!
//! ```rust
//! use mergegrid::config::{Column, GridConfig};
//! use mergegrid::row::Record;
//! use mergegrid_view::table::GridView;
//! use mergegrid_view::window::{Virtualizer, WindowPlanner};
//!
//! let config = GridConfig::new(
//!     vec![Column::new("boxCount", "Boxes", 8)],
//!     ["boxCount"],
//!     None,
//! )
//! .unwrap();
//!
//! let mut view = GridView::new(config, vec![
//!     Record::new("a").with("boxCount", 3),
//!     Record::new("b").with("boxCount", 3),
//! ]);
//!
//! let planner = WindowPlanner::new(view.rows().len(), 200);
//! println!("{}", view.view(&planner.window()).unwrap());
//! view.toggle_group_at(0).unwrap();
//! assert_eq!(view.selected_count(), 2);
//! ```

use crate::window::VisibleWindow;
use mergegrid::config::GridConfig;
use mergegrid::error::RangeError;
use mergegrid::group::detect_group;
use mergegrid::policy::{cell_presentation, is_group_start, CellPresentation};
use mergegrid::row::RowAccess;
use mergegrid::selection::{apply_group_selection, group_checked_state, SelectionMap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// One cell of a rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCell {
    /// Column id the cell belongs to.
    pub column: String,
    /// How the cell should be presented.
    pub presentation: CellPresentation,
    /// The cell's formatted value. Present even for suppressed cells: the
    /// value stays structurally available, only its display is hidden.
    /// Empty for the selection column.
    pub text: String,
}

/// One materialized row after a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// Index into the current row sequence.
    pub index: usize,
    /// Vertical offset from the virtualizer.
    pub offset: usize,
    /// Whether this row opens a new visual group (separator above, group
    /// checkbox in the selection column).
    pub group_start: bool,
    /// Cells in active column order.
    pub cells: Vec<RenderedCell>,
}

/// Hosting table view over grouped rows.
#[derive(Debug, Clone)]
pub struct GridView<R: RowAccess> {
    config: GridConfig,
    rows: Vec<R>,
    selection: SelectionMap,
}

impl<R: RowAccess> GridView<R> {
    /// Creates a view over the given rows.
    #[must_use]
    pub fn new(config: GridConfig, rows: Vec<R>) -> Self {
        Self {
            config,
            rows,
            selection: SelectionMap::new(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Returns the current row sequence.
    #[must_use]
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Replaces the row sequence after a sort, filter, or data change.
    ///
    /// Selection entries for rows no longer present are retained; they stop
    /// being consulted until a row with the same id returns.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        tracing::debug!(rows = rows.len(), "row sequence replaced");
        self.rows = rows;
    }

    /// Returns the selection map.
    #[must_use]
    pub fn selection(&self) -> &SelectionMap {
        &self.selection
    }

    /// Returns the selection map for direct mutation (individual row
    /// toggles from the external row model go through here).
    pub fn selection_mut(&mut self) -> &mut SelectionMap {
        &mut self.selection
    }

    /// Flips one row's selection flag, returning the new state.
    pub fn toggle_row(&mut self, id: &str) -> bool {
        self.selection.toggle(id)
    }

    /// Returns the number of selected rows.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selection.selected_count()
    }

    /// Selects every row in the current sequence.
    pub fn select_all(&mut self) {
        for row in &self.rows {
            self.selection.set(row.id(), true);
        }
    }

    /// Clears the selection entirely.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Handles a group checkbox toggle on the row at `index`: detects the
    /// group and applies the flipped AND-state to every member. Returns the
    /// state that was applied.
    ///
    /// # Errors
    ///
    /// Propagates [`RangeError`] when `index` is out of bounds.
    pub fn toggle_group_at(&mut self, index: usize) -> Result<bool, RangeError> {
        let group = detect_group(&self.rows, index, self.config.merge())?;
        let next = !group_checked_state(group, &self.selection);
        apply_group_selection(group, next, &mut self.selection);
        Ok(next)
    }

    /// Sets every member of the group at `index` to `checked`.
    ///
    /// # Errors
    ///
    /// Propagates [`RangeError`] when `index` is out of bounds.
    pub fn set_group_selection_at(&mut self, index: usize, checked: bool) -> Result<(), RangeError> {
        let group = detect_group(&self.rows, index, self.config.merge())?;
        apply_group_selection(group, checked, &mut self.selection);
        Ok(())
    }

    /// Computes render decisions for every materialized row.
    ///
    /// One consistent snapshot: rows, config, and selection are read as they
    /// are now, and rows outside the window are not evaluated.
    ///
    /// # Errors
    ///
    /// Propagates [`RangeError`] when the window references an index outside
    /// the current row sequence, which indicates a defect in the caller's
    /// window computation.
    pub fn render_pass(&self, window: &VisibleWindow) -> Result<Vec<RenderedRow>, RangeError> {
        let merge = self.config.merge();
        let mut out = Vec::with_capacity(window.len());

        for item in window.items() {
            let row = self.rows.get(item.index).ok_or(RangeError {
                index: item.index,
                len: self.rows.len(),
            })?;
            let previous = if item.index > 0 {
                self.rows.get(item.index - 1)
            } else {
                None
            };

            let group_start = is_group_start(row, previous, merge);
            let group = detect_group(&self.rows, item.index, merge)?;
            let checked = group_checked_state(group, &self.selection);

            let cells = self
                .config
                .columns()
                .iter()
                .map(|col| {
                    let presentation =
                        cell_presentation(row, previous, &col.id, &self.config, checked);
                    let text = if self.config.is_selection_column(&col.id) {
                        String::new()
                    } else {
                        row.value(&col.id).map(ToString::to_string).unwrap_or_default()
                    };
                    RenderedCell {
                        column: col.id.clone(),
                        presentation,
                        text,
                    }
                })
                .collect();

            out.push(RenderedRow {
                index: item.index,
                offset: item.offset,
                group_start,
                cells,
            });
        }

        Ok(out)
    }

    /// Renders the window as plain text: header, group separators, checkbox
    /// glyphs, suppressed cells as whitespace. A leading gutter shows each
    /// row's 1-based number, which is never suppressed.
    ///
    /// # Errors
    ///
    /// Propagates [`RangeError`] from [`Self::render_pass`].
    pub fn view(&self, window: &VisibleWindow) -> Result<String, RangeError> {
        const GUTTER: usize = 5;

        let mut lines = Vec::with_capacity(window.len() + 1);

        let header: Vec<String> = self
            .config
            .columns()
            .iter()
            .map(|col| fit(&col.title, col.width))
            .collect();
        lines.push(format!("{} {}", fit("No.", GUTTER), header.join(" ")));

        let total_width =
            GUTTER + self.config.columns().iter().map(|c| c.width + 1).sum::<usize>();

        for row in self.render_pass(window)? {
            if row.group_start {
                lines.push("─".repeat(total_width));
            }

            let number = row.index + 1;
            let cells: Vec<String> = row
                .cells
                .iter()
                .zip(self.config.columns())
                .map(|(cell, col)| match cell.presentation {
                    CellPresentation::Value => fit(&cell.text, col.width),
                    CellPresentation::Suppressed | CellPresentation::Blank => {
                        " ".repeat(col.width)
                    }
                    CellPresentation::GroupCheckbox { checked } => {
                        fit(if checked { "[x]" } else { "[ ]" }, col.width)
                    }
                })
                .collect();

            lines.push(format!("{} {}", fit(&number.to_string(), GUTTER), cells.join(" ")));
        }

        Ok(lines.join("\n"))
    }
}

/// Fits a string to the given display width: truncates with an ellipsis and
/// pads with spaces.
fn fit(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if s.width() <= width {
        return format!("{s}{}", " ".repeat(width - s.width()));
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width - used));
    out
}
