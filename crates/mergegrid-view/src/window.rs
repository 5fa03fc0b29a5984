//! Materialized window plumbing.
//!
//! The viewport virtualizer is an external collaborator: something that
//! knows the scroll position and decides which row indices are materialized,
//! at which vertical offsets, with which heights. [`Virtualizer`] is the
//! interface the hosting view consumes, [`VisibleWindow`] the immutable
//! per-pass input it produces, and [`WindowPlanner`] a small bundled
//! implementation (uniform estimate, measured overrides, overscan) for tests
//! and demos.

use std::collections::BTreeMap;

/// One materialized row: its index in the row sequence, its vertical offset
/// from the top of the scrollable extent, and its current height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowItem {
    /// Index into the current row sequence.
    pub index: usize,
    /// Vertical offset of the row's top edge.
    pub offset: usize,
    /// Estimated or measured row height.
    pub height: usize,
}

/// The ordered set of materialized rows for one render pass.
///
/// Treated as an immutable snapshot: the view never assumes it covers the
/// whole dataset, and indices outside it are simply not evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleWindow {
    items: Vec<WindowItem>,
}

impl VisibleWindow {
    /// Creates a window from materialized items, ordered by index.
    #[must_use]
    pub fn new(items: Vec<WindowItem>) -> Self {
        debug_assert!(
            items.windows(2).all(|w| w[0].index < w[1].index),
            "window items must be ordered by index"
        );
        Self { items }
    }

    /// Returns the materialized items in order.
    #[must_use]
    pub fn items(&self) -> &[WindowItem] {
        &self.items
    }

    /// Returns the number of materialized rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether nothing is materialized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the first materialized index, if any.
    #[must_use]
    pub fn first_index(&self) -> Option<usize> {
        self.items.first().map(|item| item.index)
    }

    /// Returns the last materialized index, if any.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.items.last().map(|item| item.index)
    }
}

/// The virtualizer interface the hosting view consumes.
pub trait Virtualizer {
    /// Computes the materialized window for the current scroll state.
    fn window(&self) -> VisibleWindow;

    /// Total scrollable extent, given current estimates and measurements.
    fn total_size(&self) -> usize;

    /// Records a rendered row's measured height so later windows and the
    /// total extent account for it.
    fn measure(&mut self, index: usize, height: usize);
}

/// A simple virtualizer: uniform height estimate, measured overrides,
/// overscan on both edges.
///
/// Offsets come from a linear prefix walk, which is fine for the dataset
/// sizes the demo and tests use; a production virtualizer would keep a
/// prefix-sum structure instead.
#[derive(Debug, Clone)]
pub struct WindowPlanner {
    row_count: usize,
    viewport_height: usize,
    estimate: usize,
    overscan: usize,
    scroll_offset: usize,
    measured: BTreeMap<usize, usize>,
}

impl WindowPlanner {
    /// Default row height estimate.
    pub const DEFAULT_ESTIMATE: usize = 35;
    /// Default overscan, in rows, on each edge of the viewport.
    pub const DEFAULT_OVERSCAN: usize = 5;

    /// Creates a planner over `row_count` rows in a viewport of the given
    /// height.
    #[must_use]
    pub fn new(row_count: usize, viewport_height: usize) -> Self {
        Self {
            row_count,
            viewport_height,
            estimate: Self::DEFAULT_ESTIMATE,
            overscan: Self::DEFAULT_OVERSCAN,
            scroll_offset: 0,
            measured: BTreeMap::new(),
        }
    }

    /// Sets the uniform height estimate (builder pattern).
    #[must_use]
    pub fn estimate(mut self, estimate: usize) -> Self {
        self.estimate = estimate.max(1);
        self
    }

    /// Sets the overscan row count (builder pattern).
    #[must_use]
    pub fn overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Sets the scroll offset, clamped to the scrollable extent.
    pub fn set_scroll_offset(&mut self, offset: usize) {
        let max = self.total_size().saturating_sub(self.viewport_height);
        self.scroll_offset = offset.min(max);
    }

    /// Scrolls down by the given distance.
    pub fn scroll_down(&mut self, delta: usize) {
        self.set_scroll_offset(self.scroll_offset + delta);
    }

    /// Scrolls up by the given distance.
    pub fn scroll_up(&mut self, delta: usize) {
        self.set_scroll_offset(self.scroll_offset.saturating_sub(delta));
    }

    /// Replaces the row count after a sort, filter, or data change.
    ///
    /// Measured heights belong to the departed ordering and are dropped.
    pub fn set_row_count(&mut self, row_count: usize) {
        self.row_count = row_count;
        self.measured.clear();
        let max = self.total_size().saturating_sub(self.viewport_height);
        self.scroll_offset = self.scroll_offset.min(max);
    }

    fn height_of(&self, index: usize) -> usize {
        self.measured.get(&index).copied().unwrap_or(self.estimate)
    }
}

impl Virtualizer for WindowPlanner {
    fn window(&self) -> VisibleWindow {
        if self.row_count == 0 || self.viewport_height == 0 {
            return VisibleWindow::default();
        }

        // Walk past rows that end above the viewport.
        let mut offset = 0;
        let mut first = 0;
        while first < self.row_count && offset + self.height_of(first) <= self.scroll_offset {
            offset += self.height_of(first);
            first += 1;
        }

        // Back up into the overscan region, recomputing the offset.
        let start = first.saturating_sub(self.overscan);
        for index in start..first {
            offset -= self.height_of(index);
        }

        let bottom = self.scroll_offset.saturating_add(self.viewport_height);
        let mut items = Vec::new();
        let mut below = 0;
        let mut index = start;
        while index < self.row_count {
            let height = self.height_of(index);
            if offset >= bottom {
                if below >= self.overscan {
                    break;
                }
                below += 1;
            }
            items.push(WindowItem {
                index,
                offset,
                height,
            });
            offset += height;
            index += 1;
        }

        VisibleWindow::new(items)
    }

    fn total_size(&self) -> usize {
        let measured_total: usize = self.measured.values().sum();
        let unmeasured = self.row_count - self.measured.len();
        measured_total + unmeasured * self.estimate
    }

    fn measure(&mut self, index: usize, height: usize) {
        if index >= self.row_count {
            return;
        }
        if self.height_of(index) != height {
            tracing::trace!(index, height, "row height measured");
            self.measured.insert(index, height.max(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_planner() {
        let planner = WindowPlanner::new(0, 200);
        assert!(planner.window().is_empty());
        assert_eq!(planner.total_size(), 0);
    }

    #[test]
    fn test_window_at_top() {
        let planner = WindowPlanner::new(100, 100).estimate(10).overscan(2);
        let window = planner.window();

        // 10 visible rows plus 2 overscan below.
        assert_eq!(window.first_index(), Some(0));
        assert_eq!(window.last_index(), Some(11));
        assert_eq!(window.items()[0].offset, 0);
        assert_eq!(window.items()[1].offset, 10);
    }

    #[test]
    fn test_window_mid_scroll() {
        let mut planner = WindowPlanner::new(100, 100).estimate(10).overscan(2);
        planner.set_scroll_offset(250);
        let window = planner.window();

        // Rows 25..35 are visible; overscan extends 2 each way.
        assert_eq!(window.first_index(), Some(23));
        assert_eq!(window.last_index(), Some(36));
        let first = window.items()[0];
        assert_eq!(first.offset, 230);
    }

    #[test]
    fn test_scroll_clamps_to_extent() {
        let mut planner = WindowPlanner::new(10, 50).estimate(10);
        planner.set_scroll_offset(10_000);
        assert_eq!(planner.scroll_offset(), 50);

        planner.scroll_up(20);
        assert_eq!(planner.scroll_offset(), 30);

        planner.scroll_down(10_000);
        assert_eq!(planner.scroll_offset(), 50);
    }

    #[test]
    fn test_measure_changes_total_and_offsets() {
        let mut planner = WindowPlanner::new(10, 100).estimate(10).overscan(0);
        assert_eq!(planner.total_size(), 100);

        planner.measure(0, 30);
        assert_eq!(planner.total_size(), 120);

        let window = planner.window();
        assert_eq!(window.items()[0].height, 30);
        assert_eq!(window.items()[1].offset, 30);
    }

    #[test]
    fn test_measure_ignores_out_of_range() {
        let mut planner = WindowPlanner::new(5, 100).estimate(10);
        planner.measure(99, 50);
        assert_eq!(planner.total_size(), 50);
    }

    #[test]
    fn test_set_row_count_drops_measurements() {
        let mut planner = WindowPlanner::new(10, 100).estimate(10);
        planner.measure(3, 40);
        assert_eq!(planner.total_size(), 130);

        planner.set_row_count(8);
        assert_eq!(planner.total_size(), 80);
    }

    #[test]
    fn test_window_never_exceeds_row_count() {
        let mut planner = WindowPlanner::new(7, 500).estimate(10).overscan(5);
        planner.set_scroll_offset(1_000);
        let window = planner.window();
        assert!(window.last_index().unwrap() < 7);
    }
}
