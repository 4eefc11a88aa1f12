//! Interfaces between the grid component and the host-provided capabilities.
//!
//! Each has one implementation in this workspace: [`crate::ResizeObserver`],
//! [`crate::GridWindow`] and `sortable_grid_adapter::PointerSensor`.

use crate::{Align, GestureEvent, GridLayout, Size, VirtualCell};

/// Supplies the container's rendered size.
pub trait MeasurementProvider {
    fn size(&self) -> Size;

    /// Records a new measurement; returns `true` if it changed.
    fn observe(&mut self, size: Size) -> bool;
}

/// Renders only the visible part of a large fixed-size grid.
pub trait RangeRenderer {
    /// Applies new grid geometry (counts and cell size).
    fn configure(&mut self, layout: &GridLayout);

    fn set_viewport(&mut self, viewport: Size);

    /// Returns `(scroll_left, scroll_top)`.
    fn scroll_offset(&self) -> (u64, u64);

    /// A user scroll at `now_ms`.
    fn apply_scroll_event(&mut self, left: u64, top: u64, now_ms: u64);

    /// Programmatic scroll that brings `(row, column)` into view.
    fn scroll_to_cell(&mut self, row: usize, column: usize, align: Align);

    /// Per-frame housekeeping (e.g. resetting `is_scrolling`).
    fn update_scrolling(&mut self, now_ms: u64);

    fn is_scrolling(&self) -> bool;

    /// Emits every cell in the rendered window, row-major.
    fn for_each_visible_cell(&self, f: &mut dyn FnMut(VirtualCell));

    /// `(row, column)` under a point in content coordinates.
    fn cell_at_point(&self, x: u64, y: u64) -> Option<(usize, usize)>;
}

/// Produces drag gesture events.
pub trait GestureSource<K> {
    fn next_event(&mut self) -> Option<GestureEvent<K>>;
}
