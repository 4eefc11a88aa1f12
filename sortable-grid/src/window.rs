use alloc::vec::Vec;
use core::cell::Cell;
use core::cmp;

use crate::seams::RangeRenderer;
use crate::{
    Align, GridLayout, GridWindowOptions, ScrollDirection, Size, VirtualCell, VirtualRange,
};

/// A fixed-size 2D windowing engine.
///
/// Every row has the same height and every column the same width, so all geometry is plain
/// arithmetic. The window holds no UI objects: the adapter feeds it the viewport size and scroll
/// offsets, then iterates the cells to paint with [`GridWindow::for_each_virtual_cell`].
#[derive(Clone, Debug)]
pub struct GridWindow {
    options: GridWindowOptions,
    viewport: Size,
    scroll_left: u64,
    scroll_top: u64,
    is_scrolling: bool,
    scroll_direction: Option<ScrollDirection>,
    last_scroll_event_ms: Option<u64>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Default for GridWindow {
    fn default() -> Self {
        Self::new(GridWindowOptions::default())
    }
}

impl GridWindow {
    pub fn new(options: GridWindowOptions) -> Self {
        gdebug!(
            rows = options.row_count,
            columns = options.column_count,
            "GridWindow::new"
        );
        Self {
            options,
            viewport: Size::ZERO,
            scroll_left: 0,
            scroll_top: 0,
            is_scrolling: false,
            scroll_direction: None,
            last_scroll_event_ms: None,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &GridWindowOptions {
        &self.options
    }

    /// Replaces the options. Scroll offsets are re-clamped to the new content size.
    pub fn set_options(&mut self, options: GridWindowOptions) {
        self.options = options;
        gtrace!(
            rows = self.options.row_count,
            columns = self.options.column_count,
            "GridWindow::set_options"
        );
        self.reclamp_scroll();
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut GridWindowOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    /// Adopts the counts and cell size of a computed layout.
    pub fn set_layout(&mut self, layout: &GridLayout) {
        self.options.apply_layout(layout);
        gtrace!(rows = layout.rows, columns = layout.columns, "GridWindow::set_layout");
        self.reclamp_scroll();
        self.notify();
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&GridWindow, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| alloc::sync::Arc::new(f) as _);
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.is_scrolling);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn row_count(&self) -> usize {
        self.options.row_count
    }

    pub fn column_count(&self) -> usize {
        self.options.column_count
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.reclamp_scroll();
        self.notify();
    }

    /// Content size as `(width, height)`.
    pub fn content_size(&self) -> (u64, u64) {
        (self.options.content_width(), self.options.content_height())
    }

    pub fn scroll_left(&self) -> u64 {
        self.scroll_left
    }

    pub fn scroll_top(&self) -> u64 {
        self.scroll_top
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn max_scroll_left(&self) -> u64 {
        self.options
            .content_width()
            .saturating_sub(self.viewport.width as u64)
    }

    pub fn max_scroll_top(&self) -> u64 {
        self.options
            .content_height()
            .saturating_sub(self.viewport.height as u64)
    }

    pub fn set_scroll(&mut self, left: u64, top: u64) {
        if self.scroll_left == left && self.scroll_top == top {
            return;
        }
        let prev_top = self.scroll_top;
        self.scroll_left = left;
        self.scroll_top = top;
        self.scroll_direction = match top.cmp(&prev_top) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.scroll_direction,
        };
        self.notify();
    }

    pub fn set_scroll_clamped(&mut self, left: u64, top: u64) {
        let left = left.min(self.max_scroll_left());
        let top = top.min(self.max_scroll_top());
        self.set_scroll(left, top);
    }

    /// Applies a user scroll (wheel/drag) and marks the window as scrolling.
    ///
    /// Offsets are clamped to the content.
    pub fn apply_scroll_event(&mut self, left: u64, top: u64, now_ms: u64) {
        gtrace!(left, top, now_ms, "GridWindow::apply_scroll_event");
        self.batch_update(|w| {
            w.set_scroll_clamped(left, top);
            w.notify_scroll_event(now_ms);
        });
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        if self.is_scrolling == is_scrolling {
            return;
        }
        self.is_scrolling = is_scrolling;
        if !is_scrolling {
            self.scroll_direction = None;
            self.last_scroll_event_ms = None;
        }
        self.notify();
    }

    pub fn notify_scroll_event(&mut self, now_ms: u64) {
        self.last_scroll_event_ms = Some(now_ms);
        self.set_is_scrolling(true);
    }

    /// Resets `is_scrolling` once no scroll event arrived for the configured delay.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        if !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.options.is_scrolling_reset_delay_ms {
            self.set_is_scrolling(false);
        }
    }

    /// Rows intersecting the viewport (no overscan).
    pub fn visible_rows(&self) -> VirtualRange {
        axis_visible(
            self.options.row_count,
            self.options.row_height,
            self.scroll_top,
            self.viewport.height,
        )
    }

    /// Columns intersecting the viewport (no overscan).
    pub fn visible_columns(&self) -> VirtualRange {
        axis_visible(
            self.options.column_count,
            self.options.column_width,
            self.scroll_left,
            self.viewport.width,
        )
    }

    /// Rows that get rendered: visible rows plus overscan.
    pub fn rendered_rows(&self) -> VirtualRange {
        axis_overscanned(
            self.visible_rows(),
            self.options.overscan_rows,
            self.options.row_count,
        )
    }

    /// Columns that get rendered: visible columns plus overscan.
    pub fn rendered_columns(&self) -> VirtualRange {
        axis_overscanned(
            self.visible_columns(),
            self.options.overscan_columns,
            self.options.column_count,
        )
    }

    /// Geometry of one cell, or `None` outside the grid.
    pub fn cell(&self, row: usize, column: usize) -> Option<VirtualCell> {
        if row >= self.options.row_count || column >= self.options.column_count {
            return None;
        }
        Some(self.cell_unchecked(row, column))
    }

    fn cell_unchecked(&self, row: usize, column: usize) -> VirtualCell {
        let width = self.options.column_width;
        let height = self.options.row_height;
        VirtualCell {
            row,
            column,
            x: (column as u64).saturating_mul(width as u64),
            y: (row as u64).saturating_mul(height as u64),
            width,
            height,
        }
    }

    /// Emits every rendered cell, row-major, without allocating.
    pub fn for_each_virtual_cell(&self, mut f: impl FnMut(VirtualCell)) {
        let rows = self.rendered_rows();
        let columns = self.rendered_columns();
        if rows.is_empty() || columns.is_empty() {
            return;
        }
        for row in rows.start_index..rows.end_index {
            for column in columns.start_index..columns.end_index {
                f(self.cell_unchecked(row, column));
            }
        }
    }

    /// Collects rendered cells into `out` (clears `out` first).
    ///
    /// For per-frame use, prefer `for_each_virtual_cell` or reuse `out` across frames.
    pub fn collect_virtual_cells(&self, out: &mut Vec<VirtualCell>) {
        out.clear();
        self.for_each_virtual_cell(|cell| out.push(cell));
    }

    /// `(row, column)` under a point in content coordinates.
    pub fn cell_at_point(&self, x: u64, y: u64) -> Option<(usize, usize)> {
        if self.options.column_width == 0 || self.options.row_height == 0 {
            return None;
        }
        let column = x / self.options.column_width as u64;
        let row = y / self.options.row_height as u64;
        if row >= self.options.row_count as u64 || column >= self.options.column_count as u64 {
            return None;
        }
        Some((row as usize, column as usize))
    }

    /// Scroll offsets `(left, top)` that bring `(row, column)` into view; clamped.
    ///
    /// Out-of-range indexes are clamped to the last row/column.
    pub fn scroll_to_cell_offset(&self, row: usize, column: usize, align: Align) -> (u64, u64) {
        let left = if self.options.column_count == 0 {
            0
        } else {
            let column = column.min(self.options.column_count - 1);
            let cell = self.cell_unchecked(0, column);
            axis_align(
                cell.x,
                cell.width,
                self.viewport.width,
                self.scroll_left,
                align,
            )
            .min(self.max_scroll_left())
        };
        let top = if self.options.row_count == 0 {
            0
        } else {
            let row = row.min(self.options.row_count - 1);
            let cell = self.cell_unchecked(row, 0);
            axis_align(
                cell.y,
                cell.height,
                self.viewport.height,
                self.scroll_top,
                align,
            )
            .min(self.max_scroll_top())
        };
        (left, top)
    }

    /// Programmatic scroll (no animation, does not mark the window as scrolling).
    ///
    /// Returns the applied offsets.
    pub fn scroll_to_cell(&mut self, row: usize, column: usize, align: Align) -> (u64, u64) {
        let (left, top) = self.scroll_to_cell_offset(row, column, align);
        self.set_scroll(left, top);
        (left, top)
    }

    fn reclamp_scroll(&mut self) {
        self.scroll_left = self.scroll_left.min(self.max_scroll_left());
        self.scroll_top = self.scroll_top.min(self.max_scroll_top());
    }
}

impl RangeRenderer for GridWindow {
    fn configure(&mut self, layout: &GridLayout) {
        self.set_layout(layout);
    }

    fn set_viewport(&mut self, viewport: Size) {
        GridWindow::set_viewport(self, viewport);
    }

    fn scroll_offset(&self) -> (u64, u64) {
        (self.scroll_left, self.scroll_top)
    }

    fn apply_scroll_event(&mut self, left: u64, top: u64, now_ms: u64) {
        GridWindow::apply_scroll_event(self, left, top, now_ms);
    }

    fn scroll_to_cell(&mut self, row: usize, column: usize, align: Align) {
        GridWindow::scroll_to_cell(self, row, column, align);
    }

    fn update_scrolling(&mut self, now_ms: u64) {
        GridWindow::update_scrolling(self, now_ms);
    }

    fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    fn for_each_visible_cell(&self, f: &mut dyn FnMut(VirtualCell)) {
        self.for_each_virtual_cell(f);
    }

    fn cell_at_point(&self, x: u64, y: u64) -> Option<(usize, usize)> {
        GridWindow::cell_at_point(self, x, y)
    }
}

fn axis_visible(count: usize, size: u32, offset: u64, viewport: u32) -> VirtualRange {
    if count == 0 || size == 0 || viewport == 0 {
        return VirtualRange::EMPTY;
    }
    let size = size as u64;
    let total = (count as u64).saturating_mul(size);
    let offset = offset.min(total.saturating_sub(viewport as u64));
    let end_px = offset.saturating_add(viewport as u64).min(total);

    let start = (offset / size) as usize;
    let end = end_px.div_ceil(size) as usize;
    VirtualRange {
        start_index: start.min(count),
        end_index: end.min(count),
    }
}

fn axis_overscanned(visible: VirtualRange, overscan: usize, count: usize) -> VirtualRange {
    if visible.is_empty() {
        return visible;
    }
    VirtualRange {
        start_index: visible.start_index.saturating_sub(overscan),
        end_index: cmp::min(count, visible.end_index.saturating_add(overscan)),
    }
}

fn axis_align(start: u64, size: u32, view: u32, current: u64, align: Align) -> u64 {
    let end = start.saturating_add(size as u64);
    let view = view as u64;
    match align {
        Align::Start => start,
        Align::End => end.saturating_sub(view),
        Align::Center => start
            .saturating_add(size as u64 / 2)
            .saturating_sub(view / 2),
        Align::Auto => {
            let current_end = current.saturating_add(view);
            if start >= current && end <= current_end {
                current
            } else if start < current {
                start
            } else {
                end.saturating_sub(view)
            }
        }
    }
}
