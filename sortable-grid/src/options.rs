use alloc::sync::Arc;

use crate::GridLayout;
use crate::window::GridWindow;

/// A callback fired when the window state changes.
///
/// The second argument is `is_scrolling`.
pub type OnChangeCallback = Arc<dyn Fn(&GridWindow, bool) + Send + Sync>;

/// Configuration for [`crate::GridWindow`].
///
/// Cheap to clone: the callback is stored in an `Arc`, so adapters can tweak a field and call
/// `GridWindow::set_options` every frame.
pub struct GridWindowOptions {
    pub row_count: usize,
    pub column_count: usize,
    pub column_width: u32,
    pub row_height: u32,

    /// Extra rows rendered above and below the viewport.
    pub overscan_rows: usize,
    /// Extra columns rendered left and right of the viewport.
    pub overscan_columns: usize,

    /// How long after the last scroll event `is_scrolling` resets to `false`.
    pub is_scrolling_reset_delay_ms: u64,

    /// Optional callback fired when the window's state changes.
    pub on_change: Option<OnChangeCallback>,
}

impl Clone for GridWindowOptions {
    fn clone(&self) -> Self {
        Self {
            row_count: self.row_count,
            column_count: self.column_count,
            column_width: self.column_width,
            row_height: self.row_height,
            overscan_rows: self.overscan_rows,
            overscan_columns: self.overscan_columns,
            is_scrolling_reset_delay_ms: self.is_scrolling_reset_delay_ms,
            on_change: self.on_change.clone(),
        }
    }
}

impl GridWindowOptions {
    pub fn new(row_count: usize, column_count: usize, column_width: u32, row_height: u32) -> Self {
        Self {
            row_count,
            column_count,
            column_width,
            row_height,
            overscan_rows: 1,
            overscan_columns: 1,
            is_scrolling_reset_delay_ms: 150,
            on_change: None,
        }
    }

    /// Options matching a computed [`GridLayout`].
    pub fn from_layout(layout: &GridLayout) -> Self {
        Self::new(
            layout.rows,
            layout.columns,
            layout.cell_width,
            layout.cell_height,
        )
    }

    /// Sets both row and column overscan.
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan_rows = overscan;
        self.overscan_columns = overscan;
        self
    }

    pub fn with_overscan_rows(mut self, overscan: usize) -> Self {
        self.overscan_rows = overscan;
        self
    }

    pub fn with_overscan_columns(mut self, overscan: usize) -> Self {
        self.overscan_columns = overscan;
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&GridWindow, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub(crate) fn apply_layout(&mut self, layout: &GridLayout) {
        self.row_count = layout.rows;
        self.column_count = layout.columns;
        self.column_width = layout.cell_width;
        self.row_height = layout.cell_height;
    }

    pub(crate) fn content_width(&self) -> u64 {
        (self.column_count as u64).saturating_mul(self.column_width as u64)
    }

    pub(crate) fn content_height(&self) -> u64 {
        (self.row_count as u64).saturating_mul(self.row_height as u64)
    }
}

impl Default for GridWindowOptions {
    fn default() -> Self {
        Self::new(0, 0, 1, 1)
    }
}

impl core::fmt::Debug for GridWindowOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridWindowOptions")
            .field("row_count", &self.row_count)
            .field("column_count", &self.column_count)
            .field("column_width", &self.column_width)
            .field("row_height", &self.row_height)
            .field("overscan_rows", &self.overscan_rows)
            .field("overscan_columns", &self.overscan_columns)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .finish_non_exhaustive()
    }
}
