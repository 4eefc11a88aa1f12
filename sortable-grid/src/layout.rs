/// Cell dimensions used by the layout calculator, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

impl CellSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn sanitized(self) -> Self {
        Self {
            width: self.width.max(1),
            height: self.height.max(1),
        }
    }
}

/// Configuration for [`GridLayout::compute_with`].
///
/// Containers narrower than `breakpoint` use `narrow_cell`, the rest use `wide_cell`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutOptions {
    pub breakpoint: u32,
    pub narrow_cell: CellSize,
    pub wide_cell: CellSize,
}

impl LayoutOptions {
    pub const DEFAULT_BREAKPOINT: u32 = 768;
    pub const DEFAULT_NARROW_CELL: CellSize = CellSize::new(100, 150);
    pub const DEFAULT_WIDE_CELL: CellSize = CellSize::new(200, 300);

    pub fn new() -> Self {
        Self {
            breakpoint: Self::DEFAULT_BREAKPOINT,
            narrow_cell: Self::DEFAULT_NARROW_CELL,
            wide_cell: Self::DEFAULT_WIDE_CELL,
        }
    }

    pub fn with_breakpoint(mut self, breakpoint: u32) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    /// Zero dimensions are raised to 1 pixel.
    pub fn with_narrow_cell(mut self, cell: CellSize) -> Self {
        self.narrow_cell = cell.sanitized();
        self
    }

    /// Zero dimensions are raised to 1 pixel.
    pub fn with_wide_cell(mut self, cell: CellSize) -> Self {
        self.wide_cell = cell.sanitized();
        self
    }

    /// Picks the cell size for a container of the given width.
    pub fn cell_for_width(&self, width: u32) -> CellSize {
        if width < self.breakpoint {
            self.narrow_cell.sanitized()
        } else {
            self.wide_cell.sanitized()
        }
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Grid geometry derived from a container width and an item count.
///
/// This is recomputed on every measurement and never cached across renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout {
    pub container_width: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    pub columns: usize,
    pub rows: usize,
}

impl GridLayout {
    /// Computes the layout with the default breakpoint and cell sizes.
    pub fn compute(container_width: u32, item_count: usize) -> Self {
        Self::compute_with(&LayoutOptions::default(), container_width, item_count)
    }

    /// Computes the layout.
    ///
    /// A container narrower than one cell has zero columns, and therefore zero rows: the grid
    /// renders nothing.
    pub fn compute_with(options: &LayoutOptions, container_width: u32, item_count: usize) -> Self {
        let cell = options.cell_for_width(container_width);
        let columns = (container_width / cell.width) as usize;
        let rows = if columns > 0 {
            item_count.div_ceil(columns)
        } else {
            0
        };
        gtrace!(container_width, item_count, columns, rows, "GridLayout::compute");
        Self {
            container_width,
            cell_width: cell.width,
            cell_height: cell.height,
            columns,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }

    /// Number of addressable slots (`columns * rows`), including trailing empty slots.
    pub fn slot_count(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }

    /// Width actually occupied by whole columns.
    pub fn grid_width(&self) -> u32 {
        if self.cell_width == 0 {
            return 0;
        }
        self.container_width - self.container_width % self.cell_width
    }

    /// Left offset that centres the grid inside its container.
    pub fn grid_offset_x(&self) -> u32 {
        (self.container_width - self.grid_width()) / 2
    }

    /// Total scrollable content size as `(width, height)`.
    pub fn content_size(&self) -> (u64, u64) {
        (
            (self.columns as u64).saturating_mul(self.cell_width as u64),
            (self.rows as u64).saturating_mul(self.cell_height as u64),
        )
    }
}
