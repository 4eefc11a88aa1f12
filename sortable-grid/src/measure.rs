use crate::Size;
use crate::seams::MeasurementProvider;

/// Remembers the last size the host reported for the grid container.
///
/// The host calls [`ResizeObserver::observe`] from its own resize callback. Before the first
/// observation the size is `0 x 0`, which lays out an empty grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResizeObserver {
    size: Size,
}

impl ResizeObserver {
    pub fn new() -> Self {
        Self { size: Size::ZERO }
    }

    pub fn with_initial_size(size: Size) -> Self {
        Self { size }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Stores `size`; returns `true` if it differs from the last one.
    pub fn observe(&mut self, size: Size) -> bool {
        if self.size == size {
            return false;
        }
        gtrace!(width = size.width, height = size.height, "ResizeObserver::observe");
        self.size = size;
        true
    }

    /// Hands the current `(width, height)` to `child`.
    pub fn with_size<R>(&self, child: impl FnOnce(u32, u32) -> R) -> R {
        child(self.size.width, self.size.height)
    }
}

impl MeasurementProvider for ResizeObserver {
    fn size(&self) -> Size {
        self.size
    }

    fn observe(&mut self, size: Size) -> bool {
        ResizeObserver::observe(self, size)
    }
}
