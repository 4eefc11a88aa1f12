//! A headless engine for virtualized, drag-reorderable item grids.
//!
//! For a ready-made component (controller, pointer sensor, style transitions), see the
//! `sortable-grid-adapter` crate.
//!
//! The crate covers the logic behind a sortable grid:
//! - mapping a flat ordered list onto rows and columns sized from the container width
//! - resolving `(row, column)` back to an item id
//! - windowing: which cells of a huge fixed-size grid are on screen
//! - reordering the list when a drag gesture ends, and previewing that reorder while hovering
//! - mapping drag state onto per-cell visual values
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the container size
//! - scroll offsets
//! - drag gesture events (start, hover, end, cancel)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cell;
mod drag;
mod items;
mod key;
mod layout;
mod measure;
mod options;
mod seams;
mod style;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use cell::{cell_for_index, flat_index, resolve_cell};
pub use drag::{DragCoordinator, DragPreview, DragState, GestureEvent};
pub use items::{DropOutcome, DuplicateItem, ItemList, projected_index};
pub use key::GridKey;
pub use layout::{CellSize, GridLayout, LayoutOptions};
pub use measure::ResizeObserver;
pub use options::{GridWindowOptions, OnChangeCallback};
pub use seams::{GestureSource, MeasurementProvider, RangeRenderer};
pub use style::{CellState, CellStyle, Hsl, ItemSeed};
pub use types::{Align, ScrollDirection, Size, VirtualCell, VirtualRange};
pub use window::GridWindow;
