//! A framework-neutral sortable grid component built on `sortable-grid`.
//!
//! `sortable-grid` covers the layout, windowing and reorder logic. This crate wires it together
//! into something a UI layer can drive directly:
//!
//! - [`SortableGrid`]: the component (measurement, layout, windowing, drag state, styles)
//! - [`PointerSensor`]: turns pointer down/move/up into drag gesture events
//! - [`Tween`]/[`Easing`]: style transitions while sorting
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod key;
mod sensor;
mod tween;


pub use controller::{OverlayCell, RenderedCell, SortableGrid};
pub use sensor::{HitTest, PointerSensor, SensorOptions};
pub use tween::{Easing, Tween};
