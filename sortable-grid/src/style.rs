use alloc::string::String;

/// What the visual mapping needs to know about one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellState {
    /// This cell holds the dragged item.
    pub is_dragging: bool,
    /// A drop target is currently under the pointer (any cell, including the dragged one).
    pub has_over: bool,
    /// A drag gesture is in progress somewhere in the grid.
    pub is_sorting: bool,
    /// Current index of the item in the list.
    pub index: usize,
    /// Index the item would take if the current hover were dropped.
    pub prospective_index: usize,
}

impl CellState {
    /// A cell with no drag in progress.
    pub fn resting(index: usize) -> Self {
        Self {
            is_dragging: false,
            has_over: false,
            is_sorting: false,
            index,
            prospective_index: index,
        }
    }

    /// Signed distance between the prospective and the current index.
    pub fn displacement(&self) -> isize {
        self.prospective_index as isize - self.index as isize
    }
}

/// Presentation values for one cell.
///
/// `translate_x` is in cell widths, `rotate_deg` in degrees and `lightness` in percent. An
/// adapter maps these onto whatever its toolkit uses for transforms and colours.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellStyle {
    pub scale: f32,
    pub translate_x: f32,
    pub rotate_deg: f32,
    pub opacity: f32,
    pub lightness: f32,
    pub brightness: f32,
    pub hidden: bool,
    pub transition_ms: u32,
}

impl CellStyle {
    pub const SORTING_TRANSITION_MS: u32 = 100;

    pub const RESTING: Self = Self {
        scale: 1.0,
        translate_x: 0.0,
        rotate_deg: 0.0,
        opacity: 1.0,
        lightness: 50.0,
        brightness: 1.0,
        hidden: false,
        transition_ms: 0,
    };

    /// Style of the floating copy that follows the pointer during a drag.
    pub const OVERLAY: Self = Self {
        scale: 0.95,
        translate_x: 0.0,
        rotate_deg: 0.0,
        opacity: 1.0,
        lightness: 50.0,
        brightness: 1.25,
        hidden: false,
        transition_ms: 0,
    };

    pub fn for_state(state: &CellState) -> Self {
        let transition_ms = if state.is_sorting {
            Self::SORTING_TRANSITION_MS
        } else {
            0
        };

        if state.is_dragging {
            // The overlay stands in for the dragged cell once it hovers a target.
            return Self {
                scale: 0.95,
                lightness: 60.0,
                hidden: state.has_over,
                transition_ms,
                ..Self::RESTING
            };
        }

        let direction = match state.displacement() {
            0 => {
                return Self {
                    transition_ms,
                    ..Self::RESTING
                };
            }
            d if d < 0 => -1.0,
            _ => 1.0,
        };
        Self {
            scale: 0.85,
            translate_x: direction,
            rotate_deg: 5.0 * direction,
            opacity: 0.8,
            lightness: 30.0,
            transition_ms,
            ..Self::RESTING
        }
    }

    /// Interpolates between two styles; `t` is clamped to `0..=1`.
    ///
    /// `hidden` and `transition_ms` follow `to` immediately.
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            scale: mix(from.scale, to.scale),
            translate_x: mix(from.translate_x, to.translate_x),
            rotate_deg: mix(from.rotate_deg, to.rotate_deg),
            opacity: mix(from.opacity, to.opacity),
            lightness: mix(from.lightness, to.lightness),
            brightness: mix(from.brightness, to.brightness),
            hidden: to.hidden,
            transition_ms: to.transition_ms,
        }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::RESTING
    }
}

/// An HSL colour; `hue` in degrees `[0, 360)`, the rest in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub const SATURATION: f32 = 20.0;

    /// Background for an item: hue steps by 30 degrees per seed, starting at 105.
    pub fn for_seed(seed: i64, lightness: f32) -> Self {
        // 12 steps of 30 degrees wrap around the colour wheel.
        let hue = (seed.rem_euclid(12) * 30 + 105).rem_euclid(360);
        Self {
            hue: hue as f32,
            saturation: Self::SATURATION,
            lightness,
        }
    }
}

/// Numeric seed used to colour an item.
pub trait ItemSeed {
    fn seed(&self) -> i64;
}

impl ItemSeed for str {
    /// Numeric ids use their value; anything else uses 0.
    fn seed(&self) -> i64 {
        self.trim().parse().unwrap_or(0)
    }
}

impl ItemSeed for String {
    fn seed(&self) -> i64 {
        self.as_str().seed()
    }
}

impl<T: ItemSeed + ?Sized> ItemSeed for &T {
    fn seed(&self) -> i64 {
        (**self).seed()
    }
}

macro_rules! impl_item_seed_int {
    ($($t:ty),*) => {
        $(
            impl ItemSeed for $t {
                fn seed(&self) -> i64 {
                    *self as i64
                }
            }
        )*
    };
}

impl_item_seed_int!(u16, u32, u64, usize, i16, i32, i64);
