#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type KeyIndexMap<K> = HashMap<K, usize>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyIndexMap<K> = BTreeMap<K, usize>;

/// Identity of a grid item.
///
/// With `std` this is `Hash + Eq`; without it, `Ord` (keys are then stored in a `BTreeMap`).
#[cfg(feature = "std")]
pub trait GridKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> GridKey for K {}

#[cfg(not(feature = "std"))]
pub trait GridKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> GridKey for K {}
