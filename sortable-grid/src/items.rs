use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::key::{GridKey, KeyIndexMap};

/// Result of applying a drop to an [`ItemList`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DropOutcome {
    /// No target, the target was the source, or the splice left every item in place.
    Unchanged,
    /// The source moved from `from` to `to` (both indexes in the list after the move).
    Moved { from: usize, to: usize },
    /// The source or the target id is not in the list. The list is left untouched.
    ///
    /// A missing id never becomes a splice at index -1; the drop is rejected instead.
    Stale,
}

impl DropOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// A duplicate id was found while building an [`ItemList`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateItem<K> {
    pub item: K,
    pub first_index: usize,
    pub index: usize,
}

impl<K: fmt::Debug> fmt::Display for DuplicateItem<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "duplicate item {:?} at index {} (first seen at index {})",
            self.item, self.index, self.first_index
        )
    }
}

#[cfg(feature = "std")]
impl<K: fmt::Debug> std::error::Error for DuplicateItem<K> {}

/// An ordered sequence of unique item ids.
///
/// Order is the only state. Reorders go through [`ItemList::move_before`] (or the drag
/// coordinator), which keeps the ids unique.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ItemList<K> {
    items: Vec<K>,
}

impl ItemList<String> {
    /// `"0"`, `"1"`, ... `"{count - 1}"`.
    pub fn demo(count: usize) -> Self {
        Self {
            items: (0..count).map(|i| i.to_string()).collect(),
        }
    }
}

impl<K: GridKey + Clone> ItemList<K> {
    /// Builds a list, rejecting the first repeated id.
    pub fn try_from_iter(iter: impl IntoIterator<Item = K>) -> Result<Self, DuplicateItem<K>> {
        let iter = iter.into_iter();
        let mut items = Vec::with_capacity(iter.size_hint().0);
        let mut seen = KeyIndexMap::<K>::new();
        for item in iter {
            let index = items.len();
            if let Some(&first_index) = seen.get(&item) {
                return Err(DuplicateItem {
                    item,
                    first_index,
                    index,
                });
            }
            seen.insert(item.clone(), index);
            items.push(item);
        }
        Ok(Self { items })
    }
}

impl<K> ItemList<K> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[K] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&K> {
        self.items.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, K> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<K> {
        self.items
    }
}

impl<K: PartialEq> ItemList<K> {
    pub fn index_of(&self, id: &K) -> Option<usize> {
        self.items.iter().position(|it| it == id)
    }

    pub fn contains(&self, id: &K) -> bool {
        self.index_of(id).is_some()
    }

    /// Moves `source` into the slot `target` holds once `source` has been taken out.
    ///
    /// The source is removed first, then re-inserted at the target's index in the shortened
    /// list, so it always lands immediately before the target. Items between the two shift by
    /// one position.
    pub fn move_before(&mut self, source: &K, target: &K) -> DropOutcome {
        if source == target {
            return DropOutcome::Unchanged;
        }
        let (Some(from), Some(target_index)) = (self.index_of(source), self.index_of(target))
        else {
            gwarn!(
                source_found = self.contains(source),
                target_found = self.contains(target),
                "ItemList::move_before: stale id"
            );
            return DropOutcome::Stale;
        };

        let to = if target_index > from {
            target_index - 1
        } else {
            target_index
        };
        if from == to {
            return DropOutcome::Unchanged;
        }
        if from < to {
            self.items[from..=to].rotate_left(1);
        } else {
            self.items[to..=from].rotate_right(1);
        }
        gtrace!(from, to, "ItemList::move_before");
        DropOutcome::Moved { from, to }
    }
}

impl<K> From<ItemList<K>> for Vec<K> {
    fn from(list: ItemList<K>) -> Self {
        list.items
    }
}

impl<'a, K> IntoIterator for &'a ItemList<K> {
    type Item = &'a K;
    type IntoIter = core::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Where the item currently at `index` ends up after moving `from` to `to`.
///
/// `to` is the insertion index in the list with `from` already removed, as reported by
/// [`DropOutcome::Moved`].
pub fn projected_index(index: usize, from: usize, to: usize) -> usize {
    if index == from {
        to
    } else if from < to && index > from && index <= to {
        index - 1
    } else if to < from && index >= to && index < from {
        index + 1
    } else {
        index
    }
}
