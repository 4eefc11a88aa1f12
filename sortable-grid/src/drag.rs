use crate::items::{DropOutcome, ItemList, projected_index};

/// A drag gesture event, as produced by a [`crate::GestureSource`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GestureEvent<K> {
    /// A drag began on `active`.
    Start { active: K },
    /// The drop target under the pointer changed.
    Over { over: Option<K> },
    /// The gesture finished over `over` (or over nothing).
    End { over: Option<K> },
    /// The gesture was aborted; nothing is dropped.
    Cancel,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragState<K> {
    Idle,
    Dragging {
        active: K,
        over: Option<K>,
    },
}

/// The reorder a drop would perform right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragPreview {
    pub from: usize,
    pub to: usize,
}

impl DragPreview {
    /// Index the item at `index` would occupy after the drop.
    pub fn projected_index(&self, index: usize) -> usize {
        projected_index(index, self.from, self.to)
    }
}

/// Tracks the active drag gesture and applies drops to an [`ItemList`].
///
/// `Idle --start--> Dragging --end/cancel--> Idle`. The coordinator never owns the list; the
/// caller passes it in on drop.
#[derive(Clone, Debug)]
pub struct DragCoordinator<K> {
    state: DragState<K>,
}

impl<K> Default for DragCoordinator<K> {
    fn default() -> Self {
        Self {
            state: DragState::Idle,
        }
    }
}

impl<K: PartialEq> DragCoordinator<K> {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> &DragState<K> {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn active(&self) -> Option<&K> {
        match &self.state {
            DragState::Dragging { active, .. } => Some(active),
            DragState::Idle => None,
        }
    }

    pub fn over(&self) -> Option<&K> {
        match &self.state {
            DragState::Dragging { over, .. } => over.as_ref(),
            DragState::Idle => None,
        }
    }

    pub fn is_active(&self, id: &K) -> bool {
        self.active() == Some(id)
    }

    /// Begins a gesture on `active`. A gesture already in progress is dropped without effect.
    pub fn start(&mut self, active: K) {
        if self.is_dragging() {
            gdebug!("DragCoordinator::start: replacing gesture in progress");
        }
        self.state = DragState::Dragging { active, over: None };
    }

    /// Records the current drop target. Ignored while idle.
    pub fn hover(&mut self, target: Option<K>) {
        if let DragState::Dragging { over, .. } = &mut self.state {
            *over = target;
        }
    }

    /// Ends the gesture and applies the drop to `items`.
    ///
    /// With no target, or a target equal to the source, the list is unchanged. Stale ids leave
    /// the list unchanged and report [`DropOutcome::Stale`].
    pub fn end(&mut self, over: Option<K>, items: &mut ItemList<K>) -> DropOutcome {
        let DragState::Dragging { active, .. } =
            core::mem::replace(&mut self.state, DragState::Idle)
        else {
            return DropOutcome::Unchanged;
        };
        let Some(over) = over else {
            return DropOutcome::Unchanged;
        };
        if over == active {
            return DropOutcome::Unchanged;
        }
        let outcome = items.move_before(&active, &over);
        gdebug!(?outcome, "drag ended");
        outcome
    }

    /// Aborts the gesture. The list is not touched.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Applies one gesture event. Returns the drop outcome for `End`, `None` otherwise.
    pub fn apply(
        &mut self,
        event: GestureEvent<K>,
        items: &mut ItemList<K>,
    ) -> Option<DropOutcome> {
        match event {
            GestureEvent::Start { active } => {
                self.start(active);
                None
            }
            GestureEvent::Over { over } => {
                self.hover(over);
                None
            }
            GestureEvent::End { over } => Some(self.end(over, items)),
            GestureEvent::Cancel => {
                self.cancel();
                None
            }
        }
    }

    /// The reorder that dropping on the current target would perform.
    ///
    /// `None` while idle, with no target, over the source itself, or if either id is stale.
    pub fn preview(&self, items: &ItemList<K>) -> Option<DragPreview> {
        let DragState::Dragging {
            active,
            over: Some(over),
        } = &self.state
        else {
            return None;
        };
        if active == over {
            return None;
        }
        let from = items.index_of(active)?;
        let target_index = items.index_of(over)?;
        let to = if target_index > from {
            target_index - 1
        } else {
            target_index
        };
        Some(DragPreview { from, to })
    }
}
