use alloc::collections::VecDeque;

use sortable_grid::{GestureEvent, GestureSource};

/// Maps a pointer position to the item under it.
///
/// `x`/`y` are relative to the container's top-left corner.
pub trait HitTest<K> {
    fn item_at(&self, x: f32, y: f32) -> Option<K>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorOptions {
    /// Pointer travel (in pixels) before a press turns into a drag. `0` starts on press.
    pub activation_distance: f32,
}

impl SensorOptions {
    pub fn new() -> Self {
        Self {
            activation_distance: 0.0,
        }
    }

    pub fn with_activation_distance(mut self, distance: f32) -> Self {
        self.activation_distance = distance.max(0.0);
        self
    }
}

impl Default for SensorOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Phase<K> {
    Idle,
    Pressed { candidate: K, origin: (f32, f32) },
    Dragging { over: Option<K> },
}

/// Turns raw pointer input into [`GestureEvent`]s.
///
/// The host forwards pointer down/move/up/cancel; the sensor hit-tests against the grid and
/// queues events, which the controller pulls through [`GestureSource::next_event`].
#[derive(Clone, Debug)]
pub struct PointerSensor<K> {
    options: SensorOptions,
    phase: Phase<K>,
    pointer: Option<(f32, f32)>,
    queue: VecDeque<GestureEvent<K>>,
}

impl<K: Clone + PartialEq> Default for PointerSensor<K> {
    fn default() -> Self {
        Self::new(SensorOptions::default())
    }
}

impl<K: Clone + PartialEq> PointerSensor<K> {
    pub fn new(options: SensorOptions) -> Self {
        Self {
            options,
            phase: Phase::Idle,
            pointer: None,
            queue: VecDeque::new(),
        }
    }

    pub fn options(&self) -> SensorOptions {
        self.options
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Last pointer position while a button is held.
    pub fn pointer(&self) -> Option<(f32, f32)> {
        self.pointer
    }

    /// Number of events waiting to be pulled.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, hit: &impl HitTest<K>) {
        if !matches!(self.phase, Phase::Idle) {
            return;
        }
        let Some(candidate) = hit.item_at(x, y) else {
            return;
        };
        self.pointer = Some((x, y));
        if self.options.activation_distance <= 0.0 {
            self.activate(candidate, x, y, hit);
        } else {
            self.phase = Phase::Pressed {
                candidate,
                origin: (x, y),
            };
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, hit: &impl HitTest<K>) {
        if matches!(self.phase, Phase::Idle) {
            return;
        }
        self.pointer = Some((x, y));
        match &mut self.phase {
            Phase::Idle => {}
            Phase::Pressed { origin, .. } => {
                let (dx, dy) = (x - origin.0, y - origin.1);
                let d = self.options.activation_distance;
                if dx * dx + dy * dy < d * d {
                    return;
                }
                let Phase::Pressed { candidate, .. } =
                    core::mem::replace(&mut self.phase, Phase::Idle)
                else {
                    return;
                };
                self.activate(candidate, x, y, hit);
            }
            Phase::Dragging { over } => {
                let next = hit.item_at(x, y);
                if *over != next {
                    *over = next.clone();
                    self.queue.push_back(GestureEvent::Over { over: next });
                }
            }
        }
    }

    /// Releases the pointer. A press that never became a drag emits nothing.
    pub fn pointer_up(&mut self, x: f32, y: f32, hit: &impl HitTest<K>) {
        self.pointer = None;
        if let Phase::Dragging { .. } = core::mem::replace(&mut self.phase, Phase::Idle) {
            self.queue.push_back(GestureEvent::End {
                over: hit.item_at(x, y),
            });
        }
    }

    /// Aborts the gesture (e.g. the pointer left the window or Escape was pressed).
    pub fn pointer_cancel(&mut self) {
        self.pointer = None;
        if let Phase::Dragging { .. } = core::mem::replace(&mut self.phase, Phase::Idle) {
            self.queue.push_back(GestureEvent::Cancel);
        }
    }

    fn activate(&mut self, active: K, x: f32, y: f32, hit: &impl HitTest<K>) {
        gtrace!(x, y, "PointerSensor: activate");
        let over = hit.item_at(x, y);
        self.queue.push_back(GestureEvent::Start { active });
        if over.is_some() {
            self.queue.push_back(GestureEvent::Over { over: over.clone() });
        }
        self.phase = Phase::Dragging { over };
    }
}

impl<K> GestureSource<K> for PointerSensor<K> {
    fn next_event(&mut self) -> Option<GestureEvent<K>> {
        self.queue.pop_front()
    }
}
