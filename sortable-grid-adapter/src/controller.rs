use sortable_grid::{
    Align, CellState, CellStyle, DragCoordinator, DropOutcome, GestureEvent, GestureSource,
    GridKey, GridLayout, GridWindow, Hsl, ItemList, ItemSeed, LayoutOptions, MeasurementProvider,
    RangeRenderer, ResizeObserver, Size, VirtualCell, cell_for_index, flat_index,
};

use crate::key::KeyMap;
use crate::{Easing, HitTest, Tween};

/// A cell to paint this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedCell<'a, K> {
    pub cell: VirtualCell,
    pub id: &'a K,
    /// Index of `id` in the item list.
    pub index: usize,
    /// Left edge relative to the container (grid centring and scroll applied).
    pub left: i64,
    /// Top edge relative to the container (scroll applied).
    pub top: i64,
    pub style: CellStyle,
}

impl<K: ItemSeed> RenderedCell<'_, K> {
    pub fn background(&self) -> Hsl {
        Hsl::for_seed(self.id.seed(), self.style.lightness)
    }
}

/// The floating copy of the dragged item.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayCell<K> {
    pub id: K,
    pub width: u32,
    pub height: u32,
    pub style: CellStyle,
}

impl<K: ItemSeed> OverlayCell<K> {
    pub fn background(&self) -> Hsl {
        Hsl::for_seed(self.id.seed(), self.style.lightness)
    }
}

#[derive(Clone, Copy, Debug)]
struct CellTransition {
    tween: Tween,
    frame: u64,
}

/// A framework-neutral sortable grid component.
///
/// Owns the item list and drag state, and wires the measurement provider, the layout
/// calculator, the range renderer and the drag coordinator together. The host drives it by
/// calling:
/// - `on_resize` when the container is measured
/// - `on_scroll` / `tick` for scrolling
/// - `on_gesture` (or `drain_gestures`) for drag input
/// - `for_each_rendered_cell` / `overlay` to paint
#[derive(Clone, Debug)]
pub struct SortableGrid<K, M = ResizeObserver, R = GridWindow> {
    items: ItemList<K>,
    drag: DragCoordinator<K>,
    measure: M,
    renderer: R,
    layout_options: LayoutOptions,
    layout: GridLayout,
    easing: Easing,
    transitions: KeyMap<K, CellTransition>,
    frame: u64,
}

impl<K: GridKey + Clone> SortableGrid<K> {
    pub fn new(items: ItemList<K>) -> Self {
        Self::with_parts(
            items,
            ResizeObserver::new(),
            GridWindow::default(),
            LayoutOptions::default(),
        )
    }
}

impl<K, M, R> SortableGrid<K, M, R>
where
    K: GridKey + Clone,
    M: MeasurementProvider,
    R: RangeRenderer,
{
    /// Builds a grid from explicit collaborators.
    pub fn with_parts(
        items: ItemList<K>,
        measure: M,
        renderer: R,
        layout_options: LayoutOptions,
    ) -> Self {
        let mut grid = Self {
            items,
            drag: DragCoordinator::new(),
            measure,
            renderer,
            layout_options,
            layout: GridLayout::default(),
            easing: Easing::default(),
            transitions: KeyMap::new(),
            frame: 0,
        };
        grid.relayout();
        grid
    }

    pub fn with_layout_options(mut self, layout_options: LayoutOptions) -> Self {
        self.layout_options = layout_options;
        self.relayout();
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn items(&self) -> &ItemList<K> {
        &self.items
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn drag(&self) -> &DragCoordinator<K> {
        &self.drag
    }

    pub fn measurement(&self) -> &M {
        &self.measure
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Replaces the whole item list (e.g. new data from the host). Any drag is cancelled.
    pub fn set_items(&mut self, items: ItemList<K>) {
        self.drag.cancel();
        self.items = items;
        self.relayout();
    }

    /// Feeds a container measurement. Returns `true` if the layout was recomputed.
    pub fn on_resize(&mut self, size: Size) -> bool {
        if !self.measure.observe(size) {
            return false;
        }
        self.relayout();
        true
    }

    fn relayout(&mut self) {
        let size = self.measure.size();
        self.layout =
            GridLayout::compute_with(&self.layout_options, size.width, self.items.len());
        gdebug!(
            width = size.width,
            height = size.height,
            columns = self.layout.columns,
            rows = self.layout.rows,
            "relayout"
        );
        self.renderer.configure(&self.layout);
        self.renderer
            .set_viewport(Size::new(self.layout.grid_width(), size.height));
    }

    pub fn on_scroll(&mut self, left: u64, top: u64, now_ms: u64) {
        self.renderer.apply_scroll_event(left, top, now_ms);
    }

    /// Per-frame housekeeping. Returns `true` while a style transition is still running.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.renderer.update_scrolling(now_ms);
        self.is_animating(now_ms)
    }

    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.transitions.values().any(|t| !t.tween.is_done(now_ms))
    }

    /// Applies one gesture event. Returns the drop outcome for `End`.
    pub fn on_gesture(&mut self, event: GestureEvent<K>) -> Option<DropOutcome> {
        if let GestureEvent::Start { .. } = &event {
            gdebug!("drag started");
        }
        let outcome = self.drag.apply(event, &mut self.items);
        gtrace!(?outcome, "on_gesture");
        outcome
    }

    /// Pumps every queued event from `source`. Returns the last drop outcome, if any.
    pub fn drain_gestures(
        &mut self,
        source: &mut impl GestureSource<K>,
    ) -> Option<DropOutcome> {
        let mut last = None;
        while let Some(event) = source.next_event() {
            if let Some(outcome) = self.on_gesture(event) {
                last = Some(outcome);
            }
        }
        last
    }

    /// Scrolls so that `id` is in view. Returns `false` for unknown ids or an empty grid.
    pub fn scroll_to_item(&mut self, id: &K, align: Align) -> bool {
        let Some(index) = self.items.index_of(id) else {
            return false;
        };
        let Some((row, column)) = cell_for_index(index, self.layout.columns) else {
            return false;
        };
        self.renderer.scroll_to_cell(row, column, align);
        true
    }

    /// Emits every visible, non-empty cell with its current style.
    ///
    /// Empty slots (past the end of the list) are skipped. Style transitions are advanced to
    /// `now_ms`; cells that scrolled out of view drop their transition state.
    pub fn for_each_rendered_cell(
        &mut self,
        now_ms: u64,
        mut f: impl FnMut(RenderedCell<'_, K>),
    ) {
        self.frame = self.frame.wrapping_add(1);
        let frame = self.frame;

        let Self {
            items,
            drag,
            renderer,
            layout,
            easing,
            transitions,
            ..
        } = self;

        let preview = drag.preview(items);
        let is_sorting = drag.is_dragging();
        let has_over = drag.over().is_some();
        let columns = layout.columns;
        let (scroll_left, scroll_top) = renderer.scroll_offset();
        let offset_x = layout.grid_offset_x() as i64;

        renderer.for_each_visible_cell(&mut |cell| {
            let Some(index) = flat_index(cell.row, cell.column, columns) else {
                return;
            };
            let Some(id) = items.get(index) else {
                return;
            };
            let target = CellStyle::for_state(&CellState {
                is_dragging: drag.is_active(id),
                has_over,
                is_sorting,
                index,
                prospective_index: preview.map_or(index, |p| p.projected_index(index)),
            });

            let style = match transitions.get_mut(id) {
                Some(t) => {
                    if t.tween.to != target {
                        t.tween.easing = *easing;
                        t.tween
                            .retarget(now_ms, target, target.transition_ms as u64);
                    }
                    t.frame = frame;
                    t.tween.sample(now_ms)
                }
                None => {
                    transitions.insert(
                        id.clone(),
                        CellTransition {
                            tween: Tween::fixed(target, now_ms),
                            frame,
                        },
                    );
                    target
                }
            };

            f(RenderedCell {
                cell,
                id,
                index,
                left: offset_x + cell.x as i64 - scroll_left as i64,
                top: cell.y as i64 - scroll_top as i64,
                style,
            });
        });

        transitions.retain(|_, t| t.frame == frame);
        gtrace!(tracked = transitions.len(), "for_each_rendered_cell");
    }

    /// The floating copy of the dragged item, while a drag is active.
    pub fn overlay(&self) -> Option<OverlayCell<K>> {
        let id = self.drag.active()?;
        Some(OverlayCell {
            id: id.clone(),
            width: self.layout.cell_width,
            height: self.layout.cell_height,
            style: CellStyle::OVERLAY,
        })
    }
}

impl<K, M, R> HitTest<K> for SortableGrid<K, M, R>
where
    K: GridKey + Clone,
    M: MeasurementProvider,
    R: RangeRenderer,
{
    /// Points outside the measured container, or beside the centred grid, hit nothing.
    fn item_at(&self, x: f32, y: f32) -> Option<K> {
        let x = x - self.layout.grid_offset_x() as f32;
        if x < 0.0 || y < 0.0 || !x.is_finite() || !y.is_finite() {
            return None;
        }
        if x >= self.layout.grid_width() as f32 || y >= self.measure.size().height as f32 {
            return None;
        }
        let (scroll_left, scroll_top) = self.renderer.scroll_offset();
        let (row, column) = self.renderer.cell_at_point(
            (x as u64).saturating_add(scroll_left),
            (y as u64).saturating_add(scroll_top),
        )?;
        let index = flat_index(row, column, self.layout.columns)?;
        self.items.get(index).cloned()
    }
}
