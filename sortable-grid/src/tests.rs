use crate::*;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }
}

fn list(ids: &[&str]) -> ItemList<String> {
    ItemList::try_from_iter(ids.iter().map(|s| s.to_string())).unwrap()
}

fn ids(list: &ItemList<String>) -> Vec<&str> {
    list.iter().map(String::as_str).collect()
}

fn expected_visible(count: usize, size: u32, offset: u64, viewport: u32) -> VirtualRange {
    if count == 0 || size == 0 || viewport == 0 {
        return VirtualRange::EMPTY;
    }
    let size = size as u64;
    let total = count as u64 * size;
    let offset = offset.min(total.saturating_sub(viewport as u64));
    let end = offset + viewport as u64;
    let hits: Vec<usize> = (0..count)
        .filter(|&i| {
            let start = i as u64 * size;
            start < end && start + size > offset
        })
        .collect();
    match (hits.first(), hits.last()) {
        (Some(&first), Some(&last)) => VirtualRange {
            start_index: first,
            end_index: last + 1,
        },
        _ => VirtualRange::EMPTY,
    }
}

// ---- layout ----

#[test]
fn wide_container_uses_large_cells() {
    let layout = GridLayout::compute(1000, 10_000);
    assert_eq!(layout.cell_width, 200);
    assert_eq!(layout.cell_height, 300);
    assert_eq!(layout.columns, 5);
    assert_eq!(layout.rows, 2000);
}

#[test]
fn narrow_container_uses_small_cells() {
    let layout = GridLayout::compute(500, 10_000);
    assert_eq!(layout.cell_width, 100);
    assert_eq!(layout.cell_height, 150);
    assert_eq!(layout.columns, 5);
    assert_eq!(layout.rows, 2000);
}

#[test]
fn empty_list_has_columns_but_no_rows() {
    let layout = GridLayout::compute(1000, 0);
    assert_eq!(layout.columns, 5);
    assert_eq!(layout.rows, 0);
    assert!(layout.is_empty());
}

#[test]
fn container_narrower_than_a_cell_renders_nothing() {
    for width in [0, 1, 99] {
        let layout = GridLayout::compute(width, 10_000);
        assert_eq!(layout.columns, 0);
        assert_eq!(layout.rows, 0);
        assert_eq!(layout.slot_count(), 0);
    }
}

#[test]
fn breakpoint_switches_cell_size() {
    let narrow = GridLayout::compute(767, 100);
    assert_eq!(narrow.cell_width, 100);
    assert_eq!(narrow.columns, 7);

    let wide = GridLayout::compute(768, 100);
    assert_eq!(wide.cell_width, 200);
    assert_eq!(wide.columns, 3);
    assert_eq!(wide.rows, 34);
}

#[test]
fn grid_is_trimmed_to_whole_columns_and_centred() {
    let layout = GridLayout::compute(1050, 10);
    assert_eq!(layout.grid_width(), 1000);
    assert_eq!(layout.grid_offset_x(), 25);
    assert_eq!(layout.content_size(), (1000, 2 * 300));
}

#[test]
fn layout_options_sanitize_zero_cells() {
    let opts = LayoutOptions::new()
        .with_breakpoint(10)
        .with_narrow_cell(CellSize::new(0, 0))
        .with_wide_cell(CellSize::new(50, 0));
    let narrow = GridLayout::compute_with(&opts, 5, 3);
    assert_eq!(narrow.cell_width, 1);
    assert_eq!(narrow.columns, 5);
    assert_eq!(narrow.rows, 1);

    let wide = GridLayout::compute_with(&opts, 120, 3);
    assert_eq!(wide.cell_width, 50);
    assert_eq!(wide.cell_height, 1);
    assert_eq!(wide.columns, 2);
    assert_eq!(wide.rows, 2);
}

#[test]
fn layout_matches_reference_for_random_inputs() {
    let mut rng = Lcg::new(7);
    for _ in 0..2000 {
        let width = rng.gen_range_u32(0, 4000);
        let count = rng.gen_range_usize(0, 20_000);
        let layout = GridLayout::compute(width, count);

        let cell_width = if width < 768 { 100 } else { 200 };
        assert_eq!(layout.cell_width, cell_width);
        assert_eq!(layout.columns, (width / cell_width) as usize);
        if layout.columns > 0 {
            assert_eq!(layout.rows, count.div_ceil(layout.columns));
            assert!(layout.slot_count() >= count);
            assert!(layout.slot_count() < count + layout.columns);
        } else {
            assert_eq!(layout.rows, 0);
        }
    }
}

// ---- cell resolver ----

#[test]
fn resolve_cell_maps_row_major() {
    let items = ItemList::demo(7);
    let items = items.as_slice();
    assert_eq!(resolve_cell(0, 0, 3, items).map(String::as_str), Some("0"));
    assert_eq!(resolve_cell(0, 2, 3, items).map(String::as_str), Some("2"));
    assert_eq!(resolve_cell(1, 0, 3, items).map(String::as_str), Some("3"));
    assert_eq!(resolve_cell(2, 0, 3, items).map(String::as_str), Some("6"));
    // Trailing slots of the last row are empty.
    assert_eq!(resolve_cell(2, 1, 3, items), None);
    assert_eq!(resolve_cell(2, 2, 3, items), None);
}

#[test]
fn resolve_cell_rejects_slots_outside_the_grid() {
    let items = ItemList::demo(10);
    let items = items.as_slice();
    assert_eq!(resolve_cell(0, 3, 3, items), None);
    assert_eq!(resolve_cell(0, 0, 0, items), None);
    assert_eq!(resolve_cell(usize::MAX, 1, 3, items), None);
    assert_eq!(flat_index(usize::MAX, 1, 3), None);
}

#[test]
fn resolve_cell_is_stable_in_any_order() {
    let mut rng = Lcg::new(42);
    for _ in 0..50 {
        let count = rng.gen_range_usize(0, 200);
        let columns = rng.gen_range_usize(1, 12);
        let items = ItemList::demo(count);
        let rows = count.div_ceil(columns);

        for _ in 0..200 {
            let row = rng.gen_range_usize(0, rows + 2);
            let column = rng.gen_range_usize(0, columns);
            let expected = items.as_slice().get(column + row * columns);
            let first = resolve_cell(row, column, columns, items.as_slice());
            let again = resolve_cell(row, column, columns, items.as_slice());
            assert_eq!(first, expected);
            assert_eq!(first, again);
        }
    }
}

#[test]
fn cell_for_index_inverts_flat_index() {
    for columns in 1..6 {
        for index in 0..40 {
            let (row, column) = cell_for_index(index, columns).unwrap();
            assert_eq!(flat_index(row, column, columns), Some(index));
        }
    }
    assert_eq!(cell_for_index(3, 0), None);
}

// ---- item list ----

#[test]
fn demo_list_counts_up_from_zero() {
    let items = ItemList::demo(3);
    assert_eq!(ids(&items), vec!["0", "1", "2"]);
    assert_eq!(ItemList::demo(10_000).get(9_999).map(String::as_str), Some("9999"));
    assert!(ItemList::demo(0).is_empty());
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = ItemList::try_from_iter(["a", "b", "c", "b"]).unwrap_err();
    assert_eq!(err.item, "b");
    assert_eq!(err.first_index, 1);
    assert_eq!(err.index, 3);
    assert_eq!(
        err.to_string(),
        "duplicate item \"b\" at index 3 (first seen at index 1)"
    );
}

#[test]
fn move_before_removes_then_inserts_at_target_index() {
    // Remove B -> [A,C,D]; D sits at index 2 -> insert B there.
    let mut items = list(&["A", "B", "C", "D"]);
    let outcome = items.move_before(&"B".to_string(), &"D".to_string());
    assert_eq!(outcome, DropOutcome::Moved { from: 1, to: 2 });
    assert_eq!(ids(&items), vec!["A", "C", "B", "D"]);

    let mut items = list(&["A", "B", "C", "D"]);
    let outcome = items.move_before(&"D".to_string(), &"A".to_string());
    assert_eq!(outcome, DropOutcome::Moved { from: 3, to: 0 });
    assert_eq!(ids(&items), vec!["D", "A", "B", "C"]);

    let mut items = list(&["A", "B", "C", "D"]);
    items.move_before(&"C".to_string(), &"B".to_string());
    assert_eq!(ids(&items), vec!["A", "C", "B", "D"]);
}

#[test]
fn move_before_onto_next_neighbour_is_a_no_op() {
    let mut items = list(&["A", "B", "C", "D"]);
    let outcome = items.move_before(&"B".to_string(), &"C".to_string());
    assert_eq!(outcome, DropOutcome::Unchanged);
    assert_eq!(ids(&items), vec!["A", "B", "C", "D"]);
}

#[test]
fn move_before_onto_self_is_a_no_op() {
    let mut items = list(&["A", "B", "C"]);
    let before = items.clone();
    assert_eq!(
        items.move_before(&"B".to_string(), &"B".to_string()),
        DropOutcome::Unchanged
    );
    assert_eq!(items, before);
}

#[test]
fn move_before_with_stale_ids_leaves_list_untouched() {
    let mut items = list(&["A", "B", "C"]);
    let before = items.clone();

    assert_eq!(
        items.move_before(&"Z".to_string(), &"B".to_string()),
        DropOutcome::Stale
    );
    assert_eq!(items, before);

    assert_eq!(
        items.move_before(&"A".to_string(), &"Z".to_string()),
        DropOutcome::Stale
    );
    assert_eq!(items, before);
}

#[test]
fn random_moves_keep_ids_unique_and_match_projection() {
    let mut rng = Lcg::new(0xfeed);
    let mut items = ItemList::demo(64);
    for _ in 0..500 {
        let source = items.get(rng.gen_range_usize(0, items.len())).unwrap().clone();
        let target = items.get(rng.gen_range_usize(0, items.len())).unwrap().clone();
        let before: Vec<String> = items.iter().cloned().collect();

        let outcome = items.move_before(&source, &target);
        match outcome {
            DropOutcome::Moved { from, to } => {
                // Source lands immediately before target.
                let s = items.index_of(&source).unwrap();
                let t = items.index_of(&target).unwrap();
                assert_eq!(s, to);
                assert_eq!(s + 1, t);
                for (old_index, id) in before.iter().enumerate() {
                    assert_eq!(
                        items.index_of(id),
                        Some(projected_index(old_index, from, to))
                    );
                }
            }
            DropOutcome::Unchanged => {
                assert_eq!(items.as_slice(), before.as_slice());
            }
            DropOutcome::Stale => panic!("ids come from the list"),
        }

        let mut sorted: Vec<String> = items.iter().cloned().collect();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 64);
    }
}

// ---- drag coordinator ----

#[test]
fn end_while_idle_does_nothing() {
    let mut items = list(&["A", "B"]);
    let mut drag = DragCoordinator::new();
    assert_eq!(
        drag.end(Some("A".to_string()), &mut items),
        DropOutcome::Unchanged
    );
    assert_eq!(ids(&items), vec!["A", "B"]);
}

#[test]
fn drag_start_hover_end_moves_item() {
    let mut items = list(&["A", "B", "C", "D"]);
    let mut drag = DragCoordinator::new();

    drag.start("B".to_string());
    assert!(drag.is_dragging());
    assert_eq!(drag.active().map(String::as_str), Some("B"));
    assert_eq!(drag.over(), None);

    drag.hover(Some("D".to_string()));
    assert_eq!(drag.over().map(String::as_str), Some("D"));
    assert_eq!(drag.preview(&items), Some(DragPreview { from: 1, to: 2 }));

    let outcome = drag.end(Some("D".to_string()), &mut items);
    assert_eq!(outcome, DropOutcome::Moved { from: 1, to: 2 });
    assert_eq!(ids(&items), vec!["A", "C", "B", "D"]);
    assert_eq!(drag.state(), &DragState::Idle);
}

#[test]
fn drop_without_target_or_onto_self_is_unchanged() {
    let mut items = list(&["A", "B", "C"]);
    let mut drag = DragCoordinator::new();

    drag.start("A".to_string());
    assert_eq!(drag.end(None, &mut items), DropOutcome::Unchanged);
    assert!(!drag.is_dragging());

    drag.start("A".to_string());
    drag.hover(Some("A".to_string()));
    assert_eq!(drag.preview(&items), None);
    assert_eq!(
        drag.end(Some("A".to_string()), &mut items),
        DropOutcome::Unchanged
    );
    assert_eq!(ids(&items), vec!["A", "B", "C"]);
}

#[test]
fn cancel_returns_to_idle_without_reordering() {
    let mut items = list(&["A", "B", "C"]);
    let mut drag = DragCoordinator::new();
    drag.start("C".to_string());
    drag.hover(Some("A".to_string()));
    drag.cancel();
    assert!(!drag.is_dragging());
    assert_eq!(drag.end(Some("A".to_string()), &mut items), DropOutcome::Unchanged);
    assert_eq!(ids(&items), vec!["A", "B", "C"]);
}

#[test]
fn stale_drag_ids_report_stale_and_keep_order() {
    let mut items = list(&["A", "B", "C"]);
    let mut drag = DragCoordinator::new();

    drag.start("gone".to_string());
    drag.hover(Some("B".to_string()));
    assert_eq!(drag.preview(&items), None);
    assert_eq!(
        drag.end(Some("B".to_string()), &mut items),
        DropOutcome::Stale
    );
    assert_eq!(ids(&items), vec!["A", "B", "C"]);

    drag.start("A".to_string());
    assert_eq!(
        drag.end(Some("gone".to_string()), &mut items),
        DropOutcome::Stale
    );
    assert_eq!(ids(&items), vec!["A", "B", "C"]);
}

#[test]
fn restarting_a_drag_replaces_the_active_item() {
    let mut drag = DragCoordinator::new();
    drag.start(1u32);
    drag.hover(Some(3));
    drag.start(2);
    assert_eq!(drag.active(), Some(&2));
    assert_eq!(drag.over(), None);
}

#[test]
fn apply_dispatches_gesture_events() {
    let mut items = ItemList::try_from_iter([10u32, 20, 30, 40]).unwrap();
    let mut drag = DragCoordinator::new();

    assert_eq!(drag.apply(GestureEvent::Start { active: 40 }, &mut items), None);
    assert_eq!(drag.apply(GestureEvent::Over { over: Some(20) }, &mut items), None);
    assert_eq!(
        drag.apply(GestureEvent::End { over: Some(20) }, &mut items),
        Some(DropOutcome::Moved { from: 3, to: 1 })
    );
    assert_eq!(items.as_slice(), &[10, 40, 20, 30]);

    drag.apply(GestureEvent::Start { active: 10 }, &mut items);
    assert_eq!(drag.apply(GestureEvent::Cancel, &mut items), None);
    assert!(!drag.is_dragging());
}

#[test]
fn preview_agrees_with_drop() {
    let mut rng = Lcg::new(99);
    for _ in 0..200 {
        let mut items = ItemList::demo(20);
        let source = items.get(rng.gen_range_usize(0, 20)).unwrap().clone();
        let target = items.get(rng.gen_range_usize(0, 20)).unwrap().clone();

        let mut drag = DragCoordinator::new();
        drag.start(source.clone());
        drag.hover(Some(target.clone()));
        let preview = drag.preview(&items);
        let before: Vec<String> = items.iter().cloned().collect();
        let outcome = drag.end(Some(target), &mut items);

        match (preview, outcome) {
            (Some(p), DropOutcome::Moved { from, to }) => {
                assert_eq!((p.from, p.to), (from, to));
                for (i, id) in before.iter().enumerate() {
                    assert_eq!(items.index_of(id), Some(p.projected_index(i)));
                }
            }
            (Some(p), DropOutcome::Unchanged) => assert_eq!(p.from, p.to),
            (None, DropOutcome::Unchanged) => {}
            other => panic!("unexpected {other:?}"),
        }
    }
}

// ---- visual mapping ----

#[test]
fn resting_cell_has_identity_style() {
    let style = CellStyle::for_state(&CellState::resting(4));
    assert_eq!(style, CellStyle::RESTING);
    assert_eq!(style.lightness, 50.0);
    assert_eq!(style.transition_ms, 0);
}

#[test]
fn dragged_cell_shrinks_and_hides_over_a_target() {
    let mut state = CellState::resting(2);
    state.is_dragging = true;
    state.is_sorting = true;

    let lifted = CellStyle::for_state(&state);
    assert_eq!(lifted.scale, 0.95);
    assert_eq!(lifted.lightness, 60.0);
    assert!(!lifted.hidden);
    assert_eq!(lifted.transition_ms, CellStyle::SORTING_TRANSITION_MS);

    state.has_over = true;
    state.prospective_index = 5;
    let over = CellStyle::for_state(&state);
    assert!(over.hidden);
    assert_eq!(over.translate_x, 0.0);
}

#[test]
fn displaced_cells_lean_toward_their_new_slot() {
    let mut state = CellState::resting(5);
    state.is_sorting = true;
    state.has_over = true;

    state.prospective_index = 4;
    let left = CellStyle::for_state(&state);
    assert_eq!(left.scale, 0.85);
    assert_eq!(left.translate_x, -1.0);
    assert_eq!(left.rotate_deg, -5.0);
    assert_eq!(left.opacity, 0.8);
    assert_eq!(left.lightness, 30.0);

    state.prospective_index = 6;
    let right = CellStyle::for_state(&state);
    assert_eq!(right.translate_x, 1.0);
    assert_eq!(right.rotate_deg, 5.0);
    assert_eq!(state.displacement(), 1);

    state.prospective_index = 5;
    let settled = CellStyle::for_state(&state);
    assert_eq!(settled.scale, 1.0);
    assert_eq!(settled.transition_ms, CellStyle::SORTING_TRANSITION_MS);
}

#[test]
fn lerp_hits_endpoints_and_midpoint() {
    let from = CellStyle::RESTING;
    let mut state = CellState::resting(1);
    state.prospective_index = 0;
    let to = CellStyle::for_state(&state);

    assert_eq!(CellStyle::lerp(&from, &to, 0.0).scale, from.scale);
    assert_eq!(CellStyle::lerp(&from, &to, 1.0), to);
    assert_eq!(CellStyle::lerp(&from, &to, 7.0), to);
    let mid = CellStyle::lerp(&from, &to, 0.5);
    assert!((mid.scale - 0.925).abs() < 1e-6);
    assert!((mid.lightness - 40.0).abs() < 1e-4);
}

#[test]
fn background_hue_steps_by_thirty_degrees() {
    assert_eq!(Hsl::for_seed(0, 50.0).hue, 105.0);
    assert_eq!(Hsl::for_seed(1, 50.0).hue, 135.0);
    assert_eq!(Hsl::for_seed(9, 50.0).hue, 15.0);
    assert_eq!(Hsl::for_seed(12, 50.0).hue, 105.0);
    assert_eq!(Hsl::for_seed(-1, 50.0).hue, 75.0);
    assert_eq!(Hsl::for_seed(9_999, 30.0).lightness, 30.0);
    assert_eq!(Hsl::for_seed(3, 50.0).saturation, 20.0);
}

#[test]
fn item_seed_parses_numeric_ids() {
    assert_eq!("42".seed(), 42);
    assert_eq!(String::from("7").seed(), 7);
    assert_eq!("card".seed(), 0);
    assert_eq!(9u32.seed(), 9);
}

// ---- measurement ----

#[test]
fn resize_observer_reports_changes_only() {
    let mut observer = ResizeObserver::new();
    assert_eq!(observer.size(), Size::ZERO);
    assert_eq!(observer.with_size(|w, h| (w, h)), (0, 0));

    assert!(observer.observe(Size::new(1000, 800)));
    assert!(!observer.observe(Size::new(1000, 800)));
    assert!(observer.observe(Size::new(500, 800)));
    assert_eq!(
        observer.with_size(|w, _| GridLayout::compute(w, 10_000).columns),
        5
    );
}

// ---- window ----

fn demo_window(width: u32, height: u32) -> GridWindow {
    let layout = GridLayout::compute(width, 10_000);
    let mut w = GridWindow::new(GridWindowOptions::from_layout(&layout));
    w.set_viewport(Size::new(layout.grid_width(), height));
    w
}

#[test]
fn window_renders_visible_rows_plus_overscan() {
    let w = demo_window(1000, 900);
    assert_eq!(
        w.visible_rows(),
        VirtualRange {
            start_index: 0,
            end_index: 3
        }
    );
    assert_eq!(w.rendered_rows().end_index, 4);
    assert_eq!(
        w.rendered_columns(),
        VirtualRange {
            start_index: 0,
            end_index: 5
        }
    );

    let mut cells = Vec::new();
    w.collect_virtual_cells(&mut cells);
    assert_eq!(cells.len(), 4 * 5);
    assert_eq!(cells[0].x, 0);
    assert_eq!(cells[6].row, 1);
    assert_eq!(cells[6].column, 1);
    assert_eq!(cells[6].x, 200);
    assert_eq!(cells[6].y, 300);
}

#[test]
fn window_scrolls_and_clamps() {
    let mut w = demo_window(1000, 900);
    w.set_scroll(0, 450);
    assert_eq!(
        w.visible_rows(),
        VirtualRange {
            start_index: 1,
            end_index: 5
        }
    );
    assert_eq!(
        w.rendered_rows(),
        VirtualRange {
            start_index: 0,
            end_index: 6
        }
    );
    assert_eq!(w.scroll_direction(), Some(ScrollDirection::Forward));

    w.apply_scroll_event(5_000, u64::MAX, 0);
    assert_eq!(w.scroll_left(), 0);
    assert_eq!(w.scroll_top(), 2000 * 300 - 900);
    assert_eq!(w.visible_rows().end_index, 2000);
    assert_eq!(w.rendered_rows().end_index, 2000);
}

#[test]
fn degenerate_windows_render_nothing() {
    let mut cells = Vec::new();

    let w = GridWindow::new(GridWindowOptions::new(10, 10, 10, 10));
    w.collect_virtual_cells(&mut cells);
    assert!(cells.is_empty(), "no viewport yet");

    let w = demo_window(50, 900);
    w.collect_virtual_cells(&mut cells);
    assert!(cells.is_empty(), "zero columns");

    let mut w = GridWindow::new(GridWindowOptions::from_layout(&GridLayout::compute(1000, 0)));
    w.set_viewport(Size::new(1000, 900));
    w.collect_virtual_cells(&mut cells);
    assert!(cells.is_empty(), "zero rows");
}

#[test]
fn window_matches_reference_for_random_geometry() {
    let mut rng = Lcg::new(1234);
    for _ in 0..300 {
        let rows = rng.gen_range_usize(0, 300);
        let columns = rng.gen_range_usize(0, 30);
        let cw = rng.gen_range_u32(1, 80);
        let rh = rng.gen_range_u32(1, 80);
        let overscan = rng.gen_range_usize(0, 4);
        let mut w = GridWindow::new(
            GridWindowOptions::new(rows, columns, cw, rh).with_overscan(overscan),
        );
        w.set_viewport(Size::new(rng.gen_range_u32(0, 600), rng.gen_range_u32(0, 600)));
        w.set_scroll_clamped(
            rng.gen_range_u64(0, 5_000),
            rng.gen_range_u64(0, 30_000),
        );

        let v = w.viewport();
        assert_eq!(
            w.visible_rows(),
            expected_visible(rows, rh, w.scroll_top(), v.height)
        );
        assert_eq!(
            w.visible_columns(),
            expected_visible(columns, cw, w.scroll_left(), v.width)
        );

        let rendered_rows = w.rendered_rows();
        let rendered_columns = w.rendered_columns();
        let mut n = 0usize;
        w.for_each_virtual_cell(|cell| {
            n += 1;
            assert!(cell.row < rows && cell.column < columns);
            assert!(rendered_rows.contains(cell.row));
            assert!(rendered_columns.contains(cell.column));
            assert_eq!(w.cell(cell.row, cell.column), Some(cell));
            assert_eq!(w.cell_at_point(cell.x, cell.y), Some((cell.row, cell.column)));
            assert_eq!(
                w.cell_at_point(cell.right() - 1, cell.bottom() - 1),
                Some((cell.row, cell.column))
            );
        });
        assert_eq!(n, rendered_rows.len() * rendered_columns.len());
    }
}

#[test]
fn cell_at_point_outside_content_is_none() {
    let w = GridWindow::new(GridWindowOptions::new(2, 3, 10, 20));
    assert_eq!(w.cell_at_point(29, 39), Some((1, 2)));
    assert_eq!(w.cell_at_point(30, 0), None);
    assert_eq!(w.cell_at_point(0, 40), None);
}

#[test]
fn is_scrolling_resets_after_delay() {
    let mut w = demo_window(1000, 900);
    w.apply_scroll_event(0, 100, 1_000);
    assert!(w.is_scrolling());

    w.update_scrolling(1_100);
    assert!(w.is_scrolling());

    w.update_scrolling(1_150);
    assert!(!w.is_scrolling());
    assert_eq!(w.scroll_direction(), None);
}

#[test]
fn scroll_event_notifies_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let layout = GridLayout::compute(1000, 10_000);
    let opts = GridWindowOptions::from_layout(&layout).with_on_change(Some({
        let calls = Arc::clone(&calls);
        move |_: &GridWindow, _| {
            calls.fetch_add(1, Ordering::Relaxed);
        }
    }));
    let mut w = GridWindow::new(opts);
    w.set_viewport(Size::new(1000, 900));
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    w.apply_scroll_event(0, 300, 0);
    assert_eq!(calls.load(Ordering::Relaxed), 2);

    // Same offset and already scrolling: nothing changes.
    w.apply_scroll_event(0, 300, 10);
    assert_eq!(calls.load(Ordering::Relaxed), 2);
}

#[test]
fn scroll_to_cell_aligns_rows() {
    let mut w = demo_window(1000, 900);

    assert_eq!(w.scroll_to_cell_offset(10, 0, Align::Start), (0, 3000));
    assert_eq!(w.scroll_to_cell_offset(10, 0, Align::End), (0, 3300 - 900));
    assert_eq!(w.scroll_to_cell_offset(10, 0, Align::Center), (0, 3150 - 450));
    // Already visible: Auto keeps the current offset.
    assert_eq!(w.scroll_to_cell_offset(1, 4, Align::Auto), (0, 0));
    assert_eq!(w.scroll_to_cell_offset(10, 0, Align::Auto), (0, 3300 - 900));
    // Clamped to the last row.
    assert_eq!(
        w.scroll_to_cell_offset(usize::MAX, 0, Align::Start),
        (0, w.max_scroll_top())
    );

    assert_eq!(w.scroll_to_cell(10, 0, Align::Start), (0, 3000));
    assert_eq!(w.scroll_top(), 3000);
    assert!(!w.is_scrolling());
}

#[test]
fn shrinking_layout_reclamps_scroll() {
    let mut w = demo_window(1000, 900);
    w.set_scroll_clamped(0, 100_000);
    assert_eq!(w.scroll_top(), 100_000);

    w.set_layout(&GridLayout::compute(1000, 20));
    assert_eq!(w.row_count(), 4);
    assert_eq!(w.scroll_top(), 300);

    w.update_options(|o| o.overscan_rows = 0);
    assert_eq!(w.rendered_rows().start_index, w.visible_rows().start_index);
}
