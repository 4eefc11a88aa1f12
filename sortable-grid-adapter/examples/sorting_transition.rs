use sortable_grid::{GestureEvent, ItemList, Size};
use sortable_grid_adapter::{Easing, SortableGrid};

fn main() {
    // Example: cells easing into their displaced positions while a drag hovers a target.
    let mut grid = SortableGrid::new(ItemList::demo(12)).with_easing(Easing::SmoothStep);
    grid.on_resize(Size::new(800, 600));

    // First frame: everything at rest.
    grid.for_each_rendered_cell(0, |_| {});

    grid.on_gesture(GestureEvent::Start {
        active: "2".to_string(),
    });
    grid.on_gesture(GestureEvent::Over {
        over: Some("6".to_string()),
    });

    let mut now_ms = 0u64;
    loop {
        now_ms += 16;
        grid.for_each_rendered_cell(now_ms, |c| {
            if c.index == 4 {
                println!(
                    "t={now_ms} id={} scale={:.3} shift={:.3} bg={:?}",
                    c.id,
                    c.style.scale,
                    c.style.translate_x,
                    c.background()
                );
            }
        });
        if !grid.tick(now_ms) {
            break;
        }
    }

    let outcome = grid.on_gesture(GestureEvent::End {
        over: Some("6".to_string()),
    });
    println!("outcome={outcome:?} items={:?}", grid.items().as_slice());
}
