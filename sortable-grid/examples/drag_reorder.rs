// Example: drive the drag coordinator by hand and preview the reorder.
use sortable_grid::{CellState, CellStyle, DragCoordinator, GestureEvent, ItemList};

fn main() {
    let mut items = ItemList::demo(8);
    let mut drag = DragCoordinator::new();

    drag.apply(
        GestureEvent::Start {
            active: "1".to_string(),
        },
        &mut items,
    );
    drag.apply(
        GestureEvent::Over {
            over: Some("5".to_string()),
        },
        &mut items,
    );

    // While hovering, every cell knows where it would end up.
    let preview = drag.preview(&items);
    for (index, id) in items.iter().enumerate() {
        let prospective_index = preview.map_or(index, |p| p.projected_index(index));
        let style = CellStyle::for_state(&CellState {
            is_dragging: drag.is_active(id),
            has_over: drag.over().is_some(),
            is_sorting: drag.is_dragging(),
            index,
            prospective_index,
        });
        println!(
            "{id}: {index} -> {prospective_index} scale={} shift={}",
            style.scale, style.translate_x
        );
    }

    let outcome = drag.apply(
        GestureEvent::End {
            over: Some("5".to_string()),
        },
        &mut items,
    );
    println!("outcome={outcome:?}");
    println!("items={:?}", items.as_slice());
}
