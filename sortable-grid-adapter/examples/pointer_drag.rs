use sortable_grid::{ItemList, Size};
use sortable_grid_adapter::{PointerSensor, SensorOptions, SortableGrid};

fn main() {
    // Example: a host forwarding raw pointer input to the grid.
    //
    // An adapter would:
    // - measure the container and call on_resize
    // - forward pointer down/move/up to the sensor, which hit-tests against the grid
    // - drain the sensor into the grid once per frame
    // - paint for_each_rendered_cell + overlay
    let mut grid = SortableGrid::new(ItemList::demo(10_000));
    grid.on_resize(Size::new(1000, 900));
    println!(
        "columns={} rows={} cell={}x{}",
        grid.layout().columns,
        grid.layout().rows,
        grid.layout().cell_width,
        grid.layout().cell_height
    );

    let mut sensor = PointerSensor::new(SensorOptions::new().with_activation_distance(4.0));
    sensor.pointer_down(20.0, 20.0, &grid);
    sensor.pointer_move(30.0, 20.0, &grid);
    sensor.pointer_move(650.0, 40.0, &grid);
    grid.drain_gestures(&mut sensor);

    if let Some(overlay) = grid.overlay() {
        println!("overlay id={} bg={:?}", overlay.id, overlay.background());
    }

    sensor.pointer_up(650.0, 40.0, &grid);
    let outcome = grid.drain_gestures(&mut sensor);
    println!("outcome={outcome:?}");
    println!(
        "first={:?}",
        grid.items().iter().take(5).collect::<Vec<_>>()
    );
}
