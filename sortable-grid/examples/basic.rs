// Example: lay out 10,000 items and list the cells on screen.
use sortable_grid::{GridLayout, GridWindow, GridWindowOptions, ItemList, Size, resolve_cell};

fn main() {
    let items = ItemList::demo(10_000);
    let container = Size::new(1000, 900);

    let layout = GridLayout::compute(container.width, items.len());
    println!(
        "cell={}x{} columns={} rows={}",
        layout.cell_width, layout.cell_height, layout.columns, layout.rows
    );

    let mut window = GridWindow::new(GridWindowOptions::from_layout(&layout));
    window.set_viewport(Size::new(layout.grid_width(), container.height));
    window.set_scroll(0, 4_500);

    println!("visible_rows={:?}", window.visible_rows());
    window.for_each_virtual_cell(|cell| {
        if let Some(id) = resolve_cell(cell.row, cell.column, layout.columns, items.as_slice()) {
            println!("({}, {}) at {},{} -> {id}", cell.row, cell.column, cell.x, cell.y);
        }
    });
}
