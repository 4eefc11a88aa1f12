/// Flat list index for a `(row, column)` pair, or `None` if the slot cannot exist.
///
/// `column` must be less than `columns`; anything else (including arithmetic overflow) is not a
/// slot of the grid.
pub fn flat_index(row: usize, column: usize, columns: usize) -> Option<usize> {
    if column >= columns {
        return None;
    }
    row.checked_mul(columns)?.checked_add(column)
}

/// Looks up the item shown at `(row, column)`.
///
/// Returns `None` for empty slots. This is pure: renderers may call it for any visible range, in
/// any order, any number of times.
pub fn resolve_cell<K>(row: usize, column: usize, columns: usize, items: &[K]) -> Option<&K> {
    let index = flat_index(row, column, columns)?;
    items.get(index)
}

/// Inverse of [`flat_index`]: the `(row, column)` a flat index lands in.
pub fn cell_for_index(index: usize, columns: usize) -> Option<(usize, usize)> {
    if columns == 0 {
        return None;
    }
    Some((index / columns, index % columns))
}
