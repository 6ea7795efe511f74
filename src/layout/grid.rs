use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub row: usize,
    pub column: usize,
}

pub fn cell_for(index: usize, columns: usize) -> GridCell {
    let columns = columns.max(1);
    let row = index / columns;
    GridCell {
        row,
        column: index - row * columns,
    }
}

/// Cells for `count` items filled left to right, top to bottom.
pub fn wrap(count: usize, columns: usize) -> Vec<GridCell> {
    (0..count).map(|index| cell_for(index, columns)).collect()
}

pub fn row_count(count: usize, columns: usize) -> usize {
    count.div_ceil(columns.max(1))
}
