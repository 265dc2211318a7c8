/// Dense `(rows x cols)` grid stored row-major in one buffer.
#[derive(Debug, Clone)]
pub(super) struct Table<T> {
    cols: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> Table<T> {
    /// Allocate a grid filled with `T::default()`.
    pub(super) fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            cells: vec![T::default(); rows * cols],
        }
    }

    pub(super) fn get(&self, row: usize, col: usize) -> T {
        self.cells[self.offset(row, col)]
    }

    pub(super) fn set(&mut self, row: usize, col: usize, value: T) {
        let offset = self.offset(row, col);
        self.cells[offset] = value;
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(col < self.cols, "column {} out of range {}", col, self.cols);
        row * self.cols + col
    }
}
