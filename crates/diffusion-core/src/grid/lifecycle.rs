use super::{check_dimensions, zeroed_buffer, Grid, GridError};
use crate::scalar::Scalar;

impl<T: Scalar> Grid<T> {
    pub fn resize(&mut self, new_rows: usize, new_cols: usize) {
        self.try_resize(new_rows, new_cols)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    /// Replace the cell buffer with a `new_rows x new_cols` one.
    ///
    /// The top-left overlap keeps its values and new area is zero. Sources and
    /// constants are untouched. On error the grid is left as it was.
    pub fn try_resize(&mut self, new_rows: usize, new_cols: usize) -> Result<(), GridError> {
        check_dimensions(new_rows, new_cols)?;
        if (new_rows, new_cols) == (self.rows, self.cols) {
            return Ok(());
        }

        let mut resized = zeroed_buffer(new_rows, new_cols)?;
        let keep_rows = self.rows.min(new_rows);
        let keep_cols = self.cols.min(new_cols);
        for r in 0..keep_rows {
            let src = r * self.cols;
            let dst = r * new_cols;
            resized[dst..dst + keep_cols].copy_from_slice(&self.cells[src..src + keep_cols]);
        }

        log::debug!(
            "resized grid {}x{} -> {new_rows}x{new_cols}",
            self.rows,
            self.cols
        );
        self.cells = resized;
        self.rows = new_rows;
        self.cols = new_cols;
        Ok(())
    }
}
