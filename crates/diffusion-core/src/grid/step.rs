use super::{zeroed_buffer, Grid, GridError};
use crate::scalar::Scalar;

impl<T: Scalar> Grid<T> {
    pub fn step(&mut self) {
        self.try_step().unwrap_or_else(|e| panic!("{e}"))
    }

    /// One Jacobi averaging pass.
    ///
    /// Boundary cells are copied through. Each interior cell becomes the mean
    /// of its four axis neighbours, read from the buffer as it stood before
    /// the pass, so results never depend on visiting order. Grids with a
    /// single row or column have no interior and are left unchanged.
    pub fn try_step(&mut self) -> Result<(), GridError> {
        let (rows, cols) = (self.rows, self.cols);
        if rows <= 1 || cols <= 1 {
            return Ok(());
        }

        let prev = &self.cells;
        let mut next: Vec<T> = zeroed_buffer(rows, cols)?;

        let last = (rows - 1) * cols;
        next[..cols].copy_from_slice(&prev[..cols]);
        next[last..].copy_from_slice(&prev[last..]);
        for r in 1..rows - 1 {
            let base = r * cols;
            next[base] = prev[base];
            next[base + cols - 1] = prev[base + cols - 1];
        }

        let four = T::four();
        for r in 1..rows - 1 {
            let base = r * cols;
            for c in 1..cols - 1 {
                let i = base + c;
                let up = prev[i - cols];
                let down = prev[i + cols];
                let left = prev[i - 1];
                let right = prev[i + 1];
                next[i] = (up + down + left + right) / four;
            }
        }

        self.cells = next;
        log::trace!("stepped {rows}x{cols} grid");
        Ok(())
    }
}
