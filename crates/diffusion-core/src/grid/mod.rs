pub mod lifecycle;
pub mod sources;
pub mod step;

pub use sources::SourceRegistry;

use crate::scalar::Scalar;
use std::ops::Index;
use std::{error::Error, fmt};

/// Number of tunable configuration slots carried by every grid.
pub const CONSTANT_COUNT: usize = 3;
/// Initial value of every configuration slot.
pub const DEFAULT_CONSTANT: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    InvalidDimension { rows: usize, cols: usize },
    IndexOutOfRange { index: usize, len: usize },
    CellCountOverflow { rows: usize, cols: usize },
    AllocationFailed { cells: usize },
}

impl GridError {
    /// Misuse errors are caller bugs; the rest mean the process ran out of room.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GridError::CellCountOverflow { .. } | GridError::AllocationFailed { .. }
        )
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimension { rows, cols } => {
                write!(f, "grid dimensions must be positive (got {rows}x{cols})")
            }
            GridError::IndexOutOfRange { index, len } => {
                write!(f, "constant index {index} out of range (0..{len})")
            }
            GridError::CellCountOverflow { rows, cols } => {
                write!(f, "{rows}x{cols} cells overflows usize")
            }
            GridError::AllocationFailed { cells } => {
                write!(f, "could not allocate storage for {cells} values")
            }
        }
    }
}

impl Error for GridError {}

/// Rectangular field of `T` values with an attached source registry and
/// three free configuration constants.
///
/// Cells live in one row-major buffer indexed `row * cols + col`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
    sources: SourceRegistry<T>,
    constants: [f32; CONSTANT_COUNT],
}

/// Allocate a zero-filled `rows x cols` buffer without aborting on failure.
pub(crate) fn zeroed_buffer<T: Scalar>(rows: usize, cols: usize) -> Result<Vec<T>, GridError> {
    let len = rows
        .checked_mul(cols)
        .ok_or(GridError::CellCountOverflow { rows, cols })?;
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| GridError::AllocationFailed { cells: len })?;
    cells.resize(len, T::zero());
    Ok(cells)
}

pub(crate) fn check_dimensions(rows: usize, cols: usize) -> Result<(), GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::InvalidDimension { rows, cols });
    }
    Ok(())
}

impl<T: Scalar> Grid<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::try_new(rows, cols).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new(rows: usize, cols: usize) -> Result<Self, GridError> {
        check_dimensions(rows, cols)?;
        let cells = zeroed_buffer(rows, cols)?;
        let sources = SourceRegistry::try_new()?;
        log::debug!("allocated {rows}x{cols} grid");
        Ok(Self {
            rows,
            cols,
            cells,
            sources,
            constants: [DEFAULT_CONSTANT; CONSTANT_COUNT],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.offset(row, col).map(|i| self.cells[i])
    }

    /// Sum of every cell. Integer grids can overflow here just like any
    /// other integer addition.
    pub fn total(&self) -> T {
        self.cells.iter().fold(T::zero(), |acc, &v| acc + v)
    }

    pub fn constant(&self, index: usize) -> Result<f32, GridError> {
        self.constants
            .get(index)
            .copied()
            .ok_or(GridError::IndexOutOfRange {
                index,
                len: CONSTANT_COUNT,
            })
    }

    pub fn set_constant(&mut self, index: usize, value: f32) -> Result<(), GridError> {
        let slot = self
            .constants
            .get_mut(index)
            .ok_or(GridError::IndexOutOfRange {
                index,
                len: CONSTANT_COUNT,
            })?;
        *slot = value;
        Ok(())
    }

    pub fn constants(&self) -> [f32; CONSTANT_COUNT] {
        self.constants
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }
}

impl<T: Scalar> Default for Grid<T> {
    fn default() -> Self {
        Self {
            rows: 1,
            cols: 1,
            cells: vec![T::zero()],
            sources: SourceRegistry::default(),
            constants: [DEFAULT_CONSTANT; CONSTANT_COUNT],
        }
    }
}

impl<T: Scalar> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        let i = self.offset(row, col).unwrap_or_else(|| {
            panic!(
                "cell ({row}, {col}) out of bounds for {}x{} grid",
                self.rows, self.cols
            )
        });
        &self.cells[i]
    }
}
