//! Python bindings exposing a float (`f64`) diffusion grid as `_core.Grid`.

use diffusion_core::{render, Grid, GridError};
use pyo3::exceptions::{PyIndexError, PyMemoryError, PyValueError};
use pyo3::prelude::*;

/// Package version of the bindings.
#[pyfunction]
fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

fn grid_err(err: GridError) -> PyErr {
    match err {
        GridError::InvalidDimension { .. } => PyValueError::new_err(err.to_string()),
        GridError::IndexOutOfRange { .. } => PyIndexError::new_err(err.to_string()),
        GridError::CellCountOverflow { .. } | GridError::AllocationFailed { .. } => {
            PyMemoryError::new_err(err.to_string())
        }
    }
}

fn dimensions(rows: i64, cols: i64) -> PyResult<(usize, usize)> {
    match (usize::try_from(rows), usize::try_from(cols)) {
        (Ok(r), Ok(c)) => Ok((r, c)),
        _ => Err(PyValueError::new_err(format!(
            "grid dimensions must be positive (got {rows}x{cols})"
        ))),
    }
}

fn constant_index(index: i64) -> PyResult<usize> {
    usize::try_from(index)
        .map_err(|_| PyIndexError::new_err(format!("constant index {index} out of range (0..3)")))
}

#[pyclass(name = "Grid")]
struct PyGrid {
    inner: Grid<f64>,
}

#[pymethods]
impl PyGrid {
    #[new]
    #[pyo3(signature = (rows=1, cols=1))]
    fn new(rows: i64, cols: i64) -> PyResult<Self> {
        let (rows, cols) = dimensions(rows, cols)?;
        let inner = Grid::try_new(rows, cols).map_err(grid_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    fn cols(&self) -> usize {
        self.inner.cols()
    }

    fn resize(&mut self, rows: i64, cols: i64) -> PyResult<()> {
        let (rows, cols) = dimensions(rows, cols)?;
        self.inner.try_resize(rows, cols).map_err(grid_err)
    }

    fn add_source(&mut self, value: f64) -> PyResult<()> {
        self.inner.try_add_source(value).map_err(grid_err)
    }

    fn source_count(&self) -> usize {
        self.inner.source_count()
    }

    /// Returns False, changing nothing, for any negative or out-of-range argument.
    fn apply_source_at(&mut self, source_index: i64, row: i64, col: i64) -> bool {
        match (
            usize::try_from(source_index),
            usize::try_from(row),
            usize::try_from(col),
        ) {
            (Ok(s), Ok(r), Ok(c)) => self.inner.apply_source_at(s, r, c),
            _ => false,
        }
    }

    fn step(&mut self) -> PyResult<()> {
        self.inner.try_step().map_err(grid_err)
    }

    fn get(&self, row: i64, col: i64) -> Option<f64> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.inner.get(row, col)
    }

    fn get_constant(&self, index: i64) -> PyResult<f32> {
        self.inner
            .constant(constant_index(index)?)
            .map_err(grid_err)
    }

    fn set_constant(&mut self, index: i64, value: f32) -> PyResult<()> {
        self.inner
            .set_constant(constant_index(index)?, value)
            .map_err(grid_err)
    }

    fn copy(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }

    #[pyo3(signature = (title=None))]
    fn render(&self, title: Option<&str>) -> String {
        render(&self.inner, title)
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Grid(rows={}, cols={}, sources={})",
            self.inner.rows(),
            self.inner.cols(),
            self.inner.source_count()
        )
    }
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(version, m)?)?;
    m.add_class::<PyGrid>()?;
    Ok(())
}
