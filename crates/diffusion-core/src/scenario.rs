use crate::config::{Placement, ScenarioConfig, ScenarioConfigError};
use crate::grid::{Grid, GridError};
use crate::scalar::Scalar;
use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioError {
    Config(ScenarioConfigError),
    Grid(GridError),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::Config(e) => write!(f, "invalid scenario: {e}"),
            ScenarioError::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl From<ScenarioConfigError> for ScenarioError {
    fn from(err: ScenarioConfigError) -> Self {
        ScenarioError::Config(err)
    }
}

impl From<GridError> for ScenarioError {
    fn from(err: GridError) -> Self {
        ScenarioError::Grid(err)
    }
}

impl Error for ScenarioError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ScenarioError::Config(e) => Some(e),
            ScenarioError::Grid(e) => Some(e),
        }
    }
}

/// Labelled points in a run where the caller gets to look at the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    Initial,
    AfterStep(usize),
    AfterResize { rows: usize, cols: usize },
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::Initial => write!(f, "--- Initial grid (step 0) ---"),
            Frame::AfterStep(n) => write!(f, "--- Grid after step {n} ---"),
            Frame::AfterResize { rows, cols } => {
                write!(f, "--- Grid after resize to {rows}x{cols} ---")
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScenarioOutcome<T> {
    pub grid: Grid<T>,
    pub applied: usize,
    pub skipped: Vec<Placement>,
}

/// Build a grid from `config` and drive it: register sources, apply
/// placements, step, then resize if asked. `observe` sees the grid at every
/// [`Frame`].
///
/// Placements that miss (bad source index or coordinates) are skipped and
/// reported back rather than aborting the run.
pub fn run_scenario<T, F>(
    config: &ScenarioConfig<T>,
    mut observe: F,
) -> Result<ScenarioOutcome<T>, ScenarioError>
where
    T: Scalar,
    F: FnMut(Frame, &Grid<T>),
{
    config.validate()?;
    let mut grid = Grid::try_new(config.rows, config.cols)?;
    for (i, &value) in config.constants.iter().enumerate() {
        grid.set_constant(i, value)?;
    }
    for &value in &config.sources {
        grid.try_add_source(value)?;
    }
    log::info!(
        "{}x{} grid, {} sources registered",
        grid.rows(),
        grid.cols(),
        grid.source_count()
    );

    let mut applied = 0;
    let mut skipped = Vec::new();
    for &p in &config.placements {
        if grid.apply_source_at(p.source, p.row, p.col) {
            applied += 1;
        } else {
            log::warn!(
                "skipping placement of source {} at ({}, {}): out of range",
                p.source,
                p.row,
                p.col
            );
            skipped.push(p);
        }
    }
    observe(Frame::Initial, &grid);

    for n in 1..=config.steps {
        grid.try_step()?;
        observe(Frame::AfterStep(n), &grid);
    }

    if let Some([rows, cols]) = config.resize_to {
        grid.try_resize(rows, cols)?;
        observe(Frame::AfterResize { rows, cols }, &grid);
    }

    Ok(ScenarioOutcome {
        grid,
        applied,
        skipped,
    })
}
