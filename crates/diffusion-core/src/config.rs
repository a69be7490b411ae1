use crate::grid::{CONSTANT_COUNT, DEFAULT_CONSTANT};
use serde::{Deserialize, Serialize};
use std::{error::Error, fmt};

/// Which registered source goes into which cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub source: usize,
    pub row: usize,
    pub col: usize,
}

impl Placement {
    pub fn new(source: usize, row: usize, col: usize) -> Self {
        Self { source, row, col }
    }
}

/// Everything a driver run needs: grid shape, constants, sources, where to
/// put them, how many steps to take and an optional final resize.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig<T> {
    pub rows: usize,
    pub cols: usize,
    pub constants: [f32; CONSTANT_COUNT],
    pub sources: Vec<T>,
    pub placements: Vec<Placement>,
    pub steps: usize,
    pub resize_to: Option<[usize; 2]>,
}

impl<T> Default for ScenarioConfig<T> {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            constants: [DEFAULT_CONSTANT; CONSTANT_COUNT],
            sources: Vec::new(),
            placements: Vec::new(),
            steps: 1,
            resize_to: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioConfigError {
    ZeroDimension { rows: usize, cols: usize },
    ZeroResizeDimension { rows: usize, cols: usize },
    TooManySteps { max: usize, actual: usize },
    NonFiniteConstant { index: usize, value: f32 },
}

impl fmt::Display for ScenarioConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioConfigError::ZeroDimension { rows, cols } => {
                write!(f, "rows and cols must be positive (got {rows}x{cols})")
            }
            ScenarioConfigError::ZeroResizeDimension { rows, cols } => {
                write!(f, "resize_to must be positive (got {rows}x{cols})")
            }
            ScenarioConfigError::TooManySteps { max, actual } => {
                write!(f, "steps ({actual}) exceed supported maximum ({max})")
            }
            ScenarioConfigError::NonFiniteConstant { index, value } => {
                write!(f, "constants[{index}] must be finite (got {value})")
            }
        }
    }
}

impl Error for ScenarioConfigError {}

impl<T> ScenarioConfig<T> {
    pub const MAX_STEPS: usize = 10_000;

    pub fn validate(&self) -> Result<(), ScenarioConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ScenarioConfigError::ZeroDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if let Some([rows, cols]) = self.resize_to {
            if rows == 0 || cols == 0 {
                return Err(ScenarioConfigError::ZeroResizeDimension { rows, cols });
            }
        }
        if self.steps > Self::MAX_STEPS {
            return Err(ScenarioConfigError::TooManySteps {
                max: Self::MAX_STEPS,
                actual: self.steps,
            });
        }
        if let Some((index, &value)) = self
            .constants
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite())
        {
            return Err(ScenarioConfigError::NonFiniteConstant { index, value });
        }
        Ok(())
    }
}

impl ScenarioConfig<f32> {
    /// 5x5 float field with two sources, one interior and one on the edge,
    /// stepped once and then grown to 6x6.
    pub fn float_demo() -> Self {
        Self {
            rows: 5,
            cols: 5,
            sources: vec![100.0, 50.0],
            placements: vec![Placement::new(0, 2, 2), Placement::new(1, 4, 0)],
            steps: 1,
            resize_to: Some([6, 6]),
            ..Self::default()
        }
    }
}

impl ScenarioConfig<i32> {
    /// 4x4 integer field with a single source, stepped once.
    pub fn integer_demo() -> Self {
        Self {
            rows: 4,
            cols: 4,
            sources: vec![9],
            placements: vec![Placement::new(0, 1, 1)],
            steps: 1,
            resize_to: None,
            ..Self::default()
        }
    }
}
