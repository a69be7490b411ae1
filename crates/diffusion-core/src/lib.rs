pub mod config;
pub mod grid;
pub mod render;
pub mod scalar;
pub mod scenario;

pub use config::{Placement, ScenarioConfig, ScenarioConfigError};
pub use grid::{Grid, GridError, SourceRegistry};
pub use render::render;
pub use scalar::Scalar;
pub use scenario::{run_scenario, Frame, ScenarioError, ScenarioOutcome};
