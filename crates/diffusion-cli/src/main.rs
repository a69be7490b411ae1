use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use diffusion_core::{render, run_scenario, Scalar, ScenarioConfig};
use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ScalarKind {
    Float,
    Int,
}

/// Run a 2D diffusion scenario and print the grid at each stage.
///
/// Without --config, runs the built-in float demo followed by the integer demo.
#[derive(Parser, Debug)]
#[command(name = "diffusion", version, about)]
struct Args {
    /// JSON scenario file (rows, cols, constants, sources, placements, steps, resize_to)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cell type used for a --config scenario
    #[arg(long, value_enum, default_value_t = ScalarKind::Float)]
    scalar: ScalarKind,

    /// Override the number of diffusion steps
    #[arg(long)]
    steps: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    println!("--- Generic 2D diffusion sandbox ---");
    match &args.config {
        Some(path) => match args.scalar {
            ScalarKind::Float => {
                let config = load_config::<f64>(path)?;
                run_and_print("float", with_steps(config, args.steps))?;
            }
            ScalarKind::Int => {
                let config = load_config::<i64>(path)?;
                run_and_print("integer", with_steps(config, args.steps))?;
            }
        },
        None => {
            run_and_print(
                "float",
                with_steps(ScenarioConfig::<f32>::float_demo(), args.steps),
            )?;
            run_and_print(
                "integer",
                with_steps(ScenarioConfig::<i32>::integer_demo(), args.steps),
            )?;
        }
    }
    println!("\nDone.");
    Ok(())
}

fn load_config<T: DeserializeOwned>(path: &Path) -> Result<ScenarioConfig<T>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing scenario config {}", path.display()))?;
    log::info!("loaded scenario from {}", path.display());
    Ok(config)
}

fn with_steps<T>(mut config: ScenarioConfig<T>, steps: Option<usize>) -> ScenarioConfig<T> {
    if let Some(steps) = steps {
        config.steps = steps;
    }
    config
}

fn run_and_print<T: Scalar + Display>(label: &str, config: ScenarioConfig<T>) -> Result<()> {
    println!("\n>> {label} grid ({}x{}) <<", config.rows, config.cols);
    let outcome = run_scenario(&config, |frame, grid| {
        println!();
        print!("{}", render(grid, Some(frame.to_string().as_str())));
    })
    .with_context(|| format!("running {label} scenario"))?;

    let grid = &outcome.grid;
    println!(
        "\n{} of {} placements applied, {} sources, total {}",
        outcome.applied,
        config.placements.len(),
        grid.source_count(),
        grid.total()
    );
    for p in &outcome.skipped {
        println!(
            "  skipped source {} at ({}, {}): out of range",
            p.source, p.row, p.col
        );
    }
    Ok(())
}
