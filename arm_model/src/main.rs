//! # Arm Model CLI
//!
//! Runs one scenario file: builds the plant and the configured controller,
//! simulates a unit step disturbance over the scenario time grid, scores the
//! response and prints a JSON report to stdout.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use arm_common::config::LogLevel;
use arm_common::params::GainSet;
use arm_model::config::{load_scenario, ScenarioConfig};
use arm_model::controller::{AnyController, ControllerStrategy};
use arm_model::objective::ObjectiveScorer;
use arm_model::plant::PlantModel;
use arm_model::response::{ResponseEvaluator, Trajectory};

/// Arm Model: closed-loop step response and tuning objective
#[derive(Parser, Debug)]
#[command(name = "arm_model")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Simulate a vertical drive arm controller and score its response")]
struct Args {
    /// Path to the scenario TOML.
    scenario: PathBuf,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format.
    #[arg(long)]
    json_logs: bool,

    /// Include the full trajectory in the report.
    #[arg(long)]
    trajectory: bool,
}

/// Printed to stdout on success.
#[derive(Debug, Serialize)]
struct Report {
    scenario: String,
    controller: &'static str,
    gains: GainSet,
    /// `None` when scoring failed; see `error`.
    fitness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    peak: Option<f64>,
    final_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trajectory: Option<Trajectory>,
}

fn main() {
    let args = Args::parse();
    // Loaded before tracing is up so the scenario can set the log level.
    let scenario = load_scenario(&args.scenario);
    let level = scenario
        .as_ref()
        .map(|s| s.shared.log_level)
        .unwrap_or_default();
    setup_tracing(&args, level);

    info!("Arm Model v{} starting...", env!("CARGO_PKG_VERSION"));

    let result = scenario
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
        .and_then(|s| run(&args, &s));
    if let Err(e) = result {
        error!("FATAL: {e}");
        process::exit(1);
    }
}

fn run(args: &Args, scenario: &ScenarioConfig) -> Result<(), Box<dyn std::error::Error>> {
    let report = evaluate(scenario, args.trajectory)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Build, simulate and score. Scoring failures land in the report;
/// construction and simulation failures abort.
fn evaluate(
    scenario: &ScenarioConfig,
    keep_trajectory: bool,
) -> Result<Report, Box<dyn std::error::Error>> {
    let plant = PlantModel::new(scenario.plant);
    let controller = AnyController::build(
        scenario.controller.kind,
        &plant,
        scenario.controller.gains,
    )?;
    info!(
        "{} controller ready: kp={}, kd={}, ki={}",
        controller.name(),
        scenario.controller.gains.kp,
        scenario.controller.gains.kd,
        scenario.controller.gains.ki
    );

    let time = scenario.simulation.time_grid();
    let trajectory = ResponseEvaluator::new(&controller).step(&time)?;

    let (fitness, error) = match ObjectiveScorer::new(scenario.objective)
        .score(&trajectory.output, &trajectory.time)
    {
        Ok(f) => (Some(f), None),
        Err(e) => (None, Some(e.to_string())),
    };
    info!("Fitness: {fitness:?}");

    Ok(Report {
        scenario: scenario.shared.service_name.clone(),
        controller: controller.name(),
        gains: controller.gains(),
        fitness,
        error,
        peak: trajectory.peak(),
        final_value: trajectory.final_value(),
        trajectory: keep_trajectory.then_some(trajectory),
    })
}

/// Setup tracing subscriber based on CLI arguments and the scenario level.
///
/// `RUST_LOG` wins over the scenario; `--verbose` forces DEBUG.
/// Logs go to stderr so the JSON report on stdout stays parseable.
fn setup_tracing(args: &Args, level: LogLevel) {
    let filter = if args.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::from(level).into()))
    };

    if args.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}
