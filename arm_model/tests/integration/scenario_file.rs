//! Scenario file → evaluation.

use std::io::Write;

use arm_common::config::ConfigError;
use arm_model::config::load_scenario;
use arm_model::controller::{AnyController, ControllerStrategy};
use arm_model::plant::PlantModel;
use arm_model::tuning::try_evaluate;
use tempfile::NamedTempFile;

const SCENARIO: &str = r#"
[shared]
log_level = "debug"
service_name = "ipd-reference"

[plant]
arm_length = 0.2
mass = 0.5

[controller]
kind = "ipd"
kp = 2.0
kd = 0.1
ki = 10.0

[simulation]
start = 0.0
stop = 2.0
step = 0.01

[objective]
reference = 1.0
overshoot_tolerance = 0.05
undershoot_tolerance = 0.05
"#;

fn write_scenario(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn scenario_runs_end_to_end() {
    let file = write_scenario(SCENARIO);
    let scenario = load_scenario(file.path()).unwrap();

    let plant = PlantModel::new(scenario.plant);
    let controller =
        AnyController::build(scenario.controller.kind, &plant, scenario.controller.gains).unwrap();
    assert_eq!(controller.name(), "I-PD");

    let time = scenario.simulation.time_grid();
    let disturbance = vec![1.0; time.len()];
    let evaluation = try_evaluate(
        &plant,
        scenario.controller.kind,
        scenario.controller.gains,
        &disturbance,
        &time,
        scenario.objective,
    )
    .unwrap();

    assert_eq!(evaluation.trajectory.len(), 200);
    assert!(evaluation.fitness.is_finite());

    let json = serde_json::to_value(&evaluation).unwrap();
    assert_eq!(json["controller"], "I-PD");
    assert_eq!(json["gains"]["kp"], 2.0);
    assert_eq!(
        json["trajectory"]["intermediate"].as_array().unwrap().len(),
        200
    );
}

#[test]
fn invalid_scenario_is_rejected_before_simulation() {
    let file = write_scenario(&SCENARIO.replace("step = 0.01", "step = -0.01"));
    assert!(matches!(
        load_scenario(file.path()),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn malformed_scenario_is_parse_error() {
    let file = write_scenario("[controller\nkind = ");
    assert!(matches!(
        load_scenario(file.path()),
        Err(ConfigError::ParseError(_))
    ));
}
