//! Scoring simulated trajectories.

use arm_common::consts::WORST_FITNESS;
use arm_common::params::ScoreLimits;
use arm_model::controller::{ControllerKind, IpdController, PidController};
use arm_model::error::ScoreError;
use arm_model::objective::{ObjectiveScorer, violation_times};
use arm_model::plant::PlantModel;
use arm_model::response::ResponseEvaluator;
use arm_model::tuning::evaluate_gains;

use super::{ipd_gains, reference_grid};

#[test]
fn overshooting_trajectory_scores_finite() {
    let plant = PlantModel::default();
    let ipd = IpdController::new(&plant, ipd_gains()).unwrap();
    let time = reference_grid();
    let traj = ResponseEvaluator::new(&ipd).step(&time).unwrap();
    // Unit step response scaled to a 30-unit move.
    let output: Vec<f64> = traj.output.iter().map(|y| 30.0 * y).collect();
    assert!(output.iter().any(|&y| y > 30.0));

    let limits = ScoreLimits::new(30.0)
        .with_tolerances(1.0, 1.0)
        .with_settling_time_limit(1.0);
    let score = ObjectiveScorer::new(limits).score(&output, &time).unwrap();
    assert!(score.is_finite());
}

#[test]
fn trajectory_below_reference_reports_empty_reduction() {
    let plant = PlantModel::default();
    let pid = PidController::new(&plant, ipd_gains()).unwrap();
    let time = reference_grid();
    let traj = ResponseEvaluator::new(&pid).step(&time).unwrap();

    let scorer = ObjectiveScorer::new(ScoreLimits::new(30.0));
    let err = scorer.score(&traj.output, &traj.time).unwrap_err();
    assert!(matches!(err, ScoreError::EmptyReduction { .. }));
    assert_eq!(scorer.score_or_worst(&traj.output, &traj.time), WORST_FITNESS);
}

#[test]
fn penalty_vanishes_across_threshold() {
    let plant = PlantModel::default();
    let pid = PidController::new(&plant, ipd_gains()).unwrap();
    let time = reference_grid();
    let traj = ResponseEvaluator::new(&pid).step(&time).unwrap();

    let latest = violation_times(&traj.output, &time, 0.95, 1.05)
        .into_iter()
        .reduce(f64::max)
        .unwrap();
    assert!(latest > 0.0);

    // ratio = latest / L crosses L at L = sqrt(latest).
    let score_with = |limit: f64| {
        let limits = ScoreLimits::new(1.0)
            .with_tolerances(0.05, 0.05)
            .with_settling_time_limit(limit)
            .with_capture_window(2.0);
        ObjectiveScorer::new(limits).score(&traj.output, &time).unwrap()
    };
    let strict = score_with(0.9 * latest.sqrt());
    let relaxed = score_with(1.1 * latest.sqrt());

    assert!(strict - relaxed > 900_000.0);
    assert!(relaxed < 100.0);
}

#[test]
fn pipeline_matches_manual_scoring() {
    let plant = PlantModel::default();
    let time = reference_grid();
    let disturbance = vec![1.0; time.len()];
    let limits = ScoreLimits::new(1.0).with_tolerances(0.05, 0.05);

    let ipd = IpdController::new(&plant, ipd_gains()).unwrap();
    let traj = ResponseEvaluator::new(&ipd).evaluate(&disturbance, &time).unwrap();
    let manual = ObjectiveScorer::new(limits).score(&traj.output, &time).unwrap();

    let piped = evaluate_gains(
        &plant,
        ControllerKind::Ipd,
        ipd_gains(),
        &disturbance,
        &time,
        limits,
    );
    assert_eq!(manual, piped);
}
