//! Frequency-domain scenarios.

use arm_common::consts::{FREQUENCY_POINTS, FREQUENCY_START, FREQUENCY_STOP};
use arm_model::controller::{ControllerStrategy, IpdController, PidController};
use arm_model::plant::PlantModel;
use arm_model::response::ResponseEvaluator;

use super::ipd_gains;

#[test]
fn sweep_is_thousand_log_spaced_points() {
    let plant = PlantModel::default();
    let pid = PidController::new(&plant, ipd_gains()).unwrap();
    let fr = ResponseEvaluator::new(&pid).bode();

    assert_eq!(fr.omega.len(), FREQUENCY_POINTS);
    assert_eq!(fr.magnitude.len(), FREQUENCY_POINTS);
    assert_eq!(fr.phase.len(), FREQUENCY_POINTS);
    assert!((fr.omega[0] - FREQUENCY_START).abs() < 1e-12);
    assert_eq!(fr.omega[FREQUENCY_POINTS - 1], FREQUENCY_STOP);
    assert!(fr.omega.windows(2).all(|w| w[1] > w[0]));

    let decade_step = (FREQUENCY_STOP / FREQUENCY_START).ln() / (FREQUENCY_POINTS - 1) as f64;
    for w in fr.omega.windows(2) {
        assert!(((w[1] / w[0]).ln() - decade_step).abs() < 1e-9);
    }
}

#[test]
fn phase_is_continuous_along_sweep() {
    let plant = PlantModel::default();
    let pid = PidController::new(&plant, ipd_gains()).unwrap();
    let fr = pid.frequency_response();
    for w in fr.phase.windows(2) {
        assert!((w[1] - w[0]).abs() < std::f64::consts::PI);
    }
    assert!(fr.magnitude.iter().all(|m| m.is_finite() && *m >= 0.0));
}

#[test]
fn both_topologies_share_the_closed_loop_sweep() {
    let plant = PlantModel::default();
    let pid = PidController::new(&plant, ipd_gains()).unwrap();
    let ipd = IpdController::new(&plant, ipd_gains()).unwrap();
    assert_eq!(pid.frequency_response(), ipd.frequency_response());
}
