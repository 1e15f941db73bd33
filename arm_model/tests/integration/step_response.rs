//! Time-domain scenarios.

use arm_common::params::{GainSet, PhysicalParameters};
use arm_model::controller::{
    AnyController, ControllerKind, ControllerStrategy, IpdController, PidController,
};
use arm_model::plant::PlantModel;
use arm_model::response::ResponseEvaluator;

use super::{ipd_gains, reference_grid};

#[test]
fn pid_unit_gains_over_reference_grid() {
    let plant = PlantModel::new(PhysicalParameters {
        arm_length: 0.2,
        mass: 0.5,
        viscous_friction: 0.015,
        inertia: 0.01,
    });
    let pid = PidController::new(&plant, GainSet::new(1.0, 1.0, 1.0)).unwrap();
    let time = reference_grid();
    let traj = ResponseEvaluator::new(&pid).step(&time).unwrap();

    assert_eq!(traj.output.len(), 200);
    assert_eq!(traj.time, time);
    assert_eq!(traj.time[0], 0.0);
    assert!((traj.time[199] - 1.99).abs() < 1e-12);
    assert!(traj.time.windows(2).all(|w| w[1] > w[0]));
    assert!(traj.intermediate.is_none());
    assert!(traj.output.iter().all(|y| y.is_finite()));
}

#[test]
fn ipd_returns_intermediate_of_equal_length() {
    let plant = PlantModel::default();
    let ipd = IpdController::new(&plant, ipd_gains()).unwrap();
    let traj = ResponseEvaluator::new(&ipd).step(&reference_grid()).unwrap();

    let z = traj.intermediate.as_ref().unwrap();
    assert_eq!(z.len(), traj.output.len());
    assert_eq!(traj.time.len(), traj.output.len());
}

#[test]
fn simulation_is_bit_for_bit_deterministic() {
    let plant = PlantModel::default();
    let time = reference_grid();
    let disturbance: Vec<f64> = time
        .iter()
        .map(|&t| if t < 1.0 { 1.0 } else { -1.0 })
        .collect();

    for kind in [ControllerKind::Pid, ControllerKind::Ipd] {
        let a = AnyController::build(kind, &plant, ipd_gains()).unwrap();
        let b = AnyController::build(kind, &plant, ipd_gains()).unwrap();
        let first = a.simulate_response(&disturbance, &time).unwrap();
        let second = b.simulate_response(&disturbance, &time).unwrap();

        let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&first.output), bits(&second.output), "{kind:?}");
        assert_eq!(first, second);
    }
}

#[test]
fn released_disturbance_decays_toward_zero() {
    let plant = PlantModel::default();
    let pid = PidController::new(&plant, ipd_gains()).unwrap();
    let time: Vec<f64> = (0..600).map(|i| i as f64 * 0.01).collect();
    let disturbance: Vec<f64> = time
        .iter()
        .map(|&t| if t < 2.0 { 1.0 } else { 0.0 })
        .collect();
    let traj = pid.simulate_response(&disturbance, &time).unwrap();

    assert!(traj.output[199] > 0.5);
    assert!(traj.final_value().unwrap().abs() < 0.05);
}

#[test]
fn non_uniform_time_grid_is_accepted() {
    let plant = PlantModel::default();
    let ipd = IpdController::new(&plant, ipd_gains()).unwrap();
    let mut time: Vec<f64> = (0..100).map(|i| i as f64 * 0.01).collect();
    time.extend((1..=50).map(|i| 0.99 + i as f64 * 0.02));

    let traj = ResponseEvaluator::new(&ipd).step(&time).unwrap();
    assert_eq!(traj.len(), 150);
    assert!(traj.output.iter().all(|y| y.is_finite()));
}

#[test]
fn proportional_baseline_has_steady_state_error() {
    let plant = PlantModel::default();
    let time: Vec<f64> = (0..2000).map(|i| i as f64 * 0.01).collect();
    let p_only = plant.proportional_step(5.0, &time).unwrap();
    let pid = PidController::new(&plant, GainSet::new(5.0, 0.1, 10.0)).unwrap();
    let with_integral = ResponseEvaluator::new(&pid).step(&time).unwrap();

    let p_final = p_only.final_value().unwrap();
    let pid_final = with_integral.final_value().unwrap();
    assert!((1.0 - p_final).abs() > 0.1);
    assert!((1.0 - pid_final).abs() < 0.01);
}
