mod frequency;
mod objective;
mod scenario_file;
mod step_response;

use arm_common::params::GainSet;

/// `0, 0.01, …, 1.99`: the reference 2 s grid.
pub fn reference_grid() -> Vec<f64> {
    (0..200).map(|i| i as f64 * 0.01).collect()
}

/// Gains used throughout for the I-PD scenario.
pub fn ipd_gains() -> GainSet {
    GainSet::new(2.0, 0.1, 10.0)
}
