//! Controller strategies root.
//!
//! Two topologies close the loop around the same plant:
//! - [`standard::PidController`]: three-term feedback on the error.
//! - [`two_dof::IpdController`]: same feedback path, reference pre-filtered
//!   by `K2` so reference tracking is smoothed without detuning
//!   disturbance rejection.
//!
//! Both share the reference-shaping rule, the loop closure and the
//! frequency sweep defined here.

use serde::{Deserialize, Serialize};

use arm_common::consts::{FREQUENCY_POINTS, FREQUENCY_START, FREQUENCY_STOP};
use arm_common::params::GainSet;

use crate::error::ModelError;
use crate::lti::{frequency, logspace, StateSpace, TransferFunction};
use crate::plant::PlantModel;
use crate::response::{FrequencyResponse, Trajectory};

pub mod standard;
pub mod two_dof;

pub use standard::PidController;
pub use two_dof::IpdController;

/// Capability set shared by every controller topology.
pub trait ControllerStrategy {
    /// Variant name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Gains the controller was built with.
    fn gains(&self) -> GainSet;

    /// Feedback compensator `K(s)`.
    fn compensator(&self) -> &TransferFunction;

    /// Closed loop `Gyr = feedback(K·P, 1)`.
    fn closed_loop(&self) -> &TransferFunction;

    /// Drive the loop with the reference shaped from `disturbance`.
    fn simulate_response(
        &self,
        disturbance: &[f64],
        time: &[f64],
    ) -> Result<Trajectory, ModelError>;

    /// Closed-loop gain/phase over the fixed logarithmic sweep.
    fn frequency_response(&self) -> FrequencyResponse {
        bode_sweep(self.closed_loop())
    }
}

/// Closed-loop model owned by a controller: transfer function + realization.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ClosedLoop {
    pub(crate) tf: TransferFunction,
    pub(crate) ss: StateSpace,
}

/// Form `feedback(K·P, 1)` and realize it.
///
/// Any algebra failure is wrapped with the variant name.
pub(crate) fn close_loop(
    variant: &'static str,
    compensator: &TransferFunction,
    plant: &PlantModel,
) -> Result<ClosedLoop, ModelError> {
    let open_loop = compensator * plant.transfer_function();
    open_loop
        .feedback_unity()
        .and_then(|tf| {
            let ss = tf.to_state_space()?;
            Ok(ClosedLoop { tf, ss })
        })
        .map_err(|source| ModelError::Configuration { variant, source })
}

/// On/off demand: `1.0` where the disturbance is positive, else `0.0`.
pub fn shape_reference(disturbance: &[f64]) -> Vec<f64> {
    disturbance
        .iter()
        .map(|&td| if td > 0.0 { 1.0 } else { 0.0 })
        .collect()
}

/// Reject disturbance/time vectors of different length.
pub(crate) fn check_shape(disturbance: &[f64], time: &[f64]) -> Result<(), ModelError> {
    if disturbance.len() != time.len() {
        return Err(ModelError::InputShape {
            expected: time.len(),
            actual: disturbance.len(),
        });
    }
    Ok(())
}

/// Evaluate `tf` over `FREQUENCY_POINTS` log-spaced points in
/// `[FREQUENCY_START, FREQUENCY_STOP]` rad/s.
pub fn bode_sweep(tf: &TransferFunction) -> FrequencyResponse {
    let omega = logspace(FREQUENCY_START, FREQUENCY_STOP, FREQUENCY_POINTS);
    let (magnitude, phase) = frequency::evaluate(tf, &omega);
    FrequencyResponse {
        magnitude,
        phase,
        omega,
    }
}

// ─── Runtime Selection ──────────────────────────────────────────────

/// Controller topology selector (scenario files, CLI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControllerKind {
    /// Standard feedback (PID).
    Pid,
    /// Two-degree-of-freedom (I-PD).
    Ipd,
}

/// Either controller topology, chosen at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyController {
    /// Standard feedback.
    Pid(PidController),
    /// Two-degree-of-freedom.
    Ipd(IpdController),
}

impl AnyController {
    /// Build the selected topology.
    pub fn build(
        kind: ControllerKind,
        plant: &PlantModel,
        gains: GainSet,
    ) -> Result<Self, ModelError> {
        Ok(match kind {
            ControllerKind::Pid => Self::Pid(PidController::new(plant, gains)?),
            ControllerKind::Ipd => Self::Ipd(IpdController::new(plant, gains)?),
        })
    }

    fn inner(&self) -> &dyn ControllerStrategy {
        match self {
            Self::Pid(c) => c,
            Self::Ipd(c) => c,
        }
    }
}

impl ControllerStrategy for AnyController {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn gains(&self) -> GainSet {
        self.inner().gains()
    }

    fn compensator(&self) -> &TransferFunction {
        self.inner().compensator()
    }

    fn closed_loop(&self) -> &TransferFunction {
        self.inner().closed_loop()
    }

    fn simulate_response(
        &self,
        disturbance: &[f64],
        time: &[f64],
    ) -> Result<Trajectory, ModelError> {
        self.inner().simulate_response(disturbance, time)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
