//! Two-degree-of-freedom (I-PD) controller.
//!
//! Feedback path identical to the PID controller. The shaped reference is
//! first passed through the pre-filter
//! ```text
//!                kp·s + ki
//! K2(s) = -------------------
//!          kd·s² + kp·s + ki
//! ```
//! whose output `z` drives `Gyr`. The P and D actions then act on the
//! output only, which removes the reference-step kick without changing
//! disturbance rejection.

use arm_common::params::GainSet;

use super::{check_shape, close_loop, shape_reference, ClosedLoop, ControllerStrategy};
use super::standard::PidController;
use crate::error::ModelError;
use crate::lti::{StateSpace, TransferFunction};
use crate::plant::PlantModel;
use crate::response::Trajectory;

const VARIANT: &str = "I-PD";

/// PID feedback with a reference pre-filter.
#[derive(Debug, Clone, PartialEq)]
pub struct IpdController {
    gains: GainSet,
    compensator: TransferFunction,
    prefilter: TransferFunction,
    prefilter_ss: StateSpace,
    closed: ClosedLoop,
}

impl IpdController {
    /// Build `K`, `K2` and close the loop around `plant`.
    ///
    /// # Errors
    /// [`ModelError::Configuration`] if either the closed loop or the
    /// pre-filter cannot be formed (e.g. all gains zero).
    pub fn new(plant: &PlantModel, gains: GainSet) -> Result<Self, ModelError> {
        let compensator = PidController::compensator_for(gains);
        let closed = close_loop(VARIANT, &compensator, plant)?;

        let prefilter = Self::prefilter_for(gains);
        let prefilter_ss = prefilter
            .to_state_space()
            .map_err(|source| ModelError::Configuration {
                variant: VARIANT,
                source,
            })?;

        Ok(Self {
            gains,
            compensator,
            prefilter,
            prefilter_ss,
            closed,
        })
    }

    /// `K2(s) = (kp·s + ki) / (kd·s² + kp·s + ki)`.
    pub fn prefilter_for(gains: GainSet) -> TransferFunction {
        TransferFunction::new(&[gains.kp, gains.ki], &[gains.kd, gains.kp, gains.ki])
    }

    /// Reference pre-filter `K2`.
    #[inline]
    pub fn prefilter(&self) -> &TransferFunction {
        &self.prefilter
    }
}

impl ControllerStrategy for IpdController {
    fn name(&self) -> &'static str {
        VARIANT
    }

    fn gains(&self) -> GainSet {
        self.gains
    }

    fn compensator(&self) -> &TransferFunction {
        &self.compensator
    }

    fn closed_loop(&self) -> &TransferFunction {
        &self.closed.tf
    }

    fn simulate_response(
        &self,
        disturbance: &[f64],
        time: &[f64],
    ) -> Result<Trajectory, ModelError> {
        check_shape(disturbance, time)?;
        let reference = shape_reference(disturbance);
        let z = self.prefilter_ss.forced_response(&reference, time)?;
        let output = self.closed.ss.forced_response(&z, time)?;
        Ok(Trajectory::with_intermediate(output, time.to_vec(), z))
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
