//! Standard feedback (PID) controller.
//!
//! ```text
//!          kd·s² + kp·s + ki
//! K(s) = -------------------        Gyr = feedback(K·P, 1)
//!                 s
//! ```
//! The shaped reference drives `Gyr` directly.

use arm_common::params::GainSet;

use super::{check_shape, close_loop, shape_reference, ClosedLoop, ControllerStrategy};
use crate::error::ModelError;
use crate::lti::TransferFunction;
use crate::plant::PlantModel;
use crate::response::Trajectory;

const VARIANT: &str = "PID";

/// Three-term compensator with an integrator pole at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct PidController {
    gains: GainSet,
    compensator: TransferFunction,
    closed: ClosedLoop,
}

impl PidController {
    /// Build `K(gains)` and close the loop around `plant`.
    ///
    /// # Errors
    /// [`ModelError::Configuration`] if the closed loop cannot be formed.
    pub fn new(plant: &PlantModel, gains: GainSet) -> Result<Self, ModelError> {
        let compensator = Self::compensator_for(gains);
        let closed = close_loop(VARIANT, &compensator, plant)?;
        Ok(Self {
            gains,
            compensator,
            closed,
        })
    }

    /// `K(s) = (kd·s² + kp·s + ki) / s`.
    pub fn compensator_for(gains: GainSet) -> TransferFunction {
        TransferFunction::new(&[gains.kd, gains.kp, gains.ki], &[1.0, 0.0])
    }
}

impl ControllerStrategy for PidController {
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
        let output = self.closed.ss.forced_response(&reference, time)?;
        Ok(Trajectory::new(output, time.to_vec()))
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
