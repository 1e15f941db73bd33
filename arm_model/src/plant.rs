//! Vertical drive arm plant.
//!
//! Single rotational joint lifting a point mass against gravity, linearized
//! about the hanging position:
//! ```text
//! J·θ̈ + mu·θ̇ + M·g·l·θ = τ      →      P(s) = 1 / (J·s² + mu·s + M·g·l)
//! ```
//! The plant performs no validation. Unusable constants surface later as a
//! configuration error when a closed loop is formed.

use arm_common::consts::GRAVITY;
use arm_common::params::PhysicalParameters;

use crate::error::ModelError;
use crate::lti::TransferFunction;
use crate::response::Trajectory;

/// Immutable plant transfer function built from physical constants.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantModel {
    params: PhysicalParameters,
    tf: TransferFunction,
}

impl PlantModel {
    /// Build the plant. Never fails.
    pub fn new(params: PhysicalParameters) -> Self {
        let stiffness = params.mass * GRAVITY * params.arm_length;
        let tf = TransferFunction::new(
            &[0.0, 1.0],
            &[params.inertia, params.viscous_friction, stiffness],
        );
        Self { params, tf }
    }

    /// Physical constants the plant was built from.
    #[inline]
    pub fn parameters(&self) -> &PhysicalParameters {
        &self.params
    }

    /// Plant transfer function `P(s)`.
    #[inline]
    pub fn transfer_function(&self) -> &TransferFunction {
        &self.tf
    }

    /// Unit-step response of the proportional loop `feedback(kp·P, 1)`.
    ///
    /// Baseline used to compare the three-term controllers against.
    pub fn proportional_step(&self, kp: f64, time: &[f64]) -> Result<Trajectory, ModelError> {
        let closed = (&TransferFunction::gain(kp) * &self.tf)
            .feedback_unity()
            .and_then(|tf| tf.to_state_space())
            .map_err(|source| ModelError::Configuration {
                variant: "P",
                source,
            })?;
        let output = closed.step_response(time)?;
        Ok(Trajectory::new(output, time.to_vec()))
    }
}

impl Default for PlantModel {
    fn default() -> Self {
        Self::new(PhysicalParameters::default())
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
