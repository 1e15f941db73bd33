//! One gain candidate through the full pipeline.
//!
//! An outer optimizer calls [`evaluate_gains`] once per candidate. Every
//! call builds its own controller, so candidates can be evaluated in
//! parallel against one shared [`PlantModel`].

use serde::Serialize;
use tracing::{debug, warn};

use arm_common::consts::WORST_FITNESS;
use arm_common::params::{GainSet, ScoreLimits};

use crate::controller::{AnyController, ControllerKind, ControllerStrategy};
use crate::error::EvaluationError;
use crate::objective::ObjectiveScorer;
use crate::plant::PlantModel;
use crate::response::{ResponseEvaluator, Trajectory};

/// Result of one successful candidate evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Controller variant name.
    pub controller: &'static str,
    /// Gains evaluated.
    pub gains: GainSet,
    /// Simulated response.
    pub trajectory: Trajectory,
    /// Fitness (lower is better).
    pub fitness: f64,
}

/// Build, simulate and score one candidate.
pub fn try_evaluate(
    plant: &PlantModel,
    kind: ControllerKind,
    gains: GainSet,
    disturbance: &[f64],
    time: &[f64],
    limits: ScoreLimits,
) -> Result<Evaluation, EvaluationError> {
    let controller = AnyController::build(kind, plant, gains)?;
    let trajectory = ResponseEvaluator::new(&controller).evaluate(disturbance, time)?;
    let fitness = ObjectiveScorer::new(limits).score(&trajectory.output, &trajectory.time)?;
    debug!(
        controller = controller.name(),
        kp = gains.kp,
        kd = gains.kd,
        ki = gains.ki,
        fitness,
        "candidate evaluated"
    );
    Ok(Evaluation {
        controller: controller.name(),
        gains,
        trajectory,
        fitness,
    })
}

/// Fitness of one candidate; [`WORST_FITNESS`] on any failure.
pub fn evaluate_gains(
    plant: &PlantModel,
    kind: ControllerKind,
    gains: GainSet,
    disturbance: &[f64],
    time: &[f64],
    limits: ScoreLimits,
) -> f64 {
    match try_evaluate(plant, kind, gains, disturbance, time, limits) {
        Ok(evaluation) => evaluation.fitness,
        Err(e) => {
            warn!(?gains, "candidate rejected: {e}");
            WORST_FITNESS
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
