//! Response value types and the evaluator that produces them.
//!
//! [`Trajectory`] and [`FrequencyResponse`] are plain values with no link
//! back to the controller that produced them.

use serde::Serialize;
use tracing::debug;

use crate::controller::ControllerStrategy;
use crate::error::ModelError;

/// Time-domain response.
///
/// `output[i]` was recorded at `time[i]`. `intermediate`, when present, is
/// the pre-filtered command delivered to the feedback loop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    /// Plant output samples.
    pub output: Vec<f64>,
    /// Sample times [s], strictly increasing.
    pub time: Vec<f64>,
    /// Pre-filtered reference (two-degree-of-freedom loops only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediate: Option<Vec<f64>>,
}

impl Trajectory {
    /// Trajectory without an intermediate signal.
    pub fn new(output: Vec<f64>, time: Vec<f64>) -> Self {
        Self {
            output,
            time,
            intermediate: None,
        }
    }

    /// Trajectory carrying the pre-filtered command.
    pub fn with_intermediate(output: Vec<f64>, time: Vec<f64>, intermediate: Vec<f64>) -> Self {
        Self {
            output,
            time,
            intermediate: Some(intermediate),
        }
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.output.len()
    }

    /// Returns true if there are no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Largest output sample.
    pub fn peak(&self) -> Option<f64> {
        self.output.iter().copied().reduce(f64::max)
    }

    /// Last output sample.
    pub fn final_value(&self) -> Option<f64> {
        self.output.last().copied()
    }
}

/// Closed-loop gain/phase over the Bode sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyResponse {
    /// Absolute gain |G(jω)|.
    pub magnitude: Vec<f64>,
    /// Unwrapped phase [rad].
    pub phase: Vec<f64>,
    /// Angular frequency [rad/s].
    pub omega: Vec<f64>,
}

impl FrequencyResponse {
    /// Gain in decibels.
    pub fn magnitude_db(&self) -> Vec<f64> {
        self.magnitude.iter().map(|m| 20.0 * m.log10()).collect()
    }

    /// Phase in degrees.
    pub fn phase_deg(&self) -> Vec<f64> {
        self.phase.iter().map(|p| p.to_degrees()).collect()
    }
}

/// Runs a controller against disturbance signals.
pub struct ResponseEvaluator<'a, C: ControllerStrategy + ?Sized> {
    controller: &'a C,
}

impl<'a, C: ControllerStrategy + ?Sized> ResponseEvaluator<'a, C> {
    /// Borrow a controller for evaluation.
    pub fn new(controller: &'a C) -> Self {
        Self { controller }
    }

    /// Response to an arbitrary disturbance signal sampled at `time`.
    pub fn evaluate(&self, disturbance: &[f64], time: &[f64]) -> Result<Trajectory, ModelError> {
        let trajectory = self.controller.simulate_response(disturbance, time)?;
        debug!(
            controller = self.controller.name(),
            samples = trajectory.len(),
            peak = trajectory.peak().unwrap_or(f64::NAN),
            "response simulated"
        );
        Ok(trajectory)
    }

    /// Response to a positive unit step disturbance over `time`.
    pub fn step(&self, time: &[f64]) -> Result<Trajectory, ModelError> {
        let disturbance = vec![1.0; time.len()];
        self.evaluate(&disturbance, time)
    }

    /// Closed-loop frequency response.
    pub fn bode(&self) -> FrequencyResponse {
        self.controller.frequency_response()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
