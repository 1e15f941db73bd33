//! Objective function for gain tuning.
//!
//! Reduces a response trajectory to one scalar fitness (lower is better):
//! ```text
//! fitness = tracking_error_term + settling_time_term
//!
//! tracking_error_term = |max(R)| + |min(R)|
//!     R = samples y_i ≥ reference, walked in time order until t_i > capture_window
//!
//! settling_time_term  = r            if r < settling_time_limit
//!                     = r + penalty  otherwise
//!     r = max{t_i : y_i outside [reference - under, reference + over]} / settling_time_limit
//! ```
//! The settling comparison is against the limit value itself, not 1.0.
//! Both reductions fail with [`ScoreError::EmptyReduction`] when nothing
//! was collected.

use tracing::warn;

use arm_common::consts::WORST_FITNESS;
use arm_common::params::ScoreLimits;

use crate::error::ScoreError;

/// Collects output samples at or above `reference`, stopping once the
/// walk passes `capture_window`.
///
/// The sample at which the walk stops is still considered.
pub fn residual_vibration(
    output: &[f64],
    time: &[f64],
    reference: f64,
    capture_window: f64,
) -> Vec<f64> {
    let mut residual = Vec::new();
    for (&y, &t) in output.iter().zip(time) {
        if y >= reference {
            residual.push(y);
        }
        if t > capture_window {
            break;
        }
    }
    residual
}

/// Timestamps of every sample strictly outside `[lower, upper]`.
pub fn violation_times(output: &[f64], time: &[f64], lower: f64, upper: f64) -> Vec<f64> {
    output
        .iter()
        .zip(time)
        .filter(|&(&y, _)| y > upper || y < lower)
        .map(|(_, &t)| t)
        .collect()
}

/// `|max| + |min|` of the captured residual vibration.
pub fn tracking_error_term(residual: &[f64]) -> Result<f64, ScoreError> {
    let (max, min) = residual
        .iter()
        .fold(None, |acc: Option<(f64, f64)>, &y| match acc {
            None => Some((y, y)),
            Some((hi, lo)) => Some((hi.max(y), lo.min(y))),
        })
        .ok_or(ScoreError::EmptyReduction {
            collection: "residual vibration",
        })?;
    Ok(max.abs() + min.abs())
}

/// Normalized latest violation time, penalized when it misses the limit.
pub fn settling_time_term(
    violations: &[f64],
    settling_time_limit: f64,
    penalty: f64,
) -> Result<f64, ScoreError> {
    let latest = violations
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(ScoreError::EmptyReduction {
            collection: "settling violations",
        })?;

    let ratio = latest / settling_time_limit;
    if ratio < settling_time_limit {
        Ok(ratio)
    } else {
        Ok(ratio + penalty)
    }
}

/// Scores trajectories against fixed [`ScoreLimits`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectiveScorer {
    limits: ScoreLimits,
}

impl ObjectiveScorer {
    /// Scorer for the given limits.
    pub const fn new(limits: ScoreLimits) -> Self {
        Self { limits }
    }

    /// Limits in use.
    #[inline]
    pub fn limits(&self) -> &ScoreLimits {
        &self.limits
    }

    /// Fitness of `(output, time)`. All-or-nothing.
    ///
    /// # Errors
    /// - [`ScoreError::InputShape`] if the sequences differ in length.
    /// - [`ScoreError::EmptyReduction`] if no sample violates the tolerance
    ///   band, or no sample reaches the reference.
    pub fn score(&self, output: &[f64], time: &[f64]) -> Result<f64, ScoreError> {
        if output.len() != time.len() {
            return Err(ScoreError::InputShape {
                output_len: output.len(),
                time_len: time.len(),
            });
        }
        let limits = &self.limits;

        let violations = violation_times(output, time, limits.lower_bound(), limits.upper_bound());
        let settling = settling_time_term(&violations, limits.settling_time_limit, limits.penalty)?;

        let residual = residual_vibration(output, time, limits.reference, limits.capture_window());
        let tracking = tracking_error_term(&residual)?;

        Ok(tracking + settling)
    }

    /// Like [`score`](Self::score) but maps any error to [`WORST_FITNESS`].
    pub fn score_or_worst(&self, output: &[f64], time: &[f64]) -> f64 {
        self.score(output, time).unwrap_or_else(|e| {
            warn!("scoring failed, assigning worst fitness: {e}");
            WORST_FITNESS
        })
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
