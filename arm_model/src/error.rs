//! Error taxonomy for the arm model.
//!
//! - [`ModelError::Configuration`] is fatal for one gain candidate: the
//!   closed loop could not be formed. The tuner assigns worst-case fitness.
//! - [`ScoreError`] is local to the scorer and never escapes
//!   [`ObjectiveScorer::score_or_worst`](crate::objective::ObjectiveScorer::score_or_worst).
//! - [`EvaluationError`] joins both for the full pipeline.

use thiserror::Error;

use crate::lti::LtiError;

/// Errors raised while building or simulating a controller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Closed-loop system could not be formed from plant + gains.
    #[error("{variant} controller configuration failed: {source}")]
    Configuration {
        /// Controller variant name.
        variant: &'static str,
        /// Originating algebra failure.
        #[source]
        source: LtiError,
    },

    /// Disturbance and time vectors differ in length.
    #[error("disturbance has {actual} samples, time has {expected}")]
    InputShape {
        /// Time sample count.
        expected: usize,
        /// Disturbance sample count.
        actual: usize,
    },

    /// Simulation failure.
    #[error("simulation failed: {0}")]
    Lti(#[from] LtiError),
}

/// Errors raised while reducing a trajectory to a fitness value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// A reduction found no samples satisfying its collection predicate.
    #[error("no samples satisfied collection predicate for {collection}")]
    EmptyReduction {
        /// Which collection was empty.
        collection: &'static str,
    },

    /// Output and time sequences differ in length.
    #[error("output has {output_len} samples but time has {time_len}")]
    InputShape {
        /// Output sample count.
        output_len: usize,
        /// Time sample count.
        time_len: usize,
    },
}

/// Failure anywhere in the build → simulate → score pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// Controller construction or simulation failed.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Scoring failed.
    #[error(transparent)]
    Score(#[from] ScoreError),
}
