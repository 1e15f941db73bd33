//! Linear time-invariant engine root.
//!
//! Minimal SISO toolkit used by the plant and controller models:
//! polynomial algebra, transfer functions, state-space realization,
//! forced/step simulation and frequency response.
//!
//! The rest of the crate only relies on the public contract here and treats
//! the numerics as a black box.

use thiserror::Error;

pub mod frequency;
pub mod polynomial;
pub mod state_space;
pub mod transfer_function;

pub use frequency::logspace;
pub use state_space::StateSpace;
pub use transfer_function::TransferFunction;

/// Errors raised by the LTI engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LtiError {
    /// Denominator polynomial is identically zero.
    #[error("denominator polynomial is zero")]
    ZeroDenominator,

    /// A coefficient is NaN or infinite.
    #[error("non-finite coefficient in {polynomial}")]
    NonFiniteCoefficient {
        /// Which polynomial carried the bad coefficient.
        polynomial: &'static str,
    },

    /// Numerator degree exceeds denominator degree.
    #[error("improper transfer function: numerator degree {num_degree} > denominator degree {den_degree}")]
    Improper {
        /// Numerator degree.
        num_degree: usize,
        /// Denominator degree.
        den_degree: usize,
    },

    /// Input and time vectors differ in length.
    #[error("input has {input} samples but time has {time}")]
    LengthMismatch {
        /// Input sample count.
        input: usize,
        /// Time sample count.
        time: usize,
    },

    /// Time vector is not strictly increasing.
    #[error("time vector not strictly increasing at index {index}")]
    NonMonotonicTime {
        /// First offending index.
        index: usize,
    },

    /// Empty time vector.
    #[error("time vector is empty")]
    EmptyInput,
}
