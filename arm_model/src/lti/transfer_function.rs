//! Rational SISO transfer functions.
//!
//! ```text
//!          num(s)     b0·sᵐ + … + bm
//! G(s) = -------- = ----------------
//!          den(s)     a0·sⁿ + … + an
//! ```
//!
//! Construction does not validate; checks run when the system is realized
//! ([`StateSpace::from_transfer_function`]) or composed with [`TransferFunction::feedback`].

use std::fmt;
use std::ops::Mul;

use nalgebra::Complex;
use serde::Serialize;

use super::polynomial;
use super::state_space::StateSpace;
use super::LtiError;

/// Transfer function stored as trimmed numerator/denominator coefficients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferFunction {
    num: Vec<f64>,
    den: Vec<f64>,
}

impl TransferFunction {
    /// Build from descending-power coefficients. Leading zeros are stripped.
    pub fn new(num: &[f64], den: &[f64]) -> Self {
        Self {
            num: polynomial::trim(num),
            den: polynomial::trim(den),
        }
    }

    /// Constant gain `k`.
    pub fn gain(k: f64) -> Self {
        Self::new(&[k], &[1.0])
    }

    /// Numerator coefficients.
    #[inline]
    pub fn num(&self) -> &[f64] {
        &self.num
    }

    /// Denominator coefficients.
    #[inline]
    pub fn den(&self) -> &[f64] {
        &self.den
    }

    /// Check the coefficients can describe a system at all.
    pub fn validate(&self) -> Result<(), LtiError> {
        if !polynomial::is_finite(&self.num) {
            return Err(LtiError::NonFiniteCoefficient {
                polynomial: "numerator",
            });
        }
        if !polynomial::is_finite(&self.den) {
            return Err(LtiError::NonFiniteCoefficient {
                polynomial: "denominator",
            });
        }
        if polynomial::is_zero(&self.den) {
            return Err(LtiError::ZeroDenominator);
        }
        Ok(())
    }

    /// Returns true if numerator degree ≤ denominator degree.
    pub fn is_proper(&self) -> bool {
        polynomial::is_zero(&self.num) || polynomial::degree(&self.num) <= polynomial::degree(&self.den)
    }

    /// Negative feedback connection `G / (1 + G·H)`.
    ///
    /// No pole/zero cancellation is performed.
    pub fn feedback(&self, h: &TransferFunction) -> Result<TransferFunction, LtiError> {
        self.validate()?;
        h.validate()?;

        let num = polynomial::mul(&self.num, &h.den);
        let den = polynomial::add(
            &polynomial::mul(&self.den, &h.den),
            &polynomial::mul(&self.num, &h.num),
        );
        let closed = TransferFunction { num, den };
        closed.validate()?;
        Ok(closed)
    }

    /// Unity negative feedback `G / (1 + G)`.
    pub fn feedback_unity(&self) -> Result<TransferFunction, LtiError> {
        self.feedback(&TransferFunction::gain(1.0))
    }

    /// Evaluate `G(s)` at a complex point.
    pub fn eval(&self, s: Complex<f64>) -> Complex<f64> {
        polynomial::eval_complex(&self.num, s) / polynomial::eval_complex(&self.den, s)
    }

    /// Static gain `G(0)`. Infinite for systems with a pole at the origin.
    pub fn dc_gain(&self) -> f64 {
        polynomial::eval(&self.num, 0.0) / polynomial::eval(&self.den, 0.0)
    }

    /// Controllable canonical realization.
    pub fn to_state_space(&self) -> Result<StateSpace, LtiError> {
        StateSpace::from_transfer_function(self)
    }
}

impl Mul for &TransferFunction {
    type Output = TransferFunction;

    fn mul(self, rhs: &TransferFunction) -> TransferFunction {
        TransferFunction {
            num: polynomial::mul(&self.num, &rhs.num),
            den: polynomial::mul(&self.den, &rhs.den),
        }
    }
}

impl fmt::Display for TransferFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} / {:?}", self.num, self.den)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
