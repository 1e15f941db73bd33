//! State-space realization and time-domain simulation.
//!
//! Controllable canonical form for a proper transfer function with
//! `den = [1, a1, …, an]` (after normalization) and `num = [b0, b1, …, bn]`:
//! ```text
//!     ⎡-a1 -a2 … -an⎤       ⎡1⎤
//! A = ⎢ 1   0  …  0 ⎥   B = ⎢0⎥   C = [b1 - b0·a1, …, bn - b0·an]   D = b0
//!     ⎢ …          ⎥       ⎢…⎥
//!     ⎣ 0   …  1  0 ⎦       ⎣0⎦
//! ```
//!
//! Simulation uses exact discretization with a first-order hold on the
//! input (input linearly interpolated between samples), from zero initial
//! state:
//! ```text
//! M = ⎡A·dt  B·dt  0⎤    e^M = ⎡Φ  Γa  Γ1⎤
//!     ⎢ 0     0    1⎥          ⎢…       ⎥
//!     ⎣ 0     0    0⎦          ⎣…       ⎦
//! x[k] = Φ·x[k-1] + (Γa - Γ1)·u[k-1] + Γ1·u[k]
//! ```

use nalgebra::{DMatrix, DVector};

use super::polynomial;
use super::transfer_function::TransferFunction;
use super::LtiError;

/// Relative tolerance under which two step lengths share one discretization.
const DT_REUSE_TOLERANCE: f64 = 1e-9;

/// SISO state-space system `ẋ = A·x + B·u`, `y = C·x + D·u`.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSpace {
    a: DMatrix<f64>,
    b: DVector<f64>,
    c: DVector<f64>,
    d: f64,
}

/// One first-order-hold discretization for a fixed step length.
struct Discretization {
    dt: f64,
    phi: DMatrix<f64>,
    gamma_prev: DVector<f64>,
    gamma_next: DVector<f64>,
}

impl StateSpace {
    /// Realize a transfer function in controllable canonical form.
    ///
    /// # Errors
    /// - [`LtiError::NonFiniteCoefficient`] / [`LtiError::ZeroDenominator`]
    ///   if the coefficients are unusable.
    /// - [`LtiError::Improper`] if numerator degree exceeds denominator degree.
    pub fn from_transfer_function(tf: &TransferFunction) -> Result<Self, LtiError> {
        tf.validate()?;
        if !tf.is_proper() {
            return Err(LtiError::Improper {
                num_degree: polynomial::degree(tf.num()),
                den_degree: polynomial::degree(tf.den()),
            });
        }

        let lead = tf.den()[0];
        let den: Vec<f64> = tf.den().iter().map(|c| c / lead).collect();
        let n = den.len() - 1;

        // Pad numerator to n + 1 coefficients.
        let mut num = vec![0.0; n + 1];
        let offset = n + 1 - tf.num().len();
        for (i, c) in tf.num().iter().enumerate() {
            num[offset + i] = c / lead;
        }

        let d = num[0];
        let mut a: DMatrix<f64> = DMatrix::zeros(n, n);
        let mut b: DVector<f64> = DVector::zeros(n);
        let mut c: DVector<f64> = DVector::zeros(n);
        if n > 0 {
            for j in 0..n {
                a[(0, j)] = -den[j + 1];
                c[j] = num[j + 1] - d * den[j + 1];
            }
            for i in 1..n {
                a[(i, i - 1)] = 1.0;
            }
            b[0] = 1.0;
        }

        Ok(Self { a, b, c, d })
    }

    /// Number of states.
    #[inline]
    pub fn order(&self) -> usize {
        self.b.len()
    }

    /// Direct feedthrough term.
    #[inline]
    pub fn feedthrough(&self) -> f64 {
        self.d
    }

    /// Simulate the response to an arbitrary input sampled at `time`.
    ///
    /// Zero initial state. Returns one output sample per time sample.
    pub fn forced_response(&self, input: &[f64], time: &[f64]) -> Result<Vec<f64>, LtiError> {
        check_time(time)?;
        if input.len() != time.len() {
            return Err(LtiError::LengthMismatch {
                input: input.len(),
                time: time.len(),
            });
        }

        let n = self.order();
        if n == 0 {
            return Ok(input.iter().map(|u| self.d * u).collect());
        }

        let mut output = Vec::with_capacity(time.len());
        let mut x: DVector<f64> = DVector::zeros(n);
        output.push(self.c.dot(&x) + self.d * input[0]);

        let mut disc: Option<Discretization> = None;
        for k in 1..time.len() {
            let dt = time[k] - time[k - 1];
            let reuse = disc
                .as_ref()
                .is_some_and(|dz| (dz.dt - dt).abs() <= DT_REUSE_TOLERANCE * dt.abs().max(dz.dt));
            if !reuse {
                disc = Some(self.discretize(dt));
            }
            if let Some(dz) = disc.as_ref() {
                x = &dz.phi * &x + &dz.gamma_prev * input[k - 1] + &dz.gamma_next * input[k];
            }
            output.push(self.c.dot(&x) + self.d * input[k]);
        }

        Ok(output)
    }

    /// Unit step response sampled at `time`.
    pub fn step_response(&self, time: &[f64]) -> Result<Vec<f64>, LtiError> {
        let input = vec![1.0; time.len()];
        self.forced_response(&input, time)
    }

    fn discretize(&self, dt: f64) -> Discretization {
        let n = self.order();
        let mut m: DMatrix<f64> = DMatrix::zeros(n + 2, n + 2);
        m.view_mut((0, 0), (n, n)).copy_from(&(&self.a * dt));
        m.view_mut((0, n), (n, 1)).copy_from(&(&self.b * dt));
        m[(n, n + 1)] = 1.0;

        let em = m.exp();
        let phi = em.view((0, 0), (n, n)).into_owned();
        let gamma_a: DVector<f64> = em.view((0, n), (n, 1)).column(0).into_owned();
        let gamma_next: DVector<f64> = em.view((0, n + 1), (n, 1)).column(0).into_owned();
        let gamma_prev = &gamma_a - &gamma_next;

        Discretization {
            dt,
            phi,
            gamma_prev,
            gamma_next,
        }
    }
}

/// Reject empty or non-increasing time vectors.
pub(crate) fn check_time(time: &[f64]) -> Result<(), LtiError> {
    if time.is_empty() {
        return Err(LtiError::EmptyInput);
    }
    for (index, pair) in time.windows(2).enumerate() {
        if !(pair[1] > pair[0]) {
            return Err(LtiError::NonMonotonicTime { index: index + 1 });
        }
    }
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn time_grid(stop: f64, dt: f64) -> Vec<f64> {
        let n = (stop / dt).round() as usize;
        (0..n).map(|i| i as f64 * dt).collect()
    }

    #[test]
    fn first_order_step_matches_analytic() {
        let tf = TransferFunction::new(&[1.0], &[1.0, 1.0]);
        let ss = tf.to_state_space().unwrap();
        let t = time_grid(5.0, 0.01);
        let y = ss.step_response(&t).unwrap();
        for (yi, ti) in y.iter().zip(&t) {
            let expected = 1.0 - (-ti).exp();
            assert!((yi - expected).abs() < 1e-9, "t={ti}: {yi} vs {expected}");
        }
    }

    #[test]
    fn ramp_is_exact_under_first_order_hold() {
        // 1/s driven by u = t → y = t²/2
        let ss = TransferFunction::new(&[1.0], &[1.0, 0.0])
            .to_state_space()
            .unwrap();
        let t = time_grid(2.0, 0.05);
        let y = ss.forced_response(&t, &t).unwrap();
        for (yi, ti) in y.iter().zip(&t) {
            assert!((yi - 0.5 * ti * ti).abs() < 1e-10);
        }
    }

    #[test]
    fn second_order_canonical_form() {
        // (s + 3) / (2s² + 4s + 6)
        let ss = TransferFunction::new(&[1.0, 3.0], &[2.0, 4.0, 6.0])
            .to_state_space()
            .unwrap();
        assert_eq!(ss.order(), 2);
        assert_eq!(ss.a[(0, 0)], -2.0);
        assert_eq!(ss.a[(0, 1)], -3.0);
        assert_eq!(ss.a[(1, 0)], 1.0);
        assert_eq!(ss.c[0], 0.5);
        assert_eq!(ss.c[1], 1.5);
        assert_eq!(ss.feedthrough(), 0.0);
    }

    #[test]
    fn biproper_has_feedthrough() {
        // (2s + 1) / (s + 1) = 2 - 1/(s + 1)
        let ss = TransferFunction::new(&[2.0, 1.0], &[1.0, 1.0])
            .to_state_space()
            .unwrap();
        assert_eq!(ss.feedthrough(), 2.0);
        let y = ss.step_response(&[0.0, 0.1]).unwrap();
        assert!((y[0] - 2.0).abs() < 1e-12);
        let expected = 2.0 - (1.0 - (-0.1_f64).exp());
        assert!((y[1] - expected).abs() < 1e-9);
    }

    #[test]
    fn static_gain_has_no_states() {
        let ss = TransferFunction::gain(3.0).to_state_space().unwrap();
        assert_eq!(ss.order(), 0);
        let y = ss.forced_response(&[1.0, 2.0], &[0.0, 1.0]).unwrap();
        assert_eq!(y, vec![3.0, 6.0]);
    }

    #[test]
    fn improper_is_rejected() {
        let tf = TransferFunction::new(&[1.0, 0.0, 0.0], &[1.0, 0.0]);
        assert_eq!(
            StateSpace::from_transfer_function(&tf),
            Err(LtiError::Improper {
                num_degree: 2,
                den_degree: 1
            })
        );
    }

    #[test]
    fn non_uniform_time_is_supported() {
        let ss = TransferFunction::new(&[1.0], &[1.0, 1.0])
            .to_state_space()
            .unwrap();
        let t = [0.0, 0.1, 0.15, 0.5, 2.0];
        let y = ss.step_response(&t).unwrap();
        for (yi, ti) in y.iter().zip(&t) {
            assert!((yi - (1.0 - (-ti).exp())).abs() < 1e-9);
        }
    }

    #[test]
    fn time_checks() {
        let ss = TransferFunction::new(&[1.0], &[1.0, 1.0])
            .to_state_space()
            .unwrap();
        assert_eq!(ss.step_response(&[]), Err(LtiError::EmptyInput));
        assert_eq!(
            ss.step_response(&[0.0, 0.1, 0.1]),
            Err(LtiError::NonMonotonicTime { index: 2 })
        );
        assert_eq!(
            ss.forced_response(&[1.0], &[0.0, 0.1]),
            Err(LtiError::LengthMismatch { input: 1, time: 2 })
        );
    }
}
