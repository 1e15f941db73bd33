//! Polynomial helpers on coefficient slices.
//!
//! Coefficients are stored in descending powers of `s`:
//! ```text
//! [a0, a1, a2]  ≙  a0·s² + a1·s + a2
//! ```

use nalgebra::Complex;

/// Strip leading zero coefficients. The zero polynomial becomes `[0.0]`.
pub fn trim(coeffs: &[f64]) -> Vec<f64> {
    match coeffs.iter().position(|&c| c != 0.0) {
        Some(first) => coeffs[first..].to_vec(),
        None => vec![0.0],
    }
}

/// Degree of a trimmed polynomial (the zero polynomial has degree 0).
#[inline]
pub fn degree(coeffs: &[f64]) -> usize {
    coeffs.len().saturating_sub(1)
}

/// Returns true if every coefficient is exactly zero.
#[inline]
pub fn is_zero(coeffs: &[f64]) -> bool {
    coeffs.iter().all(|&c| c == 0.0)
}

/// Returns true if every coefficient is finite.
#[inline]
pub fn is_finite(coeffs: &[f64]) -> bool {
    coeffs.iter().all(|c| c.is_finite())
}

/// Polynomial product (coefficient convolution).
pub fn mul(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return vec![0.0];
    }
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            out[i + j] += ai * bj;
        }
    }
    trim(&out)
}

/// Polynomial sum, aligned on the constant term.
pub fn add(a: &[f64], b: &[f64]) -> Vec<f64> {
    let len = a.len().max(b.len());
    let mut out = vec![0.0; len];
    for (k, &c) in a.iter().rev().enumerate() {
        out[len - 1 - k] += c;
    }
    for (k, &c) in b.iter().rev().enumerate() {
        out[len - 1 - k] += c;
    }
    trim(&out)
}

/// Scale every coefficient by `k`.
pub fn scale(coeffs: &[f64], k: f64) -> Vec<f64> {
    trim(&coeffs.iter().map(|c| c * k).collect::<Vec<_>>())
}

/// Evaluate at a complex point (Horner's scheme).
pub fn eval_complex(coeffs: &[f64], s: Complex<f64>) -> Complex<f64> {
    coeffs
        .iter()
        .fold(Complex::new(0.0, 0.0), |acc, &c| acc * s + c)
}

/// Evaluate at a real point (Horner's scheme).
pub fn eval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}

// ─── Tests ──────────────────────────────────────────────────────────
