//! Frequency-domain evaluation.
//!
//! Gain is returned as absolute magnitude (not dB); phase is in radians and
//! unwrapped along the sweep so it stays continuous across ±π.

use core::f64::consts::PI;

use nalgebra::Complex;

use super::transfer_function::TransferFunction;

/// `n` points logarithmically spaced from `start` to `stop` (inclusive).
///
/// Both ends must be positive. The last point is exactly `stop`.
pub fn logspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let lo = start.log10();
            let hi = stop.log10();
            let step = (hi - lo) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        stop
                    } else {
                        10f64.powf(lo + step * i as f64)
                    }
                })
                .collect()
        }
    }
}

/// Magnitude and unwrapped phase of `tf` at each angular frequency.
pub fn evaluate(tf: &TransferFunction, omega: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let values: Vec<Complex<f64>> = omega
        .iter()
        .map(|&w| tf.eval(Complex::new(0.0, w)))
        .collect();

    let magnitude = values.iter().map(|v| v.norm()).collect();
    let phase = unwrap_phase(&values.iter().map(|v| v.arg()).collect::<Vec<_>>());
    (magnitude, phase)
}

/// Remove 2π jumps between consecutive phase samples.
pub fn unwrap_phase(phase: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(phase.len());
    let mut offset = 0.0;
    let mut prev: Option<f64> = None;
    for &p in phase {
        if let Some(last) = prev {
            let delta = p - last;
            if delta > PI {
                offset -= 2.0 * PI * ((delta + PI) / (2.0 * PI)).floor();
            } else if delta < -PI {
                offset += 2.0 * PI * ((-delta + PI) / (2.0 * PI)).floor();
            }
        }
        prev = Some(p);
        out.push(p + offset);
    }
    out
}

// ─── Tests ──────────────────────────────────────────────────────────
