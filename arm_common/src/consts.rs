//! System-wide constants for the arm model workspace.
//!
//! Single source of truth for physical constants, the frequency sweep
//! and scoring defaults. Imported by all crates.

/// Gravitational acceleration [m/s²].
pub const GRAVITY: f64 = 9.81;

/// Default arm length [m].
pub const DEFAULT_ARM_LENGTH: f64 = 0.2;

/// Default lifted mass [kg].
pub const DEFAULT_MASS: f64 = 0.5;

/// Default viscous friction coefficient [N·m·s/rad].
pub const DEFAULT_VISCOUS_FRICTION: f64 = 1.5e-2;

/// Default moment of inertia [kg·m²].
pub const DEFAULT_INERTIA: f64 = 1.0e-2;

/// First angular frequency of the Bode sweep [rad/s].
pub const FREQUENCY_START: f64 = 0.1;

/// Last angular frequency of the Bode sweep [rad/s].
pub const FREQUENCY_STOP: f64 = 100.0;

/// Number of log-spaced points in the Bode sweep.
pub const FREQUENCY_POINTS: usize = 1000;

/// Penalty added to the settling-time term when the limit is missed.
pub const DEFAULT_PENALTY: f64 = 1_000_000.0;

/// Fitness assigned to candidates that cannot be simulated or scored.
pub const WORST_FITNESS: f64 = f64::MAX;

/// Default overshoot/undershoot tolerance around the reference.
pub const DEFAULT_TOLERANCE: f64 = 1.0;

/// Default settling-time limit [s].
pub const DEFAULT_SETTLING_TIME_LIMIT: f64 = 1.0;
