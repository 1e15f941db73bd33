//! Parameter types shared by the plant, controller and scorer.
//!
//! Defines `PhysicalParameters`, `GainSet` and `ScoreLimits`. All three are
//! plain `Copy` values deserializable from TOML with documented defaults.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, Validate};
use crate::consts::{
    DEFAULT_ARM_LENGTH, DEFAULT_INERTIA, DEFAULT_MASS, DEFAULT_PENALTY,
    DEFAULT_SETTLING_TIME_LIMIT, DEFAULT_TOLERANCE, DEFAULT_VISCOUS_FRICTION,
};

// ─── Plant ──────────────────────────────────────────────────────────

/// Physical constants of the vertical drive arm.
///
/// Together with [`GRAVITY`](crate::consts::GRAVITY) these fully determine
/// the plant transfer function `1 / (J·s² + mu·s + M·g·l)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalParameters {
    /// Arm length `l` [m].
    #[serde(default = "default_arm_length")]
    pub arm_length: f64,
    /// Lifted mass `M` [kg].
    #[serde(default = "default_mass")]
    pub mass: f64,
    /// Viscous friction coefficient `mu` [N·m·s/rad].
    #[serde(default = "default_viscous_friction")]
    pub viscous_friction: f64,
    /// Moment of inertia `J` [kg·m²].
    #[serde(default = "default_inertia")]
    pub inertia: f64,
}

fn default_arm_length() -> f64 {
    DEFAULT_ARM_LENGTH
}

fn default_mass() -> f64 {
    DEFAULT_MASS
}

fn default_viscous_friction() -> f64 {
    DEFAULT_VISCOUS_FRICTION
}

fn default_inertia() -> f64 {
    DEFAULT_INERTIA
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        Self {
            arm_length: DEFAULT_ARM_LENGTH,
            mass: DEFAULT_MASS,
            viscous_friction: DEFAULT_VISCOUS_FRICTION,
            inertia: DEFAULT_INERTIA,
        }
    }
}

/// Every constant finite and strictly positive.
///
/// The plant itself accepts anything; this is for config-file input.
impl Validate for PhysicalParameters {
    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("arm_length", self.arm_length),
            ("mass", self.mass),
            ("viscous_friction", self.viscous_friction),
            ("inertia", self.inertia),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid(
                    &format!("plant.{name}"),
                    format_args!("must be finite and > 0, got {value}"),
                ));
            }
        }
        Ok(())
    }
}

// ─── Gains ──────────────────────────────────────────────────────────

/// Three-term controller gains.
///
/// Immutable for the lifetime of a controller; re-tuning builds a new one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GainSet {
    /// Proportional gain.
    #[serde(default)]
    pub kp: f64,
    /// Derivative gain.
    #[serde(default)]
    pub kd: f64,
    /// Integral gain.
    #[serde(default)]
    pub ki: f64,
}

impl GainSet {
    /// Build a gain set from `(kp, kd, ki)`.
    pub const fn new(kp: f64, kd: f64, ki: f64) -> Self {
        Self { kp, kd, ki }
    }

    /// Returns true if all gains are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.kp.is_finite() && self.kd.is_finite() && self.ki.is_finite()
    }
}

// ─── Scoring ────────────────────────────────────────────────────────

/// Thresholds used to reduce a response trajectory to a fitness value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreLimits {
    /// Target value the output should track.
    pub reference: f64,
    /// Allowed excursion above the reference.
    #[serde(default = "default_tolerance")]
    pub overshoot_tolerance: f64,
    /// Allowed excursion below the reference.
    #[serde(default = "default_tolerance")]
    pub undershoot_tolerance: f64,
    /// Settling-time limit [s].
    #[serde(default = "default_settling_time_limit")]
    pub settling_time_limit: f64,
    /// Truncation time [s] for the residual vibration capture.
    /// `None` = same as `settling_time_limit`.
    #[serde(default)]
    pub capture_window: Option<f64>,
    /// Penalty added when the settling-time limit is missed.
    #[serde(default = "default_penalty")]
    pub penalty: f64,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_settling_time_limit() -> f64 {
    DEFAULT_SETTLING_TIME_LIMIT
}

fn default_penalty() -> f64 {
    DEFAULT_PENALTY
}

impl ScoreLimits {
    /// Limits for `reference` with every other threshold at its default.
    pub const fn new(reference: f64) -> Self {
        Self {
            reference,
            overshoot_tolerance: DEFAULT_TOLERANCE,
            undershoot_tolerance: DEFAULT_TOLERANCE,
            settling_time_limit: DEFAULT_SETTLING_TIME_LIMIT,
            capture_window: None,
            penalty: DEFAULT_PENALTY,
        }
    }

    /// Set both tolerances.
    pub const fn with_tolerances(mut self, overshoot: f64, undershoot: f64) -> Self {
        self.overshoot_tolerance = overshoot;
        self.undershoot_tolerance = undershoot;
        self
    }

    /// Set the settling-time limit.
    pub const fn with_settling_time_limit(mut self, limit: f64) -> Self {
        self.settling_time_limit = limit;
        self
    }

    /// Decouple the residual vibration capture window from the settling limit.
    pub const fn with_capture_window(mut self, window: f64) -> Self {
        self.capture_window = Some(window);
        self
    }

    /// Set the settling-time penalty.
    pub const fn with_penalty(mut self, penalty: f64) -> Self {
        self.penalty = penalty;
        self
    }

    /// Effective capture window [s].
    #[inline]
    pub fn capture_window(&self) -> f64 {
        self.capture_window.unwrap_or(self.settling_time_limit)
    }

    /// Upper edge of the tolerance band.
    #[inline]
    pub fn upper_bound(&self) -> f64 {
        self.reference + self.overshoot_tolerance
    }

    /// Lower edge of the tolerance band.
    #[inline]
    pub fn lower_bound(&self) -> f64 {
        self.reference - self.undershoot_tolerance
    }
}

impl Validate for ScoreLimits {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.reference.is_finite() {
            return Err(ConfigError::invalid("objective.reference", "must be finite"));
        }
        if !(self.overshoot_tolerance >= 0.0 && self.undershoot_tolerance >= 0.0) {
            return Err(ConfigError::invalid("objective tolerances", "must be >= 0"));
        }
        if !(self.settling_time_limit > 0.0) || !self.settling_time_limit.is_finite() {
            return Err(ConfigError::invalid(
                "objective.settling_time_limit",
                format_args!("must be finite and > 0, got {}", self.settling_time_limit),
            ));
        }
        if let Some(window) = self.capture_window {
            if !(window > 0.0) || !window.is_finite() {
                return Err(ConfigError::invalid(
                    "objective.capture_window",
                    format_args!("must be finite and > 0, got {window}"),
                ));
            }
        }
        if !(self.penalty >= 0.0) {
            return Err(ConfigError::invalid("objective.penalty", "must be >= 0"));
        }
        Ok(())
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
