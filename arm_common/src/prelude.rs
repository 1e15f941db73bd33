//! Prelude module for common re-exports.
//!
//! Consumers can do `use arm_common::prelude::*;` and get the most
//! important types without listing individual paths.

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::LogLevel;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, SharedConfig, Validate};

// ─── Parameters ─────────────────────────────────────────────────────
pub use crate::params::{GainSet, PhysicalParameters, ScoreLimits};

// ─── Constants ──────────────────────────────────────────────────────
pub use crate::consts::{
    DEFAULT_PENALTY, FREQUENCY_POINTS, FREQUENCY_START, FREQUENCY_STOP, GRAVITY, WORST_FITNESS,
};
