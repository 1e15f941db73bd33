//! Scenario file loader with validation.
//!
//! A scenario bundles everything one evaluation needs: plant constants,
//! controller variant and gains, the simulation time grid and the scoring
//! limits. [`load_scenario`] parses through [`ConfigLoader`] and rejects
//! anything [`Validate`] flags before a simulation is attempted.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use arm_common::config::{ConfigError, ConfigLoader, SharedConfig, Validate};
use arm_common::params::{GainSet, PhysicalParameters, ScoreLimits};

use crate::controller::ControllerKind;

// ─── Sections ───────────────────────────────────────────────────────

/// `[controller]`: variant selection and gains.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControllerSection {
    /// Which topology to build.
    pub kind: ControllerKind,
    /// Gains, flattened into the same table.
    #[serde(flatten)]
    pub gains: GainSet,
}

/// `[simulation]`: half-open time grid `start, start + step, … < stop`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSection {
    /// First sample time [s].
    #[serde(default)]
    pub start: f64,
    /// Exclusive end time [s].
    pub stop: f64,
    /// Sample spacing [s].
    pub step: f64,
}

impl SimulationSection {
    /// Number of samples on the grid.
    pub fn sample_count(&self) -> usize {
        ((self.stop - self.start) / self.step).ceil().max(0.0) as usize
    }

    /// Sample times. Each value is `start + i·step`, never accumulated.
    pub fn time_grid(&self) -> Vec<f64> {
        (0..self.sample_count())
            .map(|i| self.start + i as f64 * self.step)
            .collect()
    }
}

impl Validate for SimulationSection {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.start.is_finite() || !self.stop.is_finite() {
            return Err(ConfigError::invalid("simulation.start/stop", "must be finite"));
        }
        if !(self.step > 0.0) || !self.step.is_finite() {
            return Err(ConfigError::invalid(
                "simulation.step",
                format_args!("must be finite and > 0, got {}", self.step),
            ));
        }
        if self.stop <= self.start {
            return Err(ConfigError::invalid(
                "simulation.stop",
                format_args!("({}) must exceed simulation.start ({})", self.stop, self.start),
            ));
        }
        Ok(())
    }
}

// ─── Scenario ───────────────────────────────────────────────────────

/// Complete scenario file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Logging and naming.
    pub shared: SharedConfig,
    /// Plant constants; every field optional.
    #[serde(default)]
    pub plant: PhysicalParameters,
    /// Controller variant and gains.
    pub controller: ControllerSection,
    /// Time grid.
    pub simulation: SimulationSection,
    /// Scoring limits.
    pub objective: ScoreLimits,
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;
        self.plant.validate()?;
        if !self.controller.gains.is_finite() {
            return Err(ConfigError::invalid("controller gains", "must be finite"));
        }
        self.simulation.validate()?;
        self.objective.validate()?;
        Ok(())
    }
}

/// Load and validate a scenario file.
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig, ConfigError> {
    let scenario = ScenarioConfig::load_validated(path)?;
    info!(
        "Scenario '{}' loaded: {:?} controller, {} samples",
        scenario.shared.service_name,
        scenario.controller.kind,
        scenario.simulation.sample_count()
    );
    Ok(scenario)
}

/// Parse and validate a scenario held in memory.
pub fn scenario_from_str(content: &str) -> Result<ScenarioConfig, ConfigError> {
    let scenario = ScenarioConfig::from_toml(content)?;
    scenario.validate()?;
    Ok(scenario)
}

// ─── Tests ──────────────────────────────────────────────────────────
