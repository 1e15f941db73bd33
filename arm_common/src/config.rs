//! Scenario and tool configuration: TOML loading and validation.
//!
//! Every config type deserializes with `serde`; [`ConfigLoader`] is
//! blanket-implemented for all of them. Types that carry semantic rules
//! (positive plant constants, a usable settling limit, …) also implement
//! [`Validate`], which unlocks [`ConfigLoader::load_validated`].
//!
//! ```rust,no_run
//! use arm_common::config::{ConfigError, ConfigLoader, SharedConfig, Validate};
//! use arm_common::params::PhysicalParameters;
//! use serde::Deserialize;
//! use std::path::Path;
//!
//! #[derive(Debug, Deserialize)]
//! struct SweepConfig {
//!     shared: SharedConfig,
//!     plant: PhysicalParameters,
//! }
//!
//! impl Validate for SweepConfig {
//!     fn validate(&self) -> Result<(), ConfigError> {
//!         self.shared.validate()?;
//!         self.plant.validate()
//!     }
//! }
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = SweepConfig::load_validated(Path::new("sweep.toml"))?;
//!     println!("plant mass: {} kg", config.plant.mass);
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

/// Config loading failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// No file at the given path.
    #[error("config file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// File exists but could not be read.
    #[error("cannot read {}: {message}", .path.display())]
    Io {
        /// Offending file.
        path: PathBuf,
        /// OS error text.
        message: String,
    },

    /// TOML syntax or schema mismatch.
    #[error("config parse error: {0}")]
    ParseError(String),

    /// Parsed, but a value is out of range.
    #[error("config validation: {0}")]
    ValidationError(String),
}

impl ConfigError {
    /// Shorthand for `ValidationError(format!("{field} {reason}"))`.
    pub fn invalid(field: &str, reason: impl std::fmt::Display) -> Self {
        Self::ValidationError(format!("{field} {reason}"))
    }
}

// ─── Logging ────────────────────────────────────────────────────────

/// Log verbosity selectable from a scenario file (`log_level = "debug"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Per-sample detail.
    Trace,
    /// One line per simulation and score.
    Debug,
    /// Lifecycle messages.
    #[default]
    Info,
    /// Rejected candidates and fallbacks.
    Warn,
    /// Fatal errors only.
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

// ─── Shared Section ─────────────────────────────────────────────────

/// `[shared]` section present in every scenario file.
///
/// ```toml
/// [shared]
/// log_level = "debug"
/// service_name = "ipd-reference"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedConfig {
    /// Default log level when neither `RUST_LOG` nor `--verbose` is given.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Name echoed in logs and reports.
    pub service_name: String,
}

// ─── Loading ────────────────────────────────────────────────────────

/// Semantic checks run after a successful parse.
pub trait Validate {
    /// Returns `ConfigError::ValidationError` naming the first bad field.
    fn validate(&self) -> Result<(), ConfigError>;
}

impl Validate for SharedConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.trim().is_empty() {
            return Err(ConfigError::invalid("shared.service_name", "cannot be empty"));
        }
        Ok(())
    }
}

/// TOML loading for any deserializable config type.
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Read and parse `path`. No semantic validation.
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
            _ => ConfigError::Io {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        })?;
        tracing::debug!("read {} bytes from {}", content.len(), path.display());
        Self::from_toml(&content)
    }

    /// Parse an in-memory TOML document.
    fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// [`load`](Self::load) followed by [`Validate::validate`].
    fn load_validated(path: &Path) -> Result<Self, ConfigError>
    where
        Self: Validate,
    {
        let config = Self::load(path)?;
        config.validate()?;
        Ok(config)
    }
}

impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}

// ─── Tests ──────────────────────────────────────────────────────────
