//! Arm Common Library
//!
//! This crate provides the parameter types, constants and configuration
//! loading utilities shared by the arm model workspace crates.
//!
//! # Module Structure
//!
//! - [`consts`] - Physical constants, sweep limits and scoring defaults
//! - [`params`] - Plant, gain and scoring parameter types
//! - [`config`] - Configuration loading traits and types
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use arm_common::prelude::*;
//!
//! let plant = PhysicalParameters::default();
//! assert!(plant.validate().is_ok());
//! let gains = GainSet::new(2.0, 0.1, 10.0);
//! assert_eq!(gains.kp, 2.0);
//! ```

pub mod config;
pub mod consts;
pub mod params;
pub mod prelude;
