//! # Arm Model
//!
//! Closed-loop simulation of a vertical drive arm and the objective function
//! used to tune its controller gains.
//!
//! ## Pipeline
//!
//! 1. [`PlantModel`](plant::PlantModel): `P(s) = 1 / (J·s² + mu·s + M·g·l)`
//! 2. [`ControllerStrategy`](controller::ControllerStrategy): PID or I-PD,
//!    closed around the plant at construction
//! 3. [`ResponseEvaluator`](response::ResponseEvaluator): time- and
//!    frequency-domain responses
//! 4. [`ObjectiveScorer`](objective::ObjectiveScorer): trajectory → fitness
//!
//! [`tuning::evaluate_gains`] chains all four for one gain candidate.
//!
//! ## Numeric Engine
//!
//! [`lti`] holds the transfer-function algebra, state-space simulation and
//! frequency sweep everything above is built on.

pub mod config;
pub mod controller;
pub mod error;
pub mod lti;
pub mod objective;
pub mod plant;
pub mod response;
pub mod tuning;
