//! Assistant crate for the skill dashboard.
//!
//! This crate ties the catalog to the matching pipeline and turns the
//! results into the messages the floating assistant shows.

pub mod assistant;
pub mod config;
pub mod message;

pub use assistant::{Assistant, EventMatch};
pub use config::{ConfigError, EngineConfig, MatcherKind};
