//! Configuration loading and management for the Attendance Penalty Engine.
//!
//! This module provides functionality to load penalty policy configuration
//! from YAML files, including policy metadata and penalty rates.
//!
//! # Example
//!
//! ```no_run
//! use penalty_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/penalty_policy").unwrap();
//! println!("Loaded policy: {}", config.policy().metadata.name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PenaltyPolicy, PenaltyRates, PolicyMetadata, SourceCombination};
