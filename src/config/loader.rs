//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading penalty policy
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PenaltyPolicy, PenaltyRates, PolicyMetadata};

/// Loads and provides access to the penalty policy configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory.
///
/// # Directory Structure
///
/// ```text
/// config/penalty_policy/
/// ├── policy.yaml  # Policy metadata (name, version, currency)
/// └── rates.yaml   # Penalty rates and calculation defaults
/// ```
///
/// # Example
///
/// ```no_run
/// use penalty_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/penalty_policy").unwrap();
/// println!("Late rate: {}/minute", loader.policy().rates.late_rate_per_minute);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: PenaltyPolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory
    ///   (e.g., "./config/penalty_policy")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let metadata = Self::load_yaml::<PolicyMetadata>(&policy_path)?;

        let rates_path = path.join("rates.yaml");
        let rates = Self::load_yaml::<PenaltyRates>(&rates_path)?;

        Ok(Self {
            policy: PenaltyPolicy::new(metadata, rates),
        })
    }

    /// Creates a loader from an already-constructed policy.
    ///
    /// Useful for tests and embedding callers that assemble the policy in
    /// code instead of reading YAML files.
    pub fn from_policy(policy: PenaltyPolicy) -> Self {
        Self { policy }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded penalty policy.
    pub fn policy(&self) -> &PenaltyPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceCombination;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/penalty_policy"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy().metadata.name, "Attendance Penalty Policy");
        assert_eq!(loader.policy().metadata.currency, "PHP");
    }

    #[test]
    fn test_rates_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let rates = &loader.policy().rates;
        assert_eq!(rates.late_rate_per_minute, dec("1"));
        assert_eq!(rates.absence_penalty, dec("240"));
        assert_eq!(rates.rolling_window_days, 15);
        assert_eq!(rates.source_combination, SourceCombination::Additive);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
