//! Error types for the Attendance Penalty Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during penalty calculation.

use std::fmt;

/// The main error type for the Attendance Penalty Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. A calculation
/// never swallows a failure into a zero-penalty breakdown: callers can
/// always distinguish "no penalties" from "calculation unavailable".
///
/// # Example
///
/// ```
/// use penalty_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An attendance data fetch from the persistence collaborator failed.
    DataFetch {
        /// Which fetch capability failed (e.g., "attendance", "schedules").
        source: String,
        /// A description of the underlying storage or network failure.
        message: String,
    },

    /// The requested pay period could not be resolved to a date range.
    InvalidPeriod {
        /// A description of what made the period invalid.
        message: String,
    },

    /// A time value was malformed or inconsistent.
    InvalidTime {
        /// The offending time value.
        value: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A general calculation error occurred.
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::ConfigNotFound { path } => {
                write!(f, "Configuration file not found: {path}")
            }
            EngineError::ConfigParseError { path, message } => {
                write!(f, "Failed to parse configuration file '{path}': {message}")
            }
            EngineError::DataFetch { source, message } => {
                write!(f, "Attendance fetch failed from '{source}': {message}")
            }
            EngineError::InvalidPeriod { message } => {
                write!(f, "Invalid pay period: {message}")
            }
            EngineError::InvalidTime { value, message } => {
                write!(f, "Invalid time value '{value}': {message}")
            }
            EngineError::CalculationError { message } => {
                write!(f, "Calculation error: {message}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/rates.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rates.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_data_fetch_displays_source_and_message() {
        let error = EngineError::DataFetch {
            source: "class_attendance".to_string(),
            message: "connection reset".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Attendance fetch failed from 'class_attendance': connection reset"
        );
    }

    #[test]
    fn test_invalid_period_displays_message() {
        let error = EngineError::InvalidPeriod {
            message: "month 13 is out of range".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid pay period: month 13 is out of range");
    }

    #[test]
    fn test_invalid_time_displays_value_and_message() {
        let error = EngineError::InvalidTime {
            value: "25:99".to_string(),
            message: "not a valid clock time".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid time value '25:99': not a valid clock time"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "negative penalty computed".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Calculation error: negative penalty computed"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_data_fetch() -> EngineResult<()> {
            Err(EngineError::DataFetch {
                source: "attendance".to_string(),
                message: "timeout".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_data_fetch()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
