//! Error types for the payroll calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll calculation.

use thiserror::Error;

/// The main error type for the payroll calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The break schedule configuration violated a structural invariant.
    #[error("Invalid break schedule: {message}")]
    InvalidBreakSchedule {
        /// A description of the violated invariant.
        message: String,
    },

    /// A work schedule CSV was missing one or more required columns.
    #[error("Work schedule is missing required column(s): {}", missing.join(", "))]
    ScheduleFormat {
        /// The required column names that were not found in the header.
        missing: Vec<String>,
    },

    /// A time-of-day string could not be parsed as "HH:MM".
    #[error("Invalid time value '{value}': expected 24-hour HH:MM")]
    InvalidTime {
        /// The value that failed to parse.
        value: String,
    },

    /// An allowance or deduction entry was malformed.
    #[error("Invalid adjustment '{name}': {message}")]
    InvalidAdjustment {
        /// The name of the allowance or deduction line.
        name: String,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A pay period had inconsistent dates.
    #[error("Invalid pay period: {message}")]
    InvalidPeriod {
        /// A description of the inconsistency.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
