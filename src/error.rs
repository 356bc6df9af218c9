//! Error types for the charter engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while settling laytime or
//! evaluating a weather warranty.

use thiserror::Error;

/// The main error type for the charter engine.
///
/// All fallible operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use charter_engine::error::EngineError;
///
/// let error = EngineError::InvalidRule {
///     kind: "exception",
///     rule: "shexuu".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid exception rule: shexuu");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A commencement or exception rule string was not recognized.
    #[error("Invalid {kind} rule: {rule}")]
    InvalidRule {
        /// Which family of rule failed to parse ("commencement" or "exception").
        kind: &'static str,
        /// The rule string as supplied.
        rule: String,
    },

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

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
