//! Error types for the WageLift salary engine.
//!
//! Every failure the engine can signal is a variant of [`EngineError`],
//! produced at the point the failure occurs. Data-quality problems in a
//! salary entry are not errors; they are reported by
//! [`validate_salary_entry`](crate::calculation::validate_salary_entry).

use thiserror::Error;

/// The main error type for the salary engine.
///
/// # Example
///
/// ```
/// use wagelift_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "current_salary".to_string(),
///     message: "current salary must be positive".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input 'current_salary': current salary must be positive"
/// );
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

    /// An operation was called with an argument outside its precondition.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The argument or field that was rejected.
        field: String,
        /// A description of the violated precondition.
        message: String,
    },

    /// A display string could not be parsed back into an amount.
    #[error("Cannot parse salary display '{input}'")]
    InvalidSalaryDisplay {
        /// The text that failed to parse.
        input: String,
    },

    /// The arithmetic result cannot be represented.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
