//! Error types for the payroll engine.
//!
//! The payroll core itself never fails: malformed rows degrade to a
//! zero-salary payslip. These errors cover the edges around it, namely
//! loading statutory configuration, reading and writing spreadsheets, and
//! validating readiness-quiz answers.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use prominent_payroll::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/schedule.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/schedule.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
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

    /// Configuration parsed but describes an unusable schedule.
    #[error("Invalid statutory configuration: {message}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        message: String,
    },

    /// A spreadsheet could not be opened or decoded.
    #[error("Failed to read spreadsheet '{path}': {message}")]
    SheetRead {
        /// The spreadsheet path (or `<stream>` for in-memory input).
        path: String,
        /// A description of the read error.
        message: String,
    },

    /// The spreadsheet extension is not one the reader understands.
    #[error("Unsupported spreadsheet format: {path}")]
    UnsupportedSheet {
        /// The offending path.
        path: String,
    },

    /// Writing an export failed.
    #[error("Export failed: {message}")]
    Export {
        /// A description of the write error.
        message: String,
    },

    /// A quiz answer referenced a question that does not exist.
    #[error("Unknown quiz question: {question_id}")]
    UnknownQuestion {
        /// The unknown question id.
        question_id: u32,
    },

    /// A quiz answer carried a score outside the 1-5 scale.
    #[error("Invalid score {score} for question {question_id}: expected 1-5")]
    InvalidAnswer {
        /// The question the answer was for.
        question_id: u32,
        /// The rejected score.
        score: u8,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

impl From<csv::Error> for PayrollError {
    fn from(error: csv::Error) -> Self {
        PayrollError::SheetRead {
            path: "<stream>".to_string(),
            message: error.to_string(),
        }
    }
}
