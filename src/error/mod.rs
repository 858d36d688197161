//! Error handling for the no-show analysis.
//!
//! Two layers of errors exist. [`AnalysisError`] covers faults of the run
//! itself (I/O, configuration, result files) and is propagated with `?`.
//! [`RecordError`] describes why a single input line produced no
//! observations; it never escapes the per-record boundary.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Specialized error type for analysis runs
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Error opening, reading or writing a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Input path does not exist or contains no readable files
    #[error("Input not found: {}", .0.display())]
    InputNotFound(PathBuf),
    /// Output directory already exists
    #[error("Output directory already exists: {}", .0.display())]
    OutputExists(PathBuf),
    /// A line of a result file could not be parsed
    #[error("Invalid result line {line_number}: {reason}")]
    InvalidResultLine { line_number: usize, reason: String },
    /// An analysis key string could not be parsed
    #[error("Invalid analysis key '{0}'")]
    InvalidKey(String),
    /// Configuration value is not usable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Error serializing a report
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// A background task failed to complete
    #[error("Task error: {0}")]
    Task(String),
}

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Reasons a single input line yields no observations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The line is the CSV header
    #[error("header line")]
    HeaderLine,
    /// A required field is empty
    #[error("required field '{field}' is empty")]
    IncompleteRecord { field: &'static str },
    /// Age is not an integer or is outside 0..=120
    #[error("invalid age '{raw}'")]
    InvalidAge { raw: String },
    /// The appointment date precedes the scheduling date
    #[error("negative lead time of {days} days")]
    InvalidLeadTime { days: i64 },
    /// Any other structural failure
    #[error("malformed record: {reason}")]
    Malformed { reason: String },
}

impl RecordError {
    /// Create a malformed-record error
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }

    /// Whether this rejection must be counted as a malformed record.
    ///
    /// Header lines, empty required fields, invalid ages and negative lead
    /// times are ordinary rejections and stay uncounted.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}
