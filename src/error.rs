//! Unified error types for log-analyzer.
//!
//! This module provides a single [`LogAnalyzerError`] enum that covers every
//! failure the pipeline can report.
//!
//! # Error Handling Philosophy
//!
//! - **Configuration errors** are fatal and raised before any file is read
//! - **Record errors** ([`MalformedRecord`](LogAnalyzerError::MalformedRecord),
//!   [`InvalidTimestamp`](LogAnalyzerError::InvalidTimestamp)) abort only the
//!   file they occur in and are reported through
//!   [`DistributionReport`](crate::core::distributor::DistributionReport)
//! - **I/O errors** while writing the final output are fatal

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::record::TIMESTAMP_PATTERN;

/// A specialized [`Result`] type for log-analyzer operations.
///
/// # Example
///
/// ```rust
/// use log_analyzer::error::Result;
/// use log_analyzer::LogRecord;
///
/// fn my_function() -> Result<Vec<LogRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, LogAnalyzerError>;

/// The error type for all log-analyzer operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LogAnalyzerError {
    /// The analyzer was configured inconsistently.
    ///
    /// This happens when:
    /// - No filter predicate is configured
    /// - No output mode (plain, grouping, time unit) can be resolved
    /// - A time-unit specification cannot be parsed
    /// - A time period is missing its separator or holds an invalid timestamp
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of what's wrong
        message: String,
    },

    /// A line has fewer than three comma-separated fields.
    #[error("Malformed record{}: expected 3 comma-separated fields, found {fields}: '{line}'", line_suffix(.line_number))]
    MalformedRecord {
        /// The offending line, verbatim
        line: String,
        /// Number of fields that were found
        fields: usize,
        /// 1-based line number within its file, if known
        line_number: Option<usize>,
    },

    /// A timestamp does not match the `dd.MM.yyyy at H:mm:ss` grammar.
    #[error("Invalid timestamp '{input}'{}. Expected format: {expected}", line_suffix(.line_number))]
    InvalidTimestamp {
        /// The text that failed to parse
        input: String,
        /// Expected format description
        expected: &'static str,
        /// 1-based line number within its file, if known
        line_number: Option<usize>,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Processing of a single input file failed.
    #[error("Failed to process {}: {source}", path.display())]
    File {
        /// The file that failed
        path: PathBuf,
        /// What went wrong inside the file
        #[source]
        source: Box<LogAnalyzerError>,
    },

    /// The worker pool could not be created.
    #[error("Worker pool error: {0}")]
    WorkerPool(String),

    /// Some input files failed while the abort policy was active.
    #[error("{failed} of {total} input files failed to process")]
    PartialFailure {
        /// Number of failed files
        failed: usize,
        /// Number of files submitted
        total: usize,
    },
}

#[allow(clippy::ref_option)]
fn line_suffix(line_number: &Option<usize>) -> String {
    line_number
        .map(|n| format!(" at line {n}"))
        .unwrap_or_default()
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl LogAnalyzerError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        LogAnalyzerError::Configuration {
            message: message.into(),
        }
    }

    /// Creates a malformed record error without line information.
    pub fn malformed(line: impl Into<String>, fields: usize) -> Self {
        LogAnalyzerError::MalformedRecord {
            line: line.into(),
            fields,
            line_number: None,
        }
    }

    /// Creates an invalid timestamp error without line information.
    pub fn invalid_timestamp(input: impl Into<String>) -> Self {
        LogAnalyzerError::InvalidTimestamp {
            input: input.into(),
            expected: TIMESTAMP_PATTERN,
            line_number: None,
        }
    }

    /// Wraps an error with the path of the file it occurred in.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        LogAnalyzerError::File {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// Attaches a 1-based line number to record-level errors.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn at_line(self, number: usize) -> Self {
        match self {
            LogAnalyzerError::MalformedRecord { line, fields, .. } => {
                LogAnalyzerError::MalformedRecord {
                    line,
                    fields,
                    line_number: Some(number),
                }
            }
            LogAnalyzerError::InvalidTimestamp {
                input, expected, ..
            } => LogAnalyzerError::InvalidTimestamp {
                input,
                expected,
                line_number: Some(number),
            },
            other => other,
        }
    }

    /// Returns the innermost error, looking through [`File`](Self::File) wrappers.
    pub fn root(&self) -> &LogAnalyzerError {
        match self {
            LogAnalyzerError::File { source, .. } => source.root(),
            other => other,
        }
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self.root(), LogAnalyzerError::Configuration { .. })
    }

    /// Returns `true` if this is a malformed record error.
    pub fn is_malformed_record(&self) -> bool {
        matches!(self.root(), LogAnalyzerError::MalformedRecord { .. })
    }

    /// Returns `true` if this is a timestamp error.
    pub fn is_invalid_timestamp(&self) -> bool {
        matches!(self.root(), LogAnalyzerError::InvalidTimestamp { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self.root(), LogAnalyzerError::Io(_))
    }
}

// ============================================================================
// Tests
// ============================================================================
