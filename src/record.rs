//! Parsed log records.
//!
//! This module provides [`LogRecord`], the structured form of one log line, and
//! [`parse_line`], which decodes a raw line into it.
//!
//! # Line Format
//!
//! ```text
//! <actor>,<timestamp>,<message>
//! alice,23.05.2015 at 22:39:28,deployed the new build
//! ```
//!
//! The timestamp grammar is `dd.MM.yyyy at H:mm:ss` (24-hour clock, the hour
//! may be a single digit). The message is everything after the second comma,
//! so messages may themselves contain commas.
//!
//! # Examples
//!
//! ```
//! use log_analyzer::record::parse_line;
//! use chrono::Timelike;
//!
//! let record = parse_line("alice,01.01.2020 at 9:05:00,hello, world")?;
//! assert_eq!(record.actor(), "alice");
//! assert_eq!(record.message(), "hello, world");
//! assert_eq!(record.timestamp().hour(), 9);
//! assert_eq!(record.raw_line(), "alice,01.01.2020 at 9:05:00,hello, world");
//! # Ok::<(), log_analyzer::LogAnalyzerError>(())
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{LogAnalyzerError, Result};

/// `chrono` format string for record timestamps.
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y at %H:%M:%S";

/// Human-readable form of [`TIMESTAMP_FORMAT`], used in error messages.
pub const TIMESTAMP_PATTERN: &str = "dd.MM.yyyy at H:mm:ss";

/// Field delimiter within a log line.
pub const FIELD_DELIMITER: char = ',';

/// One parsed log entry.
///
/// Records are immutable once parsed. The input line is kept verbatim in
/// [`raw_line`](Self::raw_line) so output reproduces the input text exactly
/// instead of re-serializing the parsed fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    actor: String,
    timestamp: NaiveDateTime,
    message: String,
    raw_line: String,
}

impl LogRecord {
    /// The user that produced the entry (first field).
    pub fn actor(&self) -> &str {
        &self.actor
    }

    /// When the entry was written (second field).
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// The free-text message (everything after the second comma).
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The line exactly as it was read.
    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    /// Consumes the record, returning the input line.
    pub fn into_raw_line(self) -> String {
        self.raw_line
    }
}

impl std::fmt::Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw_line)
    }
}

impl std::str::FromStr for LogRecord {
    type Err = LogAnalyzerError;

    fn from_str(s: &str) -> Result<Self> {
        parse_line(s)
    }
}

/// Parses a timestamp in the `dd.MM.yyyy at H:mm:ss` grammar.
///
/// # Errors
///
/// Returns [`LogAnalyzerError::InvalidTimestamp`] if the text does not match.
///
/// # Examples
///
/// ```
/// use log_analyzer::record::parse_timestamp;
///
/// assert!(parse_timestamp("23.05.2015 at 22:39:28").is_ok());
/// assert!(parse_timestamp("2015-05-23 22:39:28").is_err());
/// ```
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .map_err(|_| LogAnalyzerError::invalid_timestamp(text))
}

/// Decodes one raw line into a [`LogRecord`].
///
/// A trailing `\r` from CRLF input is stripped before parsing and is not part
/// of the stored raw line.
///
/// # Errors
///
/// - [`LogAnalyzerError::MalformedRecord`] if the line has fewer than three fields
/// - [`LogAnalyzerError::InvalidTimestamp`] if the second field is not a valid timestamp
pub fn parse_line(line: &str) -> Result<LogRecord> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    let mut fields = line.splitn(3, FIELD_DELIMITER);
    let (Some(actor), Some(timestamp), Some(message)) = (fields.next(), fields.next(), fields.next())
    else {
        let found = line.split(FIELD_DELIMITER).count();
        return Err(LogAnalyzerError::malformed(line, found));
    };

    Ok(LogRecord {
        actor: actor.to_string(),
        timestamp: parse_timestamp(timestamp)?,
        message: message.to_string(),
        raw_line: line.to_string(),
    })
}
