//! Filter records by actor, time window and message text.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for narrowing record collections.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Actor | [`with_actor`](FilterConfig::with_actor) | Records whose actor equals the value exactly |
//! | Window | [`with_window`](FilterConfig::with_window) | Records strictly between two timestamps |
//! | Message | [`with_message`](FilterConfig::with_message) | Records whose message contains a literal substring |
//!
//! # Examples
//!
//! ```
//! use log_analyzer::core::filter::{FilterConfig, apply_filters};
//! use log_analyzer::record::parse_line;
//!
//! # fn main() -> log_analyzer::Result<()> {
//! let records = vec![
//!     parse_line("alice,01.01.2020 at 10:00:00,hello")?,
//!     parse_line("bob,01.01.2020 at 11:00:00,world")?,
//!     parse_line("alice,01.01.2020 at 12:00:00,again")?,
//! ];
//!
//! let config = FilterConfig::new()
//!     .with_actor("alice")
//!     .with_period("01.01.2020 at 10:00:00-01.01.2020 at 13:00:00")?;
//!
//! let filtered = apply_filters(records, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].message(), "again");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Actor matching is exact and case-sensitive
//! - The time window excludes both of its boundaries
//! - Message matching is a literal substring test, not a pattern
//! - Multiple filters are combined with AND logic

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::LogRecord;
use crate::error::{LogAnalyzerError, Result};
use crate::record::parse_timestamp;

/// Separator between the two timestamps of a period string.
pub const PERIOD_SEPARATOR: char = '-';

/// An open time interval `(start, end)`.
///
/// A timestamp is inside the window only if it is strictly after `start` and
/// strictly before `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Exclusive lower bound.
    pub start: NaiveDateTime,
    /// Exclusive upper bound.
    pub end: NaiveDateTime,
}

impl TimeWindow {
    /// Creates a window from its two exclusive bounds.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Parses `"<timestamp>-<timestamp>"`.
    ///
    /// Timestamps never contain `-`, so the string is split on the first one.
    ///
    /// # Errors
    ///
    /// Returns [`LogAnalyzerError::Configuration`] when the separator is
    /// missing or either side is not a valid timestamp.
    pub fn parse(period: &str) -> Result<Self> {
        let (start, end) = period.split_once(PERIOD_SEPARATOR).ok_or_else(|| {
            LogAnalyzerError::configuration(format!(
                "time period '{period}' must have the form <start>{PERIOD_SEPARATOR}<end>"
            ))
        })?;
        let bound = |text: &str| {
            parse_timestamp(text).map_err(|e| {
                LogAnalyzerError::configuration(format!("time period '{period}': {e}"))
            })
        };
        Ok(Self::new(bound(start)?, bound(end)?))
    }

    /// Returns `true` if `timestamp` lies strictly inside the window.
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.start < timestamp && timestamp < self.end
    }
}

impl std::str::FromStr for TimeWindow {
    type Err = LogAnalyzerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Configuration for filtering records.
///
/// Filters are combined with AND logic: a record must match all active
/// filters to be kept. At least one filter must be active for the analyzer to
/// accept the configuration (see [`validate`](Self::validate)).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Keep only records from this actor (exact match).
    pub actor: Option<String>,

    /// Keep only records strictly inside this window.
    pub window: Option<TimeWindow>,

    /// Keep only records whose message contains this text.
    pub message: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the actor filter.
    #[must_use]
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Sets the time window filter from already parsed bounds.
    #[must_use]
    pub fn with_window(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.window = Some(TimeWindow::new(start, end));
        self
    }

    /// Sets the time window filter from a `"<start>-<end>"` string.
    ///
    /// # Examples
    ///
    /// ```
    /// use log_analyzer::core::filter::FilterConfig;
    ///
    /// # fn main() -> log_analyzer::Result<()> {
    /// let config = FilterConfig::new()
    ///     .with_period("01.01.2020 at 0:00:00-02.01.2020 at 0:00:00")?;
    /// assert!(config.window.is_some());
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_period(mut self, period: &str) -> Result<Self> {
        self.window = Some(TimeWindow::parse(period)?);
        Ok(self)
    }

    /// Sets the message substring filter.
    #[must_use]
    pub fn with_message(mut self, substring: impl Into<String>) -> Self {
        self.message = Some(substring.into());
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.actor.is_some() || self.window.is_some() || self.message.is_some()
    }

    /// Checks that at least one filter is configured.
    pub fn validate(&self) -> Result<()> {
        if self.is_active() {
            Ok(())
        } else {
            Err(LogAnalyzerError::configuration(
                "at least one of user, time period or message filter must be set",
            ))
        }
    }

    /// Returns `true` if `record` passes every configured filter.
    ///
    /// Unconfigured filters are vacuously true.
    pub fn matches(&self, record: &LogRecord) -> bool {
        self.actor
            .as_deref()
            .is_none_or(|actor| matches_actor(record, actor))
            && self.window.is_none_or(|window| in_window(record, &window))
            && self
                .message
                .as_deref()
                .is_none_or(|substring| contains_message(record, substring))
    }
}

/// Exact equality between the record's actor and `actor`.
pub fn matches_actor(record: &LogRecord, actor: &str) -> bool {
    record.actor() == actor
}

/// `true` iff `window.start < record.timestamp < window.end`.
pub fn in_window(record: &LogRecord, window: &TimeWindow) -> bool {
    window.contains(record.timestamp())
}

/// Literal substring test on the record's message.
pub fn contains_message(record: &LogRecord, substring: &str) -> bool {
    record.message().contains(substring)
}

/// Filters records based on the provided configuration.
///
/// Configured filters are applied as successive narrowing passes in a fixed
/// order: actor, then window, then message. Relative order of the surviving
/// records is preserved. If no filters are active, returns the input unchanged.
pub fn apply_filters(records: Vec<LogRecord>, config: &FilterConfig) -> Vec<LogRecord> {
    let mut records = records;

    if let Some(ref actor) = config.actor {
        records.retain(|r| matches_actor(r, actor));
    }
    if let Some(ref window) = config.window {
        records.retain(|r| in_window(r, window));
    }
    if let Some(ref substring) = config.message {
        records.retain(|r| contains_message(r, substring));
    }

    records
}
