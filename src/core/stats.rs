//! Count grouping-actor and time-unit matches over the merged results.
//!
//! # Output Modes
//!
//! | Request | Mode | Trailing summary |
//! |---------|------|------------------|
//! | nothing | error | n/a |
//! | [`plain`](StatsRequest::plain) | [`OutputMode::Plain`] | none |
//! | grouping actor | [`OutputMode::Grouping`] | user count |
//! | time unit | [`OutputMode::TimeUnit`] | time-unit count |
//! | both | [`OutputMode::Both`] | user count, then time-unit count |
//!
//! The aggregator never filters: every record is emitted, whether or not it
//! incremented a counter.
//!
//! # Example
//!
//! ```
//! use log_analyzer::core::stats::{StatsRequest, aggregate};
//! use log_analyzer::record::parse_line;
//!
//! # fn main() -> log_analyzer::Result<()> {
//! let records = vec![
//!     parse_line("alice,01.01.2020 at 10:00:00,hello")?,
//!     parse_line("bob,01.01.2020 at 11:00:00,alice says hi")?,
//! ];
//! let mode = StatsRequest::new().with_grouping_actor("alice").resolve()?;
//!
//! let output = aggregate(records, &mode);
//! assert_eq!(output.statistics.grouping_count(), Some(2));
//! assert_eq!(
//!     output.lines.last().map(String::as_str),
//!     Some("The number of records with the username alice = 2")
//! );
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use super::time_unit::TimeUnitSpec;
use crate::error::{LogAnalyzerError, Result};
use crate::record::LogRecord;

/// Which statistics to compute over the filtered records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRequest {
    /// Count records whose raw line contains this text.
    pub grouping_actor: Option<String>,

    /// Count records whose timestamp matches this calendar field.
    pub time_unit: Option<TimeUnitSpec>,

    /// Explicitly ask for filtered lines without any summary.
    #[serde(default)]
    pub plain: bool,
}

impl StatsRequest {
    /// Creates an empty request. It does not resolve until something is set.
    pub fn new() -> Self {
        Self::default()
    }

    /// A request for plain output with no summary lines.
    pub fn plain() -> Self {
        Self {
            plain: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_grouping_actor(mut self, actor: impl Into<String>) -> Self {
        self.grouping_actor = Some(actor.into());
        self
    }

    #[must_use]
    pub fn with_time_unit(mut self, spec: TimeUnitSpec) -> Self {
        self.time_unit = Some(spec);
        self
    }

    /// Parses and sets the time unit from `"<value> <unit>"`.
    pub fn with_time_unit_str(self, spec: &str) -> Result<Self> {
        Ok(self.with_time_unit(spec.parse()?))
    }

    /// Resolves the output mode.
    ///
    /// Statistics take precedence over the plain flag.
    ///
    /// # Errors
    ///
    /// Returns [`LogAnalyzerError::Configuration`] when neither statistic nor
    /// plain output was requested.
    pub fn resolve(&self) -> Result<OutputMode> {
        match (&self.grouping_actor, self.time_unit) {
            (Some(actor), Some(spec)) => Ok(OutputMode::Both {
                actor: actor.clone(),
                spec,
            }),
            (Some(actor), None) => Ok(OutputMode::Grouping {
                actor: actor.clone(),
            }),
            (None, Some(spec)) => Ok(OutputMode::TimeUnit { spec }),
            (None, None) if self.plain => Ok(OutputMode::Plain),
            (None, None) => Err(LogAnalyzerError::configuration(
                "no output mode selected: set a grouping user, a time unit, or plain output",
            )),
        }
    }
}

/// The resolved output mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Filtered lines only.
    Plain,
    /// Lines plus the grouping-actor count.
    Grouping { actor: String },
    /// Lines plus the time-unit count.
    TimeUnit { spec: TimeUnitSpec },
    /// Lines plus both counts.
    Both { actor: String, spec: TimeUnitSpec },
}

impl OutputMode {
    fn grouping_actor(&self) -> Option<&str> {
        match self {
            OutputMode::Grouping { actor } | OutputMode::Both { actor, .. } => Some(actor),
            _ => None,
        }
    }

    fn time_unit(&self) -> Option<TimeUnitSpec> {
        match self {
            OutputMode::TimeUnit { spec } | OutputMode::Both { spec, .. } => Some(*spec),
            _ => None,
        }
    }
}

/// Count of records whose raw line contains the grouping actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupingCount {
    pub actor: String,
    pub count: usize,
}

/// Count of records whose timestamp matched the time-unit spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeUnitCount {
    pub spec: TimeUnitSpec,
    pub count: usize,
}

/// Counters computed in one pass over the results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Total records emitted.
    pub records: usize,
    pub grouping: Option<GroupingCount>,
    pub time_unit: Option<TimeUnitCount>,
}

impl Statistics {
    pub fn grouping_count(&self) -> Option<usize> {
        self.grouping.as_ref().map(|g| g.count)
    }

    pub fn time_unit_count(&self) -> Option<usize> {
        self.time_unit.as_ref().map(|t| t.count)
    }

    /// Summary block appended after the record lines.
    ///
    /// Each summary line is preceded by an empty separator line; the user
    /// count comes before the time-unit count.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(ref grouping) = self.grouping {
            lines.push(String::new());
            lines.push(format!(
                "The number of records with the username {} = {}",
                grouping.actor, grouping.count
            ));
        }
        if let Some(ref time_unit) = self.time_unit {
            lines.push(String::new());
            lines.push(format!(
                "The number of records with the {} = {}",
                time_unit.spec, time_unit.count
            ));
        }
        lines
    }
}

/// Output lines plus the counters that produced their summary.
#[derive(Debug, Clone, Default)]
pub struct AggregateOutput {
    /// Record lines followed by any summary lines.
    pub lines: Vec<String>,
    pub statistics: Statistics,
}

/// Drains `records` once, counting matches and collecting output lines.
///
/// The grouping count is a substring test of the actor name against the whole
/// raw line, so a name mentioned inside another user's message also counts.
pub fn aggregate(records: Vec<LogRecord>, mode: &OutputMode) -> AggregateOutput {
    let grouping_actor = mode.grouping_actor();
    let time_unit = mode.time_unit();

    let mut grouping_count = 0;
    let mut time_unit_count = 0;
    let mut lines = Vec::with_capacity(records.len() + 4);

    for record in records {
        if grouping_actor.is_some_and(|actor| record.raw_line().contains(actor)) {
            grouping_count += 1;
        }
        if time_unit.is_some_and(|spec| spec.matches(record.timestamp())) {
            time_unit_count += 1;
        }
        lines.push(record.into_raw_line());
    }

    let statistics = Statistics {
        records: lines.len(),
        grouping: grouping_actor.map(|actor| GroupingCount {
            actor: actor.to_string(),
            count: grouping_count,
        }),
        time_unit: time_unit.map(|spec| TimeUnitCount {
            spec,
            count: time_unit_count,
        }),
    };
    lines.extend(statistics.summary_lines());

    AggregateOutput { lines, statistics }
}
