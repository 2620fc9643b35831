//! Match timestamps against a single calendar field.
//!
//! A [`TimeUnitSpec`] such as `10 hour` asks "does this timestamp's hour equal
//! 10?". Exactly one field is compared per spec.
//!
//! ```
//! use log_analyzer::core::time_unit::{TimeUnit, TimeUnitSpec};
//! use log_analyzer::record::parse_timestamp;
//!
//! # fn main() -> log_analyzer::Result<()> {
//! let spec: TimeUnitSpec = "10 hour".parse()?;
//! assert_eq!(spec.unit, TimeUnit::Hour);
//! assert!(spec.matches(parse_timestamp("01.01.2020 at 10:15:00")?));
//! assert!(!spec.matches(parse_timestamp("01.01.2020 at 11:10:00")?));
//! # Ok(())
//! # }
//! ```

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{LogAnalyzerError, Result};

/// A named calendar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Seconds, 0..=59
    Second,
    /// Minutes, 0..=59
    Minute,
    /// Hours, 0..=23
    Hour,
    /// Day of month, 1..=31
    Day,
    /// Month, 1..=12 (January is 1)
    Month,
    /// Full year, e.g. 2020
    Year,
}

impl TimeUnit {
    /// Returns all supported unit names.
    pub fn all_names() -> &'static [&'static str] {
        &["second", "minute", "hour", "day", "month", "year"]
    }

    /// Extracts this field from `timestamp`.
    pub fn extract(self, timestamp: NaiveDateTime) -> i64 {
        match self {
            TimeUnit::Second => i64::from(timestamp.second()),
            TimeUnit::Minute => i64::from(timestamp.minute()),
            TimeUnit::Hour => i64::from(timestamp.hour()),
            TimeUnit::Day => i64::from(timestamp.day()),
            TimeUnit::Month => i64::from(timestamp.month()),
            TimeUnit::Year => i64::from(timestamp.year()),
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for TimeUnit {
    type Err = LogAnalyzerError;

    // Case-sensitive: "Hour" is rejected.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "second" => Ok(TimeUnit::Second),
            "minute" => Ok(TimeUnit::Minute),
            "hour" => Ok(TimeUnit::Hour),
            "day" => Ok(TimeUnit::Day),
            "month" => Ok(TimeUnit::Month),
            "year" => Ok(TimeUnit::Year),
            _ => Err(LogAnalyzerError::configuration(format!(
                "unknown time unit '{}'. Expected one of: {}",
                s,
                TimeUnit::all_names().join(", ")
            ))),
        }
    }
}

/// A `(value, unit)` pair, written as `"<value> <unit>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeUnitSpec {
    /// Target value for the field.
    pub value: i64,
    /// Which calendar field to compare.
    pub unit: TimeUnit,
}

impl TimeUnitSpec {
    pub fn new(value: i64, unit: TimeUnit) -> Self {
        Self { value, unit }
    }

    /// Returns `true` if the spec's field of `timestamp` equals its value.
    pub fn matches(&self, timestamp: NaiveDateTime) -> bool {
        self.unit.extract(timestamp) == self.value
    }
}

impl std::fmt::Display for TimeUnitSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

impl std::str::FromStr for TimeUnitSpec {
    type Err = LogAnalyzerError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        let (Some(value), Some(unit), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(LogAnalyzerError::configuration(format!(
                "time unit '{s}' must have the form '<value> <unit>', e.g. '10 hour'"
            )));
        };
        let value = value.parse::<i64>().map_err(|_| {
            LogAnalyzerError::configuration(format!("time unit value '{value}' is not an integer"))
        })?;
        Ok(Self::new(value, unit.parse()?))
    }
}
