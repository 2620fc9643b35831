//! Configuration for an analysis run.
//!
//! This module provides [`AnalyzerConfig`], a plain configuration struct for
//! library usage, without any CLI framework dependencies. It is built once and
//! then shared read-only with every worker.
//!
//! # Example
//!
//! ```rust
//! use log_analyzer::config::{AnalyzerConfig, FailurePolicy};
//! use log_analyzer::core::{Concurrency, FilterConfig, StatsRequest};
//!
//! # fn main() -> log_analyzer::Result<()> {
//! let config = AnalyzerConfig::new(
//!     FilterConfig::new().with_actor("alice"),
//!     StatsRequest::new().with_time_unit_str("10 hour")?,
//! )
//! .with_concurrency(Concurrency::new(4))
//! .with_failure_policy(FailurePolicy::Abort);
//!
//! config.validate()?;
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::distributor::Concurrency;
use crate::core::filter::FilterConfig;
use crate::core::stats::{OutputMode, StatsRequest};
use crate::error::Result;

/// What to do with the results when some input files fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Report failed files and produce output from the rest (default).
    #[default]
    Continue,

    /// Produce no output if any file failed.
    Abort,
}

/// Complete configuration of one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Which records to keep.
    pub filter: FilterConfig,

    /// Which statistics to append.
    pub stats: StatsRequest,

    /// Worker threads (default: 1, sequential).
    #[serde(default)]
    pub concurrency: Concurrency,

    /// Handling of per-file failures (default: continue).
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

impl AnalyzerConfig {
    /// Creates a configuration with default concurrency and failure policy.
    pub fn new(filter: FilterConfig, stats: StatsRequest) -> Self {
        Self {
            filter,
            stats,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_concurrency(mut self, concurrency: Concurrency) -> Self {
        self.concurrency = concurrency;
        self
    }

    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Checks the filter and resolves the output mode.
    ///
    /// # Errors
    ///
    /// Returns [`LogAnalyzerError::Configuration`](crate::LogAnalyzerError::Configuration)
    /// if no filter is set or no output mode can be resolved.
    pub fn validate(&self) -> Result<OutputMode> {
        self.filter.validate()?;
        self.stats.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.concurrency, Concurrency::SEQUENTIAL);
        assert_eq!(config.failure_policy, FailurePolicy::Continue);
    }

    #[test]
    fn test_nothing_configured_is_rejected() {
        let err = AnalyzerConfig::default().validate().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_filter_without_output_mode_is_rejected() {
        let config = AnalyzerConfig::new(FilterConfig::new().with_actor("a"), StatsRequest::new());
        assert!(config.validate().unwrap_err().is_configuration());
    }

    #[test]
    fn test_output_mode_without_filter_is_rejected() {
        let config = AnalyzerConfig::new(FilterConfig::new(), StatsRequest::plain());
        assert!(config.validate().unwrap_err().is_configuration());
    }

    #[test]
    fn test_valid_config() {
        let config = AnalyzerConfig::new(
            FilterConfig::new().with_message("error"),
            StatsRequest::new().with_grouping_actor("bob"),
        );
        assert_eq!(
            config.validate().unwrap(),
            OutputMode::Grouping {
                actor: "bob".to_string()
            }
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let config = AnalyzerConfig::new(
            FilterConfig::new().with_actor("alice"),
            StatsRequest::new().with_time_unit_str("5 minute").unwrap(),
        )
        .with_concurrency(Concurrency::new(8))
        .with_failure_policy(FailurePolicy::Abort);

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"concurrency\":8"));
        assert!(json.contains("\"abort\""));

        let parsed: AnalyzerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
