//! The end-to-end analysis pipeline.
//!
//! [`LogAnalyzer`] ties the pieces together:
//!
//! 1. Validate the configuration (fails before any input is read)
//! 2. [`distribute`] the file processor over every source
//! 3. Apply the [`FailurePolicy`]
//! 4. [`aggregate`] the merged results into output lines and statistics
//!
//! # Example
//!
//! ```rust
//! use log_analyzer::analyzer::LogAnalyzer;
//! use log_analyzer::config::AnalyzerConfig;
//! use log_analyzer::core::{FilterConfig, MemorySource, StatsRequest};
//!
//! # fn main() -> log_analyzer::Result<()> {
//! let config = AnalyzerConfig::new(
//!     FilterConfig::new().with_actor("alice"),
//!     StatsRequest::new().with_grouping_actor("alice"),
//! );
//! let sources = vec![MemorySource::new(
//!     "app.log",
//!     ["alice,01.01.2020 at 10:00:00,hello", "bob,01.01.2020 at 11:00:00,world"],
//! )];
//!
//! let report = LogAnalyzer::new(config)?.run(&sources)?;
//! assert_eq!(report.lines[0], "alice,01.01.2020 at 10:00:00,hello");
//! assert_eq!(report.statistics.grouping_count(), Some(1));
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use std::time::{Duration, Instant};

use tracing::info;

use crate::config::{AnalyzerConfig, FailurePolicy};
use crate::core::distributor::{DistributionReport, FileSource, LineSource, distribute};
use crate::core::output::write_output;
use crate::core::result_set::ResultSet;
use crate::core::stats::{OutputMode, Statistics, aggregate};
use crate::error::{LogAnalyzerError, Result};
use crate::progress::{ProgressCallback, no_progress};

/// Everything a run produced.
#[derive(Debug)]
pub struct AnalysisReport {
    /// Output lines: matched records, then summary lines.
    pub lines: Vec<String>,

    /// Counters behind the summary lines.
    pub statistics: Statistics,

    /// Which files were processed and which failed.
    pub distribution: DistributionReport,

    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

impl AnalysisReport {
    /// Writes [`lines`](Self::lines) to `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        write_output(&self.lines, path)
    }
}

/// A validated, ready-to-run analysis.
pub struct LogAnalyzer {
    config: AnalyzerConfig,
    mode: OutputMode,
    progress: ProgressCallback,
}

impl LogAnalyzer {
    /// Validates `config` and prepares an analyzer.
    ///
    /// # Errors
    ///
    /// Returns [`LogAnalyzerError::Configuration`] if no filter is set or no
    /// output mode can be resolved.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let mode = config.validate()?;
        Ok(Self {
            config,
            mode,
            progress: no_progress(),
        })
    }

    /// Sets a callback invoked after each file finishes.
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressCallback) -> Self {
        self.progress = progress;
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn mode(&self) -> &OutputMode {
        &self.mode
    }

    /// Runs the pipeline over `sources`.
    ///
    /// # Errors
    ///
    /// - [`LogAnalyzerError::WorkerPool`] if the worker pool cannot be built
    /// - With [`FailurePolicy::Abort`], the failing file's error when exactly
    ///   one file failed, or [`LogAnalyzerError::PartialFailure`] otherwise
    pub fn run<S: LineSource>(&self, sources: &[S]) -> Result<AnalysisReport> {
        let start = Instant::now();
        let results = ResultSet::new();

        let distribution = distribute(
            sources,
            &self.config.filter,
            self.config.concurrency,
            &results,
            &self.progress,
        )?;

        info!(
            files = distribution.files,
            failed = distribution.failures.len(),
            matched = results.len(),
            "distribution finished"
        );

        let distribution = apply_failure_policy(distribution, self.config.failure_policy)?;
        let output = aggregate(results.into_records(), &self.mode);

        Ok(AnalysisReport {
            lines: output.lines,
            statistics: output.statistics,
            distribution,
            elapsed: start.elapsed(),
        })
    }

    /// Runs the pipeline over files on disk.
    pub fn run_files<P: AsRef<Path>>(&self, paths: &[P]) -> Result<AnalysisReport> {
        let sources: Vec<FileSource> = paths.iter().map(|p| FileSource::new(p.as_ref())).collect();
        self.run(&sources)
    }
}

fn apply_failure_policy(
    mut distribution: DistributionReport,
    policy: FailurePolicy,
) -> Result<DistributionReport> {
    match (policy, distribution.failures.len()) {
        (FailurePolicy::Continue, _) | (FailurePolicy::Abort, 0) => Ok(distribution),
        (FailurePolicy::Abort, 1) => match distribution.failures.pop() {
            Some(failure) => Err(failure.into_error()),
            None => Ok(distribution),
        },
        (FailurePolicy::Abort, failed) => Err(LogAnalyzerError::PartialFailure {
            failed,
            total: distribution.files,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::distributor::{Concurrency, MemorySource};
    use crate::core::filter::FilterConfig;
    use crate::core::stats::StatsRequest;

    fn sources() -> Vec<MemorySource> {
        vec![
            MemorySource::new(
                "one.log",
                [
                    "alice,01.01.2020 at 10:00:00,hello",
                    "bob,01.01.2020 at 11:00:00,world",
                ],
            ),
            MemorySource::new("two.log", ["alice,02.01.2020 at 10:30:00,again"]),
            MemorySource::new("bad.log", ["alice,not a time,oops"]),
        ]
    }

    fn config() -> AnalyzerConfig {
        AnalyzerConfig::new(
            FilterConfig::new().with_actor("alice"),
            StatsRequest::new().with_time_unit_str("10 hour").unwrap(),
        )
    }

    #[test]
    fn test_invalid_config_fails_before_reading() {
        let err = LogAnalyzer::new(AnalyzerConfig::default()).err().unwrap();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_continue_policy_reports_failure() {
        let report = LogAnalyzer::new(config()).unwrap().run(&sources()).unwrap();
        assert_eq!(report.distribution.failures.len(), 1);
        assert_eq!(report.statistics.records, 2);
        assert_eq!(report.statistics.time_unit_count(), Some(2));
    }

    #[test]
    fn test_abort_policy_single_failure() {
        let analyzer =
            LogAnalyzer::new(config().with_failure_policy(FailurePolicy::Abort)).unwrap();
        let err = analyzer.run(&sources()).unwrap_err();
        assert!(err.is_invalid_timestamp());
        assert!(err.to_string().contains("bad.log"));
    }

    #[test]
    fn test_abort_policy_many_failures() {
        let mut inputs = sources();
        inputs.push(MemorySource::new("worse.log", ["nope"]));
        let analyzer = LogAnalyzer::new(
            config()
                .with_failure_policy(FailurePolicy::Abort)
                .with_concurrency(Concurrency::new(3)),
        )
        .unwrap();
        let err = analyzer.run(&inputs).unwrap_err();
        assert!(matches!(
            err,
            LogAnalyzerError::PartialFailure {
                failed: 2,
                total: 4
            }
        ));
    }

    #[test]
    fn test_run_files_and_write() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.log");
        std::fs::write(&input, "alice,01.01.2020 at 10:00:00,hello\n").unwrap();

        let report = LogAnalyzer::new(config()).unwrap().run_files(&[&input]).unwrap();
        let out = dir.path().join("out.log");
        report.write_to(&out).unwrap();

        assert_eq!(
            std::fs::read_to_string(out).unwrap(),
            "alice,01.01.2020 at 10:00:00,hello\n\nThe number of records with the 10 hour = 1\n"
        );
    }
}
