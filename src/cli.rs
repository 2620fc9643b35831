//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`LogLevel`] - Verbosity of diagnostic output on stderr

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{AnalyzerConfig, FailurePolicy};
use crate::core::distributor::Concurrency;
use crate::core::filter::FilterConfig;
use crate::core::stats::StatsRequest;
use crate::error::Result;

/// Filter a directory of `user,timestamp,message` log files and write the
/// matching lines, optionally followed by statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "log-analyzer")]
#[command(version, about, long_about = None)]
#[command(after_help = "TIMESTAMPS use the form 'dd.MM.yyyy at H:mm:ss', e.g. '23.05.2015 at 22:39:28'.

EXAMPLES:
    log-analyzer ./logs --user alice --group-by-user alice
    log-analyzer ./logs --message error --time-unit '10 hour' -j 4
    log-analyzer ./logs --period '01.01.2020 at 0:00:00-02.01.2020 at 0:00:00' --plain -o day.log")]
pub struct Args {
    /// Directory containing the log files
    pub directory: PathBuf,

    /// Keep only records from this user
    #[arg(long, value_name = "USER")]
    pub user: Option<String>,

    /// Keep only records strictly inside this period ("<start>-<end>")
    #[arg(long, value_name = "PERIOD")]
    pub period: Option<String>,

    /// Keep only records whose message contains this text
    #[arg(long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Count records mentioning this user
    #[arg(long, value_name = "USER")]
    pub group_by_user: Option<String>,

    /// Count records whose timestamp matches "<value> <unit>"
    /// (unit: second, minute, hour, day, month, year)
    #[arg(long, value_name = "SPEC")]
    pub time_unit: Option<String>,

    /// Write only the matching lines, without statistics
    #[arg(long)]
    pub plain: bool,

    /// Number of worker threads (capped at 10)
    #[arg(short = 'j', long, default_value_t = 1)]
    pub threads: usize,

    /// Output file; relative paths are resolved against DIRECTORY
    #[arg(short, long, default_value = "output.log")]
    pub output: PathBuf,

    /// Fail without writing output if any input file cannot be processed
    #[arg(long)]
    pub strict: bool,

    /// Diagnostic output level on stderr
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

impl Args {
    /// Builds the library configuration from the parsed arguments.
    ///
    /// # Errors
    ///
    /// Fails if `--period` or `--time-unit` cannot be parsed.
    pub fn to_config(&self) -> Result<AnalyzerConfig> {
        let mut filter = FilterConfig::new();
        if let Some(ref user) = self.user {
            filter = filter.with_actor(user.clone());
        }
        if let Some(ref period) = self.period {
            filter = filter.with_period(period)?;
        }
        if let Some(ref message) = self.message {
            filter = filter.with_message(message.clone());
        }

        let mut stats = if self.plain {
            StatsRequest::plain()
        } else {
            StatsRequest::new()
        };
        if let Some(ref user) = self.group_by_user {
            stats = stats.with_grouping_actor(user.clone());
        }
        if let Some(ref spec) = self.time_unit {
            stats = stats.with_time_unit_str(spec)?;
        }

        let policy = if self.strict {
            FailurePolicy::Abort
        } else {
            FailurePolicy::Continue
        };

        Ok(AnalyzerConfig::new(filter, stats)
            .with_concurrency(Concurrency::new(self.threads))
            .with_failure_policy(policy))
    }
}

/// Verbosity of diagnostic output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> tracing::Level {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
