//! # log-analyzer
//!
//! A Rust library for filtering directories of delimited log files and
//! annotating the result with simple statistics.
//!
//! ## Overview
//!
//! Every input line has the form
//!
//! ```text
//! <user>,<dd.MM.yyyy at H:mm:ss>,<message>
//! ```
//!
//! The library parses lines into [`LogRecord`]s, keeps the ones that pass a
//! set of filters (user, time window, message text), merges the results of
//! many files (optionally on a worker pool) and appends counts of records that
//! mention a given user or fall on a given calendar value.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use log_analyzer::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = AnalyzerConfig::new(
//!         FilterConfig::new().with_actor("alice"),
//!         StatsRequest::new().with_time_unit_str("10 hour")?,
//!     )
//!     .with_concurrency(Concurrency::new(4));
//!
//!     let report = LogAnalyzer::new(config)?.run_files(&["logs/a.log", "logs/b.log"])?;
//!     report.write_to("logs/output.log".as_ref())?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`record`] - [`LogRecord`] and the line parser
//! - [`core`] - The filter-and-aggregate pipeline
//!   - [`core::filter`] - [`FilterConfig`](core::FilterConfig), [`apply_filters`](core::apply_filters)
//!   - [`core::time_unit`] - [`TimeUnitSpec`](core::TimeUnitSpec)
//!   - [`core::processor`] - [`process_lines`](core::process_lines)
//!   - [`core::distributor`] - [`distribute`](core::distribute), [`Concurrency`](core::Concurrency)
//!   - [`core::stats`] - [`StatsRequest`](core::StatsRequest), [`aggregate`](core::aggregate)
//!   - [`core::output`] - [`write_output`](core::write_output)
//! - [`analyzer`] - [`LogAnalyzer`](analyzer::LogAnalyzer), the end-to-end pipeline
//! - [`config`] - [`AnalyzerConfig`](config::AnalyzerConfig)
//! - [`progress`] - Per-file progress callbacks
//! - [`error`] - Unified error types ([`LogAnalyzerError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

pub mod analyzer;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
#[cfg(feature = "cli")]
pub mod logging;
pub mod progress;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use error::{LogAnalyzerError, Result};
pub use record::LogRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use log_analyzer::prelude::*;
/// ```
pub mod prelude {
    pub use crate::LogRecord;

    pub use crate::error::{LogAnalyzerError, Result};

    pub use crate::analyzer::{AnalysisReport, LogAnalyzer};
    pub use crate::config::{AnalyzerConfig, FailurePolicy};

    pub use crate::core::distributor::{Concurrency, FileSource, LineSource, MemorySource};
    pub use crate::core::filter::{FilterConfig, TimeWindow, apply_filters};
    pub use crate::core::stats::{OutputMode, Statistics, StatsRequest};
    pub use crate::core::time_unit::{TimeUnit, TimeUnitSpec};

    pub use crate::progress::{Progress, ProgressCallback};
}
