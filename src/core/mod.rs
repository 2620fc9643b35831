//! Core filter-and-aggregate pipeline.
//!
//! This module contains:
//! - [`filter`] - Actor, time window and message predicates
//! - [`time_unit`] - Calendar field matching for statistics
//! - [`processor`] - Per-file parsing and filtering
//! - [`result_set`] - Thread-safe collection of matched records
//! - [`distributor`] - Sequential or pooled processing of many files
//! - [`stats`] - Grouping and time-unit statistics
//! - [`output`] - Line writer and output path resolution
//!
//! # Quick Start
//!
//! ```rust
//! use log_analyzer::core::{
//!     Concurrency, FilterConfig, MemorySource, ResultSet, StatsRequest,
//!     aggregate, distribute, to_text,
//! };
//! use log_analyzer::progress::no_progress;
//!
//! # fn main() -> log_analyzer::Result<()> {
//! let sources = vec![MemorySource::new("a.log", ["alice,01.01.2020 at 10:00:00,hello"])];
//! let results = ResultSet::new();
//! let filter = FilterConfig::new().with_actor("alice");
//!
//! distribute(&sources, &filter, Concurrency::SEQUENTIAL, &results, &no_progress())?;
//! let output = aggregate(results.into_records(), &StatsRequest::plain().resolve()?);
//! assert_eq!(to_text(&output.lines), "alice,01.01.2020 at 10:00:00,hello\n");
//! # Ok(())
//! # }
//! ```

pub mod distributor;
pub mod filter;
pub mod output;
pub mod processor;
pub mod result_set;
pub mod stats;
pub mod time_unit;

// Re-export main types for convenience
pub use distributor::{
    Concurrency, DistributionReport, FileFailure, FileSource, LineSource, MAX_WORKERS,
    MemorySource, distribute,
};
pub use filter::{FilterConfig, TimeWindow, apply_filters};
pub use output::{resolve_output_path, to_text, write_lines, write_output};
pub use processor::process_lines;
pub use result_set::ResultSet;
pub use stats::{AggregateOutput, OutputMode, Statistics, StatsRequest, aggregate};
pub use time_unit::{TimeUnit, TimeUnitSpec};

// Re-export LogRecord from the crate root
pub use crate::LogRecord;
