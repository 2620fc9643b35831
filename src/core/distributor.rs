//! Run the file processor over many inputs, sequentially or on a worker pool.
//!
//! # Execution Modes
//!
//! | Concurrency | Mode |
//! |-------------|------|
//! | `0` or `1` | Files processed one at a time on the calling thread |
//! | `2..=10` | A pool with that many worker threads |
//! | `> 10` | A pool capped at [`MAX_WORKERS`] threads |
//!
//! In both modes [`distribute`] returns only after every file has finished.
//! Each file is processed by exactly one task; a file that fails contributes
//! nothing to the [`ResultSet`] and is listed in the returned
//! [`DistributionReport`] instead.
//!
//! # Example
//!
//! ```
//! use log_analyzer::core::distributor::{Concurrency, LineSource, MemorySource, distribute};
//! use log_analyzer::core::filter::FilterConfig;
//! use log_analyzer::core::result_set::ResultSet;
//! use log_analyzer::progress::no_progress;
//!
//! # fn main() -> log_analyzer::Result<()> {
//! let sources: Vec<Box<dyn LineSource>> = vec![
//!     Box::new(MemorySource::new("a.log", ["alice,01.01.2020 at 10:00:00,hello"])),
//!     Box::new(MemorySource::new("b.log", ["bob,01.01.2020 at 11:00:00,world"])),
//! ];
//! let results = ResultSet::new();
//! let filter = FilterConfig::new().with_actor("alice");
//!
//! let report = distribute(&sources, &filter, Concurrency::new(4), &results, &no_progress())?;
//! assert_eq!(report.files, 2);
//! assert!(report.is_clean());
//! assert_eq!(results.len(), 1);
//! # Ok(())
//! # }
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::filter::FilterConfig;
use super::processor::process_lines;
use super::result_set::ResultSet;
use crate::error::{LogAnalyzerError, Result};
use crate::progress::{Progress, ProgressCallback};

/// Upper bound on worker threads regardless of the requested concurrency.
pub const MAX_WORKERS: usize = 10;

/// Iterator of lines handed to the file processor.
pub type Lines<'a> = Box<dyn Iterator<Item = io::Result<String>> + Send + 'a>;

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

/// Requested degree of parallelism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Concurrency(usize);

impl Concurrency {
    /// Single-threaded processing.
    pub const SEQUENTIAL: Concurrency = Concurrency(1);

    pub fn new(requested: usize) -> Self {
        Self(requested)
    }

    /// The value that was asked for, before capping.
    pub fn requested(self) -> usize {
        self.0
    }

    /// Worker threads actually used: `requested` clamped to `1..=MAX_WORKERS`.
    pub fn workers(self) -> usize {
        self.0.clamp(1, MAX_WORKERS)
    }

    /// `true` when a worker pool is used.
    pub fn is_parallel(self) -> bool {
        self.0 > 1
    }
}

impl Default for Concurrency {
    fn default() -> Self {
        Self::SEQUENTIAL
    }
}

// ---------------------------------------------------------------------------
// Line sources
// ---------------------------------------------------------------------------

/// An input whose lines can be read once per distribution run.
///
/// `Send + Sync` are required: sources are shared with the worker threads.
pub trait LineSource: Send + Sync {
    /// Path (or label) identifying the source in reports.
    fn path(&self) -> &Path;

    /// Opens the source and returns its lines.
    ///
    /// Errors opening the source are reported for this source only.
    fn lines(&self) -> io::Result<Lines<'_>>;
}

impl<T: LineSource + ?Sized> LineSource for Box<T> {
    fn path(&self) -> &Path {
        (**self).path()
    }

    fn lines(&self) -> io::Result<Lines<'_>> {
        (**self).lines()
    }
}

/// A line source backed by a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LineSource for FileSource {
    fn path(&self) -> &Path {
        &self.path
    }

    fn lines(&self) -> io::Result<Lines<'_>> {
        let reader = BufReader::new(File::open(&self.path)?);
        Ok(Box::new(reader.lines()))
    }
}

/// An in-memory line source.
#[derive(Debug, Clone)]
pub struct MemorySource {
    path: PathBuf,
    lines: Vec<String>,
}

impl MemorySource {
    pub fn new<I, S>(path: impl Into<PathBuf>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for MemorySource {
    fn path(&self) -> &Path {
        &self.path
    }

    fn lines(&self) -> io::Result<Lines<'_>> {
        Ok(Box::new(self.lines.iter().cloned().map(Ok::<_, io::Error>)))
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// One input that could not be processed.
#[derive(Debug)]
pub struct FileFailure {
    /// The failing source.
    pub path: PathBuf,
    /// Why it failed (already carries the line number for record errors).
    pub error: LogAnalyzerError,
}

impl FileFailure {
    /// Converts the failure into a [`LogAnalyzerError::File`].
    pub fn into_error(self) -> LogAnalyzerError {
        self.error.in_file(self.path)
    }
}

impl std::fmt::Display for FileFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.error)
    }
}

/// Outcome of a distribution run.
#[derive(Debug, Default)]
pub struct DistributionReport {
    /// Number of sources submitted.
    pub files: usize,
    /// Sources whose processing failed, in completion order.
    pub failures: Vec<FileFailure>,
}

impl DistributionReport {
    /// `true` when every source was processed successfully.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of sources that succeeded.
    pub fn succeeded(&self) -> usize {
        self.files - self.failures.len()
    }
}

// ---------------------------------------------------------------------------
// distribute()
// ---------------------------------------------------------------------------

/// Processes every source and merges the matching records into `results`.
///
/// With [`Concurrency::is_parallel`] a dedicated pool of
/// [`Concurrency::workers`] threads runs one task per source; the call blocks
/// until all tasks have finished. Otherwise sources are processed in order on
/// the calling thread.
///
/// Per-file failures never abort the run; they are collected into the report.
///
/// # Errors
///
/// Returns [`LogAnalyzerError::WorkerPool`] if the thread pool cannot be built.
pub fn distribute<S>(
    sources: &[S],
    filter: &FilterConfig,
    concurrency: Concurrency,
    results: &ResultSet,
    progress: &ProgressCallback,
) -> Result<DistributionReport>
where
    S: LineSource,
{
    let total = sources.len();
    let completed = AtomicUsize::new(0);
    let failures = Mutex::new(Vec::new());

    let run_one = |source: &S| {
        let path = source.path();
        debug!(file = %path.display(), "processing");

        let outcome = source
            .lines()
            .map_err(LogAnalyzerError::from)
            .and_then(|lines| process_lines(lines, filter));

        let matched = match outcome {
            Ok(records) => {
                let matched = records.len();
                debug!(file = %path.display(), matched, "processed");
                results.extend(records);
                matched
            }
            Err(error) => {
                warn!(file = %path.display(), %error, "file skipped");
                failures
                    .lock()
                    .unwrap_or_else(std::sync::PoisonError::into_inner)
                    .push(FileFailure {
                        path: path.to_path_buf(),
                        error,
                    });
                0
            }
        };

        let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
        progress(Progress::new(done, total, matched));
    };

    if concurrency.is_parallel() {
        let workers = concurrency.workers();
        info!(files = total, workers, "processing files on worker pool");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("log-worker-{i}"))
            .build()
            .map_err(|e| LogAnalyzerError::WorkerPool(e.to_string()))?;

        // `scope` returns only once every spawned task has run to completion.
        pool.scope(|scope| {
            for source in sources {
                let run_one = &run_one;
                scope.spawn(move |_| run_one(source));
            }
        });
    } else {
        info!(files = total, "processing files sequentially");
        for source in sources {
            run_one(source);
        }
    }

    let failures = failures
        .into_inner()
        .unwrap_or_else(std::sync::PoisonError::into_inner);

    Ok(DistributionReport {
        files: total,
        failures,
    })
}
