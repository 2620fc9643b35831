//! Progress reporting for the work distributor.
//!
//! The distributor invokes a [`ProgressCallback`] each time an input file
//! finishes, from whichever worker thread processed it.
//!
//! # Example
//!
//! ```rust
//! use log_analyzer::progress::{Progress, ProgressCallback};
//! use std::sync::Arc;
//!
//! let callback: ProgressCallback = Arc::new(|progress| {
//!     if let Some(pct) = progress.percentage() {
//!         println!("Progress: {:.1}%", pct);
//!     }
//! });
//!
//! callback(Progress::new(3, 4, 120));
//! ```

use std::sync::Arc;

/// Progress of a distribution run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    /// Files finished so far, successfully or not.
    pub files_completed: usize,

    /// Total files submitted.
    pub total_files: usize,

    /// Records kept by the file that just finished.
    pub records_matched: usize,
}

impl Progress {
    pub fn new(files_completed: usize, total_files: usize, records_matched: usize) -> Self {
        Self {
            files_completed,
            total_files,
            records_matched,
        }
    }

    /// Returns the progress as a percentage (0.0 - 100.0).
    ///
    /// Returns `None` when no files were submitted.
    ///
    /// ```rust
    /// use log_analyzer::progress::Progress;
    ///
    /// assert_eq!(Progress::new(1, 4, 0).percentage(), Some(25.0));
    /// assert_eq!(Progress::new(0, 0, 0).percentage(), None);
    /// ```
    pub fn percentage(&self) -> Option<f64> {
        (self.total_files > 0)
            .then(|| (self.files_completed as f64 / self.total_files as f64) * 100.0)
    }

    /// Returns whether every submitted file has finished.
    pub fn is_complete(&self) -> bool {
        self.files_completed >= self.total_files
    }
}

/// Callback type for receiving progress updates.
///
/// Must be `Send + Sync`: it is called concurrently from worker threads.
pub type ProgressCallback = Arc<dyn Fn(Progress) + Send + Sync>;

/// Creates a no-op progress callback.
pub fn no_progress() -> ProgressCallback {
    Arc::new(|_| {})
}

/// Creates a progress callback that logs each update at debug level.
pub fn tracing_progress() -> ProgressCallback {
    Arc::new(|progress| {
        tracing::debug!(
            completed = progress.files_completed,
            total = progress.total_files,
            matched = progress.records_matched,
            "file finished"
        );
    })
}
