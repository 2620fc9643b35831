//! Shared collection of matched records.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::record::LogRecord;

/// An unordered, thread-safe multiset of [`LogRecord`]s.
///
/// Any number of workers may call [`extend`](Self::extend) concurrently
/// through a shared reference; each call appends its whole batch under a
/// single lock acquisition, so a file's records stay contiguous and in file
/// order. No ordering is guaranteed between batches. Duplicates are kept.
///
/// The set is drained once with [`into_records`](Self::into_records).
#[derive(Debug, Default)]
pub struct ResultSet {
    records: Mutex<Vec<LogRecord>>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a batch of records.
    pub fn extend(&self, batch: Vec<LogRecord>) {
        if batch.is_empty() {
            return;
        }
        self.lock().extend(batch);
    }

    /// Number of records collected so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the set and returns its records.
    pub fn into_records(self) -> Vec<LogRecord> {
        self.records
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // A worker that panicked mid-append cannot leave the Vec in a torn state,
    // so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
