//! The `OutputWriter` trait implemented by all backend writers.

use crate::{ForkSnapshotRow, OutputResult, PhilosopherSnapshotRow, TickMetricsRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors surface to the run through
/// [`MetricsOutputObserver::take_error`][crate::MetricsOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one per-step metrics row.
    fn write_metrics(&mut self, row: &TickMetricsRow) -> OutputResult<()>;

    /// Write a batch of philosopher snapshots (one tick, all seats).
    fn write_philosophers(&mut self, rows: &[PhilosopherSnapshotRow]) -> OutputResult<()>;

    /// Write a batch of fork snapshots (one tick, all slots).
    fn write_forks(&mut self, rows: &[ForkSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
