//! `MetricsOutputObserver<W>` — bridges `ModelObserver` to an `OutputWriter`.

use dp_agent::{Fork, Philosopher};
use dp_core::Tick;
use dp_metrics::MetricsSnapshot;
use dp_sim::ModelObserver;

use crate::row::{ForkSnapshotRow, PhilosopherSnapshotRow, TickMetricsRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`ModelObserver`] that writes per-step metrics and periodic table
/// snapshots to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `ModelObserver`
/// methods have no return value.  After `model.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct MetricsOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> MetricsOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `model.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> ModelObserver for MetricsOutputObserver<W> {
    fn on_step_end(&mut self, _tick: Tick, metrics: &MetricsSnapshot) {
        let result = self.writer.write_metrics(&TickMetricsRow::from(metrics));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, philosophers: &[Philosopher], forks: &[Fork]) {
        let rows: Vec<PhilosopherSnapshotRow> = philosophers
            .iter()
            .map(|p| PhilosopherSnapshotRow::new(tick, p))
            .collect();
        let result = self.writer.write_philosophers(&rows);
        self.store_err(result);

        let rows: Vec<ForkSnapshotRow> = forks.iter().map(|f| ForkSnapshotRow::new(tick, f)).collect();
        let result = self.writer.write_forks(&rows);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
