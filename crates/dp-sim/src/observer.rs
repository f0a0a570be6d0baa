//! Model observer trait for progress reporting and data collection.

use dp_agent::{Fork, Philosopher};
use dp_core::Tick;
use dp_metrics::MetricsSnapshot;

/// Callbacks invoked by [`Model::run_ticks`][crate::Model::run_ticks] and
/// [`Model::run`][crate::Model::run] around each step.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl ModelObserver for ProgressPrinter {
///     fn on_step_end(&mut self, tick: Tick, metrics: &MetricsSnapshot) {
///         if tick.is_every(self.interval) {
///             println!("{tick}: {} eating, throughput {:.3}", metrics.states.eating, metrics.throughput);
///         }
///     }
/// }
/// ```
pub trait ModelObserver {
    /// Called before a step runs.  `tick` is the number of completed steps.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called after a step with the metrics sample it produced.
    fn on_step_end(&mut self, _tick: Tick, _metrics: &MetricsSnapshot) {}

    /// Called every `snapshot_interval` steps with the full table state.
    fn on_snapshot(
        &mut self,
        _tick:         Tick,
        _philosophers: &[Philosopher],
        _forks:        &[Fork],
    ) {}

    /// Called once after the final step of [`Model::run`][crate::Model::run].
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`ModelObserver`] that does nothing.
pub struct NoopObserver;

impl ModelObserver for NoopObserver {}
