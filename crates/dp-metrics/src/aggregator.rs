//! `MetricsAggregator` — one sample per completed step.

use dp_agent::Philosopher;
use dp_core::Tick;

use crate::MetricsSnapshot;

/// Records a [`MetricsSnapshot`] after every step.
///
/// With history enabled (the default) every sample is kept, like a data
/// collector feeding a time-series plot.  With history disabled only the
/// most recent sample is retained, which keeps long runs at constant memory.
#[derive(Clone, Debug)]
pub struct MetricsAggregator {
    keep_history: bool,
    samples:      Vec<MetricsSnapshot>,
    latest:       Option<MetricsSnapshot>,
}

impl Default for MetricsAggregator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl MetricsAggregator {
    pub fn new(keep_history: bool) -> Self {
        Self {
            keep_history,
            samples: Vec::new(),
            latest:  None,
        }
    }

    /// Sample `philosophers` after `tick` completed steps and return the sample.
    pub fn record(&mut self, tick: Tick, philosophers: &[Philosopher]) -> &MetricsSnapshot {
        let snapshot = MetricsSnapshot::capture(tick, philosophers);
        if self.keep_history {
            self.samples.push(snapshot.clone());
        }
        self.latest.insert(snapshot)
    }

    /// Every recorded sample, oldest first.  Empty when history is off.
    pub fn samples(&self) -> &[MetricsSnapshot] {
        &self.samples
    }

    /// The most recent sample, if any step has run.
    pub fn latest(&self) -> Option<&MetricsSnapshot> {
        self.latest.as_ref()
    }

    /// Number of samples kept in history.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn keeps_history(&self) -> bool {
        self.keep_history
    }
}
