//! Fluent builder for constructing a [`Model`].

use dp_agent::Table;
use dp_core::{ModelConfig, RandomSource, SimRng, StepClock, Strategy};
use dp_metrics::MetricsAggregator;
use dp_ring::RingTopology;
use tracing::info;

use crate::{Model, SimResult};

/// Fluent builder for [`Model<R>`].
///
/// | Method                    | Default                       |
/// |---------------------------|-------------------------------|
/// | `.strategy(s)`            | `Strategy::Naive`             |
/// | `.hungry_chance(p)`       | `0.1`                         |
/// | `.full_chance(p)`         | `0.2`                         |
/// | `.record_history(b)`      | `true`                        |
/// | `.snapshot_interval(n)`   | `0` (no snapshot callbacks)   |
///
/// # Example
///
/// ```rust,ignore
/// let mut model = ModelBuilder::new(7)
///     .strategy(Strategy::Atomic)
///     .hungry_chance(0.5)
///     .build_seeded(42)?;
/// model.run(500, &mut NoopObserver);
/// ```
pub struct ModelBuilder {
    config:            ModelConfig,
    record_history:    bool,
    snapshot_interval: u64,
}

impl ModelBuilder {
    /// Start from the default configuration with `num_philosophers` seats.
    pub fn new(num_philosophers: u32) -> Self {
        Self::from_config(ModelConfig { num_philosophers, ..ModelConfig::default() })
    }

    pub fn from_config(config: ModelConfig) -> Self {
        Self {
            config,
            record_history:    true,
            snapshot_interval: 0,
        }
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    pub fn hungry_chance(mut self, p: f64) -> Self {
        self.config.hungry_chance = p;
        self
    }

    pub fn full_chance(mut self, p: f64) -> Self {
        self.config.full_chance = p;
        self
    }

    /// Keep every per-step metrics sample (otherwise only the latest).
    pub fn record_history(mut self, keep: bool) -> Self {
        self.record_history = keep;
        self
    }

    /// Fire `on_snapshot` every `n` steps; `0` disables it.
    pub fn snapshot_interval(mut self, n: u64) -> Self {
        self.snapshot_interval = n;
        self
    }

    /// Validate the configuration and build the model at tick 0.
    ///
    /// All philosophers start Thinking with zeroed counters; all forks start
    /// free.
    pub fn build<R: RandomSource>(self, rng: R) -> SimResult<Model<R>> {
        self.config.validate()?;
        let ring = RingTopology::new(self.config.num_philosophers)?;
        let table = Table::new(&ring);

        info!(
            philosophers  = self.config.num_philosophers,
            strategy      = %self.config.strategy,
            hungry_chance = self.config.hungry_chance,
            full_chance   = self.config.full_chance,
            "model built"
        );

        Ok(Model {
            config:            self.config,
            ring,
            table,
            rng,
            clock:             StepClock::new(),
            metrics:           MetricsAggregator::new(self.record_history),
            snapshot_interval: self.snapshot_interval,
        })
    }

    /// Shorthand for `build(SimRng::new(seed))`.
    pub fn build_seeded(self, seed: u64) -> SimResult<Model<SimRng>> {
        self.build(SimRng::new(seed))
    }
}
