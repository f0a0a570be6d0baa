//! The `Model` struct and its step loop.

use dp_agent::{Fork, Philosopher, Table};
use dp_core::{ModelConfig, PhilosopherId, RandomSource, RunConfig, SimRng, StepClock, Tick};
use dp_metrics::{MetricsAggregator, MetricsSnapshot};
use dp_ring::RingTopology;
use dp_strategy::World;
use tracing::debug;

use crate::{ModelBuilder, ModelObserver, SimResult, turn};

/// Build a model from `config`, using `rng` for every random draw.
///
/// Fails with [`SimError::Config`][crate::SimError::Config] when `config`
/// has fewer than three philosophers or a probability outside `[0, 1]`.
pub fn new_model<R: RandomSource>(config: ModelConfig, rng: R) -> SimResult<Model<R>> {
    ModelBuilder::from_config(config).build(rng)
}

// ── Model ─────────────────────────────────────────────────────────────────────

/// The dining philosophers model.
///
/// Owns the ring, the table (philosophers and forks), the random source, and
/// the metrics aggregator.  Callers only get shared views of the table; all
/// mutation goes through [`step`][Self::step].
///
/// Create via [`new_model`] or [`ModelBuilder`].
pub struct Model<R: RandomSource = SimRng> {
    pub(crate) config:            ModelConfig,
    pub(crate) ring:              RingTopology,
    pub(crate) table:             Table,
    pub(crate) rng:               R,
    pub(crate) clock:             StepClock,
    pub(crate) metrics:           MetricsAggregator,
    pub(crate) snapshot_interval: u64,
}

impl Model<SimRng> {
    /// Build a model driven by a [`SimRng`] seeded with `seed`.
    pub fn seeded(config: ModelConfig, seed: u64) -> SimResult<Self> {
        new_model(config, SimRng::new(seed))
    }

    /// Build a model from a full run description (model parameters + seed).
    pub fn from_run_config(run: &RunConfig) -> SimResult<Self> {
        ModelBuilder::from_config(run.model.clone())
            .snapshot_interval(run.output_interval_ticks)
            .build(SimRng::new(run.seed))
    }
}

impl<R: RandomSource> Model<R> {
    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance the model by one tick.
    ///
    /// Every philosopher takes exactly one turn, in a uniformly random order
    /// drawn fresh for this step.  Turns run strictly one after another.
    pub fn step(&mut self) {
        let order = self.rng.permutation(self.table.len());

        for seat in order {
            let who = PhilosopherId::from_seat(seat);
            let mut world = World::new(&self.ring, &mut self.table);
            turn::take_turn(who, &self.config, &mut world, &mut self.rng);
        }

        self.clock.advance();
        let now = self.clock.current_tick;
        let sample = self.metrics.record(now, self.table.philosophers());
        debug!(
            tick       = now.0,
            thinking   = sample.states.thinking,
            hungry     = sample.states.hungry,
            eating     = sample.states.eating,
            throughput = sample.throughput,
            "step complete"
        );
    }

    /// Run exactly `n` steps, calling observer hooks around each one.
    pub fn run_ticks<O: ModelObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            observer.on_step_start(self.clock.current_tick);
            self.step();

            let now = self.clock.current_tick;
            if let Some(sample) = self.metrics.latest() {
                observer.on_step_end(now, sample);
            }
            if now.is_every(self.snapshot_interval) {
                observer.on_snapshot(now, self.table.philosophers(), self.table.forks());
            }
        }
    }

    /// Run `n` steps and then signal the end of the run.
    pub fn run<O: ModelObserver>(&mut self, n: u64, observer: &mut O) {
        self.run_ticks(n, observer);
        observer.on_run_end(self.clock.current_tick);
    }

    // ── Read-only views ───────────────────────────────────────────────────

    /// Philosophers indexed by seat.
    pub fn philosophers(&self) -> &[Philosopher] {
        self.table.philosophers()
    }

    /// Forks indexed by slot.
    pub fn forks(&self) -> &[Fork] {
        self.table.forks()
    }

    pub fn philosopher(&self, id: PhilosopherId) -> &Philosopher {
        self.table.philosopher(id)
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn ring(&self) -> &RingTopology {
        &self.ring
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Completed steps.
    pub fn tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn steps_elapsed(&self) -> u64 {
        self.clock.steps_elapsed()
    }

    /// Metrics for the current state, computed on demand.
    ///
    /// Matches the aggregator's latest sample whenever at least one step has
    /// run.
    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot::capture(self.clock.current_tick, self.table.philosophers())
    }

    /// The per-step metrics collected so far.
    pub fn metrics(&self) -> &MetricsAggregator {
        &self.metrics
    }

    /// One-line text rendering of the ring, see [`Table::render_ring`].
    pub fn render_ring(&self) -> String {
        self.table.render_ring()
    }
}
