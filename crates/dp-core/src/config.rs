//! Model and run configuration.

use crate::{ConfigError, ConfigResult, Strategy};

/// Smallest table that forms a proper ring (every fork has two distinct neighbors).
pub const MIN_PHILOSOPHERS: u32 = 3;

// ── ModelConfig ───────────────────────────────────────────────────────────────

/// Parameters of one dining table.  Immutable once a model is built.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModelConfig {
    /// Number of philosophers `P`.  The ring has `2P` nodes.
    pub num_philosophers: u32,

    /// Fork-acquisition strategy used by every philosopher.
    pub strategy: Strategy,

    /// Per-tick probability that a Thinking philosopher becomes Hungry.
    pub hungry_chance: f64,

    /// Per-tick probability that an Eating philosopher is full and stops.
    pub full_chance: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            num_philosophers: 5,
            strategy:         Strategy::Naive,
            hungry_chance:    0.1,
            full_chance:      0.2,
        }
    }
}

impl ModelConfig {
    /// Reject tables smaller than [`MIN_PHILOSOPHERS`] and probabilities
    /// outside `[0, 1]` (NaN included).
    pub fn validate(&self) -> ConfigResult<()> {
        if self.num_philosophers < MIN_PHILOSOPHERS {
            return Err(ConfigError::TooFewPhilosophers {
                got: self.num_philosophers,
                min: MIN_PHILOSOPHERS,
            });
        }
        check_probability("hungry_chance", self.hungry_chance)?;
        check_probability("full_chance", self.full_chance)?;
        Ok(())
    }

    /// Number of ring nodes (`2P`).
    #[inline]
    pub fn num_nodes(&self) -> u32 {
        self.num_philosophers * 2
    }
}

fn check_probability(name: &'static str, value: f64) -> ConfigResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name, value })
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// A complete, reproducible run: table parameters plus seed and length.
///
/// Typically loaded from a JSON file by the application crate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    pub model: ModelConfig,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Total steps to simulate.
    pub total_ticks: u64,

    /// Emit a philosopher/fork snapshot every N steps.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            model:                 ModelConfig::default(),
            seed:                  42,
            total_ticks:           1_000,
            output_interval_ticks: 1,
        }
    }
}
