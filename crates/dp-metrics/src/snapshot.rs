//! One metrics sample.

use dp_agent::{Philosopher, PhilosopherState};
use dp_core::Tick;

/// How many philosophers are in each state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateCounts {
    pub thinking: usize,
    pub hungry:   usize,
    pub eating:   usize,
}

impl StateCounts {
    pub fn count(philosophers: &[Philosopher]) -> Self {
        let mut counts = StateCounts::default();
        for p in philosophers {
            match p.state {
                PhilosopherState::Thinking => counts.thinking += 1,
                PhilosopherState::Hungry   => counts.hungry += 1,
                PhilosopherState::Eating   => counts.eating += 1,
            }
        }
        counts
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.thinking + self.hungry + self.eating
    }
}

/// Metrics for the table after `tick` completed steps.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsSnapshot {
    pub tick: Tick,

    pub states: StateCounts,

    /// `Σ total_wait_time / Σ eating_count`; 0 until someone has eaten.
    pub avg_wait_time: f64,

    /// `Σ total_eaten / steps_elapsed`; 0 at tick 0.
    pub throughput: f64,

    /// `total_eaten` per philosopher, in seat order.
    pub per_philosopher_eaten: Vec<u32>,
}

impl MetricsSnapshot {
    /// Project `philosophers` after `tick.0` completed steps.
    pub fn capture(tick: Tick, philosophers: &[Philosopher]) -> Self {
        let total_wait: u64 = philosophers.iter().map(|p| u64::from(p.total_wait_time)).sum();
        let meals_started: u64 = philosophers.iter().map(|p| u64::from(p.eating_count)).sum();
        let meals_finished: u64 = philosophers.iter().map(|p| u64::from(p.total_eaten)).sum();

        let avg_wait_time = if meals_started == 0 {
            0.0
        } else {
            total_wait as f64 / meals_started as f64
        };
        let throughput = if tick.0 == 0 {
            0.0
        } else {
            meals_finished as f64 / tick.0 as f64
        };

        Self {
            tick,
            states: StateCounts::count(philosophers),
            avg_wait_time,
            throughput,
            per_philosopher_eaten: philosophers.iter().map(|p| p.total_eaten).collect(),
        }
    }

    /// `Σ total_eaten` across the table.
    pub fn total_eaten(&self) -> u64 {
        self.per_philosopher_eaten.iter().map(|&n| u64::from(n)).sum()
    }
}
