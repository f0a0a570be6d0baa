//! Plain data row types written by output backends.

use dp_agent::{Fork, Philosopher};
use dp_core::Tick;
use dp_metrics::MetricsSnapshot;

/// Aggregate metrics after one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMetricsRow {
    pub tick:          u64,
    pub thinking:      u32,
    pub hungry:        u32,
    pub eating:        u32,
    pub avg_wait_time: f64,
    pub throughput:    f64,
}

impl From<&MetricsSnapshot> for TickMetricsRow {
    fn from(m: &MetricsSnapshot) -> Self {
        Self {
            tick:          m.tick.0,
            thinking:      m.states.thinking as u32,
            hungry:        m.states.hungry as u32,
            eating:        m.states.eating as u32,
            avg_wait_time: m.avg_wait_time,
            throughput:    m.throughput,
        }
    }
}

/// One philosopher's state and counters at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhilosopherSnapshotRow {
    pub tick:                     u64,
    /// Ring position (even).
    pub philosopher_id:           u32,
    pub seat:                     u32,
    pub state:                    &'static str,
    pub ticks_since_state_change: u32,
    pub total_eaten:              u32,
    pub total_wait_time:          u32,
    pub eating_count:             u32,
}

impl PhilosopherSnapshotRow {
    pub fn new(tick: Tick, p: &Philosopher) -> Self {
        Self {
            tick:                     tick.0,
            philosopher_id:           p.id.index() as u32,
            seat:                     p.id.seat() as u32,
            state:                    p.state.as_str(),
            ticks_since_state_change: p.ticks_since_state_change,
            total_eaten:              p.total_eaten,
            total_wait_time:          p.total_wait_time,
            eating_count:             p.eating_count,
        }
    }
}

/// One fork's occupancy at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForkSnapshotRow {
    pub tick:    u64,
    /// Ring position (odd).
    pub fork_id: u32,
    pub used:    bool,
    /// Ring position of the holder; `None` when free.
    pub owner:   Option<u32>,
}

impl ForkSnapshotRow {
    pub fn new(tick: Tick, fork: &Fork) -> Self {
        Self {
            tick:    tick.0,
            fork_id: fork.id().index() as u32,
            used:    fork.used(),
            owner:   fork.owner().map(|p| p.index() as u32),
        }
    }
}
