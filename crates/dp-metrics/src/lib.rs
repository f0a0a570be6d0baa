//! `dp-metrics` — read-only projections of philosopher state.
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`snapshot`]   | `MetricsSnapshot`, `StateCounts`                       |
//! | [`aggregator`] | `MetricsAggregator` — per-step sample history          |
//! | [`fairness`]   | `eating_count_gap`, `total_eaten_gap`                  |
//!
//! Nothing here mutates simulation state; every value can be recomputed from
//! a `&[Philosopher]` and the number of completed steps.

pub mod aggregator;
pub mod fairness;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use aggregator::MetricsAggregator;
pub use fairness::{eating_count_gap, total_eaten_gap};
pub use snapshot::{MetricsSnapshot, StateCounts};
