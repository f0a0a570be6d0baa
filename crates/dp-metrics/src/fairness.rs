//! Fairness measures: the spread of per-philosopher counters.

use dp_agent::Philosopher;

/// Largest pairwise difference in `eating_count` (meals started).
///
/// 0 for an empty or perfectly even table.
pub fn eating_count_gap(philosophers: &[Philosopher]) -> u32 {
    spread(philosophers.iter().map(|p| p.eating_count))
}

/// Largest pairwise difference in `total_eaten` (meals finished).
pub fn total_eaten_gap(philosophers: &[Philosopher]) -> u32 {
    spread(philosophers.iter().map(|p| p.total_eaten))
}

fn spread(values: impl Iterator<Item = u32>) -> u32 {
    let (min, max) = values.fold((u32::MAX, 0), |(lo, hi), v| (lo.min(v), hi.max(v)));
    max.saturating_sub(min)
}
