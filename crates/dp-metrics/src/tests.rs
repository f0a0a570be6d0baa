//! Unit tests for dp-metrics.

#[cfg(test)]
mod helpers {
    use dp_agent::{Philosopher, PhilosopherState};
    use dp_core::PhilosopherId;

    /// A philosopher with the given counters.
    pub fn phil(
        seat:  usize,
        state: PhilosopherState,
        eaten: u32,
        wait:  u32,
        meals: u32,
    ) -> Philosopher {
        let mut p = Philosopher::new(PhilosopherId::from_seat(seat));
        p.state = state;
        p.total_eaten = eaten;
        p.total_wait_time = wait;
        p.eating_count = meals;
        p
    }
}

#[cfg(test)]
mod snapshot {
    use dp_agent::{Philosopher, PhilosopherState::*};
    use dp_core::{PhilosopherId, Tick};
    use dp_ring::RingTopology;

    use super::helpers::phil;
    use crate::{MetricsSnapshot, StateCounts};

    #[test]
    fn fresh_table_is_all_zero() {
        let ring = RingTopology::new(5).unwrap();
        let ps: Vec<_> = ring.philosophers().map(Philosopher::new).collect();
        let s = MetricsSnapshot::capture(Tick::ZERO, &ps);
        assert_eq!(s.states, StateCounts { thinking: 5, hungry: 0, eating: 0 });
        assert_eq!(s.avg_wait_time, 0.0);
        assert_eq!(s.throughput, 0.0);
        assert_eq!(s.per_philosopher_eaten, vec![0; 5]);
    }

    #[test]
    fn averages_and_rates() {
        let ps = vec![
            phil(0, Eating, 2, 6, 3),
            phil(1, Hungry, 1, 2, 1),
            phil(2, Thinking, 3, 4, 3),
        ];
        let s = MetricsSnapshot::capture(Tick(12), &ps);
        assert_eq!(s.states, StateCounts { thinking: 1, hungry: 1, eating: 1 });
        assert_eq!(s.states.total(), 3);
        // (6 + 2 + 4) / (3 + 1 + 3)
        assert!((s.avg_wait_time - 12.0 / 7.0).abs() < 1e-12);
        // (2 + 1 + 3) / 12
        assert!((s.throughput - 0.5).abs() < 1e-12);
        assert_eq!(s.per_philosopher_eaten, vec![2, 1, 3]);
        assert_eq!(s.total_eaten(), 6);
    }

    #[test]
    fn throughput_zero_at_tick_zero_even_with_meals() {
        let ps = vec![phil(0, Thinking, 4, 0, 4)];
        assert_eq!(MetricsSnapshot::capture(Tick(0), &ps).throughput, 0.0);
    }

    #[test]
    fn avg_wait_zero_without_meals() {
        let mut p = Philosopher::new(PhilosopherId(0));
        p.state = Hungry;
        p.ticks_since_state_change = 40;
        let s = MetricsSnapshot::capture(Tick(40), &[p]);
        assert_eq!(s.avg_wait_time, 0.0);
    }
}

#[cfg(test)]
mod aggregator {
    use dp_agent::PhilosopherState::*;
    use dp_core::Tick;

    use super::helpers::phil;
    use crate::MetricsAggregator;

    #[test]
    fn history_keeps_every_sample() {
        let mut agg = MetricsAggregator::default();
        assert!(agg.latest().is_none());
        let ps = vec![phil(0, Thinking, 0, 0, 0), phil(1, Hungry, 0, 0, 0)];
        for t in 1..=3 {
            agg.record(Tick(t), &ps);
        }
        assert_eq!(agg.len(), 3);
        assert_eq!(agg.samples()[0].tick, Tick(1));
        assert_eq!(agg.latest().unwrap().tick, Tick(3));
    }

    #[test]
    fn no_history_keeps_latest_only() {
        let mut agg = MetricsAggregator::new(false);
        let ps = vec![phil(0, Eating, 1, 1, 1)];
        let first = agg.record(Tick(1), &ps).clone();
        agg.record(Tick(2), &ps);
        assert!(agg.is_empty());
        assert!(!agg.keeps_history());
        assert_eq!(first.tick, Tick(1));
        assert_eq!(agg.latest().unwrap().tick, Tick(2));
    }
}

#[cfg(test)]
mod fairness {
    use dp_agent::PhilosopherState::*;

    use super::helpers::phil;
    use crate::{eating_count_gap, total_eaten_gap};

    #[test]
    fn gap_is_max_minus_min() {
        let ps = vec![
            phil(0, Thinking, 5, 0, 7),
            phil(1, Thinking, 2, 0, 2),
            phil(2, Thinking, 9, 0, 10),
        ];
        assert_eq!(eating_count_gap(&ps), 8);
        assert_eq!(total_eaten_gap(&ps), 7);
    }

    #[test]
    fn empty_and_even_tables() {
        assert_eq!(eating_count_gap(&[]), 0);
        let ps = vec![phil(0, Thinking, 3, 0, 3), phil(1, Eating, 3, 0, 3)];
        assert_eq!(eating_count_gap(&ps), 0);
    }
}
