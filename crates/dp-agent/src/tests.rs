//! Unit tests for dp-agent.

#[cfg(test)]
mod fork {
    use dp_core::{ForkId, PhilosopherId};

    use crate::Fork;

    #[test]
    fn starts_free() {
        let f = Fork::new(ForkId(3));
        assert!(f.is_free());
        assert!(!f.used());
        assert_eq!(f.owner(), None);
    }

    #[test]
    fn claim_sets_used_and_owner_together() {
        let mut f = Fork::new(ForkId(1));
        f.claim(PhilosopherId(2));
        assert!(f.used());
        assert_eq!(f.owner(), Some(PhilosopherId(2)));
        assert!(f.is_held_by(PhilosopherId(2)));
        assert!(!f.is_held_by(PhilosopherId(0)));
    }

    #[test]
    fn release_is_idempotent() {
        let mut f = Fork::new(ForkId(1));
        f.claim(PhilosopherId(0));
        f.release();
        f.release();
        assert!(f.is_free());
        assert_eq!(f.owner(), None);
    }
}

#[cfg(test)]
mod philosopher {
    use dp_core::PhilosopherId;

    use crate::{Philosopher, PhilosopherState};

    #[test]
    fn starts_thinking_with_zero_counters() {
        let p = Philosopher::new(PhilosopherId(4));
        assert_eq!(p.state, PhilosopherState::Thinking);
        assert_eq!(p.ticks_since_state_change, 0);
        assert_eq!(p.total_eaten, 0);
        assert_eq!(p.total_wait_time, 0);
        assert_eq!(p.eating_count, 0);
    }

    #[test]
    fn full_cycle_accounting() {
        let mut p = Philosopher::new(PhilosopherId(0));
        p.begin_turn();
        p.become_hungry();
        assert_eq!(p.ticks_since_state_change, 0);

        // Three unsuccessful turns, then a successful fourth.
        for _ in 0..4 {
            p.begin_turn();
        }
        p.start_eating();
        assert_eq!(p.state, PhilosopherState::Eating);
        assert_eq!(p.total_wait_time, 4);
        assert_eq!(p.eating_count, 1);
        assert_eq!(p.total_eaten, 0, "meal not finished yet");

        p.begin_turn();
        p.finish_eating();
        assert_eq!(p.state, PhilosopherState::Thinking);
        assert_eq!(p.total_eaten, 1);
        assert_eq!(p.ticks_since_state_change, 0);
    }

    #[test]
    fn wait_time_accumulates_over_meals() {
        let mut p = Philosopher::new(PhilosopherId(0));
        for wait in [2u32, 5] {
            p.become_hungry();
            for _ in 0..wait {
                p.begin_turn();
            }
            p.start_eating();
            p.finish_eating();
        }
        assert_eq!(p.total_wait_time, 7);
        assert_eq!(p.eating_count, 2);
        assert_eq!(p.total_eaten, 2);
    }

    #[test]
    fn state_codes() {
        assert_eq!(PhilosopherState::Thinking.code(), 'T');
        assert_eq!(PhilosopherState::Hungry.code(), 'H');
        assert_eq!(PhilosopherState::Eating.code(), 'E');
        assert_eq!(PhilosopherState::Eating.to_string(), "eating");
    }
}

#[cfg(test)]
mod table {
    use dp_core::{ForkId, PhilosopherId};
    use dp_ring::RingTopology;

    use crate::{PhilosopherState, Table};

    fn table(p: u32) -> Table {
        Table::new(&RingTopology::new(p).unwrap())
    }

    #[test]
    fn arenas_sized_from_ring() {
        let t = table(5);
        assert_eq!(t.len(), 5);
        assert_eq!(t.philosophers().len(), 5);
        assert_eq!(t.forks().len(), 5);
        assert!(!t.is_empty());
    }

    #[test]
    fn ids_match_positions() {
        let t = table(4);
        for (seat, p) in t.philosophers().iter().enumerate() {
            assert_eq!(p.id, PhilosopherId::from_seat(seat));
        }
        for (slot, f) in t.forks().iter().enumerate() {
            assert_eq!(f.id(), ForkId::from_slot(slot));
        }
    }

    #[test]
    fn lookup_by_id() {
        let mut t = table(3);
        t.fork_mut(ForkId(5)).claim(PhilosopherId(4));
        assert_eq!(t.fork(ForkId(5)).owner(), Some(PhilosopherId(4)));
        t.philosopher_mut(PhilosopherId(2)).state = PhilosopherState::Hungry;
        assert!(t.philosopher(PhilosopherId(2)).is_hungry());
    }

    #[test]
    fn render_ring_marks_held_forks() {
        let mut t = table(3);
        assert_eq!(t.render_ring(), "P0:T F1 P2:T F3 P4:T F5");

        t.fork_mut(ForkId(1)).claim(PhilosopherId(0));
        t.fork_mut(ForkId(5)).claim(PhilosopherId(0));
        t.philosopher_mut(PhilosopherId(0)).state = PhilosopherState::Eating;
        t.philosopher_mut(PhilosopherId(4)).state = PhilosopherState::Hungry;
        assert_eq!(t.render_ring(), "P0:E [F1] P2:T F3 P4:H [F5]");
    }

    #[test]
    fn render_ring_labels_match_id_display() {
        let t = table(4);
        let ring = t.render_ring();
        for p in t.philosophers() {
            assert!(ring.contains(&format!("{}:", p.id)), "{ring}");
        }
        for f in t.forks() {
            assert!(ring.contains(&format!(" {}", f.id())), "{ring}");
        }
        assert!(ring.ends_with("P6:T F7"), "{ring}");
    }
}
