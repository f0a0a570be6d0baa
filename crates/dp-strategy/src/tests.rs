//! Unit tests for dp-strategy.
//!
//! Each test hand-builds a table state and calls a strategy for one
//! philosopher, so outcomes do not depend on turn order or random draws.

#[cfg(test)]
mod helpers {
    use dp_agent::{PhilosopherState, Table};
    use dp_core::PhilosopherId;
    use dp_ring::RingTopology;

    pub fn setup(p: u32) -> (RingTopology, Table) {
        let ring = RingTopology::new(p).unwrap();
        let table = Table::new(&ring);
        (ring, table)
    }

    /// Mark `who` Hungry with a wait of `waited` ticks.
    pub fn hungry(table: &mut Table, who: PhilosopherId, waited: u32) {
        let p = table.philosopher_mut(who);
        p.state = PhilosopherState::Hungry;
        p.ticks_since_state_change = waited;
    }
}

#[cfg(test)]
mod naive {
    use dp_core::{ForkId, PhilosopherId, Strategy};

    use super::helpers::{hungry, setup};
    use crate::{World, attempt_acquire};

    #[test]
    fn free_table_takes_both() {
        let (ring, mut table) = setup(5);
        hungry(&mut table, PhilosopherId(2), 1);
        let mut world = World::new(&ring, &mut table);
        assert!(attempt_acquire(Strategy::Naive, PhilosopherId(2), &mut world));
        assert!(table.fork(ForkId(1)).is_held_by(PhilosopherId(2)));
        assert!(table.fork(ForkId(3)).is_held_by(PhilosopherId(2)));
    }

    #[test]
    fn keeps_left_when_right_busy() {
        let (ring, mut table) = setup(5);
        // P4 holds F3 (its left), which is P2's right.
        table.fork_mut(ForkId(3)).claim(PhilosopherId(4));
        hungry(&mut table, PhilosopherId(2), 1);

        let mut world = World::new(&ring, &mut table);
        assert!(!attempt_acquire(Strategy::Naive, PhilosopherId(2), &mut world));
        assert!(table.fork(ForkId(1)).is_held_by(PhilosopherId(2)), "left fork stays in hand");
        assert!(table.fork(ForkId(3)).is_held_by(PhilosopherId(4)));
    }

    #[test]
    fn completes_with_previously_held_left() {
        let (ring, mut table) = setup(5);
        table.fork_mut(ForkId(1)).claim(PhilosopherId(2));
        hungry(&mut table, PhilosopherId(2), 3);

        let mut world = World::new(&ring, &mut table);
        assert!(attempt_acquire(Strategy::Naive, PhilosopherId(2), &mut world));
        assert!(table.fork(ForkId(3)).is_held_by(PhilosopherId(2)));
    }

    #[test]
    fn left_busy_takes_nothing() {
        let (ring, mut table) = setup(5);
        table.fork_mut(ForkId(1)).claim(PhilosopherId(0));
        hungry(&mut table, PhilosopherId(2), 1);

        let mut world = World::new(&ring, &mut table);
        assert!(!attempt_acquire(Strategy::Naive, PhilosopherId(2), &mut world));
        assert!(table.fork(ForkId(3)).is_free(), "never grabs right without left");
    }

    #[test]
    fn every_seat_holding_left_is_stuck() {
        let (ring, mut table) = setup(3);
        for p in ring.philosophers() {
            let (left, _) = ring.forks_of(p);
            table.fork_mut(left).claim(p);
            hungry(&mut table, p, 5);
        }
        for p in ring.philosophers() {
            let mut world = World::new(&ring, &mut table);
            assert!(!attempt_acquire(Strategy::Naive, p, &mut world));
        }
        assert!(table.forks().iter().all(|f| f.used()));
    }
}

#[cfg(test)]
mod atomic {
    use dp_core::{ForkId, PhilosopherId, Strategy};

    use super::helpers::{hungry, setup};
    use crate::{World, attempt_acquire};

    #[test]
    fn both_free_takes_both() {
        let (ring, mut table) = setup(5);
        hungry(&mut table, PhilosopherId(0), 1);
        let mut world = World::new(&ring, &mut table);
        assert!(attempt_acquire(Strategy::Atomic, PhilosopherId(0), &mut world));
        assert!(table.fork(ForkId(9)).is_held_by(PhilosopherId(0)));
        assert!(table.fork(ForkId(1)).is_held_by(PhilosopherId(0)));
    }

    #[test]
    fn one_busy_takes_neither() {
        let (ring, mut table) = setup(5);
        table.fork_mut(ForkId(3)).claim(PhilosopherId(4));
        hungry(&mut table, PhilosopherId(2), 1);

        let mut world = World::new(&ring, &mut table);
        assert!(!attempt_acquire(Strategy::Atomic, PhilosopherId(2), &mut world));
        assert!(table.fork(ForkId(1)).is_free(), "no partial hold");
    }

    #[test]
    fn ignores_waiting_neighbors() {
        let (ring, mut table) = setup(5);
        hungry(&mut table, PhilosopherId(2), 1);
        hungry(&mut table, PhilosopherId(4), 50);
        let mut world = World::new(&ring, &mut table);
        assert!(attempt_acquire(Strategy::Atomic, PhilosopherId(2), &mut world));
    }
}

#[cfg(test)]
mod cooperative {
    use dp_agent::Philosopher;
    use dp_core::{ForkId, PhilosopherId, Strategy};

    use super::helpers::{hungry, setup};
    use crate::cooperative::has_priority;
    use crate::{World, attempt_acquire};

    #[test]
    fn no_hungry_neighbors_eats() {
        let (ring, mut table) = setup(5);
        hungry(&mut table, PhilosopherId(4), 2);
        let mut world = World::new(&ring, &mut table);
        assert!(attempt_acquire(Strategy::Cooperative, PhilosopherId(4), &mut world));
        assert!(table.fork(ForkId(3)).is_held_by(PhilosopherId(4)));
        assert!(table.fork(ForkId(5)).is_held_by(PhilosopherId(4)));
    }

    #[test]
    fn yields_to_longer_wait() {
        let (ring, mut table) = setup(5);
        hungry(&mut table, PhilosopherId(4), 2);
        hungry(&mut table, PhilosopherId(6), 3);
        let mut world = World::new(&ring, &mut table);
        assert!(!attempt_acquire(Strategy::Cooperative, PhilosopherId(4), &mut world));
        assert!(table.forks().iter().all(|f| f.is_free()), "yielding claims nothing");
    }

    #[test]
    fn equal_wait_lower_id_wins() {
        let (ring, mut table) = setup(5);
        hungry(&mut table, PhilosopherId(2), 4);
        hungry(&mut table, PhilosopherId(4), 4);

        let mut world = World::new(&ring, &mut table);
        assert!(!attempt_acquire(Strategy::Cooperative, PhilosopherId(4), &mut world));
        assert!(attempt_acquire(Strategy::Cooperative, PhilosopherId(2), &mut world));
    }

    #[test]
    fn shorter_waiting_neighbor_does_not_block() {
        let (ring, mut table) = setup(5);
        hungry(&mut table, PhilosopherId(4), 7);
        hungry(&mut table, PhilosopherId(2), 1);
        hungry(&mut table, PhilosopherId(6), 6);
        let mut world = World::new(&ring, &mut table);
        assert!(attempt_acquire(Strategy::Cooperative, PhilosopherId(4), &mut world));
    }

    #[test]
    fn thinking_neighbor_is_ignored() {
        let (ring, mut table) = setup(5);
        hungry(&mut table, PhilosopherId(4), 0);
        // P6 has a long counter but is Thinking.
        table.philosopher_mut(PhilosopherId(6)).ticks_since_state_change = 99;
        let mut world = World::new(&ring, &mut table);
        assert!(attempt_acquire(Strategy::Cooperative, PhilosopherId(4), &mut world));
    }

    #[test]
    fn busy_fork_fails_before_priority_check() {
        let (ring, mut table) = setup(5);
        table.fork_mut(ForkId(5)).claim(PhilosopherId(6));
        hungry(&mut table, PhilosopherId(4), 100);
        let mut world = World::new(&ring, &mut table);
        assert!(!attempt_acquire(Strategy::Cooperative, PhilosopherId(4), &mut world));
        assert!(table.fork(ForkId(3)).is_free());
    }

    #[test]
    fn wrap_around_neighbor_counts() {
        // P0's second neighbors are P8 and P2 on a five-seat ring.
        let (ring, mut table) = setup(5);
        hungry(&mut table, PhilosopherId(0), 1);
        hungry(&mut table, PhilosopherId(8), 2);
        let mut world = World::new(&ring, &mut table);
        assert!(!attempt_acquire(Strategy::Cooperative, PhilosopherId(0), &mut world));
    }

    #[test]
    fn priority_is_antisymmetric() {
        let mut a = Philosopher::new(PhilosopherId(2));
        let mut b = Philosopher::new(PhilosopherId(4));
        for (wa, wb) in [(1, 1), (3, 1), (1, 3), (0, 0)] {
            a.ticks_since_state_change = wa;
            b.ticks_since_state_change = wb;
            assert_ne!(has_priority(&a, &b), has_priority(&b, &a), "waits {wa}/{wb}");
        }
    }
}

#[cfg(test)]
mod world {
    use dp_core::{ForkId, PhilosopherId};

    use super::helpers::setup;
    use crate::World;

    #[test]
    fn release_only_touches_own_forks() {
        let (ring, mut table) = setup(3);
        table.fork_mut(ForkId(1)).claim(PhilosopherId(0));
        table.fork_mut(ForkId(5)).claim(PhilosopherId(4));

        let mut world = World::new(&ring, &mut table);
        world.release_forks(PhilosopherId(0));
        assert!(table.fork(ForkId(1)).is_free());
        assert!(table.fork(ForkId(5)).is_held_by(PhilosopherId(4)), "neighbor's fork untouched");
    }

    #[test]
    fn hungry_second_neighbors_filters_state() {
        let (ring, mut table) = setup(5);
        super::helpers::hungry(&mut table, PhilosopherId(6), 1);
        let world = World::new(&ring, &mut table);
        let ids: Vec<_> = world
            .hungry_second_neighbors(PhilosopherId(4))
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, [PhilosopherId(6)]);
    }
}
