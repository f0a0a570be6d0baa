//! The mutable view a philosopher's turn operates on.

use dp_agent::{Fork, Philosopher, Table};
use dp_core::{ForkId, PhilosopherId};
use dp_ring::RingTopology;

/// Topology plus exclusive access to the table for the duration of one
/// philosopher's turn.
///
/// Built by the step loop for each turn and dropped before the next one
/// starts, so exactly one philosopher mutates shared fork state at a time.
/// Fork accessors take the acting philosopher and only resolve its own two
/// forks.
pub struct World<'a> {
    ring:  &'a RingTopology,
    table: &'a mut Table,
}

impl<'a> World<'a> {
    #[inline]
    pub fn new(ring: &'a RingTopology, table: &'a mut Table) -> Self {
        Self { ring, table }
    }

    #[inline]
    pub fn ring(&self) -> &RingTopology {
        self.ring
    }

    #[inline]
    pub fn table(&self) -> &Table {
        self.table
    }

    // ── Philosophers ──────────────────────────────────────────────────────

    #[inline]
    pub fn philosopher(&self, id: PhilosopherId) -> &Philosopher {
        self.table.philosopher(id)
    }

    #[inline]
    pub fn philosopher_mut(&mut self, id: PhilosopherId) -> &mut Philosopher {
        self.table.philosopher_mut(id)
    }

    /// The philosophers at `pos ± 2` that are currently Hungry.
    pub fn hungry_second_neighbors(&self, who: PhilosopherId) -> impl Iterator<Item = &Philosopher> + '_ {
        let table: &Table = self.table;
        self.ring
            .second_neighbors(who)
            .into_iter()
            .map(move |id| table.philosopher(id))
            .filter(|p| p.is_hungry())
    }

    // ── Forks ─────────────────────────────────────────────────────────────

    /// Ids of `who`'s `(left, right)` forks.
    #[inline]
    pub fn fork_ids(&self, who: PhilosopherId) -> (ForkId, ForkId) {
        self.ring.forks_of(who)
    }

    /// `who`'s `(left, right)` forks.
    #[inline]
    pub fn forks(&self, who: PhilosopherId) -> (&Fork, &Fork) {
        let (left, right) = self.ring.forks_of(who);
        (self.table.fork(left), self.table.fork(right))
    }

    /// Pick up `fork` for `who`.  `fork` must be adjacent and free (or
    /// already held by `who`).
    #[inline]
    pub fn claim(&mut self, who: PhilosopherId, fork: ForkId) {
        debug_assert!(self.ring.is_adjacent(who, fork), "{who} cannot reach {fork}");
        self.table.fork_mut(fork).claim(who);
    }

    /// Put down every adjacent fork `who` holds.  Forks held by the
    /// neighbor are left alone.
    pub fn release_forks(&mut self, who: PhilosopherId) {
        let (left, right) = self.ring.forks_of(who);
        for id in [left, right] {
            let fork = self.table.fork_mut(id);
            if fork.is_held_by(who) {
                fork.release();
            }
        }
    }
}
