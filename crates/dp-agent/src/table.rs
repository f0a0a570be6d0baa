//! `Table`: the arena that owns every philosopher and fork.
//!
//! Both collections are flat `Vec`s.  Philosophers are indexed by seat
//! (`PhilosopherId::seat`), forks by slot (`ForkId::slot`):
//!
//! ```ignore
//! let p = &table.philosophers()[id.seat()];   // O(1)
//! let f = table.fork(ForkId(3));               // slot 1
//! ```
//!
//! The step loop is the only writer.  Everything outside `dp-sim` and
//! `dp-strategy` sees the table through `&[Philosopher]` / `&[Fork]`.

use std::fmt::Write as _;

use dp_core::{ForkId, PhilosopherId};
use dp_ring::RingTopology;

use crate::{Fork, Philosopher};

/// Flat storage for one dining table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    philosophers: Vec<Philosopher>,
    forks:        Vec<Fork>,
}

impl Table {
    /// All philosophers Thinking, all forks free.
    pub fn new(ring: &RingTopology) -> Self {
        Self {
            philosophers: ring.philosophers().map(Philosopher::new).collect(),
            forks:        ring.forks().map(Fork::new).collect(),
        }
    }

    /// Number of seats.
    #[inline]
    pub fn len(&self) -> usize {
        self.philosophers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.philosophers.is_empty()
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Philosophers in seat order.
    #[inline]
    pub fn philosophers(&self) -> &[Philosopher] {
        &self.philosophers
    }

    /// Forks in slot order.
    #[inline]
    pub fn forks(&self) -> &[Fork] {
        &self.forks
    }

    #[inline]
    pub fn philosopher(&self, id: PhilosopherId) -> &Philosopher {
        &self.philosophers[id.seat()]
    }

    #[inline]
    pub fn fork(&self, id: ForkId) -> &Fork {
        &self.forks[id.slot()]
    }

    // ── Write access (step loop only) ─────────────────────────────────────

    #[inline]
    pub fn philosopher_mut(&mut self, id: PhilosopherId) -> &mut Philosopher {
        &mut self.philosophers[id.seat()]
    }

    #[inline]
    pub fn fork_mut(&mut self, id: ForkId) -> &mut Fork {
        &mut self.forks[id.slot()]
    }

    // ── Views ─────────────────────────────────────────────────────────────

    /// One-line text view of the ring, clockwise from seat 0.
    ///
    /// Every node is labelled by its ring position, as its id displays.
    /// Philosophers print as `P<pos>:<state code>`; forks print bare
    /// (`F<pos>`) when free and bracketed (`[F<pos>]`) when held:
    ///
    /// ```text
    /// P0:E [F1] P2:T F3 P4:H [F5]
    /// ```
    ///
    /// Fork `F5` above is bracketed because P0 holds it (its left fork).
    pub fn render_ring(&self) -> String {
        let mut out = String::new();
        for (p, f) in self.philosophers.iter().zip(&self.forks) {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "{}:{}", p.id, p.state.code());
            if f.used() {
                let _ = write!(out, " [{}]", f.id());
            } else {
                let _ = write!(out, " {}", f.id());
            }
        }
        out
    }
}
