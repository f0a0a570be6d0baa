//! Ring topology: `2P` nodes on a cycle, philosophers on even positions and
//! forks on odd positions.
//!
//! # Layout
//!
//! ```text
//!            P0
//!        F9      F1
//!      P8          P2
//!        F7      F3
//!          P6  P4
//!            F5
//! ```
//!
//! Node `i` is adjacent to `(i - 1) mod 2P` and `(i + 1) mod 2P`, so every
//! philosopher has exactly two forks and every fork exactly two
//! philosophers.  A philosopher's *second neighbors* are the philosophers at
//! `pos ± 2`: the ones it shares a fork with.

use dp_core::{ConfigError, ConfigResult, ForkId, MIN_PHILOSOPHERS, PhilosopherId};

/// What sits at a ring position.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    Philosopher(PhilosopherId),
    Fork(ForkId),
}

/// Immutable cycle graph of philosopher and fork positions.
///
/// Cheap to copy: the graph is implicit in `num_nodes`, so neighbor lookups
/// are modular arithmetic with no allocation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingTopology {
    num_philosophers: u32,
    num_nodes:        u32,
}

impl RingTopology {
    /// Build the ring for `num_philosophers` seats.
    ///
    /// Fails with [`ConfigError::TooFewPhilosophers`] below
    /// [`MIN_PHILOSOPHERS`]: with fewer seats the two forks of a philosopher
    /// would not have distinct second neighbors.
    pub fn new(num_philosophers: u32) -> ConfigResult<Self> {
        if num_philosophers < MIN_PHILOSOPHERS {
            return Err(ConfigError::TooFewPhilosophers {
                got: num_philosophers,
                min: MIN_PHILOSOPHERS,
            });
        }
        Ok(Self {
            num_philosophers,
            num_nodes: num_philosophers * 2,
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn num_philosophers(&self) -> usize {
        self.num_philosophers as usize
    }

    /// Forks equal philosophers on a ring.
    #[inline]
    pub fn num_forks(&self) -> usize {
        self.num_philosophers as usize
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.num_nodes as usize
    }

    // ── Node queries ──────────────────────────────────────────────────────

    /// Classify ring position `pos` (taken modulo `2P`).
    pub fn node_kind(&self, pos: u32) -> NodeKind {
        let pos = pos % self.num_nodes;
        if pos % 2 == 0 {
            NodeKind::Philosopher(PhilosopherId(pos))
        } else {
            NodeKind::Fork(ForkId(pos))
        }
    }

    /// The two ring positions adjacent to `pos`: `[(pos - 1), (pos + 1)] mod 2P`.
    #[inline]
    pub fn neighbors(&self, pos: u32) -> [u32; 2] {
        [self.step_back(pos, 1), self.step_forward(pos, 1)]
    }

    /// `(left, right)` forks of a philosopher: positions `pos - 1` and `pos + 1`.
    #[inline]
    pub fn forks_of(&self, philosopher: PhilosopherId) -> (ForkId, ForkId) {
        let [left, right] = self.neighbors(philosopher.0);
        (ForkId(left), ForkId(right))
    }

    /// The two philosophers sharing `fork`, lower-position side first
    /// (`pos - 1`, then `pos + 1`).  Always distinct on a valid ring.
    #[inline]
    pub fn philosophers_adjacent_to(&self, fork: ForkId) -> [PhilosopherId; 2] {
        let [before, after] = self.neighbors(fork.0);
        [PhilosopherId(before), PhilosopherId(after)]
    }

    /// Philosophers at `pos - 2` and `pos + 2`: the other user of the left
    /// fork, then the other user of the right fork.
    pub fn second_neighbors(&self, philosopher: PhilosopherId) -> [PhilosopherId; 2] {
        let (left, right) = self.forks_of(philosopher);
        let [beyond_left, _] = self.philosophers_adjacent_to(left);
        let [_, beyond_right] = self.philosophers_adjacent_to(right);
        [beyond_left, beyond_right]
    }

    /// `true` if `fork` is one of `philosopher`'s two forks.
    #[inline]
    pub fn is_adjacent(&self, philosopher: PhilosopherId, fork: ForkId) -> bool {
        let (left, right) = self.forks_of(philosopher);
        fork == left || fork == right
    }

    // ── Iteration ─────────────────────────────────────────────────────────

    /// All philosophers in seat order.
    pub fn philosophers(&self) -> impl Iterator<Item = PhilosopherId> + '_ {
        (0..self.num_philosophers()).map(PhilosopherId::from_seat)
    }

    /// All forks in slot order.
    pub fn forks(&self) -> impl Iterator<Item = ForkId> + '_ {
        (0..self.num_forks()).map(ForkId::from_slot)
    }

    // ── Modular helpers ───────────────────────────────────────────────────

    #[inline]
    fn step_forward(&self, pos: u32, n: u32) -> u32 {
        (pos + n) % self.num_nodes
    }

    #[inline]
    fn step_back(&self, pos: u32, n: u32) -> u32 {
        (pos + self.num_nodes - n % self.num_nodes) % self.num_nodes
    }
}
