//! Per-philosopher state and wait-time accounting.
//!
//! The transition *rules* (when a philosopher gets hungry, how it picks up
//! forks) live in `dp-sim` and `dp-strategy`.  This module only owns the
//! bookkeeping each transition performs, so the counters cannot drift out of
//! sync with `state`.

use std::fmt;

use dp_core::PhilosopherId;

/// Where a philosopher is in the Thinking → Hungry → Eating cycle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhilosopherState {
    #[default]
    Thinking,
    Hungry,
    Eating,
}

impl PhilosopherState {
    /// Single-letter code used by the text ring view.
    pub fn code(self) -> char {
        match self {
            PhilosopherState::Thinking => 'T',
            PhilosopherState::Hungry   => 'H',
            PhilosopherState::Eating   => 'E',
        }
    }

    /// Lower-case label, used for CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            PhilosopherState::Thinking => "thinking",
            PhilosopherState::Hungry   => "hungry",
            PhilosopherState::Eating   => "eating",
        }
    }
}

impl fmt::Display for PhilosopherState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One seat at the table.
///
/// Invariant (maintained by the step loop): `state == Eating` ⇒ both
/// adjacent forks are owned by `id`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Philosopher {
    pub id: PhilosopherId,

    pub state: PhilosopherState,

    /// Turns taken since the last state change.  While Hungry this is the
    /// current wait.
    pub ticks_since_state_change: u32,

    /// Completed meals (Eating → Thinking transitions).
    pub total_eaten: u32,

    /// Sum of all Hungry durations that ended in a meal.
    pub total_wait_time: u32,

    /// Meals started (Hungry → Eating transitions).
    pub eating_count: u32,
}

impl Philosopher {
    /// A Thinking philosopher with all counters at zero.
    pub fn new(id: PhilosopherId) -> Self {
        Self {
            id,
            state:                    PhilosopherState::Thinking,
            ticks_since_state_change: 0,
            total_eaten:              0,
            total_wait_time:          0,
            eating_count:             0,
        }
    }

    #[inline]
    pub fn is_hungry(&self) -> bool {
        self.state == PhilosopherState::Hungry
    }

    #[inline]
    pub fn is_eating(&self) -> bool {
        self.state == PhilosopherState::Eating
    }

    /// Start-of-turn bookkeeping: one more tick in the current state.
    #[inline]
    pub fn begin_turn(&mut self) {
        self.ticks_since_state_change = self.ticks_since_state_change.saturating_add(1);
    }

    /// Thinking → Hungry.
    pub fn become_hungry(&mut self) {
        debug_assert_eq!(self.state, PhilosopherState::Thinking);
        self.state = PhilosopherState::Hungry;
        self.ticks_since_state_change = 0;
    }

    /// Hungry → Eating.  Charges the finished wait to `total_wait_time`.
    ///
    /// The caller must already hold both forks.
    pub fn start_eating(&mut self) {
        debug_assert_eq!(self.state, PhilosopherState::Hungry);
        self.total_wait_time = self.total_wait_time.saturating_add(self.ticks_since_state_change);
        self.eating_count += 1;
        self.state = PhilosopherState::Eating;
        self.ticks_since_state_change = 0;
    }

    /// Eating → Thinking.  The caller releases the forks.
    pub fn finish_eating(&mut self) {
        debug_assert_eq!(self.state, PhilosopherState::Eating);
        self.total_eaten += 1;
        self.state = PhilosopherState::Thinking;
        self.ticks_since_state_change = 0;
    }
}
