//! Step counting.
//!
//! A `Tick` is a count of completed steps; one step gives every philosopher
//! exactly one turn.  Tick 0 is the table before anyone has moved.

use std::fmt;

/// Number of completed steps.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// `true` on every `interval`-th tick after tick 0.  An interval of 0
    /// never matches, which is how periodic work is switched off.
    #[inline]
    pub fn is_every(self, interval: u64) -> bool {
        interval > 0 && self.0 > 0 && self.0.is_multiple_of(interval)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// Owned by the model; advanced once at the end of each step.
#[derive(Clone, Debug, Default)]
pub struct StepClock {
    pub current_tick: Tick,
}

impl StepClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick.0 += 1;
    }

    #[inline]
    pub fn steps_elapsed(&self) -> u64 {
        self.current_tick.0
    }
}
