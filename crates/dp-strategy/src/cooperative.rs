//! Cooperative acquisition: atomic grab with a priority yield.
//!
//! With both forks free, the philosopher still steps aside if a Hungry
//! second neighbor (`pos ± 2`, the other user of one of its forks) has
//! priority:
//!
//! 1. the neighbor has waited strictly longer, or
//! 2. the waits are equal and the neighbor's id is lower.
//!
//! Rule 2 makes every pairwise comparison decisive, so two Hungry neighbors
//! can never both yield to each other.

use dp_agent::Philosopher;
use dp_core::PhilosopherId;

use crate::World;

pub fn attempt(who: PhilosopherId, world: &mut World<'_>) -> bool {
    let (l, r) = world.forks(who);
    if !(l.is_free() && r.is_free()) {
        return false;
    }

    let me = world.philosopher(who);
    if world
        .hungry_second_neighbors(who)
        .any(|other| has_priority(other, me))
    {
        return false;
    }

    let (left, right) = world.fork_ids(who);
    world.claim(who, left);
    world.claim(who, right);
    true
}

/// `true` if `other` should eat before `me`.
#[inline]
pub fn has_priority(other: &Philosopher, me: &Philosopher) -> bool {
    other.ticks_since_state_change > me.ticks_since_state_change
        || (other.ticks_since_state_change == me.ticks_since_state_change && other.id < me.id)
}
