//! Atomic acquisition: both forks in one step, or neither.
//!
//! A partial hold is never observable, so hold-and-wait (and with it
//! deadlock) cannot occur.

use dp_core::PhilosopherId;

use crate::World;

pub fn attempt(who: PhilosopherId, world: &mut World<'_>) -> bool {
    let (l, r) = world.forks(who);
    if !(l.is_free() && r.is_free()) {
        return false;
    }
    let (left, right) = world.fork_ids(who);
    world.claim(who, left);
    world.claim(who, right);
    true
}
