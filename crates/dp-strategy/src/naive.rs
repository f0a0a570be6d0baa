//! Naive acquisition: left fork first, then right.
//!
//! ```text
//! left free and not mine?      → pick it up
//! holding left and right free? → pick up right, eat
//! otherwise                    → keep whatever is held, stay Hungry
//! ```
//!
//! A lone left fork stays in hand across ticks.  If every seat holds its
//! left fork and waits on its right, nobody can proceed; this protocol has no
//! guard against that cycle.

use dp_core::PhilosopherId;

use crate::World;

pub fn attempt(who: PhilosopherId, world: &mut World<'_>) -> bool {
    let (left, right) = world.fork_ids(who);

    let (l, _) = world.forks(who);
    if !l.is_held_by(who) && l.is_free() {
        world.claim(who, left);
    }

    let (l, r) = world.forks(who);
    if l.is_held_by(who) && r.is_free() {
        world.claim(who, right);
        return true;
    }
    false
}
