//! `dp-strategy` — how a Hungry philosopher picks up its forks.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`world`]       | `World<'a>` — the acting philosopher's view of the table  |
//! | [`naive`]       | left-then-right grab, may hold one fork across ticks      |
//! | [`atomic`]      | both-or-neither grab                                      |
//! | [`cooperative`] | both-or-neither grab, yielding to longer-waiting neighbors |
//!
//! # Contract
//!
//! Every strategy answers one question for one philosopher during its own
//! turn: *do you hold both forks now?*  A `false` answer is ordinary control
//! flow (the philosopher stays Hungry), never an error.  Strategies touch only
//! the two forks adjacent to the acting philosopher, and draw no random
//! numbers.
//!
//! The strategy set is closed, so dispatch is a `match` on
//! [`dp_core::Strategy`] rather than a trait object.

pub mod atomic;
pub mod cooperative;
pub mod naive;
pub mod world;

#[cfg(test)]
mod tests;

use dp_core::{PhilosopherId, Strategy};
use tracing::trace;

pub use world::World;

/// Run `strategy` for the Hungry philosopher `who`.
///
/// Returns `true` if `who` now owns both adjacent forks and may start
/// eating.  The caller performs the Hungry → Eating bookkeeping.
pub fn attempt_acquire(strategy: Strategy, who: PhilosopherId, world: &mut World<'_>) -> bool {
    let acquired = match strategy {
        Strategy::Naive       => naive::attempt(who, world),
        Strategy::Atomic      => atomic::attempt(who, world),
        Strategy::Cooperative => cooperative::attempt(who, world),
    };
    trace!(philosopher = %who, %strategy, acquired, "fork acquisition attempt");
    acquired
}
