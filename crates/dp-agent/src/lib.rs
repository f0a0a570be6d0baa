//! `dp-agent` — philosopher and fork state for the `rust_dp` simulation.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`fork`]        | `Fork` — exclusively ownable resource                     |
//! | [`philosopher`] | `Philosopher`, `PhilosopherState`, wait-time accounting   |
//! | [`table`]       | `Table` — flat arenas of philosophers and forks           |
//!
//! # Arena + index
//!
//! Philosophers and forks never hold references to each other.  They live in
//! two `Vec`s owned by [`Table`]; a fork's owner and a philosopher's
//! neighbors are plain ids resolved through the table (and the
//! `dp_ring::RingTopology`) at access time.

pub mod fork;
pub mod philosopher;
pub mod table;

#[cfg(test)]
mod tests;

pub use fork::Fork;
pub use philosopher::{Philosopher, PhilosopherState};
pub use table::Table;
