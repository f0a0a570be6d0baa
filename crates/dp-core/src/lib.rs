//! `dp-core` — foundational types for the `rust_dp` dining philosophers simulation.
//!
//! This crate is a dependency of every other `dp-*` crate.  It has no `dp-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`ids`]        | `PhilosopherId`, `ForkId` (ring positions)               |
//! | [`time`]       | `Tick`, `StepClock`                                      |
//! | [`rng`]        | `RandomSource` trait, `SimRng` (seeded `SmallRng`)       |
//! | [`strategy`]   | `Strategy` enum (Naive / Atomic / Cooperative)           |
//! | [`config`]     | `ModelConfig`, `RunConfig`                               |
//! | [`error`]      | `ConfigError`, `ConfigResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod strategy;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ModelConfig, RunConfig, MIN_PHILOSOPHERS};
pub use error::{ConfigError, ConfigResult};
pub use ids::{ForkId, PhilosopherId};
pub use rng::{RandomSource, SimRng};
pub use strategy::Strategy;
pub use time::{StepClock, Tick};
