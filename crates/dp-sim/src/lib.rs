//! `dp-sim` — the step scheduler for the rust_dp dining philosophers simulation.
//!
//! # One step
//!
//! ```text
//! step():
//!   ① Order   — draw a uniformly random permutation of all seats.
//!   ② Turns   — for each seat in that order, sequentially:
//!                 ticks_since_state_change += 1
//!                 Thinking → Hungry   with probability hungry_chance
//!                 Hungry   → Eating   if the strategy acquires both forks
//!                 Eating   → Thinking with probability full_chance (forks released)
//!   ③ Advance — tick += 1.
//!   ④ Sample  — the metrics aggregator records one snapshot.
//! ```
//!
//! Exactly one philosopher touches shared fork state at any instant, so fork
//! exclusivity holds at every point of a step, not only between steps.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dp_core::{ModelConfig, SimRng, Strategy};
//! use dp_sim::{new_model, NoopObserver};
//!
//! let config = ModelConfig { strategy: Strategy::Cooperative, ..ModelConfig::default() };
//! let mut model = new_model(config, SimRng::new(42))?;
//! model.run(1_000, &mut NoopObserver);
//! println!("{:?}", model.metrics_snapshot());
//! ```

pub mod builder;
pub mod error;
pub mod model;
pub mod observer;
pub mod turn;


pub use builder::ModelBuilder;
pub use error::{SimError, SimResult};
pub use model::{Model, new_model};
pub use observer::{ModelObserver, NoopObserver};
