//! Configuration error type.
//!
//! Invalid construction parameters are the only failure the simulation core
//! knows about.  They surface once, when a model is built, and are never
//! recovered internally.  Sub-crates wrap `ConfigError` via `#[from]`.

use thiserror::Error;

/// Rejected model configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("at least {min} philosophers are required, got {got}")]
    TooFewPhilosophers { got: u32, min: u32 },

    #[error("{name} must lie in [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("unknown strategy {0:?} (expected naive, atomic or cooperative)")]
    UnknownStrategy(String),
}

/// Shorthand result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;
