use dp_core::ConfigError;
use thiserror::Error;

/// Construction failures.  A built model never errors: `step()` has no
/// failure path.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid model configuration: {0}")]
    Config(#[from] ConfigError),
}

pub type SimResult<T> = Result<T, SimError>;
