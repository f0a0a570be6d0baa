//! Fork-acquisition strategy selector shared by config, dispatch, and output.
//!
//! The set is closed: adding a strategy means adding a variant here and an
//! arm in `dp_strategy::attempt_acquire`.

use std::fmt;
use std::str::FromStr;

use crate::ConfigError;

/// How a Hungry philosopher tries to pick up its two forks.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Grab the left fork, then the right.  Holds a lone left fork across
    /// ticks and can deadlock.
    #[default]
    Naive,
    /// Take both forks in one step or neither.
    Atomic,
    /// Take both forks only if no Hungry second neighbor has priority.
    Cooperative,
}

impl Strategy {
    /// All strategies, in comparison-table order.
    pub const ALL: [Strategy; 3] = [Strategy::Naive, Strategy::Atomic, Strategy::Cooperative];

    /// Human-readable label, used for CSV columns and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Naive       => "naive",
            Strategy::Atomic      => "atomic",
            Strategy::Cooperative => "cooperative",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive"       => Ok(Strategy::Naive),
            "atomic"      => Ok(Strategy::Atomic),
            "cooperative" => Ok(Strategy::Cooperative),
            _             => Err(ConfigError::UnknownStrategy(s.to_owned())),
        }
    }
}
