//! Strongly typed ring-position identifiers.
//!
//! The table is a cycle of `2P` nodes.  Even positions seat philosophers and
//! odd positions hold forks, so both id types wrap the raw ring position:
//!
//! ```text
//! position:  0   1   2   3   4   5  ...  2P-2  2P-1
//! node:      P0  F1  P2  F3  P4  F5 ...  P     F
//! ```
//!
//! The inner integer is `pub` so ids compare as plain positions.  Both types
//! display as the node label in the diagram above (`P4`, `F5`); the same
//! labels appear in logs and in `Table::render_ring`.
//! Arena storage is indexed by *seat* (philosophers) or *slot* (forks), both
//! `position / 2`; use the `seat()` / `slot()` helpers rather than
//! `index()` when indexing a `Vec`.

use std::fmt;

/// Generate a typed ring-position wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) = $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Raw ring position as `usize`.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&format!(concat!($label, "{}"), self.0))
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }
    };
}

typed_id! {
    /// Ring position of a philosopher.  Always even.
    pub struct PhilosopherId(u32) = "P";
}

typed_id! {
    /// Ring position of a fork.  Always odd.
    pub struct ForkId(u32) = "F";
}

impl PhilosopherId {
    /// The philosopher sitting at `seat` (0-based, clockwise).
    #[inline]
    pub fn from_seat(seat: usize) -> Self {
        PhilosopherId((seat * 2) as u32)
    }

    /// Index into per-philosopher arrays.
    #[inline(always)]
    pub fn seat(self) -> usize {
        (self.0 / 2) as usize
    }
}

impl ForkId {
    /// The fork lying in `slot` (0-based; slot `i` sits between seats `i` and `i + 1`).
    #[inline]
    pub fn from_slot(slot: usize) -> Self {
        ForkId((slot * 2 + 1) as u32)
    }

    /// Index into per-fork arrays.
    #[inline(always)]
    pub fn slot(self) -> usize {
        (self.0 / 2) as usize
    }
}
