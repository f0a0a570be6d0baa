//! A fork: the binary mutual-exclusion resource between two seats.

use dp_core::{ForkId, PhilosopherId};

/// One fork on the table.
///
/// Fields are private so the pairing invariant holds everywhere:
///
/// - `used == false` ⇒ `owner == None`
/// - `owner == Some(p)` ⇒ `used == true`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fork {
    id:    ForkId,
    used:  bool,
    owner: Option<PhilosopherId>,
}

impl Fork {
    /// A free fork at ring position `id`.
    pub fn new(id: ForkId) -> Self {
        Self { id, used: false, owner: None }
    }

    #[inline]
    pub fn id(&self) -> ForkId {
        self.id
    }

    #[inline]
    pub fn used(&self) -> bool {
        self.used
    }

    #[inline]
    pub fn owner(&self) -> Option<PhilosopherId> {
        self.owner
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        !self.used
    }

    #[inline]
    pub fn is_held_by(&self, philosopher: PhilosopherId) -> bool {
        self.owner == Some(philosopher)
    }

    /// Mark the fork as held by `philosopher`.
    ///
    /// Callers check [`is_free`](Self::is_free) first; claiming a fork that
    /// someone else holds is a logic error.
    #[inline]
    pub fn claim(&mut self, philosopher: PhilosopherId) {
        debug_assert!(
            self.is_free() || self.is_held_by(philosopher),
            "{} already held by {:?}",
            self.id,
            self.owner
        );
        self.used = true;
        self.owner = Some(philosopher);
    }

    /// Put the fork down.  Idempotent.
    #[inline]
    pub fn release(&mut self) {
        self.used = false;
        self.owner = None;
    }
}
