//! Seeded random source consumed by the scheduler and the state machine.
//!
//! # Determinism strategy
//!
//! A model owns exactly one random source, passed in at construction.  Each
//! step samples it in a fixed sequence:
//!
//! 1. one permutation draw (the turn order for the step);
//! 2. then, in permutation order, each philosopher's own transition draws
//!    (one `uniform()` while Thinking or Eating, none while Hungry).
//!
//! Two models built from the same configuration and an identically seeded
//! source therefore produce identical runs.  There is no process-wide
//! generator anywhere in the workspace.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ── RandomSource ──────────────────────────────────────────────────────────────

/// The random-number interface the simulation consumes.
///
/// Implemented by [`SimRng`]; tests may provide scripted sources to force
/// exact turn orders and transition outcomes.
pub trait RandomSource {
    /// A uniformly distributed value in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// `k` distinct indices from `0..n`, in random order.
    ///
    /// # Panics
    /// Implementations may panic if `k > n`.
    fn sample_without_replacement(&mut self, n: usize, k: usize) -> Vec<usize>;

    /// A uniformly random permutation of `0..n`.
    #[inline]
    fn permutation(&mut self, n: usize) -> Vec<usize> {
        self.sample_without_replacement(n, n)
    }

    /// Bernoulli trial: `true` with probability `p`.
    ///
    /// Always consumes exactly one `uniform()` draw, so `p == 0.0` and
    /// `p == 1.0` keep the draw sequence aligned with intermediate values.
    #[inline]
    fn bernoulli(&mut self, p: f64) -> bool {
        self.uniform() < p
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn uniform(&mut self) -> f64 {
        (**self).uniform()
    }

    #[inline]
    fn sample_without_replacement(&mut self, n: usize, k: usize) -> Vec<usize> {
        (**self).sample_without_replacement(n, k)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG backed by a seeded `SmallRng`.
///
/// Used only from the single-threaded step loop.  `SimRng` is `Send` so a
/// whole model can move between threads, but it is never shared.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    fn sample_without_replacement(&mut self, n: usize, k: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, n, k).into_vec()
    }
}
