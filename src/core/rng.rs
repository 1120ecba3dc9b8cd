//! Seeded randomness.
//!
//! Two things in a game are random: which free slot a stone drops into,
//! and which pit an automated player picks. Each draws from its own
//! ChaCha8 stream derived from one seed, so choosing moves never shifts
//! slot placement and a seed reproduces a run exactly.
//!
//! ```
//! use bao_engine::core::GameRng;
//!
//! let mut slots = GameRng::new(42).for_context("slots");
//! let mut again = GameRng::new(42).for_context("slots");
//!
//! let pits = [3, 4, 5];
//! assert_eq!(slots.choose(&pits), again.choose(&pits));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// A fresh stream keyed by this RNG's seed and `context`.
    ///
    /// Depends only on the seed, not on how much has been drawn.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Uniform pick from `slice`, or `None` if it is empty.
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
