//! Seeded random selection used by layout generation

use rand::{Rng, SeedableRng, rngs::StdRng};
use std::f64::consts::TAU;

/// Seeded random selector for reproducible stochastic choices
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform draw from the closed range `[low, high]`
    ///
    /// A collapsed or inverted range returns `low` without consuming randomness.
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..=high)
    }

    /// Uniform index in `0..len`, or 0 for an empty range
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }

    /// Uniform index in `0..len` that is never `excluded`
    ///
    /// Falls back to `excluded` when it is the only index available.
    pub fn index_excluding(&mut self, len: usize, excluded: usize) -> usize {
        if excluded >= len {
            return self.index(len);
        }
        if len < 2 {
            return excluded;
        }
        let drawn = self.rng.random_range(0..len - 1);
        if drawn >= excluded { drawn + 1 } else { drawn }
    }

    /// Uniform angle in `[0, 2π)`
    pub fn angle(&mut self) -> f64 {
        self.rng.random::<f64>() * TAU
    }
}
