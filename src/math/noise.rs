//! Seeded one-dimensional fractal noise for radius animation
//!
//! A lattice of uniform random values is sampled with cosine easing between
//! neighbouring lattice points, and several octaves are summed with decaying
//! amplitude. Nearby inputs give nearby outputs and every sample lies in `[0, 1)`.

use crate::io::configuration::{NOISE_FALLOFF, NOISE_OCTAVES, NOISE_TABLE_SIZE};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::f64::consts::PI;

// Keeps the lattice stream apart from the layout stream when both share a seed
const NOISE_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Smooth, reproducible noise over a single real input
#[derive(Clone, Debug)]
pub struct FractalNoise {
    table: Vec<f64>,
    mask: usize,
    octaves: usize,
    falloff: f64,
    normalizer: f64,
}

fn scaled_cosine(t: f64) -> f64 {
    0.5 * (1.0 - (t * PI).cos())
}

impl FractalNoise {
    /// Noise with the default octave count and falloff
    pub fn new(seed: u64) -> Self {
        Self::with_shape(seed, NOISE_OCTAVES, NOISE_FALLOFF)
    }

    /// Noise with a custom octave count and amplitude falloff
    ///
    /// At least one octave is always sampled and the falloff is clamped to `[0, 1]`.
    pub fn with_shape(seed: u64, octaves: usize, falloff: f64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed ^ NOISE_SEED_SALT);
        let table: Vec<f64> = (0..NOISE_TABLE_SIZE).map(|_| rng.random::<f64>()).collect();
        let octaves = octaves.max(1);
        let falloff = if falloff.is_finite() {
            falloff.clamp(0.0, 1.0)
        } else {
            NOISE_FALLOFF
        };

        // Amplitudes start at 0.5; rescale only if their sum could reach 1
        let mut amplitude = 0.5;
        let mut amplitude_sum = 0.0;
        for _ in 0..octaves {
            amplitude_sum += amplitude;
            amplitude *= falloff;
        }

        Self {
            table,
            mask: NOISE_TABLE_SIZE - 1,
            octaves,
            falloff,
            normalizer: amplitude_sum.max(1.0),
        }
    }

    /// Exclusive upper bound of `sample`
    pub fn upper_bound(&self) -> f64 {
        let mut amplitude = 0.5;
        let mut sum = 0.0;
        for _ in 0..self.octaves {
            sum += amplitude;
            amplitude *= self.falloff;
        }
        sum / self.normalizer
    }

    /// Sample the noise at `x`; negative inputs mirror positive ones
    pub fn sample(&self, x: f64) -> f64 {
        let x = if x.is_finite() { x.abs() } else { 0.0 };
        let floor = x.floor();
        let mut lattice = (floor as usize) & self.mask;
        let mut fraction = x - floor;

        let mut total = 0.0;
        let mut amplitude = 0.5;
        for _ in 0..self.octaves {
            let left = self.table.get(lattice).copied().unwrap_or(0.0);
            let right = self
                .table
                .get((lattice + 1) & self.mask)
                .copied()
                .unwrap_or(0.0);
            let eased = scaled_cosine(fraction);
            total += eased.mul_add(right - left, left) * amplitude;

            amplitude *= self.falloff;
            lattice = (lattice << 1) & self.mask;
            fraction *= 2.0;
            if fraction >= 1.0 {
                lattice = (lattice + 1) & self.mask;
                fraction -= 1.0;
            }
        }

        total / self.normalizer
    }
}
