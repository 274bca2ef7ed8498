//! Noise-driven breathing of motif radii

use crate::layout::settings::AnimationSettings;
use crate::math::noise::FractalNoise;
use crate::spatial::Motif;

/// Monotonic animation time shared by every layout generation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationClock {
    time: f64,
    step: f64,
}

impl AnimationClock {
    /// Clock starting at zero that advances by `step` per frame
    pub const fn new(step: f64) -> Self {
        Self { time: 0.0, step }
    }

    /// Current time
    pub const fn time(&self) -> f64 {
        self.time
    }

    /// Per-frame increment
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Move to the next frame
    pub fn advance(&mut self) {
        self.time += self.step;
    }
}

/// Set every motif's display radius for time `time`
///
/// Motif `i` samples the noise at `time + i * motif_offset` so neighbours do not
/// pulse in lockstep. Base radii and connector geometry are left untouched.
pub fn animate(
    motifs: &mut [Motif],
    noise: &FractalNoise,
    time: f64,
    settings: &AnimationSettings,
) {
    for (i, motif) in motifs.iter_mut().enumerate() {
        let n = noise.sample((i as f64).mul_add(settings.motif_offset, time));
        motif.apply_scale(settings.scale_for(n));
    }
}
