//! Tunable parameters for layout generation and radius animation

use crate::io::configuration::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_MOTIF_COUNT, LINK_DISTANCE_FACTOR, MAX_RADIUS_FRACTION,
    MIN_RADIUS_FRACTION, NOISE_MOTIF_OFFSET, NOISE_STEP, OVERLAP_FACTOR, PROXIMITY_FACTOR,
    RADIUS_SCALE_MIN, RADIUS_SCALE_SPAN,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::CanvasSize;

/// Parameters of the placement engine and link graph builder
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSettings {
    /// Number of motifs to accept before stopping
    pub motif_count: usize,
    /// Smallest radius as a fraction of canvas width
    pub min_radius_fraction: f64,
    /// Largest radius as a fraction of canvas width
    pub max_radius_fraction: f64,
    /// Candidate draws allowed per generation
    pub max_attempts: usize,
    /// Fraction of the smaller radius two motifs may overlap by
    pub overlap_factor: f64,
    /// Multiple of combined radii that counts as near an accepted motif
    pub proximity_factor: f64,
    /// Multiple of combined radii below which two motifs are linked
    pub link_distance_factor: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            motif_count: DEFAULT_MOTIF_COUNT,
            min_radius_fraction: MIN_RADIUS_FRACTION,
            max_radius_fraction: MAX_RADIUS_FRACTION,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            overlap_factor: OVERLAP_FACTOR,
            proximity_factor: PROXIMITY_FACTOR,
            link_distance_factor: LINK_DISTANCE_FACTOR,
        }
    }
}

fn check_factor(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &"must be finite and non-negative",
        ))
    }
}

impl LayoutSettings {
    /// Check that every parameter is usable
    ///
    /// # Errors
    ///
    /// Returns an `InvalidParameter` error naming the first offending field
    pub fn validate(&self) -> Result<()> {
        if !(self.min_radius_fraction.is_finite() && self.min_radius_fraction > 0.0) {
            return Err(invalid_parameter(
                "min_radius_fraction",
                &self.min_radius_fraction,
                &"must be finite and positive",
            ));
        }
        if !(self.max_radius_fraction.is_finite()
            && self.max_radius_fraction >= self.min_radius_fraction)
        {
            return Err(invalid_parameter(
                "max_radius_fraction",
                &self.max_radius_fraction,
                &"must be finite and at least min_radius_fraction",
            ));
        }
        check_factor("overlap_factor", self.overlap_factor)?;
        check_factor("proximity_factor", self.proximity_factor)?;
        check_factor("link_distance_factor", self.link_distance_factor)?;
        Ok(())
    }

    /// Radius bounds in pixels for a canvas, derived from its width
    pub fn radius_bounds(&self, canvas: CanvasSize) -> (f64, f64) {
        let width = canvas.width_f64();
        (
            width * self.min_radius_fraction,
            width * self.max_radius_fraction,
        )
    }
}

/// Parameters of the animation driver
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSettings {
    /// Time added after each rendered frame
    pub time_step: f64,
    /// Noise input offset between consecutive motifs
    pub motif_offset: f64,
    /// Display radius multiple at noise 0
    pub scale_min: f64,
    /// Display radius multiple gained per unit of noise
    pub scale_span: f64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            time_step: NOISE_STEP,
            motif_offset: NOISE_MOTIF_OFFSET,
            scale_min: RADIUS_SCALE_MIN,
            scale_span: RADIUS_SCALE_SPAN,
        }
    }
}

impl AnimationSettings {
    /// Check that every parameter is usable
    ///
    /// # Errors
    ///
    /// Returns an `InvalidParameter` error naming the first offending field
    pub fn validate(&self) -> Result<()> {
        check_factor("time_step", self.time_step)?;
        check_factor("motif_offset", self.motif_offset)?;
        check_factor("scale_min", self.scale_min)?;
        check_factor("scale_span", self.scale_span)?;
        Ok(())
    }

    /// Display radius multiple for a noise sample in `[0, 1)`
    pub fn scale_for(&self, noise: f64) -> f64 {
        noise.mul_add(self.scale_span, self.scale_min)
    }
}
