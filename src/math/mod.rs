//! Mathematical utilities for animation and sampling

/// Seeded one-dimensional fractal noise
pub mod noise;
/// Seeded uniform sampling helpers
pub mod sampling;
