//! Spatial data structures
//!
//! This module contains:
//! - Points and canvas dimensions
//! - Motif and connector records produced by layout generation

/// Points, distances and canvas dimensions
pub mod geometry;
/// Motif and connector records
pub mod motif;

pub use geometry::{CanvasSize, Point};
pub use motif::{Connector, Motif};
