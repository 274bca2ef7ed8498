//! Drawing surface lifecycle
//!
//! The surface creates and resizes the canvas, triggers layout generation and runs
//! the per-frame animate-then-render tick.

/// Surface state and frame tick
pub mod controller;
/// Scripted resize events
pub mod schedule;

pub use controller::{Scene, Surface, SurfaceSettings};
pub use schedule::{ResizeEvent, ResizeSchedule};
