//! Procedural wheel-and-chain compositions drawn with textile-inspired palettes
//!
//! A rejection-sampling placement engine scatters loosely clustered circular motifs
//! across a canvas, a proximity pass links neighbouring motifs with connectors, and a
//! seeded noise field makes every motif breathe from frame to frame.

#![forbid(unsafe_code)]

/// Palette registry and color parsing
pub mod color;
/// Input/output operations, configuration and error handling
pub mod io;
/// Placement engine, link graph builder and animation driver
pub mod layout;
/// Noise and seeded sampling utilities
pub mod math;
/// Raster drawing of connectors and motifs
pub mod render;
/// Geometry primitives and the motif/connector records
pub mod spatial;
/// Canvas lifecycle, resize scheduling and the frame loop
pub mod surface;

pub use io::error::{Result, WheelError};

/// Initialize the `env_logger` backend for the `log` facade
///
/// `RUST_LOG` takes precedence over the level picked from the flags.
pub fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    // A logger installed earlier, e.g. by a test harness, stays in place
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init()
        .ok();
}
