//! Command line, configuration, errors and file output

/// Command-line interface and the frame-loop runner
pub mod cli;
/// Default constants for layout, animation and output
pub mod configuration;
/// Error types and helpers
pub mod error;
/// PNG export of single frames
pub mod image;
/// Terminal progress reporting
pub mod progress;
/// Frame capture and animated GIF export
pub mod visualization;
