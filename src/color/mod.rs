//! Color handling for palettes and backgrounds

/// Fixed five-color palettes and their registry
pub mod palette;

pub use palette::{Palette, PaletteId, PaletteRegistry, parse_hex, rgb};
