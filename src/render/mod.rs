//! Raster rendering of a layout
//!
//! Connectors are drawn before motifs so the wheels sit on top of their chains.

/// Chain drawing between linked motifs
pub mod connector;
/// Wheel decoration
pub mod motif;
/// Anti-aliased drawing primitives
pub mod raster;

pub use raster::Raster;

use crate::layout::Layout;
use image::Rgba;

/// Paint the background, then every connector, then every motif
pub fn render_layout(raster: &mut Raster, layout: &Layout, background: Rgba<u8>) {
    raster.clear(background);
    for link in &layout.connectors {
        if let Some((from, to)) = layout.endpoints_of(link) {
            connector::draw_connector(raster, link, from, to);
        }
    }
    for wheel in &layout.motifs {
        motif::draw_motif(raster, wheel);
    }
}
