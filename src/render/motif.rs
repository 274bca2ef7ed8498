//! Ornamental drawing of a single wheel
//!
//! Layers from the outside in: the dominant disc, a ring of accent dots, radiating
//! spokes, the hub, and short stems ending in bulbs around a center dot. All
//! proportions follow the animated radius and all angles turn with the motif's
//! decoration seed.

use crate::render::raster::Raster;
use crate::spatial::Motif;
use std::f64::consts::TAU;

const DOT_COUNT: usize = 24;
const DOT_RING: f64 = 0.86;
const DOT_SIZE: f64 = 0.055;
const SPOKE_COUNT: usize = 12;
const SPOKE_INNER: f64 = 0.32;
const SPOKE_OUTER: f64 = 0.74;
const HUB_RADIUS: f64 = 0.3;
const STEM_COUNT: usize = 6;
const STEM_LENGTH: f64 = 0.22;
const BULB_SIZE: f64 = 0.05;
const CENTER_DOT: f64 = 0.09;

/// Draw a motif at its current radius
pub fn draw_motif(raster: &mut Raster, motif: &Motif) {
    let center = motif.position();
    let radius = motif.current_radius();
    let palette = motif.palette();
    let seed = motif.decoration_seed();
    if radius <= 0.0 {
        return;
    }

    raster.fill_circle(center, radius, palette.dominant());

    for i in 0..DOT_COUNT {
        let angle = (i as f64).mul_add(TAU / DOT_COUNT as f64, seed);
        raster.fill_circle(
            center.offset_polar(angle, radius * DOT_RING),
            radius * DOT_SIZE,
            palette.accent(1),
        );
    }

    let spoke_width = (radius * 0.03).max(1.0);
    for i in 0..SPOKE_COUNT {
        let angle = (i as f64).mul_add(TAU / SPOKE_COUNT as f64, seed);
        raster.stroke_line(
            center.offset_polar(angle, radius * SPOKE_INNER),
            center.offset_polar(angle, radius * SPOKE_OUTER),
            spoke_width,
            palette.accent(2),
        );
    }

    raster.fill_circle(center, radius * HUB_RADIUS, palette.accent(3));

    // Stems sit between spokes, pointing outwards from the hub edge
    let stem_width = (radius * 0.02).max(1.0);
    for i in 0..STEM_COUNT {
        let angle = (i as f64 + 0.5).mul_add(TAU / STEM_COUNT as f64, seed);
        let root = center.offset_polar(angle, radius * (HUB_RADIUS - STEM_LENGTH));
        let tip = center.offset_polar(angle, radius * HUB_RADIUS);
        raster.stroke_line(root, tip, stem_width, palette.accent(4));
        raster.fill_circle(tip, radius * BULB_SIZE, palette.accent(4));
    }

    raster.fill_circle(center, radius * CENTER_DOT, palette.accent(1));
}
