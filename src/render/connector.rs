//! Chain drawing between two linked wheels

use crate::render::raster::Raster;
use crate::spatial::{Connector, Motif, Point};
use image::Rgba;

/// Distance between bead centers along the live gap
pub const BEAD_SPACING: f64 = 14.0;
const BEAD_RADIUS: f64 = 3.5;
const LINE_WIDTH: f64 = 2.0;
const RING_RADIUS: f64 = 7.0;
const RING_WIDTH: f64 = 2.0;

/// Bead centers spread over the gap between the two animated circles
///
/// Spacing uses the live distance between the endpoints' current circles, so beads
/// disappear while the breathing wheels touch and return as they shrink.
pub fn bead_positions(from: &Motif, to: &Motif) -> Vec<Point> {
    let (a, b) = (from.position(), to.position());
    let distance = a.distance(b);
    let gap = distance - from.current_radius() - to.current_radius();
    if distance <= f64::EPSILON || gap < BEAD_SPACING {
        return Vec::new();
    }

    let angle = a.angle_to(b);
    let gap_start = a.offset_polar(angle, from.current_radius());
    let count = (gap / BEAD_SPACING).floor() as usize;
    let margin = (gap - (count - 1) as f64 * BEAD_SPACING) / 2.0;
    (0..count)
        .map(|k| gap_start.offset_polar(angle, (k as f64).mul_add(BEAD_SPACING, margin)))
        .collect()
}

/// Center of the live gap, if the circles do not touch
pub fn ring_position(from: &Motif, to: &Motif) -> Option<Point> {
    let (a, b) = (from.position(), to.position());
    let gap = a.distance(b) - from.current_radius() - to.current_radius();
    if gap <= 0.0 {
        return None;
    }
    let angle = a.angle_to(b);
    Some(
        a.offset_polar(angle, from.current_radius())
            .offset_polar(angle, gap / 2.0),
    )
}

fn lighten(color: Rgba<u8>, amount: f64) -> Rgba<u8> {
    let lift = |c: u8| amount.mul_add(255.0 - f64::from(c), f64::from(c)).round() as u8;
    Rgba([lift(color[0]), lift(color[1]), lift(color[2]), color[3]])
}

/// Draw the connector line, its beads and its ring
pub fn draw_connector(raster: &mut Raster, connector: &Connector, from: &Motif, to: &Motif) {
    let color = connector.color();
    raster.stroke_line(connector.start(), connector.end(), LINE_WIDTH, color);

    let bead_color = lighten(color, 0.35);
    for bead in bead_positions(from, to) {
        raster.fill_circle(bead, BEAD_RADIUS, bead_color);
    }

    if let Some(center) = ring_position(from, to) {
        raster.stroke_circle(center, RING_RADIUS, RING_WIDTH, lighten(color, 0.6));
    }
}
