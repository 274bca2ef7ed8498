//! Motif ("wheel") and connector records
//!
//! Both records are created once per layout generation. A motif's position and base
//! radius never change afterwards; only its display radius follows the animation.
//! Connector geometry is frozen at the base radii of its endpoints.

use crate::color::{Palette, PaletteId};
use crate::spatial::geometry::Point;
use image::Rgba;

/// Placed decorated circle
#[derive(Clone, Debug, PartialEq)]
pub struct Motif {
    position: Point,
    base_radius: f64,
    current_radius: f64,
    palette_id: PaletteId,
    palette: Palette,
    decoration_seed: f64,
}

impl Motif {
    /// Create a motif whose display radius starts at its base radius
    pub const fn new(
        position: Point,
        base_radius: f64,
        palette_id: PaletteId,
        palette: Palette,
        decoration_seed: f64,
    ) -> Self {
        Self {
            position,
            base_radius,
            current_radius: base_radius,
            palette_id,
            palette,
            decoration_seed,
        }
    }

    /// Center in canvas coordinates
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Placement-time radius used for spacing and connector geometry
    pub const fn base_radius(&self) -> f64 {
        self.base_radius
    }

    /// Animated display radius
    pub const fn current_radius(&self) -> f64 {
        self.current_radius
    }

    /// Registry identity of the palette
    pub const fn palette_id(&self) -> PaletteId {
        self.palette_id
    }

    /// Colors used to draw the motif
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Stable angle that rotates the decoration
    pub const fn decoration_seed(&self) -> f64 {
        self.decoration_seed
    }

    /// Set the display radius to `scale` times the base radius
    pub fn apply_scale(&mut self, scale: f64) {
        self.current_radius = self.base_radius * scale;
    }
}

/// Link between two motifs of the same layout
#[derive(Clone, Debug, PartialEq)]
pub struct Connector {
    from: usize,
    to: usize,
    color: Rgba<u8>,
    angle: f64,
    start: Point,
    end: Point,
}

impl Connector {
    /// Connect motif `from_index` to motif `to_index`
    ///
    /// The contact points sit on each motif's base circle along the line between
    /// their centers.
    pub fn between(
        from_index: usize,
        from: &Motif,
        to_index: usize,
        to: &Motif,
        color: Rgba<u8>,
    ) -> Self {
        let angle = from.position.angle_to(to.position);
        let start = from.position.offset_polar(angle, from.base_radius);
        let end = to.position.offset_polar(angle, -to.base_radius);
        Self {
            from: from_index,
            to: to_index,
            color,
            angle,
            start,
            end,
        }
    }

    /// Indices of the two endpoint motifs in layout order
    pub const fn endpoints(&self) -> (usize, usize) {
        (self.from, self.to)
    }

    /// Stroke color
    pub const fn color(&self) -> Rgba<u8> {
        self.color
    }

    /// Direction from the first endpoint towards the second
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    /// Contact point on the first motif's base circle
    pub const fn start(&self) -> Point {
        self.start
    }

    /// Contact point on the second motif's base circle
    pub const fn end(&self) -> Point {
        self.end
    }
}
