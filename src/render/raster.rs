//! Anti-aliased shape drawing onto an RGBA pixel buffer
//!
//! Each shape is described by a signed distance function; a pixel's coverage is the
//! part of a one-pixel band around the edge that falls inside the shape.

use crate::spatial::{CanvasSize, Point};
use image::{Rgba, RgbaImage};

/// Opaque drawing surface
#[derive(Clone, Debug)]
pub struct Raster {
    image: RgbaImage,
}

fn coverage(signed_distance: f64) -> f64 {
    (0.5 - signed_distance).clamp(0.0, 1.0)
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let length_sq = dx.mul_add(dx, dy * dy);
    if length_sq <= f64::EPSILON {
        return p.distance(a);
    }
    let t = ((p.x - a.x).mul_add(dx, (p.y - a.y) * dy) / length_sq).clamp(0.0, 1.0);
    p.distance(a.lerp(b, t))
}

impl Raster {
    /// Blank raster filled with `background`
    pub fn new(canvas: CanvasSize, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(canvas.width, canvas.height, background),
        }
    }

    /// Replace the buffer with one of a new size
    pub fn resize(&mut self, canvas: CanvasSize, background: Rgba<u8>) {
        self.image = RgbaImage::from_pixel(canvas.width, canvas.height, background);
    }

    /// Fill every pixel with `color`
    pub fn clear(&mut self, color: Rgba<u8>) {
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the pixel buffer
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Color of a pixel, if it lies inside the raster
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Blend `color` over a pixel with the given coverage in `[0, 1]`
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>, amount: f64) {
        let alpha = amount.clamp(0.0, 1.0) * f64::from(color[3]) / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if let Some(pixel) = self.image.get_pixel_mut_checked(x, y) {
            for channel in 0..3 {
                let src = f64::from(color[channel]);
                let dst = f64::from(pixel[channel]);
                pixel[channel] = alpha.mul_add(src - dst, dst).round() as u8;
            }
            pixel[3] = 255;
        }
    }

    /// Filled disc
    pub fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba<u8>) {
        if radius <= 0.0 {
            return;
        }
        self.shade(center, radius + 1.0, color, |p| p.distance(center) - radius);
    }

    /// Circle outline of the given stroke thickness
    pub fn stroke_circle(&mut self, center: Point, radius: f64, thickness: f64, color: Rgba<u8>) {
        if radius <= 0.0 || thickness <= 0.0 {
            return;
        }
        let half = thickness / 2.0;
        self.shade(center, radius + half + 1.0, color, |p| {
            (p.distance(center) - radius).abs() - half
        });
    }

    /// Line segment with round caps
    pub fn stroke_line(&mut self, from: Point, to: Point, thickness: f64, color: Rgba<u8>) {
        if thickness <= 0.0 {
            return;
        }
        let half = thickness / 2.0;
        let center = from.lerp(to, 0.5);
        let reach = from.distance(to) / 2.0 + half + 1.0;
        self.shade(center, reach, color, |p| {
            distance_to_segment(p, from, to) - half
        });
    }

    // Visits pixel centers within `reach` of `center` on both axes
    fn shade(
        &mut self,
        center: Point,
        reach: f64,
        color: Rgba<u8>,
        signed_distance: impl Fn(Point) -> f64,
    ) {
        let (width, height) = (f64::from(self.width()), f64::from(self.height()));
        let min_x = (center.x - reach).floor().max(0.0);
        let max_x = (center.x + reach).ceil().min(width);
        let min_y = (center.y - reach).floor().max(0.0);
        let max_y = (center.y + reach).ceil().min(height);
        if min_x >= max_x || min_y >= max_y {
            return;
        }

        for y in (min_y as u32)..(max_y as u32) {
            for x in (min_x as u32)..(max_x as u32) {
                let sample = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                let amount = coverage(signed_distance(sample));
                if amount > 0.0 {
                    self.blend_pixel(x, y, color, amount);
                }
            }
        }
    }
}
