//! Canvas-space points and canvas dimensions

use crate::io::error::{Result, invalid_parameter};

/// Point in canvas coordinates (x to the right, y downwards)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Angle of the direction from this point towards `other`
    pub fn angle_to(self, other: Self) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Point reached by travelling `length` along `angle`
    pub fn offset_polar(self, angle: f64, length: f64) -> Self {
        Self {
            x: angle.cos().mul_add(length, self.x),
            y: angle.sin().mul_add(length, self.y),
        }
    }

    /// Linear interpolation towards `other` (`t = 0` is `self`)
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: t.mul_add(other.x - self.x, self.x),
            y: t.mul_add(other.y - self.y, self.y),
        }
    }
}

/// Pixel dimensions of the drawing surface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl CanvasSize {
    /// Create a canvas size
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 {
            return Err(invalid_parameter("width", &width, &"must be positive"));
        }
        if height == 0 {
            return Err(invalid_parameter("height", &height, &"must be positive"));
        }
        Ok(Self { width, height })
    }

    /// Width as a float for geometric work
    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as a float for geometric work
    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }

    /// Whether a circle of this radius can lie fully inside the canvas
    pub fn fits_radius(self, radius: f64) -> bool {
        2.0 * radius <= self.width_f64() && 2.0 * radius <= self.height_f64()
    }

    /// Whether the whole circle lies inside the canvas
    pub fn contains_circle(self, center: Point, radius: f64) -> bool {
        center.x >= radius
            && center.x <= self.width_f64() - radius
            && center.y >= radius
            && center.y <= self.height_f64() - radius
    }
}

impl std::fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
