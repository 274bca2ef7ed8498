//! Tests for points and canvas dimensions

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;
    use wheelchain::spatial::{CanvasSize, Point};

    // Tests distance, direction and polar offsets
    // Verified by swapping the atan2 arguments
    #[test]
    fn test_point_operations() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert!((b.distance(a) - 5.0).abs() < 1e-12);

        let up = Point::new(0.0, 0.0).angle_to(Point::new(0.0, 10.0));
        assert!((up - FRAC_PI_2).abs() < 1e-12);

        let moved = Point::new(2.0, 2.0).offset_polar(FRAC_PI_2, 3.0);
        assert!((moved.x - 2.0).abs() < 1e-12);
        assert!((moved.y - 5.0).abs() < 1e-12);

        let mid = a.lerp(b, 0.5);
        assert!((mid.x - 2.5).abs() < 1e-12 && (mid.y - 3.0).abs() < 1e-12);
    }

    // Tests zero dimensions are rejected
    // Verified by constructing without validation
    #[test]
    fn test_canvas_validation() {
        assert!(CanvasSize::new(0, 100).is_err());
        assert!(CanvasSize::new(100, 0).is_err());
        let canvas = CanvasSize::new(640, 480).expect("valid canvas");
        assert_eq!(canvas.to_string(), "640x480");
    }

    // Tests circle fitting and containment at the edges
    // Verified by checking only the center against the bounds
    #[test]
    fn test_circle_containment() {
        let canvas = CanvasSize::new(200, 100).expect("valid canvas");
        assert!(canvas.fits_radius(50.0));
        assert!(!canvas.fits_radius(50.5));

        assert!(canvas.contains_circle(Point::new(50.0, 50.0), 50.0));
        assert!(!canvas.contains_circle(Point::new(49.0, 50.0), 50.0));
        assert!(!canvas.contains_circle(Point::new(190.0, 50.0), 20.0));
    }
}
