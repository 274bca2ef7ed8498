//! Tests for motif and connector records

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_4;
    use wheelchain::color::{PaletteId, PaletteRegistry, rgb};
    use wheelchain::spatial::{Connector, Motif, Point};

    fn motif_at(x: f64, y: f64, radius: f64) -> Motif {
        let palette = *PaletteRegistry::textile()
            .get(PaletteId(3))
            .expect("textile palette");
        Motif::new(Point::new(x, y), radius, PaletteId(3), palette, 1.5)
    }

    // Tests scaling changes only the display radius
    // Verified by compounding scales onto the current radius
    #[test]
    fn test_apply_scale() {
        let mut motif = motif_at(10.0, 20.0, 30.0);
        assert!((motif.current_radius() - 30.0).abs() < f64::EPSILON);

        motif.apply_scale(2.0);
        motif.apply_scale(0.5);
        assert!((motif.current_radius() - 15.0).abs() < 1e-12);
        assert!((motif.base_radius() - 30.0).abs() < f64::EPSILON);
        assert_eq!(motif.position(), Point::new(10.0, 20.0));
        assert_eq!(motif.palette_id(), PaletteId(3));
        assert!((motif.decoration_seed() - 1.5).abs() < f64::EPSILON);
    }

    // Tests contact points lie on each base circle along the center line
    // Verified by offsetting the end point away from the first motif
    #[test]
    fn test_connector_contact_points() {
        let a = motif_at(0.0, 0.0, 10.0);
        let b = motif_at(100.0, 100.0, 20.0);
        let connector = Connector::between(0, &a, 1, &b, rgb(0xD9_0429));

        assert!((connector.angle() - FRAC_PI_4).abs() < 1e-12);
        assert!((connector.start().distance(a.position()) - 10.0).abs() < 1e-9);
        assert!((connector.end().distance(b.position()) - 20.0).abs() < 1e-9);

        let total = a.position().distance(b.position());
        let span = connector.start().distance(connector.end());
        assert!((span - (total - 30.0)).abs() < 1e-9);
        assert_eq!(connector.color(), rgb(0xD9_0429));
    }

    // Tests connector geometry ignores later radius animation
    // Verified by reading the current radius during construction
    #[test]
    fn test_connector_uses_base_radius() {
        let mut a = motif_at(0.0, 0.0, 10.0);
        a.apply_scale(2.0);
        let b = motif_at(50.0, 0.0, 10.0);
        let connector = Connector::between(0, &a, 1, &b, rgb(0x00_0000));

        assert!((connector.start().x - 10.0).abs() < 1e-9);
        assert!((connector.end().x - 40.0).abs() < 1e-9);
    }
}
