//! Tests for wheel decoration and layout rendering

#[cfg(test)]
mod tests {
    use image::Rgba;
    use wheelchain::color::{PaletteId, PaletteRegistry};
    use wheelchain::layout::Layout;
    use wheelchain::render::motif::draw_motif;
    use wheelchain::render::{Raster, render_layout};
    use wheelchain::spatial::{CanvasSize, Connector, Motif, Point};

    const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

    fn motif_at(x: f64, y: f64, radius: f64, id: usize) -> Motif {
        let palette = *PaletteRegistry::textile()
            .get(PaletteId(id))
            .expect("textile palette");
        Motif::new(Point::new(x, y), radius, PaletteId(id), palette, 0.3)
    }

    fn blank(width: u32, height: u32) -> Raster {
        Raster::new(CanvasSize::new(width, height).expect("valid canvas"), BACKGROUND)
    }

    // Tests the decoration stays within the display radius
    // Verified by drawing the dot ring outside the disc
    #[test]
    fn test_motif_stays_in_radius() {
        let mut raster = blank(100, 100);
        let motif = motif_at(50.0, 50.0, 30.0, 0);
        draw_motif(&mut raster, &motif);

        for (x, y, pixel) in raster.image().enumerate_pixels() {
            let distance = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5)
                .distance(motif.position());
            if distance > 31.5 {
                assert_eq!(*pixel, BACKGROUND, "pixel ({x}, {y}) painted");
            }
        }
    }

    // Tests the center dot uses the first accent and the rim the dominant color
    // Verified by drawing the hub last
    #[test]
    fn test_motif_layers() {
        let mut raster = blank(200, 200);
        let motif = motif_at(100.0, 100.0, 80.0, 1);
        draw_motif(&mut raster, &motif);

        let palette = motif.palette();
        assert_eq!(raster.pixel(100, 100), Some(palette.accent(1)));
        // Outside the dot ring
        let rim = motif.position().offset_polar(0.43, 80.0 * 0.95);
        assert_eq!(
            raster.pixel(rim.x as u32, rim.y as u32),
            Some(palette.dominant())
        );
    }

    // Tests a motif drawn at a larger display radius paints more pixels
    // Verified by drawing at the base radius
    #[test]
    fn test_motif_follows_display_radius() {
        let painted = |scale: f64| {
            let mut raster = blank(120, 120);
            let mut motif = motif_at(60.0, 60.0, 20.0, 2);
            motif.apply_scale(scale);
            draw_motif(&mut raster, &motif);
            raster.image().pixels().filter(|p| **p != BACKGROUND).count()
        };
        assert!(painted(2.0) > painted(0.7));
    }

    // Tests motifs are drawn over connectors
    // Verified by drawing connectors last
    #[test]
    fn test_render_order() {
        let mut raster = blank(200, 100);
        let mut a = motif_at(50.0, 50.0, 30.0, 3);
        let b = motif_at(140.0, 50.0, 30.0, 4);
        let connector = Connector::between(0, &a, 1, &b, Rgba([255, 0, 255, 255]));
        a.apply_scale(1.5);
        let layout = Layout {
            motifs: vec![a, b],
            connectors: vec![connector],
            attempts_used: 2,
        };

        render_layout(&mut raster, &layout, BACKGROUND);

        // On the connector line, inside the grown first motif
        assert_ne!(raster.pixel(85, 50), Some(Rgba([255, 0, 255, 255])));
        assert_eq!(raster.pixel(2, 2), Some(BACKGROUND));
    }
}
