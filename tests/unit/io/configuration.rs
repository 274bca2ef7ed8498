//! Tests for algorithm configuration constants

#[cfg(test)]
mod tests {
    use wheelchain::io::configuration::{
        BACKGROUND_COLOR, DEFAULT_MAX_ATTEMPTS, DEFAULT_MOTIF_COUNT, DEFAULT_OUTPUT,
        DEFAULT_SEED, GIF_FRAME_DELAY_MS, LINK_DISTANCE_FACTOR, MAX_RADIUS_FRACTION,
        MIN_RADIUS_FRACTION, NOISE_FALLOFF, NOISE_MOTIF_OFFSET, NOISE_OCTAVES, NOISE_STEP,
        NOISE_TABLE_SIZE, OVERLAP_FACTOR, PROGRESS_BAR_WIDTH, PROXIMITY_FACTOR, RADIUS_SCALE_MIN,
        RADIUS_SCALE_SPAN, VIEWER_MIN_FRAME_DELAY_MS,
    };

    // Tests placement defaults
    // Verified by changing constant values
    #[test]
    fn test_placement_constants() {
        assert_eq!(DEFAULT_MOTIF_COUNT, 25);
        assert_eq!(DEFAULT_MAX_ATTEMPTS, 5000);
        assert!((MIN_RADIUS_FRACTION - 0.04).abs() < f64::EPSILON);
        assert!((MAX_RADIUS_FRACTION - 0.12).abs() < f64::EPSILON);
        assert!(MIN_RADIUS_FRACTION < MAX_RADIUS_FRACTION);
    }

    // Tests spacing factors keep links looser than the proximity rule is strict
    // Verified by swapping the factor values
    #[test]
    fn test_spacing_factors() {
        assert!((OVERLAP_FACTOR - 0.4).abs() < f64::EPSILON);
        assert!((PROXIMITY_FACTOR - 1.5).abs() < f64::EPSILON);
        assert!((LINK_DISTANCE_FACTOR - 1.3).abs() < f64::EPSILON);
        assert!(LINK_DISTANCE_FACTOR < PROXIMITY_FACTOR);
    }

    // Tests animation constants give a 0.7 to 2.1 radius range
    // Verified by changing the span
    #[test]
    fn test_animation_constants() {
        assert!((NOISE_STEP - 0.01).abs() < f64::EPSILON);
        assert!((NOISE_MOTIF_OFFSET - 10.0).abs() < f64::EPSILON);
        assert!((RADIUS_SCALE_MIN + RADIUS_SCALE_SPAN - 2.1).abs() < 1e-12);
    }

    // Tests the noise table can be indexed with a mask
    // Verified by using a non power of two size
    #[test]
    fn test_noise_shape() {
        assert!(NOISE_TABLE_SIZE.is_power_of_two());
        assert!(NOISE_OCTAVES >= 1);
        assert!((0.0..=1.0).contains(&NOISE_FALLOFF));
    }

    // Tests default seed is fixed
    // Verified by changing seed value
    #[test]
    fn test_default_seed_is_reproducible() {
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Tests output defaults
    // Verified by changing the output extension
    #[test]
    fn test_output_defaults() {
        assert!(DEFAULT_OUTPUT.ends_with(".png"));
        assert_eq!(BACKGROUND_COLOR, 0x2A_363B);
        assert_eq!(PROGRESS_BAR_WIDTH, 40);
        assert!(GIF_FRAME_DELAY_MS >= VIEWER_MIN_FRAME_DELAY_MS);
    }
}
