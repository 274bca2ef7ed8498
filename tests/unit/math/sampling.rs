//! Tests for seeded random selection

#[cfg(test)]
mod tests {
    use wheelchain::math::sampling::RandomSelector;

    // Tests uniform draws stay in the closed range
    // Verified by swapping the bounds
    #[test]
    fn test_uniform_range() {
        let mut selector = RandomSelector::new(42);
        for _ in 0..1_000 {
            let value = selector.uniform(2.5, 7.5);
            assert!((2.5..=7.5).contains(&value));
        }
    }

    // Tests collapsed and inverted ranges return the lower bound
    // Verified by sampling an empty range
    #[test]
    fn test_degenerate_ranges() {
        let mut selector = RandomSelector::new(1);
        assert!((selector.uniform(3.0, 3.0) - 3.0).abs() < f64::EPSILON);
        assert!((selector.uniform(5.0, 1.0) - 5.0).abs() < f64::EPSILON);
        assert_eq!(selector.index(0), 0);
    }

    // Tests exclusion never returns the excluded index and reaches every other one
    // Verified by drawing from the full range
    #[test]
    fn test_index_excluding() {
        let mut selector = RandomSelector::new(7);
        let mut seen = [false; 6];
        for _ in 0..2_000 {
            let index = selector.index_excluding(6, 2);
            assert_ne!(index, 2);
            seen[index] = true;
        }
        assert_eq!(seen, [true, true, false, true, true, true]);

        assert_eq!(selector.index_excluding(1, 0), 0);
        assert!(selector.index_excluding(4, 9) < 4);
    }

    // Tests the same seed reproduces the same sequence
    // Verified by seeding from entropy
    #[test]
    fn test_determinism() {
        let mut a = RandomSelector::new(99);
        let mut b = RandomSelector::new(99);
        for _ in 0..100 {
            assert!((a.angle() - b.angle()).abs() < f64::EPSILON);
            assert_eq!(a.index(10), b.index(10));
        }
    }

    // Tests angles cover [0, 2π)
    // Verified by scaling with π instead of τ
    #[test]
    fn test_angle_range() {
        let mut selector = RandomSelector::new(3);
        let angles: Vec<f64> = (0..1_000).map(|_| selector.angle()).collect();
        assert!(angles.iter().all(|a| (0.0..std::f64::consts::TAU).contains(a)));
        assert!(angles.iter().any(|&a| a > std::f64::consts::PI));
    }
}
