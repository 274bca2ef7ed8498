//! Tests for frame capture and GIF generation

#[cfg(test)]
mod tests {
    use image::codecs::gif::GifDecoder;
    use image::{AnimationDecoder, Rgba, RgbaImage};
    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;
    use wheelchain::WheelError;
    use wheelchain::io::visualization::FrameCapture;

    const BACKGROUND: Rgba<u8> = Rgba([42, 54, 59, 255]);

    fn solid(width: u32, height: u32, value: u8) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([value, value, value, 255]))
    }

    fn decoded_frames(path: &Path) -> Vec<image::Frame> {
        let file = File::open(path).expect("GIF written");
        GifDecoder::new(BufReader::new(file))
            .expect("valid GIF header")
            .into_frames()
            .collect_frames()
            .expect("decodable frames")
    }

    // Tests FrameCapture construction and recording
    // Verified by removing record body
    #[test]
    fn test_record_frames() {
        let mut capture = FrameCapture::new(BACKGROUND, 20, 4);
        assert_eq!(capture.frame_count(), 0);
        assert_eq!(capture.skip_factor(), 1);
        assert_eq!(capture.export_dimensions(), (0, 0));

        capture.record(&solid(10, 8, 0));
        capture.record(&solid(6, 12, 255));
        assert_eq!(capture.frame_count(), 2);
        assert_eq!(capture.recorded_count(), 2);
        assert_eq!(capture.export_dimensions(), (10, 12));
    }

    // Tests fast delays store only the frames the GIF will show
    // Verified by storing every recorded frame
    #[test]
    fn test_record_keeps_only_shown_frames() {
        // 5 ms is a quarter of the viewer minimum, keeping frames 0, 4 and 8
        let mut capture = FrameCapture::new(BACKGROUND, 5, 240);
        assert_eq!(capture.skip_factor(), 4);
        for value in 0..10u8 {
            capture.record(&solid(4, 4, value));
        }

        assert_eq!(capture.recorded_count(), 10);
        assert_eq!(capture.frame_count(), 3);

        // 7 ms rounds up to keeping every third frame
        assert_eq!(FrameCapture::new(BACKGROUND, 7, 0).skip_factor(), 3);
        assert_eq!(FrameCapture::new(BACKGROUND, 0, 0).skip_factor(), 20);
    }

    // Tests a skipped frame still counts toward the export canvas
    // Verified by ignoring the held tail frame when sizing
    #[test]
    fn test_skipped_last_frame_sizes_canvas() {
        let mut capture = FrameCapture::new(BACKGROUND, 10, 2);
        capture.record(&solid(4, 4, 0));
        capture.record(&solid(9, 7, 255));

        assert_eq!(capture.frame_count(), 1);
        assert_eq!(capture.export_dimensions(), (9, 7));
    }

    // Tests error when exporting empty capture
    // Verified by removing empty frames check
    #[test]
    fn test_export_gif_no_frames() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let capture = FrameCapture::new(BACKGROUND, 20, 0);

        let result = capture.export_gif(&temp_dir.path().join("empty.gif"));
        assert!(matches!(result, Err(WheelError::EmptyCapture { .. })));
    }

    // Tests every frame is written plus a held final frame
    // Verified by dropping the final hold
    #[test]
    fn test_export_gif_frames() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("run.gif");
        let mut capture = FrameCapture::new(BACKGROUND, 20, 3);
        for value in [0, 128, 255] {
            capture.record(&solid(8, 8, value));
        }

        capture.export_gif(&path).expect("GIF export should succeed");

        let frames = decoded_frames(&path);
        assert_eq!(frames.len(), 4);
        let (last_numer, last_denom) = frames[3].delay().numer_denom_ms();
        let (first_numer, first_denom) = frames[0].delay().numer_denom_ms();
        assert!(last_numer * first_denom > first_numer * last_denom);
    }

    // Tests delays below the viewer minimum skip frames but end on the last one
    // Verified by holding the last kept frame instead of the last rendered one
    #[test]
    fn test_export_gif_skips_fast_frames() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("fast.gif");
        let mut capture = FrameCapture::new(BACKGROUND, 5, 10);
        for value in 0..10u8 {
            capture.record(&solid(4, 4, value * 25));
        }

        capture.export_gif(&path).expect("GIF export should succeed");

        let frames = decoded_frames(&path);
        assert_eq!(frames.len(), 4);
        // Frame 9 (value 225) is held, not frame 8 (value 200)
        assert!(frames[3].buffer().get_pixel(0, 0)[0] > 212);
    }

    // Tests frames of different sizes are letterboxed onto the background
    // Verified by encoding frames at their own size
    #[test]
    fn test_export_gif_letterbox() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("nested").join("resized.gif");
        let mut capture = FrameCapture::new(BACKGROUND, 40, 2);
        capture.record(&solid(12, 6, 255));
        capture.record(&solid(6, 10, 255));

        capture.export_gif(&path).expect("GIF export should succeed");

        let frames = decoded_frames(&path);
        for frame in &frames {
            assert_eq!(frame.buffer().dimensions(), (12, 10));
        }
        let resized = frames[1].buffer();
        // Palette quantization may shift channels slightly
        assert!(resized.get_pixel(2, 2)[0] > 200);
        assert!(resized.get_pixel(11, 9)[0] < 100);
    }
}
