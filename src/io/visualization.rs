//! Frame capture and GIF generation for whole runs

use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, WheelError, ensure_parent_dir};
use image::{Frame, Rgba, RgbaImage};
use std::path::Path;

/// Records rendered frames for animated export
///
/// Frame skipping is decided up front from the requested delay, so frames the
/// GIF would drop are never stored. Only the most recent skipped frame is held,
/// as the run must still end on its last rendered frame.
///
/// Frames may differ in size when the canvas was resized mid-run; export places
/// every frame at the top-left of a shared canvas sized to the largest frame.
pub struct FrameCapture {
    frames: Vec<RgbaImage>,
    tail: Option<RgbaImage>,
    recorded: usize,
    skip_factor: usize,
    delay_ms: u32,
    background: Rgba<u8>,
}

impl FrameCapture {
    /// Create an empty capture for frames shown `frame_delay_ms` apart
    ///
    /// If the delay is below what viewers reliably honour, only every n-th frame
    /// is kept so the animation keeps its apparent speed. `background` fills
    /// letterbox space.
    pub fn new(background: Rgba<u8>, frame_delay_ms: u32, expected_frames: usize) -> Self {
        let frame_delay_ms = frame_delay_ms.max(1);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        Self {
            frames: Vec::with_capacity(expected_frames.div_ceil(skip_factor)),
            tail: None,
            recorded: 0,
            skip_factor,
            delay_ms: frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS),
            background,
        }
    }

    /// Offer a rendered frame; a copy is kept only if the GIF will show it
    pub fn record(&mut self, frame: &RgbaImage) {
        if self.recorded % self.skip_factor == 0 {
            self.frames.push(frame.clone());
            self.tail = None;
        } else {
            match self.tail {
                Some(ref mut tail) if tail.dimensions() == frame.dimensions() => {
                    tail.copy_from_slice(frame.as_raw());
                }
                _ => self.tail = Some(frame.clone()),
            }
        }
        self.recorded += 1;
    }

    /// Number of frames offered to `record`
    pub const fn recorded_count(&self) -> usize {
        self.recorded
    }

    /// Number of frames kept for export, excluding the held final frame
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Keep every n-th recorded frame
    pub const fn skip_factor(&self) -> usize {
        self.skip_factor
    }

    /// Width and height of the shared export canvas
    pub fn export_dimensions(&self) -> (u32, u32) {
        self.frames
            .iter()
            .chain(self.tail.iter())
            .fold((0, 0), |(w, h), frame| {
                (w.max(frame.width()), h.max(frame.height()))
            })
    }

    /// Export the captured frames as a GIF, consuming the capture
    ///
    /// The final rendered frame is held longer before the animation loops.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(self, output_path: &Path) -> Result<()> {
        if self.frames.is_empty() {
            return Err(WheelError::EmptyCapture {
                target: "GIF export",
            });
        }

        let frames = self.into_frames();

        ensure_parent_dir(output_path)?;
        let file = std::fs::File::create(output_path).map_err(|e| WheelError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .set_repeat(image::codecs::gif::Repeat::Infinite)
            .map_err(|e| WheelError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;
        encoder
            .encode_frames(frames)
            .map_err(|e| WheelError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn into_frames(self) -> Vec<Frame> {
        let (width, height) = self.export_dimensions();
        let Self {
            frames,
            tail,
            delay_ms,
            background,
            ..
        } = self;

        // Always end on the last rendered frame, held longer for visibility
        let last = match tail {
            Some(tail) => Some(tail),
            None => frames.last().cloned(),
        };
        let hold_ms = delay_ms.saturating_mul(FINAL_FRAME_HOLD);

        let mut output: Vec<Frame> = frames
            .into_iter()
            .map(|frame| letterbox(frame, width, height, background, delay_ms))
            .collect();
        if let Some(last) = last {
            output.push(letterbox(last, width, height, background, hold_ms));
        }
        output
    }
}

fn letterbox(
    frame: RgbaImage,
    width: u32,
    height: u32,
    background: Rgba<u8>,
    delay_ms: u32,
) -> Frame {
    let buffer = if frame.dimensions() == (width, height) {
        frame
    } else {
        let mut canvas = RgbaImage::from_pixel(width, height, background);
        image::imageops::replace(&mut canvas, &frame, 0, 0);
        canvas
    };
    Frame::from_parts(
        buffer,
        0,
        0,
        image::Delay::from_numer_denom_ms(delay_ms, 1),
    )
}
