//! PNG export of rendered frames

use crate::io::error::{Result, WheelError, ensure_parent_dir};
use image::RgbaImage;
use std::path::Path;

/// Save a frame as a PNG, creating the parent directory when needed
///
/// # Errors
///
/// Returns an error if:
/// - The frame has no pixels
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_frame_as_png(frame: &RgbaImage, output_path: &Path) -> Result<()> {
    if frame.width() == 0 || frame.height() == 0 {
        return Err(WheelError::EmptyCapture { target: "PNG export" });
    }

    ensure_parent_dir(output_path)?;

    frame
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| WheelError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
