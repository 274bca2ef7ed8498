//! Terminal progress for the frame loop

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over rendered frames
///
/// Hidden until `initialize` is called, so a quiet run never touches the terminal.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a hidden progress manager
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Show a bar sized for `frames` frames
    pub fn initialize(&mut self, frames: usize) {
        let bar = ProgressBar::new(frames as u64);
        bar.set_style(FRAME_STYLE.clone());
        bar.set_prefix("frames");
        self.bar = bar;
    }

    /// Report the frame just rendered and the canvas it was drawn on
    pub fn update_frame(&self, frame: usize, canvas: &str, generation: usize) {
        self.bar.set_position(frame as u64);
        self.bar.set_message(format!("{canvas} (layout {generation})"));
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
