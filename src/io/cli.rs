//! Command-line interface and the headless frame loop

use crate::color::{PaletteRegistry, parse_hex, rgb};
use crate::io::configuration::{
    BACKGROUND_COLOR, DEFAULT_FRAMES, DEFAULT_HEIGHT, DEFAULT_MAX_ATTEMPTS, DEFAULT_MOTIF_COUNT,
    DEFAULT_OUTPUT, DEFAULT_SEED, DEFAULT_WIDTH, GIF_FRAME_DELAY_MS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_frame_as_png;
use crate::io::progress::ProgressManager;
use crate::io::visualization::FrameCapture;
use crate::layout::{AnimationSettings, LayoutSettings};
use crate::spatial::CanvasSize;
use crate::surface::{ResizeEvent, ResizeSchedule, Surface, SurfaceSettings};
use clap::Parser;
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "wheelchain")]
#[command(
    author,
    version,
    about = "Render animated wheel-and-chain compositions with textile palettes"
)]
/// Command-line arguments for the renderer
pub struct Cli {
    /// Initial canvas width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Initial canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Number of frames to render
    #[arg(short, long, default_value_t = DEFAULT_FRAMES)]
    pub frames: usize,

    /// Random seed for reproducible layouts and animation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of motifs to place per layout
    #[arg(short = 'n', long, default_value_t = DEFAULT_MOTIF_COUNT)]
    pub motifs: usize,

    /// Candidate draws allowed per layout
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Resize before a frame, as FRAME:WIDTHxHEIGHT (repeatable)
    #[arg(short, long = "resize", value_name = "FRAME:WxH")]
    pub resize: Vec<ResizeEvent>,

    /// PNG path for the final frame
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Also write the whole run as an animated GIF
    #[arg(short, long, value_name = "PATH")]
    pub gif: Option<PathBuf>,

    /// Delay between GIF frames in milliseconds
    #[arg(short, long, default_value_t = GIF_FRAME_DELAY_MS)]
    pub delay: u32,

    /// Background color as #RRGGBB
    #[arg(short, long)]
    pub background: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log layout diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Initial canvas size
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn canvas(&self) -> Result<CanvasSize> {
        CanvasSize::new(self.width, self.height)
    }

    /// Layout settings with the motif count and attempt cap from the flags
    pub fn layout_settings(&self) -> LayoutSettings {
        LayoutSettings {
            motif_count: self.motifs,
            max_attempts: self.attempts,
            ..LayoutSettings::default()
        }
    }

    /// Background color from the flag or the default
    ///
    /// # Errors
    ///
    /// Returns an error if the flag is not a `#RRGGBB` color
    pub fn background_color(&self) -> Result<image::Rgba<u8>> {
        self.background
            .as_deref()
            .map_or(Ok(rgb(BACKGROUND_COLOR)), parse_hex)
    }
}

/// What a finished run produced
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames rendered
    pub frames: usize,
    /// Layout generations, including the initial one
    pub generations: usize,
    /// Canvas size at the end of the run
    pub final_canvas: CanvasSize,
    /// Motifs in the final layout
    pub motifs: usize,
    /// Connectors in the final layout
    pub connectors: usize,
}

/// Drives a surface for the requested frames and writes the outputs
pub struct Runner {
    cli: Cli,
    surface: Surface,
    schedule: ResizeSchedule,
    capture: Option<FrameCapture>,
    progress_manager: Option<ProgressManager>,
}

impl Runner {
    /// Validate the arguments and build the initial surface
    ///
    /// # Errors
    ///
    /// Returns an error if any argument is out of range
    pub fn new(cli: Cli) -> Result<Self> {
        if cli.frames == 0 {
            return Err(invalid_parameter(
                "frames",
                &cli.frames,
                &"at least one frame is required",
            ));
        }

        let settings = SurfaceSettings {
            layout: cli.layout_settings(),
            animation: AnimationSettings::default(),
            background: cli.background_color()?,
        };
        let surface = Surface::new(
            cli.canvas()?,
            settings,
            PaletteRegistry::textile(),
            cli.seed,
        )?;
        let schedule = ResizeSchedule::new(cli.resize.clone());
        let late = schedule.len() - schedule.fired_within(cli.frames);
        if late > 0 {
            warn!(
                "{late} resize event(s) fall after the last of {} frames and will not fire",
                cli.frames
            );
        }
        let capture = cli
            .gif
            .is_some()
            .then(|| FrameCapture::new(settings.background, cli.delay, cli.frames));
        if let Some(skip) = capture.as_ref().map(FrameCapture::skip_factor).filter(|&n| n > 1) {
            debug!("GIF delay below viewer minimum, keeping every {skip}th frame");
        }
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            cli,
            surface,
            schedule,
            capture,
            progress_manager,
        })
    }

    /// The surface being driven
    pub const fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Render every frame, then export the final PNG and optional GIF
    ///
    /// # Errors
    ///
    /// Returns an error if writing an output file fails
    pub fn run(&mut self) -> Result<RunSummary> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.frames);
        }

        for frame in 0..self.cli.frames {
            for event in self.schedule.due_at(frame) {
                self.surface.resize(event.size);
            }

            let image = self.surface.tick();
            if let Some(ref mut capture) = self.capture {
                capture.record(image);
            }

            if let Some(ref pm) = self.progress_manager {
                pm.update_frame(
                    frame + 1,
                    &self.surface.canvas().to_string(),
                    self.surface.generation(),
                );
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        export_frame_as_png(self.surface.frame(), &self.cli.output)?;
        info!("wrote {}", self.cli.output.display());

        if let (Some(capture), Some(path)) = (self.capture.take(), &self.cli.gif) {
            let (kept, recorded) = (capture.frame_count(), capture.recorded_count());
            capture.export_gif(path)?;
            info!("wrote {} ({kept} of {recorded} frames)", path.display());
        }

        let layout = self.surface.layout();
        let summary = RunSummary {
            frames: self.surface.frames_rendered(),
            generations: self.surface.generation(),
            final_canvas: self.surface.canvas(),
            motifs: layout.motifs.len(),
            connectors: layout.connectors.len(),
        };
        info!(
            "rendered {} frames across {} layout(s) in {:.2?}",
            summary.frames,
            summary.generations,
            start_time.elapsed()
        );
        Ok(summary)
    }
}
