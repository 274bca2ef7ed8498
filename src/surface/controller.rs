//! Canvas lifecycle and the per-frame tick
//!
//! The surface owns the pixel buffer and the scene. Creating or resizing it replaces
//! the whole layout generation; ticking animates radii, renders, then advances the
//! animation clock. Time is never reset, so motion continues across resizes.

use crate::color::PaletteRegistry;
use crate::io::error::Result;
use crate::layout::animation::{AnimationClock, animate};
use crate::layout::{AnimationSettings, Layout, LayoutSettings, initialize_layout};
use crate::math::noise::FractalNoise;
use crate::math::sampling::RandomSelector;
use crate::render::{Raster, render_layout};
use crate::spatial::CanvasSize;
use image::{Rgba, RgbaImage};
use log::{debug, info};

/// Everything the frame loop reads and writes
#[derive(Clone, Debug)]
pub struct Scene {
    /// Current layout generation
    pub layout: Layout,
    /// Animation time, carried across generations
    pub clock: AnimationClock,
}

impl Scene {
    /// Swap in a new generation, keeping the clock
    pub fn replace_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    /// Set display radii for the current time
    pub fn animate(&mut self, noise: &FractalNoise, settings: &AnimationSettings) {
        animate(&mut self.layout.motifs, noise, self.clock.time(), settings);
    }
}

/// Settings shared by every generation a surface produces
#[derive(Clone, Copy, Debug)]
pub struct SurfaceSettings {
    /// Placement and linking parameters
    pub layout: LayoutSettings,
    /// Radius animation parameters
    pub animation: AnimationSettings,
    /// Canvas background color
    pub background: Rgba<u8>,
}

/// Headless drawing surface driving layout, animation and rendering
pub struct Surface {
    canvas: CanvasSize,
    settings: SurfaceSettings,
    registry: PaletteRegistry,
    selector: RandomSelector,
    noise: FractalNoise,
    scene: Scene,
    raster: Raster,
    generation: usize,
    frames_rendered: usize,
}

impl Surface {
    /// Create a surface and generate its first layout
    ///
    /// # Errors
    ///
    /// Returns an error if the layout or animation settings are invalid
    pub fn new(
        canvas: CanvasSize,
        settings: SurfaceSettings,
        registry: PaletteRegistry,
        seed: u64,
    ) -> Result<Self> {
        settings.layout.validate()?;
        settings.animation.validate()?;

        let mut selector = RandomSelector::new(seed);
        let layout = initialize_layout(canvas, &settings.layout, &registry, &mut selector);
        info!(
            "canvas {canvas}: {} motifs, {} connectors",
            layout.motifs.len(),
            layout.connectors.len()
        );

        Ok(Self {
            canvas,
            registry,
            selector,
            noise: FractalNoise::new(seed),
            scene: Scene {
                layout,
                clock: AnimationClock::new(settings.animation.time_step),
            },
            raster: Raster::new(canvas, settings.background),
            settings,
            generation: 1,
            frames_rendered: 0,
        })
    }

    /// Resize the canvas and regenerate the layout from scratch
    ///
    /// Regenerates even when the size is unchanged, like a window resize callback.
    pub fn resize(&mut self, canvas: CanvasSize) {
        self.canvas = canvas;
        self.raster.resize(canvas, self.settings.background);
        let layout = initialize_layout(
            canvas,
            &self.settings.layout,
            &self.registry,
            &mut self.selector,
        );
        info!(
            "resized to {canvas}: {} motifs, {} connectors",
            layout.motifs.len(),
            layout.connectors.len()
        );
        self.scene.replace_layout(layout);
        self.generation += 1;
    }

    /// Animate, render and advance time by one frame
    pub fn tick(&mut self) -> &RgbaImage {
        self.scene.animate(&self.noise, &self.settings.animation);
        render_layout(&mut self.raster, &self.scene.layout, self.settings.background);
        self.scene.clock.advance();
        self.frames_rendered += 1;
        if self.frames_rendered % 100 == 0 {
            debug!(
                "frame {} at t = {:.2}",
                self.frames_rendered,
                self.scene.clock.time()
            );
        }
        self.raster.image()
    }

    /// The most recently rendered frame
    pub const fn frame(&self) -> &RgbaImage {
        self.raster.image()
    }

    /// Current scene state
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Current layout generation
    pub const fn layout(&self) -> &Layout {
        &self.scene.layout
    }

    /// Animation time used by the next tick
    pub const fn time(&self) -> f64 {
        self.scene.clock.time()
    }

    /// Current canvas dimensions
    pub const fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Number of layout generations produced so far
    pub const fn generation(&self) -> usize {
        self.generation
    }

    /// Number of frames rendered so far
    pub const fn frames_rendered(&self) -> usize {
        self.frames_rendered
    }

    /// Background color shared by all frames
    pub const fn background(&self) -> Rgba<u8> {
        self.settings.background
    }
}
