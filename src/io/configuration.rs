//! Algorithm constants and runtime configuration defaults

// Placement engine
/// Number of motifs the placement engine tries to accept
pub const DEFAULT_MOTIF_COUNT: usize = 25;
/// Smallest motif radius as a fraction of canvas width
pub const MIN_RADIUS_FRACTION: f64 = 0.04;
/// Largest motif radius as a fraction of canvas width
pub const MAX_RADIUS_FRACTION: f64 = 0.12;

// Safety limit so sparse canvases cannot stall layout generation
/// Maximum candidate draws per layout generation
pub const DEFAULT_MAX_ATTEMPTS: usize = 5000;

/// Fraction of the smaller radius two motifs may overlap by
pub const OVERLAP_FACTOR: f64 = 0.4;
/// Multiple of the combined radii within which a candidate counts as nearby
pub const PROXIMITY_FACTOR: f64 = 1.5;

// Link graph builder
/// Multiple of the combined radii within which two motifs get a connector
pub const LINK_DISTANCE_FACTOR: f64 = 1.3;

// Animation driver
/// Time increment applied once per rendered frame
pub const NOISE_STEP: f64 = 0.01;
/// Noise input offset between consecutive motifs
pub const NOISE_MOTIF_OFFSET: f64 = 10.0;
/// Smallest display radius as a multiple of the base radius
pub const RADIUS_SCALE_MIN: f64 = 0.7;
/// Width of the display radius range as a multiple of the base radius
pub const RADIUS_SCALE_SPAN: f64 = 1.4;

// Noise lattice shape
/// Number of fractal octaves summed per noise sample
pub const NOISE_OCTAVES: usize = 4;
/// Amplitude multiplier between consecutive octaves
pub const NOISE_FALLOFF: f64 = 0.5;
/// Number of lattice values in the noise table (power of two)
pub const NOISE_TABLE_SIZE: usize = 4096;

// Surface defaults
/// Canvas width used when none is given
pub const DEFAULT_WIDTH: u32 = 800;
/// Canvas height used when none is given
pub const DEFAULT_HEIGHT: u32 = 600;
/// Frames rendered by a default run
pub const DEFAULT_FRAMES: usize = 240;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Canvas background behind connectors and motifs
pub const BACKGROUND_COLOR: u32 = 0x2A_363B;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Final frame written when no output path is given
pub const DEFAULT_OUTPUT: &str = "wheelchain.png";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// Multiplier applied to the delay of the closing GIF frame
pub const FINAL_FRAME_HOLD: u32 = 25;
