pub mod billow;
pub mod coloring;
pub mod complex;
pub mod fractal;
pub mod octaves;
pub mod pattern;
pub mod presets;
pub mod primitives;
pub mod warp;

pub use complex::Complex;
pub use pattern::{Generator, Pattern, Sample};
pub use presets::Preset;
pub use primitives::{NoiseSource, PerlinSource};

/// Threshold below which warp amounts, radii and wave directions count as zero.
pub const EPSILON: f32 = 1.0e-6;

/// Cells per axis of the periodic billow lattice.
pub const LATTICE_SIZE: i32 = 20;

// ---------------------------------------------------------------------------
// Parameter records — copied per call, never shared mutably
// ---------------------------------------------------------------------------

/// Shared settings of the turbulence and fBm accumulators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseParameters {
    pub amplitude: f32,
    /// Spatial frequency multiplier per octave.
    pub lacunarity: f32,
    /// Amplitude multiplier per octave. May exceed 1.
    pub ratio: f32,
    pub octaves: u32,
    pub filter_width: f32,
}

impl Default for NoiseParameters {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            lacunarity: 2.0,
            ratio: 0.707,
            octaves: 3,
            filter_width: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParameters {
    pub amplitude: f32,
    pub frequency_ratio: f32,
    pub ratio: f32,
    pub max_depth: u32,
    pub num_waves: u32,
    /// Accumulate absolute octave values instead of remapping the signed sum.
    pub inflection: bool,
}

impl Default for WaveParameters {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency_ratio: 2.0,
            ratio: 0.707,
            max_depth: 3,
            num_waves: 5,
            inflection: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillowParameters {
    pub gain: f32,
    pub frequency_ratio: f32,
    pub ratio: f32,
    pub density: f32,
    /// Drives blob jitter and per-blob size variation.
    pub randomness: f32,
    pub spottyness: f32,
    pub falloff: billow::Falloff,
    pub max_depth: u32,
    pub inflection: bool,
}

impl Default for BillowParameters {
    fn default() -> Self {
        Self {
            gain: 1.0,
            frequency_ratio: 2.0,
            ratio: 0.707,
            density: 1.0,
            randomness: 1.0,
            spottyness: 0.1,
            falloff: billow::Falloff::Fast,
            max_depth: 3,
            inflection: false,
        }
    }
}

/// Settings of both escape-time iterators. `box_*` fields only affect the
/// box-fold variant, `lobes` only the power variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalParameters {
    pub iteration_depth: u32,
    pub box_ratio: f32,
    pub leaf_effect: f32,
    pub lobes: Complex,
    pub sqr_escape_radius: f32,
    pub sqr_box_radius: f32,
    pub sqr_box_min_radius: f32,
    /// Constant term added after every step.
    pub c: Complex,
    /// Initial state.
    pub z: Complex,
}

impl Default for FractalParameters {
    fn default() -> Self {
        Self {
            iteration_depth: 100,
            box_ratio: 2.0,
            leaf_effect: 0.0,
            lobes: Complex::new(2.0, 0.0),
            sqr_escape_radius: 4.0,
            sqr_box_radius: 1.0,
            sqr_box_min_radius: 0.25,
            c: Complex::new(0.0, 0.0),
            z: Complex::new(0.0, 0.0),
        }
    }
}

/// Outcome of one escape-time loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalResult {
    pub iteration: u32,
    /// Sign of the negated final imaginary part: -1, 0 or 1.
    pub decomposition_sign: i32,
    pub sqr_distance: f32,
    /// Smallest squared distance seen during the loop.
    pub min_radius: f32,
}
